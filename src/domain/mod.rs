// ==========================================
// 外部考试评分表批次生成系统 - 领域层
// ==========================================
// 职责: 名册记录与批次分配的实体定义
// ==========================================

// 模块声明
pub mod student;

// 重导出核心类型
pub use student::{GenerationReport, SequencedStudent, StudentRecord};
