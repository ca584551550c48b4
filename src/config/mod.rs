// ==========================================
// 外部考试评分表批次生成系统 - 配置层
// ==========================================
// 职责: 生成参数管理，构造期校验
// 约束: 模板路径由调用方显式传入，不做全局查找
// ==========================================

pub mod generation_config;

// 重导出核心配置类型
pub use generation_config::{ConfigError, GenerationConfig};
