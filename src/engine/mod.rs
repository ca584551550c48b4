// ==========================================
// 外部考试评分表批次生成系统 - 引擎层
// ==========================================
// 职责: 生成管线的业务规则
// 流程: 清洗去重 → 排序 → 分批 → 填表 → 序列化
// 约束: 数据严格从左向右流动，后级不回写前级
// ==========================================

// 模块声明
pub mod batcher;
pub mod error;
pub mod marksheet;
pub mod normalizer;
pub mod sequencer;
pub mod sheet_filler;

// 重导出核心类型
pub use batcher::{BatchPlan, Batcher};
pub use error::{GenerationError, GenerationResult};
pub use marksheet::{MarksheetGenerator, MarksheetOutput};
pub use normalizer::{NormalizeStats, Normalizer};
pub use sequencer::Sequencer;
pub use sheet_filler::{SheetFiller, SLOT_CAPACITY};
