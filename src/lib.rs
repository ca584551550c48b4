// ==========================================
// 外部考试评分表批次生成系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine + umya-spreadsheet
// 系统定位: 名册分批与模板填充（单次调用、同步执行）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 清洗/排序/分批/填表
pub mod engine;

// 导入层 - 名册文件解析
pub mod importer;

// 配置层 - 生成参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 配置
pub use config::{ConfigError, GenerationConfig};

// 领域实体
pub use domain::{GenerationReport, SequencedStudent, StudentRecord};

// 引擎
pub use engine::{
    BatchPlan, Batcher, GenerationError, GenerationResult, MarksheetGenerator, MarksheetOutput,
    NormalizeStats, Normalizer, Sequencer, SheetFiller, SLOT_CAPACITY,
};

// 导入
pub use importer::{
    CsvRosterParser, ExcelRosterParser, ImportError, ImportResult, RosterMapper, RosterParser,
    UniversalRosterParser,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "外部考试评分表批次生成系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
