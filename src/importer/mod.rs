// ==========================================
// 外部考试评分表批次生成系统 - 导入层
// ==========================================
// 职责: 外部名册文件解析，生成内部学生记录
// 支持: Excel (.xlsx/.xls), CSV (.csv)
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod roster_mapper;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvRosterParser, ExcelRosterParser, RosterParser, UniversalRosterParser};
pub use roster_mapper::{RosterMapper, COL_BRANCH, COL_ENROLLMENT, COL_NAME};
