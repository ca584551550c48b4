// ==========================================
// 外部考试评分表批次生成系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 策略: 结构性错误（空名册/模板不可用）整体中止;
//       单条记录的可恢复问题走回退值，不进入本错误通道
// ==========================================

use thiserror::Error;

/// 生成管线错误类型
#[derive(Error, Debug)]
pub enum GenerationError {
    // ===== 输入数据错误 =====
    #[error("学生名册为空，无法生成批次")]
    EmptyRoster,

    // ===== 模板相关错误 =====
    #[error("模板加载失败: {0}")]
    TemplateLoadError(String),

    #[error("模板无可用工作表")]
    TemplateNoSheet,

    #[error("工作表克隆失败 ({sheet}): {message}")]
    SheetCloneError { sheet: String, message: String },

    // ===== 序列化错误 =====
    #[error("工作簿序列化失败: {0}")]
    SerializeError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type GenerationResult<T> = Result<T, GenerationError>;
