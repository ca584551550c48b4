// ==========================================
// 外部考试评分表批次生成系统 - 生成配置
// ==========================================
// 职责: 批次大小/排序方式/模板路径的显式配置
// 红线: batch_size 超出槽位容量在配置边界直接拒绝，
//       填表阶段不允许出现静默丢弃
// ==========================================

use crate::engine::sheet_filler::SLOT_CAPACITY;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 输出文件的建议下载名（固定）
pub const OUTPUT_FILE_NAME: &str = "External-Examination-Marksheet_FINAL.xlsx";

/// xlsx 标准 MIME 类型
pub const OUTPUT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ==========================================
// 配置错误类型
// ==========================================

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("每批人数超出范围: {value}（允许范围 [{min}, {max}]）")]
    BatchSizeOutOfRange {
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("模板文件不存在: {0}")]
    TemplateNotFound(String),
}

// ==========================================
// GenerationConfig - 生成配置
// ==========================================

/// 一次生成调用的全部配置
///
/// 构造期完成校验，构造成功即保证:
/// - batch_size 在 [1, 45] 内（45 = 每张表的槽位容量）
/// - 模板文件存在（是否可解析由模板加载阶段判定）
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    template_path: PathBuf,
    batch_size: usize,
    branch_wise: bool,
}

impl GenerationConfig {
    /// 每批人数下限
    pub const MIN_BATCH_SIZE: usize = 1;

    /// 每批人数上限（= 每张表槽位容量）
    pub const MAX_BATCH_SIZE: usize = SLOT_CAPACITY;

    /// 创建并校验配置
    ///
    /// # 参数
    /// - `template_path`: 模板工作簿路径（.xlsx）
    /// - `batch_size`: 每批人数，范围 [1, 45]
    /// - `branch_wise`: true = 先按专业再按报名号排序; false = 按报名号数值排序
    ///
    /// # 返回
    /// - Err(BatchSizeOutOfRange): 每批人数超出槽位容量
    /// - Err(TemplateNotFound): 模板文件不存在
    pub fn new<P: Into<PathBuf>>(
        template_path: P,
        batch_size: usize,
        branch_wise: bool,
    ) -> Result<Self, ConfigError> {
        if !(Self::MIN_BATCH_SIZE..=Self::MAX_BATCH_SIZE).contains(&batch_size) {
            return Err(ConfigError::BatchSizeOutOfRange {
                value: batch_size,
                min: Self::MIN_BATCH_SIZE,
                max: Self::MAX_BATCH_SIZE,
            });
        }

        let template_path = template_path.into();
        if !template_path.exists() {
            return Err(ConfigError::TemplateNotFound(
                template_path.display().to_string(),
            ));
        }

        Ok(Self {
            template_path,
            batch_size,
            branch_wise,
        })
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn branch_wise(&self) -> bool {
        self.branch_wise
    }

    /// 输出文件的建议下载名
    pub fn output_file_name(&self) -> &'static str {
        OUTPUT_FILE_NAME
    }

    /// 输出文件的 MIME 类型
    pub fn content_type(&self) -> &'static str {
        OUTPUT_CONTENT_TYPE
    }
}
