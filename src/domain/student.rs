// ==========================================
// 外部考试评分表批次生成系统 - 学生实体
// ==========================================
// 职责: 名册记录、批次分配结果、生成统计报告
// 生命周期: 单次调用内有效，不做持久化
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// StudentRecord - 名册记录
// ==========================================

/// 名册中的一行学生记录
///
/// - `enrollment_id`: 报名号，清洗后保证在存留记录中唯一（空值除外）
/// - `branch`: 专业，按专业排序时作为一级排序键
/// - `extra`: 透传列，本系统不读取其内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub enrollment_id: Option<String>,
    pub name: String,
    pub branch: Option<String>,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl StudentRecord {
    /// 构造最小记录（透传列为空）
    pub fn new(enrollment_id: Option<String>, name: String, branch: Option<String>) -> Self {
        Self {
            enrollment_id,
            name,
            branch,
            extra: BTreeMap::new(),
        }
    }
}

// ==========================================
// SequencedStudent - 批次分配结果
// ==========================================

/// 排序并分批后的学生记录
///
/// 不变式:
/// - `sequence_index` 为全局 0 起始连续序号
/// - `batch_number` = sequence_index / batch_size + 1，从 1 起始连续
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedStudent {
    pub record: StudentRecord,
    pub sequence_index: usize,
    pub batch_number: usize,
}

impl SequencedStudent {
    /// 批内 0 起始位置（决定目标行槽位）
    pub fn position_in_batch(&self, batch_size: usize) -> usize {
        self.sequence_index % batch_size
    }
}

// ==========================================
// GenerationReport - 生成统计报告
// ==========================================

/// 一次生成调用的汇总统计
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// 生成时间（UTC）
    pub generated_at: DateTime<Utc>,
    /// 名册原始行数（清洗前）
    pub total_rows: usize,
    /// 去重删除的行数
    pub duplicates_removed: usize,
    /// 实际写入的学生数
    pub student_count: usize,
    /// 生成的批次数（= 工作表数）
    pub batch_count: usize,
}
