// ==========================================
// 外部考试评分表批次生成系统 - 名册列映射器
// ==========================================
// 职责: 行记录 → StudentRecord 映射 + 必需列检查
// 约定: 列名完全匹配（区分大小写）
// ==========================================

use crate::domain::StudentRecord;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;
use tracing::debug;

/// 必需列: 报名号
pub const COL_ENROLLMENT: &str = "Enrollment no";

/// 必需列: 姓名
pub const COL_NAME: &str = "Name";

/// 可选列: 专业（按专业排序时使用）
pub const COL_BRANCH: &str = "Branch";

// ==========================================
// RosterMapper - 名册列映射器
// ==========================================

pub struct RosterMapper;

impl RosterMapper {
    /// 将行记录映射为学生记录
    ///
    /// # 规则
    /// - `Enrollment no` / `Name` 两列缺失 → 整体中止（结构性错误）
    /// - 空白单元格的报名号 / 专业按缺失处理（None）
    /// - 其余列原样放入 `extra` 透传
    ///
    /// # 返回
    /// - Ok(Vec<StudentRecord>): 保持原始行序
    /// - Err(MissingColumn): 必需列缺失
    pub fn map_rows(&self, rows: Vec<HashMap<String, String>>) -> ImportResult<Vec<StudentRecord>> {
        // 必需列检查（空名册不做检查，交由生成管线判定）
        if !rows.is_empty() {
            for col in [COL_ENROLLMENT, COL_NAME] {
                if !rows.iter().any(|row| row.contains_key(col)) {
                    return Err(ImportError::MissingColumn(col.to_string()));
                }
            }
        }

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(self.map_row(row));
        }

        debug!(record_count = records.len(), "名册列映射完成");
        Ok(records)
    }

    /// 映射单行记录
    fn map_row(&self, mut row: HashMap<String, String>) -> StudentRecord {
        let enrollment_id = Self::take_non_empty(&mut row, COL_ENROLLMENT);
        let name = row.remove(COL_NAME).unwrap_or_default();
        let branch = Self::take_non_empty(&mut row, COL_BRANCH);

        // 剩余列按原列名透传
        let extra = row.into_iter().collect();

        StudentRecord {
            enrollment_id,
            name,
            branch,
            extra,
        }
    }

    /// 取出非空字符串字段（空白单元格视为缺失）
    fn take_non_empty(row: &mut HashMap<String, String>, key: &str) -> Option<String> {
        row.remove(key).filter(|v| !v.is_empty())
    }
}
