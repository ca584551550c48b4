// ==========================================
// 外部考试评分表批次生成系统 - 报名号清洗器
// ==========================================
// 职责: 报名号清洗 + 首现保留去重
// 输入: 原始名册（就地修改，行数只减不增）
// 输出: 清洗统计
// ==========================================
// 规则:
// - 缺失报名号保持缺失，记录保留
// - 含 e/E 的报名号视为科学计数法污染，按浮点重解析
//   后取最近整数; 重解析失败回退为去空白原文
// - 去重按清洗后报名号比较，首现保留; 缺失值之间
//   互不视为重复
// ==========================================

use crate::domain::StudentRecord;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// Normalizer - 报名号清洗器
// ==========================================

pub struct Normalizer;

/// 清洗统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    /// 清洗前行数
    pub total_rows: usize,
    /// 去重删除的行数
    pub duplicates_removed: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// 清洗单个报名号
    ///
    /// # 规则
    /// - None → None
    /// - 去除首尾空白; 去空白后为空 → None，即空白报名号
    ///   一律按缺失处理，彼此不参与去重（空串不作为可
    ///   重复的真实报名号）
    /// - 含 e/E: 尝试按 f64 重解析并取最近整数，渲染为
    ///   十进制纯数字串; 解析失败保留去空白原文
    pub fn clean_enrollment(&self, raw: Option<&str>) -> Option<String> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.to_lowercase().contains('e') {
            if let Ok(value) = trimmed.parse::<f64>() {
                return Some(format!("{:.0}", value.round()));
            }
        }

        Some(trimmed.to_string())
    }

    /// 清洗整本名册并去重
    ///
    /// # 副作用
    /// - 就地改写每条记录的 `enrollment_id`
    /// - 删除清洗后报名号与先前记录重复的行（首现保留）
    /// - 存留行保持原始相对顺序
    pub fn normalize(&self, roster: &mut Vec<StudentRecord>) -> NormalizeStats {
        let total_rows = roster.len();

        for record in roster.iter_mut() {
            record.enrollment_id = self.clean_enrollment(record.enrollment_id.as_deref());
        }

        let mut seen: HashSet<String> = HashSet::new();
        roster.retain(|record| match &record.enrollment_id {
            // 缺失报名号之间互不视为重复
            None => true,
            Some(id) => seen.insert(id.clone()),
        });

        let duplicates_removed = total_rows - roster.len();
        debug!(total_rows, duplicates_removed, "名册清洗完成");

        NormalizeStats {
            total_rows,
            duplicates_removed,
        }
    }
}
