// ==========================================
// 外部考试评分表批次生成系统 - 序列排序器
// ==========================================
// 职责: 对去重后的名册建立全序
// 模式:
// - 按专业: (专业, 报名号) 字符串字典序，缺失报名号
//   按空串参与比较（即排在同专业最前，确定且稳定）
// - 平铺: 报名号按数值升序; 不可解析/缺失/非有限数值
//   的报名号整体排在全部可解析值之后，彼此保持原始
//   相对顺序
// 约束: 全部使用稳定排序
// ==========================================

use crate::domain::StudentRecord;
use std::cmp::Ordering;
use tracing::{debug, warn};

// ==========================================
// Sequencer - 序列排序器
// ==========================================

pub struct Sequencer;

impl Sequencer {
    pub fn new() -> Self {
        Self
    }

    /// 排序名册，最终位置即 0 起始序号
    ///
    /// # 参数
    /// - `roster`: 去重后的名册
    /// - `branch_wise`: true 时启用按专业排序; 若任一记录
    ///   缺少专业字段则回退为平铺数值排序
    pub fn sequence(&self, mut roster: Vec<StudentRecord>, branch_wise: bool) -> Vec<StudentRecord> {
        let all_have_branch = roster.iter().all(|r| r.branch.is_some());

        if branch_wise && all_have_branch {
            debug!(rows = roster.len(), "按 (专业, 报名号) 字典序排序");
            roster.sort_by(|a, b| Self::branch_key(a).cmp(&Self::branch_key(b)));
            return roster;
        }

        if branch_wise {
            warn!("启用了按专业排序，但存在缺少专业字段的记录，回退为报名号数值排序");
        }

        debug!(rows = roster.len(), "按报名号数值升序排序");
        self.sequence_numeric(roster)
    }

    /// 按专业排序键: (专业, 报名号)，缺失报名号按空串比较
    fn branch_key(record: &StudentRecord) -> (&str, &str) {
        (
            record.branch.as_deref().unwrap_or(""),
            record.enrollment_id.as_deref().unwrap_or(""),
        )
    }

    /// 平铺数值排序
    ///
    /// 先计算数值键再排序，避免比较函数内反复解析
    fn sequence_numeric(&self, roster: Vec<StudentRecord>) -> Vec<StudentRecord> {
        let mut keyed: Vec<(Option<f64>, StudentRecord)> = roster
            .into_iter()
            .map(|record| {
                // "nan"/"inf" 可被 f64 解析但会破坏比较全序，
                // 一律归入不可解析尾块
                let key = record
                    .enrollment_id
                    .as_deref()
                    .and_then(|id| id.parse::<f64>().ok())
                    .filter(|v| v.is_finite());
                (key, record)
            })
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(x), Some(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            // 不可解析值整体排在可解析值之后
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        keyed.into_iter().map(|(_, record)| record).collect()
    }
}
