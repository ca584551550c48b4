// ==========================================
// 外部考试评分表批次生成系统 - 批次划分器
// ==========================================
// 职责: 按固定批次大小对有序名册连续分组
// 规则: batch_number = sequence_index / batch_size + 1
// 不变式: 批次号从 1 起连续无空洞; 除最后一批外每批
//         恰好 batch_size 人
// ==========================================

use crate::domain::{SequencedStudent, StudentRecord};
use tracing::debug;

// ==========================================
// BatchPlan - 批次计划
// ==========================================

/// 分批结果
#[derive(Debug, Clone)]
pub struct BatchPlan {
    /// 全部学生，按全局序号升序
    pub students: Vec<SequencedStudent>,
    /// 最大批次号（空名册为 0，由调用方拦截）
    pub max_batch: usize,
}

impl BatchPlan {
    /// 取某一批次的成员，按批内顺序
    pub fn batch_members(&self, batch_number: usize) -> Vec<&SequencedStudent> {
        self.students
            .iter()
            .filter(|s| s.batch_number == batch_number)
            .collect()
    }
}

// ==========================================
// Batcher - 批次划分器
// ==========================================

pub struct Batcher;

impl Batcher {
    pub fn new() -> Self {
        Self
    }

    /// 分配全局序号与批次号
    ///
    /// # 参数
    /// - `ordered`: 排序后的名册（位置即序号）
    /// - `batch_size`: 每批人数（配置层保证为正且不超过槽位容量）
    ///
    /// # 返回
    /// 批次计划; 纯派生计算，无副作用
    pub fn assign(&self, ordered: Vec<StudentRecord>, batch_size: usize) -> BatchPlan {
        let students: Vec<SequencedStudent> = ordered
            .into_iter()
            .enumerate()
            .map(|(sequence_index, record)| SequencedStudent {
                batch_number: sequence_index / batch_size + 1,
                sequence_index,
                record,
            })
            .collect();

        // 序号单调，最后一条即最大批次号
        let max_batch = students.last().map(|s| s.batch_number).unwrap_or(0);

        debug!(
            student_count = students.len(),
            batch_size, max_batch, "批次划分完成"
        );

        BatchPlan {
            students,
            max_batch,
        }
    }
}
