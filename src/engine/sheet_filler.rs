// ==========================================
// 外部考试评分表批次生成系统 - 评分表填充引擎
// ==========================================
// 职责: 批次计划 → 模板工作簿的批次工作表
// 红线: 第 7 行与第 38 行为表头行，永不写入
// ==========================================
// 槽位布局（1 起始行列号，固定不可配置）:
// - 表内序号 1–30  → 第 8–37 行
// - 表内序号 31–45 → 第 39–53 行
// - 第 1 列 = 表内序号, 第 2 列 = 报名号, 第 3 列 = 姓名
// 工作表获取:
// - 已存在 "Batch {n}" 则复用
// - 否则克隆当前最后一张工作表并改名，格式随克隆
//   逐张前传（首批克隆模板原末表）
// ==========================================

use crate::engine::batcher::BatchPlan;
use crate::engine::error::{GenerationError, GenerationResult};
use crate::domain::SequencedStudent;
use tracing::{debug, instrument};
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// 每张评分表的可写槽位数
pub const SLOT_CAPACITY: usize = 45;

/// 槽位行映射: (表内序号, 目标行)
///
/// 第 7 行与第 38 行为表头行，映射刻意跳过
pub fn slot_rows() -> Vec<(u32, u32)> {
    let mut rows = Vec::with_capacity(SLOT_CAPACITY);
    for sr in 1..=30u32 {
        rows.push((sr, sr + 7)); // 第 8–37 行
    }
    for sr in 31..=45u32 {
        rows.push((sr, sr + 8)); // 第 39–53 行
    }
    rows
}

// ==========================================
// SheetFiller - 评分表填充引擎
// ==========================================

pub struct SheetFiller;

impl SheetFiller {
    pub fn new() -> Self {
        Self
    }

    /// 将批次计划写入工作簿
    ///
    /// # 参数
    /// - `book`: 模板的内存工作副本（会被修改）
    /// - `plan`: 批次计划（批次号 1..=max_batch 连续）
    ///
    /// # 返回
    /// - Err(TemplateNoSheet): 工作簿中没有可克隆的工作表
    /// - Err(SheetCloneError): 工作表克隆/取用失败
    #[instrument(skip(self, book, plan), fields(max_batch = plan.max_batch))]
    pub fn fill_workbook(&self, book: &mut Spreadsheet, plan: &BatchPlan) -> GenerationResult<()> {
        for batch_number in 1..=plan.max_batch {
            let sheet_name = format!("Batch {}", batch_number);
            self.ensure_batch_sheet(book, &sheet_name)?;

            let members = plan.batch_members(batch_number);
            let sheet = Self::find_sheet_mut(book, &sheet_name).ok_or_else(|| {
                GenerationError::SheetCloneError {
                    sheet: sheet_name.clone(),
                    message: "克隆后无法取得目标工作表".to_string(),
                }
            })?;

            self.fill_sheet(sheet, &members);
            debug!(sheet = %sheet_name, member_count = members.len(), "批次工作表填充完成");
        }

        Ok(())
    }

    /// 确保批次工作表存在
    ///
    /// 不存在时克隆当前最后一张工作表并改名，即新表总是
    /// 克隆最近创建的一张，格式逐张前传
    fn ensure_batch_sheet(&self, book: &mut Spreadsheet, sheet_name: &str) -> GenerationResult<()> {
        if Self::find_sheet_mut(book, sheet_name).is_some() {
            return Ok(());
        }

        let mut clone = book
            .get_sheet_collection()
            .last()
            .cloned()
            .ok_or(GenerationError::TemplateNoSheet)?;
        clone.set_name(sheet_name);

        book.add_sheet(clone)
            .map_err(|e| GenerationError::SheetCloneError {
                sheet: sheet_name.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// 按名称查找工作表
    fn find_sheet_mut<'a>(book: &'a mut Spreadsheet, name: &str) -> Option<&'a mut Worksheet> {
        book.get_sheet_collection_mut()
            .iter_mut()
            .find(|sheet| sheet.get_name() == name)
    }

    /// 填充单张批次工作表
    ///
    /// 未被真实学生占用的槽位三列显式清空，杜绝模板
    /// 占位内容或上次使用残留
    fn fill_sheet(&self, sheet: &mut Worksheet, members: &[&SequencedStudent]) {
        // 槽位容量硬上限; 配置层已保证 batch_size <= 45
        for (slot_index, (sr_no, row)) in slot_rows().into_iter().enumerate() {
            match members.get(slot_index) {
                Some(student) => {
                    sheet.get_cell_mut((1, row)).set_value_number(sr_no);
                    sheet.get_cell_mut((2, row)).set_value_string(
                        student.record.enrollment_id.clone().unwrap_or_default(),
                    );
                    sheet
                        .get_cell_mut((3, row))
                        .set_value_string(student.record.name.clone());
                }
                None => {
                    for col in 1..=3u32 {
                        sheet.get_cell_mut((col, row)).set_value_string("");
                    }
                }
            }
        }
    }
}
