// ==========================================
// 外部考试评分表批次生成系统 - 生成管线
// ==========================================
// 职责: 整合生成流程，从名册到工作簿字节
// 流程: 清洗去重 → 排序 → 分批 → 模板加载 → 填表 → 序列化
// 约束: 模板每次调用独立加载，不做跨请求缓存;
//       结构性错误发生前不产生任何部分输出
// ==========================================

use crate::config::GenerationConfig;
use crate::domain::{GenerationReport, StudentRecord};
use crate::engine::batcher::Batcher;
use crate::engine::error::{GenerationError, GenerationResult};
use crate::engine::normalizer::Normalizer;
use crate::engine::sequencer::Sequencer;
use crate::engine::sheet_filler::SheetFiller;
use chrono::Utc;
use std::io::Cursor;
use tracing::{info, instrument};
use umya_spreadsheet::Spreadsheet;

// ==========================================
// MarksheetOutput - 生成结果
// ==========================================

/// 生成结果: 工作簿字节 + 下载元信息 + 统计报告
#[derive(Debug, Clone)]
pub struct MarksheetOutput {
    /// 完整 xlsx 工作簿字节（内存内序列化，无临时文件）
    pub bytes: Vec<u8>,
    /// 建议下载文件名（固定）
    pub file_name: String,
    /// MIME 类型（固定）
    pub content_type: String,
    /// 生成统计
    pub report: GenerationReport,
}

// ==========================================
// MarksheetGenerator - 生成管线
// ==========================================

pub struct MarksheetGenerator {
    config: GenerationConfig,
    normalizer: Normalizer,
    sequencer: Sequencer,
    batcher: Batcher,
    sheet_filler: SheetFiller,
}

impl MarksheetGenerator {
    /// 创建生成管线
    ///
    /// # 参数
    /// - `config`: 已通过构造期校验的生成配置
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
            sequencer: Sequencer::new(),
            batcher: Batcher::new(),
            sheet_filler: SheetFiller::new(),
        }
    }

    /// 生成评分表工作簿
    ///
    /// # 参数
    /// - `roster`: 名册记录（原始行序）
    ///
    /// # 返回
    /// - Ok(MarksheetOutput): 完整工作簿字节与统计报告
    /// - Err(EmptyRoster): 清洗去重后名册为空
    /// - Err(TemplateLoadError): 模板缺失或损坏（发生在任何写入之前）
    ///
    /// # 流程（5 个阶段）
    /// 1. 报名号清洗 + 首现保留去重
    /// 2. 排序（按专业 / 按报名号数值）
    /// 3. 批次号分配
    /// 4. 模板加载 + 批次工作表填充
    /// 5. 内存内序列化
    #[instrument(skip(self, roster), fields(
        roster_rows = roster.len(),
        batch_size = self.config.batch_size(),
        branch_wise = self.config.branch_wise()
    ))]
    pub fn build_marksheet(
        &self,
        mut roster: Vec<StudentRecord>,
    ) -> GenerationResult<MarksheetOutput> {
        // 1) 清洗 + 去重
        let stats = self.normalizer.normalize(&mut roster);

        // 2) 排序
        let ordered = self.sequencer.sequence(roster, self.config.branch_wise());

        // 3) 批次划分
        let plan = self.batcher.assign(ordered, self.config.batch_size());
        if plan.max_batch == 0 {
            return Err(GenerationError::EmptyRoster);
        }

        // 4) 模板加载（每次调用独立的内存工作副本）
        let mut book = umya_spreadsheet::reader::xlsx::read(self.config.template_path())
            .map_err(|e| GenerationError::TemplateLoadError(e.to_string()))?;

        // 5) 填充批次工作表
        self.sheet_filler.fill_workbook(&mut book, &plan)?;

        // 6) 内存内序列化
        let bytes = serialize_workbook(&book)?;

        let report = GenerationReport {
            generated_at: Utc::now(),
            total_rows: stats.total_rows,
            duplicates_removed: stats.duplicates_removed,
            student_count: plan.students.len(),
            batch_count: plan.max_batch,
        };

        info!(
            student_count = report.student_count,
            batch_count = report.batch_count,
            duplicates_removed = report.duplicates_removed,
            output_bytes = bytes.len(),
            "评分表生成完成"
        );

        Ok(MarksheetOutput {
            bytes,
            file_name: self.config.output_file_name().to_string(),
            content_type: self.config.content_type().to_string(),
            report,
        })
    }
}

/// 将工作簿序列化为内存字节（无磁盘临时文件）
fn serialize_workbook(book: &Spreadsheet) -> GenerationResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(book, &mut cursor)
        .map_err(|e| GenerationError::SerializeError(e.to_string()))?;
    Ok(cursor.into_inner())
}
