// ==========================================
// 外部考试评分表批次生成系统 - 命令行入口
// ==========================================
// 用法:
//   marksheet-gen <名册.xlsx|.csv> <模板.xlsx> <输出.xlsx> [每批人数] [--flat]
//
// - 每批人数默认 45（= 每张表槽位容量）
// - 默认按 (专业, 报名号) 排序; --flat 切换为报名号数值排序
// ==========================================

use marksheet_gen::{
    logging, GenerationConfig, MarksheetGenerator, RosterMapper, UniversalRosterParser, APP_NAME,
    VERSION,
};
use std::error::Error;

const USAGE: &str = "用法: marksheet-gen <名册.xlsx|.csv> <模板.xlsx> <输出.xlsx> [每批人数] [--flat]";

fn main() -> Result<(), Box<dyn Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let roster_path = args.next().ok_or(USAGE)?;
    let template_path = args.next().ok_or("缺少模板文件参数")?;
    let output_path = args.next().ok_or("缺少输出文件参数")?;

    let mut batch_size: usize = 45;
    let mut branch_wise = true;
    for arg in args {
        if arg == "--flat" {
            branch_wise = false;
        } else {
            batch_size = arg
                .parse()
                .map_err(|_| format!("每批人数须为正整数: {}", arg))?;
        }
    }

    // 配置构造期完成参数校验
    let config = GenerationConfig::new(&template_path, batch_size, branch_wise)?;

    // 解析名册
    tracing::info!("正在解析名册: {}", roster_path);
    let rows = UniversalRosterParser.parse(&roster_path)?;
    let roster = RosterMapper.map_rows(rows)?;

    // 生成评分表
    let generator = MarksheetGenerator::new(config);
    let output = generator.build_marksheet(roster)?;

    std::fs::write(&output_path, &output.bytes)?;
    tracing::info!(
        "已生成: {} ({} 字节, {} 个批次)",
        output_path,
        output.bytes.len(),
        output.report.batch_count
    );

    // 统计报告输出到标准输出，便于上游采集
    println!("{}", serde_json::to_string_pretty(&output.report)?);

    Ok(())
}
