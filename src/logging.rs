// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 约束: 日志走 stderr，stdout 只承载统计报告输出
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器
///   （默认: warn,marksheet_gen=info，即依赖库只报警告）
///   例如: RUST_LOG=marksheet_gen=trace
///
/// # 示例
/// ```no_run
/// use marksheet_gen::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,marksheet_gen=info"));

    // 一次性命令行工具，不需要线程/行号信息
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("marksheet_gen=debug"))
        .with_test_writer()
        .try_init();
}
