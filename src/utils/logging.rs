//! 日志工具模块
//!
//! 日志一律走 stderr，卡片和状态行走 stdout，两路互不干扰。

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅器
///
/// 默认 info 级别，可用 RUST_LOG 覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
