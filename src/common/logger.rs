use anyhow::{Result, anyhow};
use tracing::Level;

/// 初始化日志
///
/// 日志一律写到标准错误，标准输出只留给提取到的直链。
/// 默认只输出 WARN 及以上，verbose 时输出 DEBUG。
pub fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("日志初始化失败: {}", e))
}
