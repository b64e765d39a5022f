use clap::Parser;

use crate::parser::extractor::ExtractorKind;

/// 音频直链提取器（yt-dlp 不可用时的备用方案）
#[derive(Parser, Debug)]
#[command(name = "ytaudio")]
#[command(version)]
#[command(author = "rpeng252@gmail.com")]
#[command(about = "从观看页提取最佳音频流直链并输出到标准输出", long_about = None)]
pub struct Cli {
    /// 视频ID (不做校验，原样拼接到观看页地址，可以以 - 开头)
    #[arg(value_name = "VIDEO_ID")]
    #[arg(allow_hyphen_values = true)]
    pub video_id: String,

    /// 请求超时秒数 (默认不设超时)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// 自定义 User-Agent
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// 观看页地址前缀
    #[arg(long, value_name = "PREFIX")]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub watch_url: Option<String>,

    /// 播放器数据提取方式
    #[arg(long, value_enum, default_value_t = ExtractorKind::LazyRegex)]
    pub extractor: ExtractorKind,

    /// 输出调试日志到标准错误
    #[arg(short, long)]
    pub verbose: bool,
}
