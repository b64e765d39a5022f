use std::time::Duration;

use crate::cli::Cli;
use crate::parser::extractor::ExtractorKind;

/// 默认观看页地址前缀，视频ID直接拼接在后面
pub const DEFAULT_WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub watch_url_prefix: String,
    pub user_agent: String,
    /// 为 None 时使用 reqwest 的默认行为（不设超时）
    pub timeout: Option<Duration>,
    pub extractor: ExtractorKind,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            watch_url_prefix: DEFAULT_WATCH_URL_PREFIX.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            extractor: ExtractorKind::LazyRegex,
        }
    }
}

impl ExtractorConfig {
    // 不做任何转义，ID中的特殊字符由调用方负责
    pub fn watch_url(&self, video_id: &str) -> String {
        format!("{}{}", self.watch_url_prefix, video_id)
    }
}

impl From<&Cli> for ExtractorConfig {
    fn from(args: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            watch_url_prefix: args
                .watch_url
                .clone()
                .unwrap_or(defaults.watch_url_prefix),
            user_agent: args.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: args.timeout.map(Duration::from_secs),
            extractor: args.extractor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_watch_url_is_plain_concatenation() {
        let config = ExtractorConfig::default();
        assert_eq!(
            config.watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        // 特殊字符原样保留
        assert_eq!(
            config.watch_url("a&b c"),
            "https://www.youtube.com/watch?v=a&b c"
        );
    }

    #[test]
    fn test_config_from_cli_defaults() {
        let args = Cli::try_parse_from(["ytaudio", "abc"]).unwrap();
        assert_eq!(ExtractorConfig::from(&args), ExtractorConfig::default());
    }

    #[test]
    fn test_hyphen_leading_video_id_is_positional() {
        let args = Cli::try_parse_from(["ytaudio", "-dQw4w9WgXc"]).unwrap();
        assert_eq!(args.video_id, "-dQw4w9WgXc");
        assert!(!args.verbose);

        // 已知的短参数仍按参数解析
        let args = Cli::try_parse_from(["ytaudio", "-v", "abc"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.video_id, "abc");
    }

    #[test]
    fn test_config_from_cli_overrides() {
        let args = Cli::try_parse_from([
            "ytaudio",
            "--timeout",
            "15",
            "--user-agent",
            "test-agent",
            "--watch-url",
            "http://127.0.0.1:8080/watch?v=",
            "--extractor",
            "balanced",
            "abc",
        ])
        .unwrap();
        let config = ExtractorConfig::from(&args);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.extractor, ExtractorKind::Balanced);
        assert_eq!(config.watch_url("abc"), "http://127.0.0.1:8080/watch?v=abc");
    }
}
