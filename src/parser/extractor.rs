use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::models::PlayerResponse;

/// 从观看页HTML中取出播放器数据
///
/// 页面结构变化时只返回 None，不报错。
pub trait PlayerResponseExtractor {
    fn extract(&self, html: &str) -> Option<PlayerResponse>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExtractorKind {
    /// 非贪婪正则，匹配到第一个 `};` 为止
    #[default]
    LazyRegex,
    /// 括号配对扫描，能跳过字符串里的 `};`
    Balanced,
}

impl ExtractorKind {
    pub fn build(self) -> Box<dyn PlayerResponseExtractor + Send + Sync> {
        match self {
            ExtractorKind::LazyRegex => Box::new(LazyRegexExtractor),
            ExtractorKind::Balanced => Box::new(BalancedBraceExtractor),
        }
    }
}

impl PlayerResponseExtractor for Box<dyn PlayerResponseExtractor + Send + Sync> {
    fn extract(&self, html: &str) -> Option<PlayerResponse> {
        (**self).extract(html)
    }
}

lazy_static! {
    static ref PLAYER_RESPONSE_PATTERN: Regex =
        Regex::new(r"ytInitialPlayerResponse\s*=\s*(\{.+?\});").unwrap();
    static ref PLAYER_RESPONSE_START: Regex =
        Regex::new(r"ytInitialPlayerResponse\s*=\s*\{").unwrap();
}

/// 只看第一个匹配；JSON 内部出现 `};` 时会被截断，随后解析失败返回 None
pub struct LazyRegexExtractor;

impl PlayerResponseExtractor for LazyRegexExtractor {
    fn extract(&self, html: &str) -> Option<PlayerResponse> {
        let Some(caps) = PLAYER_RESPONSE_PATTERN.captures(html) else {
            debug!("页面中未找到 ytInitialPlayerResponse");
            return None;
        };
        let raw = caps.get(1)?.as_str();
        debug!("匹配到播放器数据，长度: {}", raw.len());

        match serde_json::from_str(raw) {
            Ok(resp) => Some(resp),
            Err(e) => {
                debug!("播放器数据解析失败: {}", e);
                None
            }
        }
    }
}

pub struct BalancedBraceExtractor;

impl PlayerResponseExtractor for BalancedBraceExtractor {
    fn extract(&self, html: &str) -> Option<PlayerResponse> {
        for m in PLAYER_RESPONSE_START.find_iter(html) {
            let start = m.end() - 1;
            let Some(raw) = balanced_object(&html[start..]) else {
                debug!("播放器数据括号不配对，位置: {}", start);
                continue;
            };
            match serde_json::from_str(raw) {
                Ok(resp) => return Some(resp),
                Err(e) => debug!("播放器数据解析失败: {}", e),
            }
        }
        debug!("页面中未找到可用的 ytInitialPlayerResponse");
        None
    }
}

/// 输入必须以 `{` 开头，返回与之配对的完整对象切片
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
