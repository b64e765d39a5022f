//! 备用音频直链提取：抓取观看页 → 提取内嵌播放器数据 → 选出最佳音频流。
//!
//! 页面结构或数据格式不符合预期时一律返回 `Ok(None)`，
//! 只有抓取阶段的失败会以 [`FetchError`] 的形式返回。

use tracing::debug;

pub mod cli;
pub mod common;
pub mod config;
pub mod parser;

pub use common::client::{PageFetcher, WatchPageClient};
pub use common::error::{FetchError, FetchErrorKind};
pub use config::ExtractorConfig;
pub use parser::extractor::{
    BalancedBraceExtractor, ExtractorKind, LazyRegexExtractor, PlayerResponseExtractor,
};
pub use parser::stream_selector::{select_audio_format, select_audio_url};

pub async fn resolve_audio_url<F, E>(
    fetcher: &F,
    extractor: &E,
    video_id: &str,
) -> Result<Option<String>, FetchError>
where
    F: PageFetcher,
    E: PlayerResponseExtractor + ?Sized,
{
    let html = fetcher.fetch_page(video_id).await?;

    let Some(player_response) = extractor.extract(&html) else {
        return Ok(None);
    };
    if let Some(details) = &player_response.video_details {
        debug!("标题: << {} >>", details.title.as_deref().unwrap_or("-"));
    }

    // 空字符串视为没有结果
    Ok(select_audio_url(&player_response)
        .filter(|url| !url.is_empty())
        .map(str::to_string))
}
