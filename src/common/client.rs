use reqwest::{Client, ClientBuilder, header::USER_AGENT};
use tracing::debug;

use super::error::FetchError;
use crate::config::ExtractorConfig;

/// 观看页抓取，便于测试时替换
pub trait PageFetcher {
    async fn fetch_page(&self, video_id: &str) -> Result<String, FetchError>;
}

// 单次GET，不重试
#[derive(Debug, Clone)]
pub struct WatchPageClient {
    inner: Client,
    config: ExtractorConfig,
}

impl WatchPageClient {
    pub fn new(config: ExtractorConfig) -> Result<Self, FetchError> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build().map_err(FetchError::Client)?;
        Ok(Self { inner, config })
    }
}

impl PageFetcher for WatchPageClient {
    async fn fetch_page(&self, video_id: &str) -> Result<String, FetchError> {
        let url = self.config.watch_url(video_id);
        debug!("请求观看页: {}", url);

        let resp = self
            .inner
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(FetchError::Network)?;

        debug!("Response Head: {:?}", resp);

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let body = resp.bytes().await.map_err(FetchError::Network)?;
        debug!("页面大小: {} 字节", body.len());

        // 严格按UTF-8解码，不做替换
        Ok(String::from_utf8(body.to_vec())?)
    }
}
