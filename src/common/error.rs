use reqwest::StatusCode;
use thiserror::Error;

/// 抓取观看页时可能出现的错误
///
/// 对外统一打印为 `Error: <描述>`，调用方可通过 [`FetchError::kind`] 区分具体类别。
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("创建HTTP客户端失败: {0}")]
    Client(#[source] reqwest::Error),

    #[error("网络请求失败: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP状态异常: {status} ({url})")]
    Status { status: StatusCode, url: String },

    #[error("页面解码失败: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Client,
    Network,
    Status,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Client(_) => FetchErrorKind::Client,
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }
}
