use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 页面内嵌的 ytInitialPlayerResponse，只保留用得到的字段
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default)]
    pub streaming_data: Option<StreamingData>,
    /// 仅用于调试日志，格式不对时当作没有
    #[serde(default, deserialize_with = "lenient_details")]
    pub video_details: Option<VideoDetails>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    /// 音视频分离的流
    #[serde(default, deserialize_with = "null_as_default")]
    pub adaptive_formats: Vec<Format>,
    /// 音视频合一的流
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: Vec<Format>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_bitrate")]
    pub bitrate: i64,
    /// 只要有 url 键就是 Some，值为 null 时是 Some(Value::Null)
    #[serde(default, deserialize_with = "present_value")]
    pub url: Option<Value>,
}

impl Format {
    pub fn is_audio(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| mime.contains("audio"))
    }

    pub fn has_url(&self) -> bool {
        self.url.is_some()
    }

    // url 不是字符串（包括 null）时返回 None
    pub fn url_str(&self) -> Option<&str> {
        self.url.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn lenient_details<'de, D>(deserializer: D) -> Result<Option<VideoDetails>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// 码率可能是整数、浮点或null，保留符号，无法识别的按0处理
fn lenient_bitrate<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    })
}
