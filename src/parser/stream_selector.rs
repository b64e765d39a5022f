use std::cmp::Reverse;

use tracing::debug;

use super::models::{Format, PlayerResponse};

/// 选择最佳的音频流
///
/// 优先 adaptiveFormats，为空时退回 formats；没有纯音频流时接受任意流。
/// 按码率降序（同码率保持原顺序），返回第一个带 url 键的流。
pub fn select_audio_format(player_response: &PlayerResponse) -> Option<&Format> {
    let Some(streaming_data) = player_response.streaming_data.as_ref() else {
        debug!("播放器数据中没有 streamingData");
        return None;
    };

    let mut formats = &streaming_data.adaptive_formats;
    if formats.is_empty() {
        debug!("adaptiveFormats 为空，改用 formats");
        formats = &streaming_data.formats;
    }

    let mut candidates: Vec<&Format> = formats.iter().filter(|f| f.is_audio()).collect();
    if candidates.is_empty() {
        debug!("没有纯音频流，从全部 {} 个流中选择", formats.len());
        candidates = formats.iter().collect();
    }

    // sort_by_key 是稳定排序
    candidates.sort_by_key(|f| Reverse(f.bitrate));

    // url 为 null 的流也算命中，后续取不到字符串即视为没有结果
    let selected = candidates.into_iter().find(|f| f.has_url());
    match selected {
        Some(f) => debug!(
            "选择音频流: mimeType={:?}, 码率={}",
            f.mime_type, f.bitrate
        ),
        None => debug!("所有候选流都没有 url"),
    }
    selected
}

pub fn select_audio_url(player_response: &PlayerResponse) -> Option<&str> {
    select_audio_format(player_response)?.url_str()
}
