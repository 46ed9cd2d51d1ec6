//! 文本与 URL 工具

use crate::domain::model::SongSummary;

/// 清除文本中的无效 Unicode 字符
///
/// 去掉私用区（U+E000..U+F8FF、15/16 号平面私用区）和控制字符
/// （U+0000..U+001F、U+007F）。这些字符出现在歌名里会污染 URL 参数
/// 和卡片文案。代理对码位在 Rust 字符串中不存在，不用处理。
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|&c| !is_invisible(c)).collect()
}

fn is_invisible(c: char) -> bool {
    let code = c as u32;
    matches!(
        code,
        0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x10_0000..=0x10_FFFD
    ) || code <= 0x1F
        || code == 0x7F
}

/// 按配置尺寸改写封面链接的 `?param=NyN` 参数
///
/// 链接没有该参数时追加，已有时原地替换；参数形状对不上
/// （如 `?param=abc`）则原样返回。
pub fn sized_cover_url(cover_url: &str, size: u16) -> String {
    if cover_url.is_empty() {
        return String::new();
    }
    let param = format!("?param={size}y{size}");
    let Some(start) = cover_url.find("?param=") else {
        return format!("{cover_url}{param}");
    };
    let rest = &cover_url[start + "?param=".len()..];
    let value_end = rest.find('&').unwrap_or(rest.len());
    if !is_size_token(&rest[..value_end]) {
        return cover_url.to_owned();
    }
    format!("{}{}{}", &cover_url[..start], param, &rest[value_end..])
}

fn is_size_token(value: &str) -> bool {
    let Some((w, h)) = value.split_once('y') else {
        return false;
    };
    !w.is_empty()
        && !h.is_empty()
        && w.bytes().all(|b| b.is_ascii_digit())
        && h.bytes().all(|b| b.is_ascii_digit())
}

/// 毫秒时长格式化为 `m:ss`
pub fn format_duration(milliseconds: i64) -> String {
    let seconds = milliseconds.max(0) / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// 歌曲概要的多行文本（终端输出用）
pub fn describe_song(song: &SongSummary) -> String {
    let mut text = format!("🎵 {}\n🎤 歌手: {}\n", song.name, song.artists);
    if !song.album.is_empty() {
        text.push_str(&format!("💿 专辑: {}\n", song.album));
    }
    text.push_str(&format!("⏱️ 时长: {}", format_duration(song.duration_ms)));
    text
}
