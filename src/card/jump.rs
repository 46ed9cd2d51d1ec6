use crate::config::{DEFAULT_PLAYER_HOST, PluginConfig};
use crate::text::clean_text;
use urlencoding::encode;

/// 网易云官网歌曲页
pub fn catalog_url(song_id: i64) -> String {
    format!("https://music.163.com/#/song?id={song_id}")
}

/// 生成卡片主跳转链接
///
/// 外部播放器关闭时固定跳转官网歌曲页。开启时拼
/// `https://{host}/?title=..&artist=..&cover=..&audio=..&detail=..`，
/// 参数逐个百分号编码，标题与歌手先清除不可见字符。
pub fn build_jump_url(
    song_id: i64,
    name: &str,
    artist: &str,
    cover_url: &str,
    audio_url: &str,
    cfg: &PluginConfig,
) -> String {
    if !cfg.use_external_player {
        return catalog_url(song_id);
    }

    let base = player_base(&cfg.external_player_host);
    let title = clean_text(name);
    let artist = clean_text(artist);

    format!(
        "{base}/?title={}&artist={}&cover={}&audio={}&detail={}",
        encode(&title),
        encode(&artist),
        encode(cover_url),
        encode(audio_url),
        encode(&catalog_url(song_id)),
    )
}

/// 校验并规范化播放器地址，配置异常时回退到内置默认域名
fn player_base(configured: &str) -> String {
    let mut host = configured.trim_end_matches('/');
    if host.is_empty() || host.len() > 200 || !host.is_ascii() {
        tracing::warn!(host = %configured, "外部播放器地址配置异常，已回退到默认值");
        host = DEFAULT_PLAYER_HOST;
    }
    if host.starts_with("http") {
        host.to_owned()
    } else {
        format!("https://{host}")
    }
}
