use crate::domain::model::{SongInfo, SongSummary};
use crate::error::ApiError;

use super::dto;

const UNKNOWN_SONG: &str = "未知歌曲";

/// 搜索响应归一化
///
/// `code` 缺失按 200 处理；非 200 映射为业务错误。
pub fn to_song_summaries(resp: dto::SearchResp) -> Result<Vec<SongSummary>, ApiError> {
    let code = resp.code.unwrap_or(200);
    if code != 200 {
        return Err(ApiError::Api {
            code,
            msg: resp.msg.unwrap_or_else(|| "未知错误".to_owned()),
        });
    }

    let songs = match resp.result {
        Some(result) => result.songs,
        None if !resp.data.is_empty() => resp.data,
        None => resp.songs,
    };
    Ok(songs.into_iter().map(to_summary).collect())
}

fn to_summary(s: dto::SearchSong) -> SongSummary {
    let artists = match s.artists {
        Some(dto::ArtistsField::Joined(text)) if !text.is_empty() => text,
        Some(dto::ArtistsField::Many(list)) if !list.is_empty() => join_artists(list),
        _ if !s.ar.is_empty() => join_artists(s.ar),
        _ => "未知".to_owned(),
    };
    let album = match (s.album, s.al) {
        (Some(dto::AlbumField::Name(name)), _) => name,
        (Some(dto::AlbumField::Object(album)), _) => album.name,
        (None, Some(album)) => album.name,
        (None, None) => String::new(),
    };
    SongSummary {
        id: s.id,
        name: s.name.unwrap_or_else(|| UNKNOWN_SONG.to_owned()),
        artists,
        album,
        duration_ms: s.duration.or(s.dt).unwrap_or(0),
    }
}

fn join_artists(list: Vec<dto::ArtistInfo>) -> String {
    list.into_iter()
        .map(|a| a.name)
        .collect::<Vec<_>>()
        .join("/")
}

/// 歌曲信息响应归一化
///
/// `status` 缺失按 200 处理；播放链接为空时报 [`ApiError::Restricted`]，
/// 保证构造出的 [`SongInfo`] 一定带链接。
pub fn to_song_info(song_id: i64, resp: dto::SongInfoResp) -> Result<SongInfo, ApiError> {
    let status = resp.status.unwrap_or(200);
    if status != 200 {
        return Err(ApiError::Api {
            code: status,
            msg: resp
                .msg
                .or(resp.error)
                .unwrap_or_else(|| "未知错误".to_owned()),
        });
    }

    let url = match resp.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => return Err(ApiError::Restricted),
    };

    Ok(SongInfo {
        id: song_id,
        name: resp.name.unwrap_or_else(|| UNKNOWN_SONG.to_owned()),
        artist: resp.ar_name.unwrap_or_default(),
        album: resp.al_name.unwrap_or_default(),
        url,
        cover: resp.pic.unwrap_or_default(),
        level: resp.level.unwrap_or_default(),
        size: resp.size.unwrap_or_default(),
        lyric: resp.lyric.filter(|lyric| !lyric.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_search(json: &str) -> dto::SearchResp {
        serde_json::from_str(json).unwrap()
    }

    fn parse_info(json: &str) -> dto::SongInfoResp {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_search_result_songs_shape() {
        let resp = parse_search(
            r#"{"code":200,"result":{"songs":[
                {"id":186016,"name":"晴天","artists":"周杰伦","album":"叶惠美","duration":269000}
            ]}}"#,
        );
        let songs = to_song_summaries(resp).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, 186016);
        assert_eq!(songs[0].name, "晴天");
        assert_eq!(songs[0].artists, "周杰伦");
        assert_eq!(songs[0].album, "叶惠美");
        assert_eq!(songs[0].duration_ms, 269_000);
    }

    #[test]
    fn test_search_flat_data_shape() {
        let resp = parse_search(
            r#"{"code":200,"data":[
                {"id":1,"name":"七里香","artists":[{"name":"周杰伦"},{"name":"温岚"}],"al":{"name":"七里香"},"dt":296000}
            ]}"#,
        );
        let songs = to_song_summaries(resp).unwrap();
        assert_eq!(songs[0].artists, "周杰伦/温岚");
        assert_eq!(songs[0].album, "七里香");
        assert_eq!(songs[0].duration_ms, 296_000);
    }

    #[test]
    fn test_search_native_ar_shape() {
        let resp = parse_search(
            r#"{"songs":[
                {"id":2,"name":"稻香","ar":[{"name":"周杰伦"}],"album":{"name":"魔杰座"}}
            ]}"#,
        );
        let songs = to_song_summaries(resp).unwrap();
        assert_eq!(songs[0].artists, "周杰伦");
        assert_eq!(songs[0].album, "魔杰座");
        assert_eq!(songs[0].duration_ms, 0);
    }

    #[test]
    fn test_search_missing_fields_defaulted() {
        let resp = parse_search(r#"{"result":{"songs":[{"id":3}]}}"#);
        let songs = to_song_summaries(resp).unwrap();
        assert_eq!(songs[0].name, "未知歌曲");
        assert_eq!(songs[0].artists, "未知");
        assert_eq!(songs[0].album, "");
    }

    #[test]
    fn test_search_error_code() {
        let resp = parse_search(r#"{"code":500,"msg":"服务器繁忙"}"#);
        let err = to_song_summaries(resp).unwrap_err();
        assert!(matches!(err, ApiError::Api { code: 500, .. }));
        assert!(err.to_string().contains("服务器繁忙"));
    }

    #[test]
    fn test_search_empty_result() {
        let resp = parse_search(r#"{"code":200,"result":{"songs":[]}}"#);
        assert!(to_song_summaries(resp).unwrap().is_empty());
    }

    #[test]
    fn test_info_full_response() {
        let resp = parse_info(
            r#"{"status":200,"name":"晴天","ar_name":"周杰伦","al_name":"叶惠美",
                "url":"https://m801.music.126.net/qt.flac",
                "pic":"https://p1.music.126.net/cover.jpg",
                "level":"hires","size":"48.9MB","lyric":"[00:00.00]晴天"}"#,
        );
        let info = to_song_info(186016, resp).unwrap();
        assert_eq!(info.id, 186016);
        assert_eq!(info.artist, "周杰伦");
        assert_eq!(info.url, "https://m801.music.126.net/qt.flac");
        assert_eq!(info.level, "hires");
        assert_eq!(info.lyric.as_deref(), Some("[00:00.00]晴天"));
    }

    #[test]
    fn test_info_missing_url_is_restricted() {
        let resp = parse_info(r#"{"status":200,"name":"某VIP歌曲"}"#);
        assert!(matches!(
            to_song_info(1, resp),
            Err(ApiError::Restricted)
        ));

        let resp = parse_info(r#"{"status":200,"url":""}"#);
        assert!(matches!(to_song_info(1, resp), Err(ApiError::Restricted)));
    }

    #[test]
    fn test_info_error_status_prefers_msg() {
        let resp = parse_info(r#"{"status":400,"msg":"参数错误","error":"bad"}"#);
        let err = to_song_info(1, resp).unwrap_err();
        assert!(err.to_string().contains("参数错误"));

        let resp = parse_info(r#"{"status":400,"error":"bad request"}"#);
        let err = to_song_info(1, resp).unwrap_err();
        assert!(err.to_string().contains("bad request"));
    }

    #[test]
    fn test_info_empty_lyric_dropped() {
        let resp = parse_info(r#"{"url":"https://x/y.mp3","lyric":""}"#);
        let info = to_song_info(1, resp).unwrap();
        assert_eq!(info.lyric, None);
        assert_eq!(info.artist, "");
        assert_eq!(info.level, "");
    }
}
