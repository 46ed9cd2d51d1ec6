use crate::config::AudioQuality;
use crate::domain::model::{SongInfo, SongSummary};
use crate::error::ApiError;
use crate::netease::models::{convert, dto};
use once_cell::sync::OnceCell;
use std::time::Duration;

// 聚合接口对非浏览器 UA 会返回 403
const UA_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct NeteaseApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for NeteaseApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_API_BASE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// 网易云音乐聚合 API 客户端
///
/// HTTP 连接句柄在第一次请求时才创建，整个插件生命周期内复用；
/// 卸载时经由 [`NeteaseApi::close`] 释放。
#[derive(Debug)]
pub struct NeteaseApi {
    cfg: NeteaseApiConfig,
    http: OnceCell<reqwest::Client>,
}

impl NeteaseApi {
    pub fn new(cfg: NeteaseApiConfig) -> Self {
        Self {
            cfg,
            http: OnceCell::new(),
        }
    }

    fn http(&self) -> Result<&reqwest::Client, ApiError> {
        self.http
            .get_or_try_init(|| {
                reqwest::Client::builder()
                    .timeout(self.cfg.timeout)
                    .user_agent(UA_CHROME)
                    .build()
            })
            .map_err(ApiError::Http)
    }

    /// 释放连接句柄，之后的调用会重新创建
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            tracing::debug!("音乐 API 连接已关闭");
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.cfg.base_url.trim_end_matches('/'))
    }

    /// 按关键词搜索歌曲
    pub async fn search(&self, keywords: &str, limit: u32) -> Result<Vec<SongSummary>, ApiError> {
        let limit = limit.to_string();
        let resp = self
            .http()?
            .get(self.endpoint("/api/163_search"))
            .query(&[("name", keywords), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let bytes = resp.bytes().await?;
        let body: dto::SearchResp = serde_json::from_slice(&bytes)?;
        convert::to_song_summaries(body)
    }

    /// 搜索并取第一个结果
    pub async fn search_first(&self, keywords: &str) -> Result<SongSummary, ApiError> {
        let songs = self.search(keywords, 1).await?;
        songs
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::SongNotFound(keywords.to_owned()))
    }

    /// 获取歌曲完整信息（播放链接、封面、歌词）
    pub async fn song_info(&self, song_id: i64, level: AudioQuality) -> Result<SongInfo, ApiError> {
        let ids = song_id.to_string();
        let resp = self
            .http()?
            .get(self.endpoint("/api/163_music"))
            .query(&[
                ("ids", ids.as_str()),
                ("level", level.as_str()),
                ("type", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;
        let bytes = resp.bytes().await?;
        let body: dto::SongInfoResp = serde_json::from_slice(&bytes)?;
        convert::to_song_info(song_id, body)
    }

    /// 获取歌曲播放链接
    pub async fn song_url(&self, song_id: i64, level: AudioQuality) -> Result<String, ApiError> {
        Ok(self.song_info(song_id, level).await?.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_for(server: &mockito::ServerGuard) -> NeteaseApi {
        NeteaseApi::new(NeteaseApiConfig {
            base_url: server.url(),
            timeout: Duration::from_secs(5),
        })
    }

    #[tokio::test]
    async fn test_search_sends_name_and_limit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/163_search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("name".into(), "周杰伦 晴天".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "3".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"code":200,"result":{"songs":[
                    {"id":186016,"name":"晴天","artists":"周杰伦","album":"叶惠美","duration":269000}
                ]}}"#,
            )
            .create_async()
            .await;

        let api = api_for(&server);
        let songs = api.search("周杰伦 晴天", 3).await.unwrap();
        mock.assert_async().await;
        assert_eq!(songs[0].name, "晴天");
    }

    #[tokio::test]
    async fn test_search_first_empty_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/163_search")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"code":200,"result":{"songs":[]}}"#)
            .create_async()
            .await;

        let api = api_for(&server);
        let err = api.search_first("不存在的歌").await.unwrap_err();
        assert!(matches!(err, ApiError::SongNotFound(k) if k == "不存在的歌"));
    }

    #[tokio::test]
    async fn test_song_info_sends_level_param() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/163_music")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("ids".into(), "186016".into()),
                mockito::Matcher::UrlEncoded("level".into(), "lossless".into()),
                mockito::Matcher::UrlEncoded("type".into(), "json".into()),
            ]))
            .with_body(
                r#"{"status":200,"name":"晴天","ar_name":"周杰伦",
                    "url":"https://m801.music.126.net/qt.flac","level":"lossless"}"#,
            )
            .create_async()
            .await;

        let api = api_for(&server);
        let info = api
            .song_info(186016, AudioQuality::Lossless)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(info.url, "https://m801.music.126.net/qt.flac");
    }

    #[tokio::test]
    async fn test_http_error_status_maps_to_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/163_search")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let api = api_for(&server);
        let err = api.search("晴天", 1).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }

    #[tokio::test]
    async fn test_close_resets_client() {
        let server = mockito::Server::new_async().await;
        let mut api = api_for(&server);
        // 未初始化时 close 不做事
        api.close();
        assert!(api.http().is_ok());
        api.close();
        assert!(api.http.get().is_none());
    }
}
