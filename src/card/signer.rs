use crate::domain::model::SongInfo;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::Duration;

// 签名接口的业务成功码
const SIGN_OK: i64 = 1;

#[derive(Debug, thiserror::Error)]
enum SignError {
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),
    #[error("响应解析失败: {0}")]
    Json(#[from] serde_json::Error),
    #[error("签名接口拒绝: code={code}, msg={msg}")]
    Rejected { code: i64, msg: String },
    #[error("签名接口未返回卡片数据")]
    EmptyPayload,
}

#[derive(Debug, Deserialize)]
struct SignResp {
    #[serde(default)]
    code: i64,
    message: Option<String>,
}

/// 卡片签名服务客户端
///
/// 成功时返回可直接作为 json 消息段发送的 Ark 数据；任何失败只
/// 记录日志并返回 None，点歌流程据此降级，绝不因签名问题中断。
#[derive(Debug)]
pub struct CardSigner {
    endpoint: String,
    timeout: Duration,
    http: OnceCell<reqwest::Client>,
}

impl CardSigner {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            http: OnceCell::new(),
        }
    }

    fn http(&self) -> Result<&reqwest::Client, reqwest::Error> {
        self.http
            .get_or_try_init(|| reqwest::Client::builder().timeout(self.timeout).build())
    }

    /// 请求签名后的音乐卡片数据
    pub async fn signed_card(&self, song: &SongInfo, jump_url: &str) -> Option<String> {
        match self.request_card(song, jump_url).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!(song_id = song.id, err = %e, "获取音乐卡片数据失败");
                None
            }
        }
    }

    async fn request_card(&self, song: &SongInfo, jump_url: &str) -> Result<String, SignError> {
        let form = [
            ("url", song.url.as_str()),
            ("jump", jump_url),
            ("song", song.name.as_str()),
            ("singer", song.artist.as_str()),
            ("cover", song.cover.as_str()),
            ("format", "163"),
        ];
        let resp = self
            .http()?
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        let bytes = resp.bytes().await?;
        let body: SignResp = serde_json::from_slice(&bytes)?;

        let payload = body.message.unwrap_or_default();
        if body.code != SIGN_OK {
            return Err(SignError::Rejected {
                code: body.code,
                msg: payload,
            });
        }
        if payload.is_empty() {
            return Err(SignError::EmptyPayload);
        }
        Ok(payload)
    }
}
