//! 网易云音乐 API 相关错误

/// 音乐 API 调用错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 网络层错误（连接、超时、非 2xx 状态码）
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 响应不是预期的 JSON
    #[error("响应解析失败: {0}")]
    Json(#[from] serde_json::Error),

    /// API 返回业务错误
    #[error("API 返回错误: code={code}, msg={msg}")]
    Api { code: i64, msg: String },

    /// 搜索结果为空
    #[error("未找到歌曲: {0}")]
    SongNotFound(String),

    /// 供应商未返回播放链接（区域/会员限制）
    #[error("歌曲链接为空，可能需要 VIP 或版权受限")]
    Restricted,
}
