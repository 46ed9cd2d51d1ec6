//! 点歌投递流程相关错误

use super::ApiError;

/// 会话标识解析错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionKeyError {
    /// 标识中没有会话类型段
    #[error("会话标识缺少会话类型")]
    MissingKind,

    /// 会话类型不是 private / group
    #[error("未知会话类型: {0}")]
    UnknownKind(String),

    /// 目标 ID 不是合法数字
    #[error("目标 ID 无效: {0}")]
    BadTargetId(String),
}

/// 终止整次点歌操作的致命错误
///
/// 卡片签名失败、单条消息发送失败等可降级的问题不在这里，
/// 它们只记录日志并走降级路径。
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// 搜索请求失败
    #[error("搜索失败: {0}")]
    SearchFailed(#[source] ApiError),

    /// 关键词没有匹配到任何歌曲
    #[error("未找到歌曲: {0}")]
    SongNotFound(String),

    /// 歌曲信息请求失败
    #[error("获取歌曲信息失败: {0}")]
    SongInfoUnavailable(#[source] ApiError),

    /// 歌曲无播放链接，无法投递
    #[error("歌曲链接为空，可能需要 VIP 或版权受限")]
    SongRestricted,

    /// 会话标识无法解析
    #[error("会话标识无效: {0}")]
    BadSessionKey(#[from] SessionKeyError),

    /// 会话属于未接入的聊天平台
    #[error("暂不支持适配器: {0}")]
    UnsupportedAdapter(String),

    /// 宿主当前没有可用的 Bot 连接
    #[error("无法获取 Bot 实例")]
    BotUnavailable,
}
