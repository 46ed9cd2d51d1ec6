//! OneBot v11 消息模型与宿主边界
//!
//! 插件自身不持有 Bot 连接。宿主实现 [`AgentHost`] 与 [`OneBotApi`]
//! 注入发送能力，插件只负责构造消息段。消息段按 OneBot v11 数组
//! 格式序列化，即 `{"type": "...", "data": {...}}`。

use serde::Serialize;
use std::fmt;

/// 宿主侧发送失败的统一包装
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct BotError(String);

impl BotError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// OneBot v11 消息段
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum MessageSegment {
    /// 纯文本
    Text { text: String },
    /// 图片，URL 或 base64
    Image { file: String },
    /// 语音
    Record { file: String },
    /// JSON 卡片（已签名的 Ark 数据）
    Json { data: String },
}

impl MessageSegment {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(file: impl Into<String>) -> Self {
        Self::Image { file: file.into() }
    }

    pub fn record(file: impl Into<String>) -> Self {
        Self::Record { file: file.into() }
    }

    pub fn json(data: impl Into<String>) -> Self {
        Self::Json { data: data.into() }
    }

    /// 段类型名，日志用
    pub fn kind(&self) -> &'static str {
        match self {
            MessageSegment::Text { .. } => "text",
            MessageSegment::Image { .. } => "image",
            MessageSegment::Record { .. } => "record",
            MessageSegment::Json { .. } => "json",
        }
    }
}

/// OneBot v11 消息，消息段数组
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Message(Vec<MessageSegment>);

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// 单段纯文本消息
    pub fn text(text: impl Into<String>) -> Self {
        MessageSegment::text(text).into()
    }

    pub fn push(&mut self, segment: MessageSegment) {
        self.0.push(segment);
    }

    pub fn segments(&self) -> &[MessageSegment] {
        &self.0
    }
}

impl From<MessageSegment> for Message {
    fn from(segment: MessageSegment) -> Self {
        Self(vec![segment])
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match segment {
                MessageSegment::Text { text } => write!(f, "[text]{text}")?,
                MessageSegment::Image { file } => write!(f, "[image]{file}")?,
                MessageSegment::Record { file } => write!(f, "[record]{file}")?,
                MessageSegment::Json { data } => write!(f, "[json]({} 字节)", data.len())?,
            }
        }
        Ok(())
    }
}

/// 宿主注入的 OneBot v11 发送能力
///
/// 实现方通常是对 Bot 连接的薄包装，把各自的错误类型收敛成
/// [`BotError`]。方法返回宿主侧的消息 ID。
pub trait OneBotApi {
    fn send_private_msg(
        &self,
        user_id: i64,
        message: &Message,
    ) -> impl Future<Output = Result<i64, BotError>> + Send;

    fn send_group_msg(
        &self,
        group_id: i64,
        message: &Message,
    ) -> impl Future<Output = Result<i64, BotError>> + Send;
}

/// 插件运行的宿主环境
pub trait AgentHost {
    type Bot: OneBotApi;

    /// 取得 OneBot v11 Bot 实例，宿主暂时没有可用连接时返回 None
    fn onebot_v11(&self) -> impl Future<Output = Option<&Self::Bot>> + Send;
}
