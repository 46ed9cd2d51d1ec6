//! 会话标识解析
//!
//! 会话标识形如 `onebot_v11-group_123456`：适配器名、会话类型、
//! 目标 ID 三段。适配器与其余部分以第一个 `-` 分隔，目标 ID 以
//! 最后一个 `_` 分隔，省略时取 0。

use crate::error::SessionKeyError;
use std::fmt;

/// 当前唯一接入的聊天适配器
pub const SUPPORTED_ADAPTER: &str = "onebot_v11";

/// 会话类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
}

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChatKind::Private => "private",
            ChatKind::Group => "group",
        })
    }
}

/// 投递目标会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTarget {
    pub adapter: String,
    pub kind: ChatKind,
    pub target_id: i64,
}

impl ChatTarget {
    /// 解析会话标识
    pub fn parse(chat_key: &str) -> Result<Self, SessionKeyError> {
        let (adapter, chat_info) = chat_key.split_once('-').unwrap_or((chat_key, ""));

        let (kind_text, target_id) = match chat_info.rsplit_once('_') {
            Some((kind_text, id_text)) => {
                let target_id = id_text
                    .parse::<i64>()
                    .map_err(|_| SessionKeyError::BadTargetId(id_text.to_owned()))?;
                (kind_text, target_id)
            }
            None => (chat_info, 0),
        };

        let kind = match kind_text {
            "private" => ChatKind::Private,
            "group" => ChatKind::Group,
            "" => return Err(SessionKeyError::MissingKind),
            other => return Err(SessionKeyError::UnknownKind(other.to_owned())),
        };

        Ok(Self {
            adapter: adapter.to_owned(),
            kind,
            target_id,
        })
    }

    pub fn is_supported_adapter(&self) -> bool {
        self.adapter == SUPPORTED_ADAPTER
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}_{}", self.adapter, self.kind, self.target_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_key() {
        let target = ChatTarget::parse("onebot_v11-group_123456").unwrap();
        assert_eq!(target.adapter, "onebot_v11");
        assert_eq!(target.kind, ChatKind::Group);
        assert_eq!(target.target_id, 123456);
        assert!(target.is_supported_adapter());
    }

    #[test]
    fn test_parse_private_key() {
        let target = ChatTarget::parse("onebot_v11-private_10001").unwrap();
        assert_eq!(target.kind, ChatKind::Private);
        assert_eq!(target.target_id, 10001);
    }

    #[test]
    fn test_parse_key_without_target_id() {
        let target = ChatTarget::parse("onebot_v11-private").unwrap();
        assert_eq!(target.target_id, 0);
    }

    #[test]
    fn test_adapter_split_at_first_dash() {
        // 适配器名里的下划线不参与分段
        let target = ChatTarget::parse("onebot_v11-group_42").unwrap();
        assert_eq!(target.adapter, "onebot_v11");

        let target = ChatTarget::parse("tg-bot-group_42");
        // 第一个 `-` 之后整体算会话信息
        assert_eq!(
            target.unwrap_err(),
            SessionKeyError::UnknownKind("bot-group".to_owned())
        );
    }

    #[test]
    fn test_target_id_split_at_last_underscore() {
        let err = ChatTarget::parse("onebot_v11-group_chat_7").unwrap_err();
        assert_eq!(err, SessionKeyError::UnknownKind("group_chat".to_owned()));
    }

    #[test]
    fn test_unknown_kind() {
        let err = ChatTarget::parse("onebot_v11-channel_5").unwrap_err();
        assert_eq!(err, SessionKeyError::UnknownKind("channel".to_owned()));
    }

    #[test]
    fn test_bad_target_id() {
        let err = ChatTarget::parse("onebot_v11-group_abc").unwrap_err();
        assert_eq!(err, SessionKeyError::BadTargetId("abc".to_owned()));
    }

    #[test]
    fn test_missing_kind() {
        assert_eq!(
            ChatTarget::parse("onebot_v11").unwrap_err(),
            SessionKeyError::MissingKind
        );
        assert_eq!(
            ChatTarget::parse("onebot_v11-").unwrap_err(),
            SessionKeyError::MissingKind
        );
    }

    #[test]
    fn test_unsupported_adapter_still_parses() {
        let target = ChatTarget::parse("telegram-group_99").unwrap();
        assert_eq!(target.adapter, "telegram");
        assert!(!target.is_supported_adapter());
    }

    #[test]
    fn test_display_roundtrip() {
        let target = ChatTarget::parse("onebot_v11-group_123456").unwrap();
        assert_eq!(target.to_string(), "onebot_v11-group_123456");
    }
}
