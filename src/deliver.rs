//! 点歌投递流水线
//!
//! 搜索、取歌曲信息、解析目标会话、尝试卡片、降级为文字+封面+语音，
//! 依次推进。只有前三步的失败会终止整次操作；卡片与单条消息的失败
//! 都在原地记录日志后继续，保证用户至少收到基础形式的歌曲。

use crate::card::{self, CardSigner};
use crate::config::PluginConfig;
use crate::domain::model::SongInfo;
use crate::error::{ApiError, DeliveryError};
use crate::netease::NeteaseApi;
use crate::onebot::{AgentHost, Message, MessageSegment, OneBotApi};
use crate::session::{ChatKind, ChatTarget};
use crate::text::sized_cover_url;

/// 投递成功走过的路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPath {
    /// 音乐卡片
    Card,
    /// 文字 + 封面 + 语音
    Fallback,
}

/// 投递结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub song_name: String,
    pub path: DeliveryPath,
}

impl DeliveryReport {
    /// 面向用户的回执文案
    pub fn render(&self) -> String {
        match self.path {
            DeliveryPath::Card => format!("歌曲《{}》卡片已发送", self.song_name),
            DeliveryPath::Fallback => {
                format!("歌曲《{}》已以(文字+封面+语音)方式发送", self.song_name)
            }
        }
    }
}

/// 致命错误的用户提示语
pub(crate) fn render_failure(err: &DeliveryError) -> String {
    match err {
        DeliveryError::UnsupportedAdapter(adapter) => format!("暂不支持适配器: {adapter}"),
        DeliveryError::BotUnavailable => "无法获取 Bot 实例".to_owned(),
        other => format!("点歌失败: {other}"),
    }
}

/// 完整执行一次点歌
pub(crate) async fn run<H: AgentHost>(
    api: &NeteaseApi,
    signer: &CardSigner,
    cfg: &PluginConfig,
    host: &H,
    chat_key: &str,
    keyword: &str,
) -> Result<DeliveryReport, DeliveryError> {
    tracing::info!(keyword, "正在搜索网易云音乐");
    let song = api.search_first(keyword).await.map_err(|e| match e {
        ApiError::SongNotFound(keyword) => DeliveryError::SongNotFound(keyword),
        other => DeliveryError::SearchFailed(other),
    })?;
    tracing::info!(song_id = song.id, name = %song.name, artists = %song.artists, "找到歌曲");

    let mut info = api
        .song_info(song.id, cfg.audio_quality)
        .await
        .map_err(|e| match e {
            ApiError::Restricted => DeliveryError::SongRestricted,
            other => DeliveryError::SongInfoUnavailable(other),
        })?;
    tracing::info!(song_id = info.id, level = %info.level, "获取到播放链接");

    // 文案沿用搜索结果的歌名；信息接口缺歌手时用搜索结果兜底
    info.name = song.name;
    if info.artist.is_empty() {
        info.artist = song.artists;
    }

    let target = ChatTarget::parse(chat_key)?;
    if !target.is_supported_adapter() {
        return Err(DeliveryError::UnsupportedAdapter(target.adapter));
    }
    let bot = host
        .onebot_v11()
        .await
        .ok_or(DeliveryError::BotUnavailable)?;

    if cfg.enable_card && send_card(signer, cfg, bot, &target, &info).await {
        return Ok(DeliveryReport {
            song_name: info.name,
            path: DeliveryPath::Card,
        });
    }

    send_fallback(cfg, bot, &target, &info).await;
    Ok(DeliveryReport {
        song_name: info.name,
        path: DeliveryPath::Fallback,
    })
}

/// 尝试卡片投递，签名或发送失败都返回 false
async fn send_card<B: OneBotApi>(
    signer: &CardSigner,
    cfg: &PluginConfig,
    bot: &B,
    target: &ChatTarget,
    info: &SongInfo,
) -> bool {
    tracing::info!(name = %info.name, "尝试发送音乐卡片");
    let jump_url =
        card::build_jump_url(info.id, &info.name, &info.artist, &info.cover, &info.url, cfg);
    let Some(payload) = signer.signed_card(info, &jump_url).await else {
        tracing::warn!("获取音乐卡片数据失败，降级为普通消息");
        return false;
    };

    let message = Message::from(MessageSegment::json(payload));
    if send_to_target(bot, target, &message).await {
        tracing::info!("音乐卡片发送成功");
        true
    } else {
        tracing::warn!("音乐卡片发送失败，降级为普通消息");
        false
    }
}

/// 降级路径：文字、封面、语音逐条尽力发送
async fn send_fallback<B: OneBotApi>(
    cfg: &PluginConfig,
    bot: &B,
    target: &ChatTarget,
    info: &SongInfo,
) {
    let text = format!("{} - {}", info.name, info.artist);
    send_to_target(bot, target, &Message::text(text)).await;

    if !cfg.cover_size.is_off() && !info.cover.is_empty() {
        let sized = sized_cover_url(&info.cover, cfg.cover_size.pixels());
        send_to_target(bot, target, &MessageSegment::image(sized).into()).await;
    }

    if !info.url.is_empty() {
        send_to_target(bot, target, &MessageSegment::record(info.url.clone()).into()).await;
    }
}

/// 发送单条消息，失败记录日志并返回 false
async fn send_to_target<B: OneBotApi>(bot: &B, target: &ChatTarget, message: &Message) -> bool {
    let sent = match target.kind {
        ChatKind::Private => bot.send_private_msg(target.target_id, message).await,
        ChatKind::Group => bot.send_group_msg(target.target_id, message).await,
    };
    match sent {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(
                kind = %target.kind,
                target_id = target.target_id,
                err = %e,
                "发送消息失败"
            );
            false
        }
    }
}
