//! 网易云点歌插件
//!
//! 给予聊天机器人宿主通过网易云音乐搜索歌曲、并向会话发送音乐卡片
//! 的能力，卡片不可用时自动降级为文字+封面+语音三连发。
//!
//! 入口是 [`MusicPlugin`]：宿主装载时用 [`MusicPlugin::new`] 构造，
//! 点歌走 [`MusicPlugin::send_music`]，卸载时调用
//! [`MusicPlugin::shutdown`]。发送能力由宿主实现
//! [`onebot::AgentHost`] 与 [`onebot::OneBotApi`] 注入。

pub mod card;
pub mod cli;
pub mod config;
pub mod deliver;
pub mod domain;
pub mod error;
pub mod logging;
pub mod netease;
pub mod onebot;
pub mod session;
pub mod text;

mod plugin;

pub use config::PluginConfig;
pub use deliver::{DeliveryPath, DeliveryReport};
pub use plugin::MusicPlugin;
