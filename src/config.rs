//! 插件配置
//!
//! 宿主通常在装载插件时直接构造 [`PluginConfig`]；独立运行的 CLI
//! 则从 TOML 文件加载，文件缺失或损坏时回退到默认值。

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认音乐 API 基础地址
pub const DEFAULT_API_BASE: &str = "https://api.kxzjoker.cn";
/// 默认卡片签名服务地址
pub const DEFAULT_CARD_SIGN_API: &str = "https://oiapi.net/api/QQMusicJSONArk";
/// 默认外部播放器域名
pub const DEFAULT_PLAYER_HOST: &str = "player.ygking.top";

/// 音质等级
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    /// 标准
    Standard,
    /// 极高
    Exhigh,
    /// 无损
    Lossless,
    /// Hi-Res
    #[default]
    Hires,
    /// 超清母带
    Jymaster,
}

impl AudioQuality {
    /// 供应商接口使用的等级参数值
    pub fn as_str(self) -> &'static str {
        match self {
            AudioQuality::Standard => "standard",
            AudioQuality::Exhigh => "exhigh",
            AudioQuality::Lossless => "lossless",
            AudioQuality::Hires => "hires",
            AudioQuality::Jymaster => "jymaster",
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 专辑封面尺寸，`Off` 表示不发送封面
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum CoverSize {
    Off,
    Px150,
    Px300,
    #[default]
    Px500,
    Px800,
}

impl CoverSize {
    /// 像素边长，0 表示关闭
    pub fn pixels(self) -> u16 {
        match self {
            CoverSize::Off => 0,
            CoverSize::Px150 => 150,
            CoverSize::Px300 => 300,
            CoverSize::Px500 => 500,
            CoverSize::Px800 => 800,
        }
    }

    pub fn is_off(self) -> bool {
        matches!(self, CoverSize::Off)
    }
}

impl TryFrom<u16> for CoverSize {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CoverSize::Off),
            150 => Ok(CoverSize::Px150),
            300 => Ok(CoverSize::Px300),
            500 => Ok(CoverSize::Px500),
            800 => Ok(CoverSize::Px800),
            other => Err(format!("无效的封面尺寸: {other}，可选 0/150/300/500/800")),
        }
    }
}

impl From<CoverSize> for u16 {
    fn from(value: CoverSize) -> Self {
        value.pixels()
    }
}

/// 网易云点歌插件配置项
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// 发送封面图片的尺寸，0 表示不发送封面
    pub cover_size: CoverSize,
    /// 音质选择
    pub audio_quality: AudioQuality,
    /// 使用音乐卡片发送歌曲信息，失败时自动降级
    pub enable_card: bool,
    /// 卡片主链接跳转到外部播放器而非网易云官网
    pub use_external_player: bool,
    /// 外部播放器的域名地址
    pub external_player_host: String,
    /// 音乐 API 基础地址
    pub api_base: String,
    /// 卡片签名服务地址
    pub card_sign_api: String,
    /// 音乐 API 超时（秒）
    pub http_timeout_secs: u64,
    /// 卡片签名超时（秒）
    pub card_timeout_secs: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            cover_size: CoverSize::default(),
            audio_quality: AudioQuality::default(),
            enable_card: true,
            use_external_player: false,
            external_player_host: DEFAULT_PLAYER_HOST.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            card_sign_api: DEFAULT_CARD_SIGN_API.to_owned(),
            http_timeout_secs: 15,
            card_timeout_secs: 10,
        }
    }
}

/// 从 TOML 文件加载配置
///
/// 文件不存在时静默使用默认值；内容损坏时记录警告后同样回退，
/// 不让配置问题挡住插件启动。
pub fn load_config(path: &Path) -> PluginConfig {
    let Ok(text) = fs::read_to_string(path) else {
        return PluginConfig::default();
    };
    match toml::from_str(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(path = %path.display(), err = %e, "配置文件解析失败，使用默认配置");
            PluginConfig::default()
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("dev", "netease", "netease-diange")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| std::env::temp_dir().join("netease-diange/config.toml"))
}

/// 平台数据目录（日志落盘位置）
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "netease", "netease-diange")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("netease-diange"))
}
