use crate::config::AudioQuality;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "netease-diange",
    version,
    about = "网易云点歌插件自测工具：搜索歌曲、取播放链接、演练完整点歌流程"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// 配置文件路径（默认走系统 config 目录）
    #[arg(long, env = "DIANGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// 覆盖音乐 API 基础地址
    #[arg(long, env = "DIANGE_API_BASE")]
    pub api_base: Option<String>,

    /// 覆盖日志目录（默认 `{data_dir}/logs`）
    #[arg(long, env = "DIANGE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// 覆盖日志过滤（等价于设置 RUST_LOG）
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,

    /// 把日志同时打到 stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 搜索歌曲并打印结果
    Search {
        #[arg(default_value = "周杰伦")]
        keywords: String,

        #[arg(long, default_value_t = 5)]
        limit: u32,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 获取歌曲完整信息（播放链接、封面、歌词）
    Info {
        id: i64,

        /// 音质等级（默认取配置值）
        #[arg(long, value_enum)]
        level: Option<AudioQuality>,

        /// 同时打印歌词
        #[arg(long)]
        lyric: bool,

        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 只打印播放链接（便于喂给播放器）
    Url {
        id: i64,

        #[arg(long, value_enum)]
        level: Option<AudioQuality>,
    },

    /// 演练完整点歌流程，消息打印到终端而不真正发送
    Send {
        /// 会话标识，如 onebot_v11-group_123456
        chat_key: String,

        keywords: String,
    },
}
