use clap::Parser;
use netease_diange::cli::{Cli, Command};
use netease_diange::config;
use netease_diange::error::ApiError;
use netease_diange::onebot::{AgentHost, BotError, Message, OneBotApi};
use netease_diange::text::describe_song;
use netease_diange::{MusicPlugin, logging};

/// 把消息打印到终端的演练 Bot
struct DryRunBot;

impl OneBotApi for DryRunBot {
    async fn send_private_msg(&self, user_id: i64, message: &Message) -> Result<i64, BotError> {
        println!("-> 私聊 {user_id}: {message}");
        Ok(0)
    }

    async fn send_group_msg(&self, group_id: i64, message: &Message) -> Result<i64, BotError> {
        println!("-> 群聊 {group_id}: {message}");
        Ok(0)
    }
}

struct DryRunHost {
    bot: DryRunBot,
}

impl AgentHost for DryRunHost {
    type Bot = DryRunBot;

    async fn onebot_v11(&self) -> Option<&DryRunBot> {
        Some(&self.bot)
    }
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let mut cfg = config::load_config(&config_path);
    if let Some(v) = cli.api_base.clone() {
        cfg.api_base = v;
    }

    let _log_guard = logging::init(
        &config::default_data_dir(),
        logging::LogConfig {
            dir: cli.log_dir.clone(),
            filter: cli.log_filter.clone(),
            stderr: cli.verbose,
        },
    );
    tracing::info!(config = %config_path.display(), "netease-diange 启动");

    let plugin = MusicPlugin::new(cfg);

    match cli.command {
        Command::Search {
            keywords,
            limit,
            json,
        } => {
            let songs = plugin.api().search(&keywords, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&songs)?);
            } else if songs.is_empty() {
                println!("未找到歌曲: {keywords}");
            } else {
                for song in &songs {
                    println!("{}", describe_song(song));
                    println!("🆔 id: {}", song.id);
                    println!();
                }
            }
        }
        Command::Info {
            id,
            level,
            lyric,
            json,
        } => {
            let level = level.unwrap_or(plugin.config().audio_quality);
            let info = plugin.api().song_info(id, level).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("🎵 {}", info.name);
                println!("🎤 歌手: {}", info.artist);
                println!("💿 专辑: {}", info.album);
                println!("🔊 音质: {} ({})", info.level, info.size);
                println!("🔗 链接: {}", info.url);
                println!("🖼️ 封面: {}", info.cover);
                if lyric {
                    println!();
                    println!("{}", info.lyric.as_deref().unwrap_or("（无歌词）"));
                }
            }
        }
        Command::Url { id, level } => {
            let level = level.unwrap_or(plugin.config().audio_quality);
            let url = plugin.api().song_url(id, level).await?;
            println!("{url}");
        }
        Command::Send { chat_key, keywords } => {
            let host = DryRunHost { bot: DryRunBot };
            let result = plugin.send_music(&host, &chat_key, &keywords).await;
            println!("{result}");
        }
    }

    plugin.shutdown();
    Ok(())
}
