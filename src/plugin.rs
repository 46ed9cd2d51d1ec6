//! 插件生命周期与入口

use crate::card::CardSigner;
use crate::config::PluginConfig;
use crate::deliver::{self, DeliveryReport};
use crate::error::DeliveryError;
use crate::netease::{NeteaseApi, NeteaseApiConfig};
use crate::onebot::AgentHost;
use std::time::Duration;

/// 网易云点歌插件
///
/// 宿主装载插件时构造，卸载时调用 [`MusicPlugin::shutdown`]。
/// 网络客户端句柄都挂在实例上，惰性创建、跨调用复用，没有全局状态；
/// 多次点歌可以共享同一个实例并发执行。
#[derive(Debug)]
pub struct MusicPlugin {
    cfg: PluginConfig,
    api: NeteaseApi,
    signer: CardSigner,
}

impl MusicPlugin {
    /// 初始化插件
    pub fn new(cfg: PluginConfig) -> Self {
        tracing::info!(api_base = %cfg.api_base, "网易云点歌插件初始化完成");
        let api = NeteaseApi::new(NeteaseApiConfig {
            base_url: cfg.api_base.clone(),
            timeout: Duration::from_secs(cfg.http_timeout_secs),
        });
        let signer = CardSigner::new(
            cfg.card_sign_api.clone(),
            Duration::from_secs(cfg.card_timeout_secs),
        );
        Self { cfg, api, signer }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.cfg
    }

    /// 音乐 API 客户端，供调试工具直接调用
    pub fn api(&self) -> &NeteaseApi {
        &self.api
    }

    /// 搜索歌曲并发送到会话，返回面向用户的回执文案
    ///
    /// 不向外抛错：任何失败都转成提示语，例如
    /// `点歌失败: 未找到歌曲: xxx`。
    pub async fn send_music<H: AgentHost>(
        &self,
        host: &H,
        chat_key: &str,
        keyword: &str,
    ) -> String {
        match self.try_send_music(host, chat_key, keyword).await {
            Ok(report) => report.render(),
            Err(e) => {
                tracing::error!(chat_key, keyword, err = %e, "点歌失败");
                deliver::render_failure(&e)
            }
        }
    }

    /// 同 [`MusicPlugin::send_music`]，但返回结构化结果
    pub async fn try_send_music<H: AgentHost>(
        &self,
        host: &H,
        chat_key: &str,
        keyword: &str,
    ) -> Result<DeliveryReport, DeliveryError> {
        deliver::run(&self.api, &self.signer, &self.cfg, host, chat_key, keyword).await
    }

    /// 卸载插件，释放网络句柄
    pub fn shutdown(mut self) {
        tracing::info!("网易云点歌插件正在清理");
        self.api.close();
        tracing::info!("网易云点歌插件清理完成");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_does_not_touch_network() {
        // 构造与销毁都不应发起请求（客户端是惰性的）
        let plugin = MusicPlugin::new(PluginConfig::default());
        assert_eq!(plugin.config().api_base, "https://api.kxzjoker.cn");
        plugin.shutdown();
    }
}
