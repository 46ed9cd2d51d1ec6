//! 音乐卡片构造
//!
//! 卡片由两部分拼成：本地生成的跳转链接，以及外部签名服务返回的
//! JSON Ark 数据。签名失败不是致命错误，调用方降级为普通消息。

mod jump;
mod signer;

pub use jump::{build_jump_url, catalog_url};
pub use signer::CardSigner;
