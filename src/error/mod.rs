//! 统一错误处理模块
//!
//! 提供各层的结构化错误类型，替代 String 错误。

mod api;
mod delivery;

pub use api::ApiError;
pub use delivery::{DeliveryError, SessionKeyError};
