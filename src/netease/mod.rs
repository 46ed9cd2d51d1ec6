mod client;
pub mod models;

pub use client::{NeteaseApi, NeteaseApiConfig};
