//! # 图片源
//!
//! 网络访问的抽象层：把 URL 变成可读取的字节流。
//!
//! - `ImageSource`: 下载线程依赖的 trait，测试中以替身实现
//! - `HttpSource`: 基于 `reqwest::blocking` 的实际实现
//!
//! ## 依赖关系
//! - 被 `download/item.rs`, `batch/runner.rs`, `commands/fetch.rs` 使用
//! - 使用 `reqwest` crate

use crate::error::{DownloadError, ImgseedError, Result};

use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// 图片源：多个下载线程共享同一实例
pub trait ImageSource: Sync {
    /// 发起请求并返回响应体
    fn open(&self, url: &str) -> std::result::Result<Box<dyn Read>, DownloadError>;
}

/// HTTP 图片源
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// 创建 HTTP 图片源，`timeout` 为 `None` 时不限时
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("imgseed/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ImgseedError::HttpClient)?;

        Ok(Self { client })
    }
}

impl ImageSource for HttpSource {
    fn open(&self, url: &str) -> std::result::Result<Box<dyn Read>, DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| DownloadError::Network {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        Ok(Box::new(response))
    }
}
