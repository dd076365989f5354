//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: fetch

pub mod fetch;

use clap::Parser;

/// imgseed - 随机占位图片批量下载工具
#[derive(Parser, Debug)]
#[command(name = "imgseed")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Download random images", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub fetch: fetch::FetchArgs,
}
