//! # 下载参数 CLI 定义
//!
//! 从模板 URL 批量下载随机尺寸图片
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fetch.rs`

use clap::Args;
use std::path::PathBuf;

/// 默认图片源
pub const DEFAULT_URL: &str = "https://source.unsplash.com/random/";

/// 下载参数
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Source url to fetch images from (dimensions are appended as <w>x<h>)
    #[arg(long, env = "IMGSEED_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Directory to save downloaded images
    #[arg(long, env = "IMGSEED_DEST", default_value = "img")]
    pub dest: PathBuf,

    /// Number of images to download
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Min width of image
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub min_width: u32,

    /// Max width of image (exclusive)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: u32,

    /// Min height of image
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub min_height: u32,

    /// Max height of image (exclusive)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: u32,

    /// Download random size images (0-999 in each dimension, bounds ignored)
    #[arg(long, default_value_t = false)]
    pub random: bool,

    /// Number of parallel downloads (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Seed for sizes and file names (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
