//! # URL 构造
//!
//! 抽取图片尺寸并拼接到基础 URL 末尾：`<url><width>x<height>`。
//!
//! ## 依赖关系
//! - 被 `download/item.rs` 使用
//! - 使用 `download/random.rs`, `models/job.rs`

use super::random::RandomSource;
use crate::models::{DownloadJob, RANDOM_DIMENSION_LIMIT};

/// 图片尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 按任务配置抽取尺寸
///
/// 随机模式在 `[0, 1000)` 中抽取；有界模式在 `[min, max)` 中抽取，
/// 调用前必须已通过 `DownloadJob::validate`。
pub fn pick_dimensions(job: &DownloadJob, rng: &mut RandomSource) -> Dimensions {
    if job.random {
        Dimensions {
            width: rng.below(0..RANDOM_DIMENSION_LIMIT),
            height: rng.below(0..RANDOM_DIMENSION_LIMIT),
        }
    } else {
        Dimensions {
            width: rng.below(job.min_width..job.max_width),
            height: rng.below(job.min_height..job.max_height),
        }
    }
}

/// 拼接最终 URL
pub fn build_url(base: &str, dims: Dimensions) -> String {
    format!("{}{}", base, dims)
}
