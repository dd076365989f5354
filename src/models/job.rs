//! # 下载任务配置模型
//!
//! `DownloadJob` 在进程启动时构造一次，之后所有下载线程只读共享。
//!
//! ## 依赖关系
//! - 由 `cli/fetch.rs` 的 `FetchArgs` 转换而来
//! - 被 `batch/runner.rs`, `download/` 使用

use crate::cli::fetch::FetchArgs;
use crate::error::{ImgseedError, Result};

use std::path::PathBuf;

/// 随机尺寸模式下的上界（不含）
pub const RANDOM_DIMENSION_LIMIT: u32 = 1000;

/// 批量下载任务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    /// 基础 URL 模板，尺寸直接拼接在末尾
    pub url: String,
    /// 保存目录
    pub dest: PathBuf,
    /// 下载数量
    pub limit: usize,
    /// 随机尺寸模式（忽略上下界）
    pub random: bool,
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl DownloadJob {
    /// 校验尺寸范围
    ///
    /// 有界模式下要求 `min < max`，否则区间为空，无法抽样。
    /// 随机模式不使用上下界，因此不做检查。
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ImgseedError::InvalidArgument("url must not be empty".to_string()));
        }

        if self.random {
            return Ok(());
        }

        if self.max_width <= self.min_width {
            return Err(ImgseedError::InvalidRange {
                axis: "width",
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.max_height <= self.min_height {
            return Err(ImgseedError::InvalidRange {
                axis: "height",
                min: self.min_height,
                max: self.max_height,
            });
        }

        Ok(())
    }
}

impl From<&FetchArgs> for DownloadJob {
    fn from(args: &FetchArgs) -> Self {
        DownloadJob {
            url: args.url.clone(),
            dest: args.dest.clone(),
            limit: args.limit,
            random: args.random,
            min_width: args.min_width,
            max_width: args.max_width,
            min_height: args.min_height,
            max_height: args.max_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> DownloadJob {
        DownloadJob {
            url: "http://x/".to_string(),
            dest: PathBuf::from("out"),
            limit: 3,
            random: false,
            min_width: 100,
            max_width: 200,
            min_height: 100,
            max_height: 200,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(job().validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_width() {
        let mut j = job();
        j.min_width = 300;
        match j.validate() {
            Err(ImgseedError::InvalidRange { axis, min, max }) => {
                assert_eq!(axis, "width");
                assert_eq!((min, max), (300, 200));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_height() {
        let mut j = job();
        j.max_height = 100;
        assert!(matches!(
            j.validate(),
            Err(ImgseedError::InvalidRange { axis: "height", .. })
        ));
    }

    #[test]
    fn test_random_mode_ignores_bounds() {
        let mut j = job();
        j.random = true;
        j.min_width = 500;
        j.max_width = 10;
        assert!(j.validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut j = job();
        j.url = "  ".to_string();
        assert!(matches!(j.validate(), Err(ImgseedError::InvalidArgument(_))));
    }
}
