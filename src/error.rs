//! # 统一错误处理模块
//!
//! 定义 imgseed 的所有错误类型，使用 `thiserror` 派生。
//!
//! - `ImgseedError`: 配置与运行环境错误，终止整个进程
//! - `DownloadError`: 单张图片下载失败，只影响该条目
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// imgseed 统一错误类型
#[derive(Error, Debug)]
pub enum ImgseedError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid {axis} range: min {min} must be less than max {max}")]
    InvalidRange {
        axis: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 运行环境错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // ─────────────────────────────────────────────────────────────
    // 批量结果
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} downloads failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("Batch ended with {remaining} of {total} downloads unfinished")]
    BatchIncomplete { remaining: usize, total: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ImgseedError>;

/// 单条下载失败原因
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Could not download image from {url}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unable to create directory: {}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write on disk: {}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to save image on disk: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 失败分类（用于汇总统计）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Network,
    Directory,
    File,
    Write,
}

impl DownloadError {
    /// 失败分类
    pub fn kind(&self) -> FailureKind {
        match self {
            DownloadError::Network { .. } => FailureKind::Network,
            DownloadError::Directory { .. } => FailureKind::Directory,
            DownloadError::FileCreate { .. } => FailureKind::File,
            DownloadError::Write { .. } => FailureKind::Write,
        }
    }

    /// 带底层原因的完整描述
    pub fn detail(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{}: {}", self, source),
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::Directory => write!(f, "directory"),
            FailureKind::File => write!(f, "file"),
            FailureKind::Write => write!(f, "write"),
        }
    }
}
