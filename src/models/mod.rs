//! # 数据模型模块
//!
//! 定义下载任务配置。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/`, `download/` 使用
//! - 子模块: job

pub mod job;

pub use job::{DownloadJob, RANDOM_DIMENSION_LIMIT};
