//! # 下载模块
//!
//! 单张图片的下载流程及其辅助函数。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/fetch.rs` 使用
//! - 子模块: item, naming, random, source, url

pub mod item;
pub mod naming;
pub mod random;
pub mod source;
pub mod url;

pub use item::{download_one, ProcessResult};
pub use random::RandomSource;
pub use source::{HttpSource, ImageSource};
