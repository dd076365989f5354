//! # 批量下载模块
//!
//! 并发执行 N 个互不依赖的下载任务，等待全部完成后汇总结果。
//!
//! ## 功能
//! - 有界线程池并行下载
//! - 逐条输出成功/失败信息
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchResult, BatchRunner};
