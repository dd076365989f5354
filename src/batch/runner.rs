//! # 批量执行器
//!
//! 并行执行批量下载任务。
//!
//! ## 功能
//! - 基于 rayon 的有界线程池，每个条目一个独立任务
//! - 进度条显示，逐条输出结果
//! - 失败分类汇总
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 调用
//! - 使用 `download/` 执行单条下载
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行下载

use crate::download::{download_one, ImageSource, ProcessResult, RandomSource};
use crate::error::{DownloadError, FailureKind, ImgseedError, Result};
use crate::models::DownloadJob;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 自动模式下每个 CPU 的下载线程数（下载以 I/O 等待为主）
const THREADS_PER_CPU: usize = 4;

/// 批量下载结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 完成计数器归零时记录的完成数量
    pub completed: usize,
    /// 写入的总字节数
    pub bytes: u64,
    /// 失败详情 (URL, 错误)
    pub failures: Vec<(String, DownloadError)>,
}

impl BatchResult {
    /// 合并单条结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success { bytes, .. } => {
                self.success += 1;
                self.bytes += bytes;
            }
            ProcessResult::Failed { url, error } => {
                self.failed += 1;
                self.failures.push((url, error));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 某一类失败的数量
    pub fn count_of(&self, kind: FailureKind) -> usize {
        self.failures
            .iter()
            .filter(|(_, err)| err.kind() == kind)
            .count()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行下载数，0 表示自动
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 实际使用的线程数，不超过条目数
    pub fn worker_count(&self, limit: usize) -> usize {
        let jobs = if self.jobs == 0 {
            num_cpus::get() * THREADS_PER_CPU
        } else {
            self.jobs
        };
        jobs.min(limit).max(1)
    }

    /// 执行 `job.limit` 次下载，全部结束后返回
    ///
    /// 每个条目的种子在派发前按顺序从 `rng` 中抽取，
    /// 因此相同种子得到相同的尺寸与文件名集合，与线程调度无关。
    pub fn run(
        &self,
        job: &DownloadJob,
        source: &dyn ImageSource,
        rng: &mut RandomSource,
    ) -> Result<BatchResult> {
        let total = job.limit;
        if total == 0 {
            return Ok(BatchResult::default());
        }

        let seeds: Vec<u64> = (0..total).map(|_| rng.next_seed()).collect();

        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Downloading")
        } else {
            ProgressBar::hidden()
        };

        let pending = AtomicUsize::new(total);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_count(total))
            .build()?;

        let results: Vec<ProcessResult> = pool.install(|| {
            seeds
                .par_iter()
                .map(|&seed| {
                    let mut item_rng = RandomSource::from_seed(seed);
                    let result = download_one(job, source, &mut item_rng);

                    pb.suspend(|| report(&result));
                    pending.fetch_sub(1, Ordering::AcqRel);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let remaining = pending.load(Ordering::Acquire);
        if remaining != 0 {
            return Err(ImgseedError::BatchIncomplete { remaining, total });
        }

        // 汇总结果
        let mut batch_result = BatchResult {
            completed: total - remaining,
            ..BatchResult::default()
        };
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

/// 输出单条结果
fn report(result: &ProcessResult) {
    match result {
        ProcessResult::Success { url, path, .. } => {
            output::print_success(&format!("Download successful: {} -> {}", url, path.display()));
        }
        ProcessResult::Failed { error, .. } => {
            output::print_error(&format!("Download failed: {}", error.detail()));
        }
    }
}
