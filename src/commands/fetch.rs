//! # 下载命令实现
//!
//! 解析配置、批量下载并输出汇总。
//!
//! ## 功能
//! - 配置校验（尺寸范围）
//! - 有界并发下载
//! - 失败分类统计，存在失败时返回错误（进程退出码 1）
//!
//! ## 依赖关系
//! - 使用 `cli/fetch.rs` 定义的 FetchArgs
//! - 使用 `batch/` 模块进行批量下载
//! - 使用 `download/` 模块的 HttpSource 与 RandomSource

use crate::batch::{BatchResult, BatchRunner};
use crate::cli::fetch::FetchArgs;
use crate::download::random::clock_seed;
use crate::download::{HttpSource, RandomSource};
use crate::error::{FailureKind, ImgseedError, Result};
use crate::models::DownloadJob;
use crate::utils::output;

use std::time::Duration;

/// 最多列出的失败条目
const MAX_LISTED_FAILURES: usize = 10;

/// 执行批量下载
pub fn execute(args: FetchArgs) -> Result<()> {
    output::print_header("Random Image Download");

    let job = DownloadJob::from(&args);
    job.validate()?;

    if job.limit == 0 {
        output::print_warning("Nothing to download (limit = 0)");
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let runner = BatchRunner::new(args.jobs).show_progress(!args.no_progress);

    output::print_info(&format!(
        "Downloading {} images from '{}' into '{}'",
        job.limit,
        job.url,
        job.dest.display()
    ));
    if job.random {
        output::print_info("Size: random (0-999 x 0-999)");
    } else {
        output::print_info(&format!(
            "Size: width {}..{}, height {}..{}",
            job.min_width, job.max_width, job.min_height, job.max_height
        ));
    }
    output::print_info(&format!(
        "Workers: {}, seed: {}",
        runner.worker_count(job.limit),
        seed
    ));

    let source = HttpSource::new(args.timeout.map(Duration::from_secs))?;
    let mut rng = RandomSource::from_seed(seed);

    let result = runner.run(&job, &source, &mut rng)?;

    print_summary(&result);

    if result.failed > 0 {
        return Err(ImgseedError::BatchFailed {
            failed: result.failed,
            total: result.total(),
        });
    }

    Ok(())
}

/// 打印统计
fn print_summary(result: &BatchResult) {
    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} finished, {} success, {} failed ({})",
        result.completed,
        result.success,
        result.failed,
        output::format_bytes(result.bytes)
    ));

    if result.failures.is_empty() {
        return;
    }

    let breakdown = [
        FailureKind::Network,
        FailureKind::Directory,
        FailureKind::File,
        FailureKind::Write,
    ]
    .iter()
    .map(|&kind| (kind, result.count_of(kind)))
    .filter(|(_, count)| *count > 0)
    .map(|(kind, count)| format!("{} {}", count, kind))
    .collect::<Vec<_>>()
    .join(", ");
    output::print_warning(&format!("Failures by kind: {}", breakdown));

    for (url, err) in result.failures.iter().take(MAX_LISTED_FAILURES) {
        output::print_error(&format!("  {}: {}", url, err.detail()));
    }
    if result.failures.len() > MAX_LISTED_FAILURES {
        output::print_warning(&format!(
            "  ... and {} more",
            result.failures.len() - MAX_LISTED_FAILURES
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::Path;

    fn args(dest: &Path, extra: &[&str]) -> FetchArgs {
        let mut argv = vec![
            "imgseed",
            "--dest",
            dest.to_str().unwrap(),
            "--no-progress",
            "--seed",
            "1",
        ];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap().fetch
    }

    #[test]
    fn test_unreachable_source_fails_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out");
        // 端口 1 上没有服务，连接立即被拒绝
        let args = args(
            &dest,
            &["--url", "http://127.0.0.1:1/", "--limit", "2", "--timeout", "2"],
        );

        match execute(args) {
            Err(ImgseedError::BatchFailed { failed, total }) => {
                assert_eq!((failed, total), (2, 2));
            }
            other => panic!("unexpected: {:?}", other),
        }
        // 请求失败时不创建目录
        assert!(!dest.exists());
    }

    #[test]
    fn test_zero_limit_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out");

        assert!(execute(args(&dest, &["--limit", "0"])).is_ok());
        assert!(!dest.exists());
    }

    #[test]
    fn test_inverted_range_rejected_before_work() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out");
        let args = args(
            &dest,
            &[
                "--url",
                "http://127.0.0.1:1/",
                "--min-width",
                "500",
                "--max-width",
                "100",
            ],
        );

        match execute(args) {
            Err(ImgseedError::InvalidRange { axis, .. }) => assert_eq!(axis, "width"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(!dest.exists());
    }
}
