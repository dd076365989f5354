//! # 单张图片下载
//!
//! 流程：构造 URL -> 请求 -> 准备目录 -> 生成文件名 -> 写入磁盘。
//! 任一步骤失败立即结束该条目并返回对应的失败分类，不影响其他条目。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `download/url.rs`, `download/naming.rs`, `download/source.rs`

use super::naming;
use super::random::RandomSource;
use super::source::ImageSource;
use super::url;
use crate::error::DownloadError;
use crate::models::DownloadJob;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// 单条下载结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 下载成功
    Success { url: String, path: PathBuf, bytes: u64 },
    /// 下载失败
    Failed { url: String, error: DownloadError },
}

/// 下载并保存一张图片
pub fn download_one(
    job: &DownloadJob,
    source: &dyn ImageSource,
    rng: &mut RandomSource,
) -> ProcessResult {
    let url = url::build_url(&job.url, url::pick_dimensions(job, rng));

    match save_image(&url, job, source, rng) {
        Ok((path, bytes)) => ProcessResult::Success { url, path, bytes },
        Err(error) => ProcessResult::Failed { url, error },
    }
}

fn save_image(
    url: &str,
    job: &DownloadJob,
    source: &dyn ImageSource,
    rng: &mut RandomSource,
) -> Result<(PathBuf, u64), DownloadError> {
    let mut body = source.open(url)?;

    ensure_dir(&job.dest)?;

    let path = naming::output_path(&job.dest, rng);
    let mut file = File::create(&path).map_err(|e| DownloadError::FileCreate {
        path: path.clone(),
        source: e,
    })?;

    match io::copy(&mut body, &mut file) {
        Ok(bytes) => Ok((path, bytes)),
        Err(e) => {
            drop(file);
            // 不保留半截文件
            let _ = fs::remove_file(&path);
            Err(DownloadError::Write { path, source: e })
        }
    }
}

/// 创建目标目录（仅一层），已存在的目录视为成功
pub fn ensure_dir(dest: &Path) -> Result<(), DownloadError> {
    match fs::create_dir(dest) {
        Ok(()) => Ok(()),
        // 同名普通文件也会报 AlreadyExists
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dest.is_dir() => Ok(()),
        Err(e) => Err(DownloadError::Directory {
            path: dest.to_path_buf(),
            source: e,
        }),
    }
}
