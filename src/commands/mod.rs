//! # 命令执行模块
//!
//! 实现下载命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `download/`, `models/`, `utils/`
//! - 子模块: fetch

pub mod fetch;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    fetch::execute(cli.fetch)
}
