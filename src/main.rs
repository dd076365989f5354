//! # imgseed - 随机图片批量下载工具
//!
//! 从模板 URL（如 `https://source.unsplash.com/random/`）并发下载指定数量的图片，
//! 尺寸随机拼接在 URL 末尾，以 25 位随机字母命名保存到目标目录。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (并发批量执行)
//!   │     ├── download/  (单张下载、URL、文件名、随机源)
//!   │     └── models/    (任务配置)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod download;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
