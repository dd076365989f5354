//! # 随机源
//!
//! 显式注入的随机数生成器，替代隐式全局状态。
//!
//! 批量执行器持有一个主生成器，按条目顺序派生子种子，
//! 每个下载线程拥有独立的 `RandomSource`，相同种子可完整复现一次批量下载。
//!
//! ## 依赖关系
//! - 被 `download/url.rs`, `download/naming.rs`, `batch/runner.rs` 使用
//! - 使用 `rand` crate

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

/// 可注入的随机源
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// 使用固定种子创建
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 从 `range` 中均匀抽取（上界不含）
    pub fn below(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    /// 在 `[0, len)` 中均匀抽取下标
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// 派生子种子
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}

/// 基于系统时钟的种子
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| fold_nanos(d.as_nanos()))
        .unwrap_or_default()
}

/// 将 128 位纳秒数折叠为 64 位（高低两半异或），不丢弃高位
fn fold_nanos(nanos: u128) -> u64 {
    (nanos as u64) ^ ((nanos >> 64) as u64)
}
