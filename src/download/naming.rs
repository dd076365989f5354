//! # 文件名生成
//!
//! 生成 25 位纯字母随机文件名，不做冲突检测。
//!
//! ## 依赖关系
//! - 被 `download/item.rs` 使用
//! - 使用 `download/random.rs`

use super::random::RandomSource;
use std::path::{Path, PathBuf};

/// 文件名字符表 (a-z, A-Z)
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 文件名长度（不含扩展名）
pub const FILE_NAME_LEN: usize = 25;

/// 输出文件扩展名
pub const EXTENSION: &str = "jpg";

/// 生成 `size` 位随机字母串
pub fn generate_file_name(rng: &mut RandomSource, size: usize) -> String {
    (0..size)
        .map(|_| ALPHABET[rng.index(ALPHABET.len())] as char)
        .collect()
}

/// 在目标目录下生成新的输出路径
pub fn output_path(dest: &Path, rng: &mut RandomSource) -> PathBuf {
    dest.join(format!(
        "{}.{}",
        generate_file_name(rng, FILE_NAME_LEN),
        EXTENSION
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_name_charset() {
        let mut rng = RandomSource::from_seed(11);
        for _ in 0..200 {
            let name = generate_file_name(&mut rng, FILE_NAME_LEN);
            assert_eq!(name.len(), FILE_NAME_LEN);
            assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_file_names_distinct() {
        let mut rng = RandomSource::from_seed(12);
        let names: HashSet<String> = (0..1000)
            .map(|_| generate_file_name(&mut rng, FILE_NAME_LEN))
            .collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn test_output_path() {
        let mut rng = RandomSource::from_seed(13);
        let path = output_path(Path::new("img"), &mut rng);
        assert_eq!(path.parent(), Some(Path::new("img")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
        assert_eq!(path.file_stem().map(|s| s.len()), Some(FILE_NAME_LEN));
    }
}
