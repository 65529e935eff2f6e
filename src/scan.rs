use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use std::path::Path;

use crate::rolling_hash::{self, RollingHasher};
use crate::util;

/// One-shot buzhash of every file under `path`, as `(relative path, hash)` sorted by path.
pub fn hash_files(path: &Path) -> Result<Vec<(String, u64)>> {
    let entries = util::collect_files(path)?;
    info!("Hashing {} files", entries.len());

    entries
        .par_iter()
        .map(|entry| -> Result<(String, u64)> {
            let data = util::mmap_file(&entry.full_path)?;
            Ok((entry.relative_path.clone(), rolling_hash::hash(&data)))
        })
        .collect()
}

/// Hashes of the windows of `data` starting at `start`, `start + stride`, ...
/// paired with their offsets.
pub fn roll_windows(
    data: &[u8],
    window_size: usize,
    stride: usize,
    start: usize,
) -> Result<Vec<(usize, u64)>> {
    let mut hasher = RollingHasher::new(data, window_size)?;
    hasher
        .roll(start)
        .with_context(|| format!("Cannot start at offset {}", start))?;
    let hashes = hasher.bulk_roll(stride)?;

    Ok(hashes
        .into_iter()
        .enumerate()
        .map(|(i, h)| (start + i * stride, h))
        .collect())
}

/// [`roll_windows`] over a memory-mapped file.
pub fn roll_file(path: &Path, window_size: usize, stride: usize, start: usize) -> Result<Vec<(usize, u64)>> {
    let data = util::mmap_file(path)?;
    roll_windows(&data, window_size, stride, start)
        .with_context(|| format!("Failed to roll over {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::rolling_hash::hash;
    use std::fs;

    #[test]
    fn test_hash_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("z.txt"), b"zulu").unwrap();
        fs::write(dir.path().join("sub/a.txt"), b"alpha").unwrap();
        fs::write(dir.path().join("empty.txt"), b"").unwrap();

        let hashes = hash_files(dir.path()).unwrap();
        assert_eq!(
            hashes,
            vec![
                ("empty.txt".to_string(), 0),
                ("sub/a.txt".to_string(), hash(b"alpha")),
                ("z.txt".to_string(), hash(b"zulu")),
            ]
        );
    }

    #[test]
    fn test_roll_windows_offsets() {
        let data = b"abcdefghijk";
        let windows = roll_windows(data, 3, 3, 1).unwrap();
        assert_eq!(
            windows,
            vec![
                (1, hash(b"bcd")),
                (4, hash(b"efg")),
                (7, hash(b"hij")),
            ]
        );
    }

    #[test]
    fn test_roll_windows_bad_start() {
        let err = roll_windows(b"abcdefghijk", 4, 1, 8).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::IllegalRoll { step: 8, remaining: 7 })
        );
    }

    #[test]
    fn test_roll_windows_zero_stride() {
        let err = roll_windows(b"abcdefghijk", 4, 0, 0).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::IllegalStride));
    }

    #[test]
    fn test_roll_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, b"hello world").unwrap();

        let windows = roll_file(&path, 5, 1, 0).unwrap();
        assert_eq!(windows.len(), 7);
        assert_eq!(windows[6], (6, hash(b"world")));
    }
}
