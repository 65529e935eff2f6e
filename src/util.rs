use anyhow::{Context, Result};
use memmap2::Mmap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the walked root, with forward slashes. For a root that
    /// is itself a file this is just the file name.
    pub relative_path: String,
    pub full_path: PathBuf,
    pub size: u64,
}

/// Collect every regular file under `root`, sorted by relative path.
/// A `root` that is a file yields exactly that file.
pub fn collect_files(root: &Path) -> Result<Vec<FileEntry>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize path: {}", root.display()))?;

    if root.is_file() {
        let meta = std::fs::metadata(&root)
            .with_context(|| format!("Failed to read metadata: {}", root.display()))?;
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Non-UTF8 path: {}", root.display()))?
            .to_string();
        return Ok(vec![FileEntry {
            relative_path: name,
            full_path: root,
            size: meta.len(),
        }]);
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read directory entry in {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let full_path = entry.path().to_path_buf();
        let relative = full_path
            .strip_prefix(&root)
            .with_context(|| "Failed to compute relative path")?;

        let relative_str = relative
            .to_str()
            .with_context(|| format!("Non-UTF8 path: {}", relative.display()))?
            .replace('\\', "/");

        let meta = entry
            .metadata()
            .with_context(|| format!("Failed to read metadata: {}", full_path.display()))?;

        entries.push(FileEntry {
            relative_path: relative_str,
            full_path,
            size: meta.len(),
        });
    }

    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(entries)
}

/// Memory-map a file for read-only access.
///
/// # Safety
/// The mapping is read-only. Callers must not concurrently truncate or replace
/// the underlying file while the `Mmap` is live.
pub fn mmap_file(path: &Path) -> Result<Mmap> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    // SAFETY: We only read from this mapping; no concurrent modification of these files.
    unsafe {
        Mmap::map(&file)
            .with_context(|| format!("Failed to memory-map file: {}", path.display()))
    }
}

/// Compute the BLAKE3 hash of a byte slice.
pub fn blake3_bytes(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// 64-bit baseline hash of a window: the first 8 bytes of its BLAKE3 digest.
pub fn blake3_u64(data: &[u8]) -> u64 {
    let digest = blake3::hash(data);
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::write(dir.path().join("a.txt"), b"alpha").unwrap();
        fs::write(dir.path().join("b/nested/c.bin"), vec![7u8; 32]).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let files = collect_files(dir.path()).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "b/nested/c.bin"]);
        assert_eq!(files[1].size, 32);
    }

    #[test]
    fn test_collect_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("only.txt");
        fs::write(&path, b"hello").unwrap();

        let files = collect_files(&path).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "only.txt");
        assert_eq!(files[0].size, 5);
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_files(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_mmap_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"mapped bytes").unwrap();
        assert_eq!(&mmap_file(&path).unwrap()[..], b"mapped bytes");
    }

    #[test]
    fn test_blake3_u64_is_digest_prefix() {
        let full = blake3_bytes(b"window");
        let word = blake3_u64(b"window");
        assert_eq!(word.to_le_bytes(), full[..8]);
    }
}
