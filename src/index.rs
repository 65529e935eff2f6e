use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

use crate::fingerprint_format::{
    FileFingerprints, FingerprintIndex, IndexSummary, COMPRESSION_LEVEL, FORMAT_VERSION, MAGIC,
};
use crate::rolling_hash::RollingHasher;
use crate::util::{self, FileEntry};

/// Fingerprint one file. `None` when the file is shorter than the window.
fn fingerprint_file(
    entry: &FileEntry,
    window_size: usize,
    stride: usize,
) -> Result<Option<FileFingerprints>> {
    let data = util::mmap_file(&entry.full_path)?;
    if data.len() < window_size {
        warn!(
            "Skipping {}: {} bytes is shorter than the {} byte window",
            entry.relative_path,
            data.len(),
            window_size
        );
        return Ok(None);
    }

    let hasher = RollingHasher::new(&data, window_size)?;
    let hashes = hasher
        .bulk_roll(stride)
        .with_context(|| format!("Failed to roll over {}", entry.relative_path))?;
    debug!("{}: {} fingerprints", entry.relative_path, hashes.len());

    Ok(Some(FileFingerprints {
        path: entry.relative_path.clone(),
        size: data.len() as u64,
        blake3_hash: util::blake3_bytes(&data),
        hashes,
    }))
}

/// Build the fingerprint index for every file under `path`.
/// Walks on a blocking task and fingerprints files in parallel with Rayon.
pub async fn build_index(
    path: &Path,
    window_size: usize,
    stride: usize,
) -> Result<(FingerprintIndex, IndexSummary)> {
    let root = path.to_path_buf();
    let entries = tokio::task::spawn_blocking(move || util::collect_files(&root)).await??;
    let total = entries.len();
    info!("Fingerprinting {} files", total);

    let files = tokio::task::spawn_blocking(move || -> Result<Vec<FileFingerprints>> {
        Ok(entries
            .par_iter()
            .map(|entry| fingerprint_file(entry, window_size, stride))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect())
    })
    .await??;

    let summary = IndexSummary {
        files_indexed: files.len(),
        files_skipped: total - files.len(),
        fingerprints: files.iter().map(|f| f.hashes.len()).sum(),
    };
    let index = FingerprintIndex {
        version: FORMAT_VERSION,
        window_size: window_size as u64,
        stride: stride as u64,
        files,
    };
    Ok((index, summary))
}

/// Serialize, compress and write an index to `output`.
pub fn write_index(index: &FingerprintIndex, output: &Path) -> Result<()> {
    let encoded = bincode::serialize(index).context("Failed to serialize fingerprint index")?;

    let compressed = zstd::bulk::compress(&encoded, COMPRESSION_LEVEL)
        .context("Failed to compress fingerprint index")?;

    let mut file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    file.write_all(MAGIC)?;
    file.write_all(&compressed)?;
    file.flush()?;
    Ok(())
}

/// Fingerprint every file under `path` and write the index to `output`.
pub async fn create_index(
    path: &Path,
    window_size: usize,
    stride: usize,
    output: &Path,
) -> Result<IndexSummary> {
    let (index, summary) = build_index(path, window_size, stride).await?;
    write_index(&index, output)?;
    Ok(summary)
}
