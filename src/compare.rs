use anyhow::{bail, Context, Result};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

use crate::fingerprint_format::{CompareSummary, FingerprintIndex, FORMAT_VERSION, MAGIC};
use crate::rolling_hash::RollingHasher;
use crate::util;

/// Read and validate a fingerprint index written by [`crate::index::write_index`].
pub fn read_index(index_path: &Path) -> Result<FingerprintIndex> {
    // mmap the index, check magic, then stream-decompress into bincode
    let raw = util::mmap_file(index_path)?;

    if raw.len() < MAGIC.len() || &raw[..MAGIC.len()] != MAGIC {
        bail!("Invalid index file: missing magic header");
    }

    let decoder =
        zstd::Decoder::new(&raw[MAGIC.len()..]).context("Failed to create zstd decoder")?;
    let index: FingerprintIndex =
        bincode::deserialize_from(decoder).context("Failed to deserialize fingerprint index")?;

    if index.version != FORMAT_VERSION {
        bail!(
            "Unsupported index version: {} (expected {})",
            index.version,
            FORMAT_VERSION
        );
    }

    Ok(index)
}

/// Roll over `data` at stride 1 and match every window against `index`.
pub fn compare_bytes(index: &FingerprintIndex, data: &[u8]) -> Result<CompareSummary> {
    let window_size = usize::try_from(index.window_size).context("Index window size too large")?;

    let identical: Vec<String> = {
        let digest = util::blake3_bytes(data);
        index
            .files
            .iter()
            .filter(|f| f.size == data.len() as u64 && f.blake3_hash == digest)
            .map(|f| f.path.clone())
            .collect()
    };

    if data.len() < window_size {
        debug!("Target is shorter than the {} byte window", window_size);
        return Ok(CompareSummary {
            identical,
            ..CompareSummary::default()
        });
    }

    let hasher = RollingHasher::new(data, window_size)?;
    let windows = hasher.bulk_roll(1)?;

    let all: HashSet<u64> = index
        .files
        .iter()
        .flat_map(|f| f.hashes.iter().copied())
        .collect();
    let matched_windows = windows.iter().filter(|h| all.contains(h)).count();

    let mut per_file: Vec<(String, usize)> = index
        .files
        .par_iter()
        .map(|file| {
            let own: HashSet<u64> = file.hashes.iter().copied().collect();
            let hits = windows.iter().filter(|h| own.contains(h)).count();
            (file.path.clone(), hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .collect();
    per_file.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(CompareSummary {
        windows: windows.len(),
        matched_windows,
        per_file,
        identical,
    })
}

/// Compare `target` against the index stored at `index_path`.
pub async fn compare_file(index_path: &Path, target: &Path) -> Result<CompareSummary> {
    let index_path = index_path.to_path_buf();
    let target = target.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<CompareSummary> {
        let index = read_index(&index_path)?;
        info!(
            "Loaded index of {} files (window {}, stride {})",
            index.files.len(),
            index.window_size,
            index.stride
        );
        let data = util::mmap_file(&target)?;
        compare_bytes(&index, &data)
    })
    .await?
}
