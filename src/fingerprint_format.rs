use serde::{Deserialize, Serialize};

pub const MAGIC: &[u8; 8] = b"BUZIDX01";
pub const FORMAT_VERSION: u32 = 1;
/// zstd level used when writing an index.
pub const COMPRESSION_LEVEL: i32 = 3;

/// Window fingerprints of a set of files, all taken with the same window and stride.
#[derive(Debug, Serialize, Deserialize)]
pub struct FingerprintIndex {
    pub version: u32,
    pub window_size: u64,
    pub stride: u64,
    pub files: Vec<FileFingerprints>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFingerprints {
    pub path: String,
    pub size: u64,
    pub blake3_hash: [u8; 32],
    /// Hashes of the windows at offsets 0, stride, 2 * stride, ...
    pub hashes: Vec<u64>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub files_indexed: usize,
    pub files_skipped: usize,
    pub fingerprints: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CompareSummary {
    /// Windows of the target file, taken at stride 1.
    pub windows: usize,
    /// Target windows whose hash appears anywhere in the index.
    pub matched_windows: usize,
    /// Indexed files sharing at least one window with the target, most matches first.
    pub per_file: Vec<(String, usize)>,
    /// Indexed files byte-identical to the target.
    pub identical: Vec<String>,
}
