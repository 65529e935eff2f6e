use anyhow::{bail, Result};
use log::info;
use rayon::prelude::*;
use std::path::Path;

use crate::rolling_hash::RollingHasher;
use crate::util;

/// Distribution quality of a set of 64-bit hashes.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionReport {
    pub name: &'static str,
    pub windows: usize,
    pub bins: usize,
    /// Mean bin count of `h % bins`.
    pub bin_mean: f64,
    /// Standard deviation of the bin counts.
    pub bin_std_dev: f64,
    /// Shannon entropy of each bit, 0.0 (constant) to 1.0 (fair coin).
    pub bit_entropy: Vec<f64>,
    /// `trailing_zeros[z]` counts hashes with exactly `z` trailing zero bits.
    pub trailing_zeros: Vec<usize>,
}

impl DistributionReport {
    pub fn from_hashes(name: &'static str, hashes: &[u64], bins: usize) -> Self {
        let windows = hashes.len();
        if windows == 0 || bins == 0 {
            return Self {
                name,
                windows,
                bins,
                bin_mean: 0.0,
                bin_std_dev: 0.0,
                bit_entropy: vec![0.0; 64],
                trailing_zeros: Vec::new(),
            };
        }

        let (bin_mean, bin_std_dev) = uniformity(hashes, bins);
        Self {
            name,
            windows,
            bins,
            bin_mean,
            bin_std_dev,
            bit_entropy: bit_entropy(hashes),
            trailing_zeros: trailing_zero_histogram(hashes),
        }
    }

    pub fn min_entropy(&self) -> f64 {
        self.bit_entropy.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn mean_entropy(&self) -> f64 {
        self.bit_entropy.iter().sum::<f64>() / self.bit_entropy.len() as f64
    }
}

fn uniformity(hashes: &[u64], bins: usize) -> (f64, f64) {
    let mut buckets = vec![0usize; bins];
    for &h in hashes {
        buckets[(h % bins as u64) as usize] += 1;
    }

    let mean = hashes.len() as f64 / bins as f64;
    let variance = buckets
        .iter()
        .map(|&count| {
            let diff = count as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / bins as f64;
    (mean, variance.sqrt())
}

fn bit_entropy(hashes: &[u64]) -> Vec<f64> {
    let mut ones = [0usize; 64];
    for &h in hashes {
        for (bit, count) in ones.iter_mut().enumerate() {
            *count += ((h >> bit) & 1) as usize;
        }
    }

    let total = hashes.len() as f64;
    ones.iter()
        .map(|&count| {
            let p1 = count as f64 / total;
            let p0 = 1.0 - p1;
            [p0, p1]
                .iter()
                .filter(|&&p| p > 0.0)
                .map(|&p| -p * p.log2())
                .sum::<f64>()
        })
        .collect()
}

fn trailing_zero_histogram(hashes: &[u64]) -> Vec<usize> {
    let max = hashes.iter().map(|h| h.trailing_zeros()).max().unwrap_or(0) as usize;
    let mut bins = vec![0usize; max + 1];
    for h in hashes {
        bins[h.trailing_zeros() as usize] += 1;
    }
    bins
}

#[derive(Debug)]
pub struct StatsSummary {
    pub buzhash: DistributionReport,
    pub baseline: DistributionReport,
}

/// Hash every window of `path` with buzhash and with a BLAKE3 baseline, concurrently,
/// and report the distribution quality of both.
pub async fn analyze_file(path: &Path, window_size: usize, bins: usize) -> Result<StatsSummary> {
    if window_size == 0 {
        bail!("Window size must be at least 1");
    }
    let buz_path = path.to_path_buf();
    let base_path = path.to_path_buf();

    let (buzhash, baseline) = tokio::try_join!(
        tokio::task::spawn_blocking(move || -> Result<DistributionReport> {
            let data = util::mmap_file(&buz_path)?;
            let hasher = RollingHasher::new(&data, window_size)?;
            let hashes = hasher.bulk_roll(1)?;
            info!("Hashed {} windows with buzhash", hashes.len());
            Ok(DistributionReport::from_hashes("buzhash", &hashes, bins))
        }),
        tokio::task::spawn_blocking(move || -> Result<DistributionReport> {
            let data = util::mmap_file(&base_path)?;
            let hashes: Vec<u64> = data.par_windows(window_size).map(util::blake3_u64).collect();
            info!("Hashed {} windows with blake3", hashes.len());
            Ok(DistributionReport::from_hashes("blake3", &hashes, bins))
        }),
    )?;

    Ok(StatsSummary {
        buzhash: buzhash?,
        baseline: baseline?,
    })
}
