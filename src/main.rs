use buzroll::{compare, index, scan, stats};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "buzroll", about = "Buzhash rolling hash tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash the whole content of every file under a path
    Hash {
        /// File or directory to hash
        #[arg(long)]
        path: PathBuf,
    },
    /// Print the hash of every window of a file
    Roll {
        /// File to roll over
        #[arg(long)]
        file: PathBuf,
        /// Window size in bytes
        #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
        window: u64,
        /// Bytes to advance between windows
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        stride: u64,
        /// Offset of the first window
        #[arg(long, default_value_t = 0)]
        start: u64,
    },
    /// Fingerprint files into an index
    Index {
        /// File or directory to fingerprint
        #[arg(long)]
        path: PathBuf,
        /// Window size in bytes
        #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
        window: u64,
        /// Bytes to advance between fingerprints
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        stride: u64,
        /// Output path for the index file
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Find windows of a file that appear in an index
    Compare {
        /// Index file written by `index`
        #[arg(long)]
        index: PathBuf,
        /// File to look up
        #[arg(long)]
        file: PathBuf,
    },
    /// Compare the distribution of buzhash window hashes against BLAKE3
    Stats {
        /// File to analyze
        #[arg(long)]
        file: PathBuf,
        /// Window size in bytes
        #[arg(long, short, default_value_t = 6, value_parser = clap::value_parser!(u64).range(1..))]
        window: u64,
        /// Number of bins for the uniformity check
        #[arg(long, default_value_t = 65536, value_parser = clap::value_parser!(u64).range(1..))]
        bins: u64,
    },
}

fn print_report(report: &stats::DistributionReport) {
    println!("\n===== {} =====", report.name);
    println!("  Windows: {}", report.windows);
    println!(
        "  Uniformity (mod {}): mean {:.2}, stddev {:.2}",
        report.bins, report.bin_mean, report.bin_std_dev
    );
    println!(
        "  Bit entropy: min {:.4}, mean {:.4}",
        report.min_entropy(),
        report.mean_entropy()
    );
    println!("  Trailing zeros:");
    for (zeros, count) in report.trailing_zeros.iter().enumerate() {
        println!("    {:2} zeros: {:8}", zeros, count);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("buzroll=info"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { path } => {
            let hashes = tokio::task::spawn_blocking(move || scan::hash_files(&path)).await??;
            for (path, hash) in hashes {
                println!("{:016x}  {}", hash, path);
            }
        }
        Commands::Roll {
            file,
            window,
            stride,
            start,
        } => {
            let windows = scan::roll_file(&file, window as usize, stride as usize, start as usize)?;
            for (offset, hash) in windows {
                println!("{}\t{:016x}", offset, hash);
            }
        }
        Commands::Index {
            path,
            window,
            stride,
            output,
        } => {
            println!("Creating index...");
            println!("  Path: {}", path.display());
            println!("  Window: {}  Stride: {}", window, stride);
            println!("  Output: {}", output.display());

            let start = Instant::now();
            let summary =
                index::create_index(&path, window as usize, stride as usize, &output).await?;
            let elapsed = start.elapsed();

            println!("\nIndex created successfully!");
            println!("  Files indexed: {}", summary.files_indexed);
            println!("  Files skipped: {}", summary.files_skipped);
            println!("  Fingerprints: {}", summary.fingerprints);
            println!("  Time elapsed: {:.3}s", elapsed.as_secs_f64());
        }
        Commands::Compare { index, file } => {
            let start = Instant::now();
            let summary = compare::compare_file(&index, &file).await?;
            let elapsed = start.elapsed();

            println!("Windows: {}", summary.windows);
            println!("Matched windows: {}", summary.matched_windows);
            for path in &summary.identical {
                println!("  identical: {}", path);
            }
            for (path, hits) in &summary.per_file {
                println!("  {:8}  {}", hits, path);
            }
            println!("Time elapsed: {:.3}s", elapsed.as_secs_f64());
        }
        Commands::Stats { file, window, bins } => {
            let summary = stats::analyze_file(&file, window as usize, bins as usize).await?;
            print_report(&summary.buzhash);
            print_report(&summary.baseline);
        }
    }

    Ok(())
}
