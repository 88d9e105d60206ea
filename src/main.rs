//! Sorting Benchmark
//!
//! Times insertion sort, quicksort, heapsort, counting sort and introsort over
//! random integer inputs of increasing size and prints a table of mean times.
//!
//! Usage:
//!   sorting-bench --sizes 100,1000,10000 --reps 5 --save-raw --markdown report.md

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sorting_bench::config::{DEFAULT_REPETITIONS, DEFAULT_VALUE_RANGE};
use sorting_bench::{benchmark, report, Algorithm, BenchmarkConfig};

#[derive(Debug, Parser)]
#[command(name = "sorting-bench", version, about = "Benchmark classical sorting algorithms")]
struct Cli {
    /// Input sizes to benchmark, comma separated (defaults to 100..10000)
    #[arg(short, long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Timed trials per algorithm and size
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    reps: usize,

    /// Smallest random value (inclusive)
    #[arg(long, default_value_t = DEFAULT_VALUE_RANGE.0)]
    min: u32,

    /// Largest random value (inclusive)
    #[arg(long, default_value_t = DEFAULT_VALUE_RANGE.1)]
    max: u32,

    /// Only run these algorithms, comma separated
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Write raw per-trial timings as JSON
    #[arg(long)]
    save_raw: bool,

    /// Directory for raw timing files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Measure independent cells on all cores
    #[arg(long)]
    parallel: bool,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the table as Markdown to this path
    #[arg(long)]
    markdown: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::default()
            .with_repetitions(self.reps)
            .with_value_range(self.min, self.max)
            .with_parallel(self.parallel);
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
        if self.save_raw {
            config = config.with_raw_output(&self.output_dir);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    fn algorithms(&self) -> anyhow::Result<Vec<Algorithm>> {
        if self.only.is_empty() {
            return Ok(Algorithm::all());
        }
        self.only
            .iter()
            .map(|name| match Algorithm::by_name(name) {
                Some(algorithm) => Ok(algorithm),
                None => bail!("unknown algorithm '{}'", name),
            })
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sorting_bench=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let algorithms = cli.algorithms()?;

    let run = benchmark::run_configured(&algorithms, &config).context("benchmark aborted")?;

    println!("Mean time per sort (ms), {} repetitions", config.repetitions);
    println!();
    print!("{}", report::to_text_table(&run.table));

    if let Some(path) = &cli.markdown {
        report::save_markdown(&run.table, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "markdown report written");
    }

    Ok(())
}
