//! Benchmark Harness
//!
//! Times every algorithm on the same random sample for each input size and
//! reduces the per-trial wall-clock times to a table of means.
//!
//! Each (algorithm, size) cell sorts fresh copies of its size's sample, so
//! cells are independent and may run on the rayon pool when
//! [`BenchmarkConfig::parallel`] is set. Samples are always drawn up front,
//! in size order, from the caller's RNG.

use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::raw_data::{self, RawTimings};
use crate::{counting_sort, heapsort, insertion_sort, introsort, is_sorted, quicksort};

/// Takes ownership of a sample and returns it sorted.
pub type SortFn = fn(Vec<u32>) -> Vec<u32>;

/// A named sorting algorithm the harness can time.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub sort: SortFn,
}

impl Algorithm {
    pub fn new(name: &'static str, sort: SortFn) -> Self {
        Algorithm { name, sort }
    }

    /// The five sorts of this crate, in table order.
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::new("insertion_sort", |mut data| {
                insertion_sort::sort(&mut data);
                data
            }),
            Algorithm::new("quicksort", |mut data| {
                quicksort::sort(&mut data);
                data
            }),
            Algorithm::new("heapsort", |mut data| {
                heapsort::sort(&mut data);
                data
            }),
            Algorithm::new("counting_sort", |data| counting_sort::sort(&data, None)),
            Algorithm::new("introsort", |mut data| {
                introsort::sort(&mut data);
                data
            }),
        ]
    }

    /// Look up one of [`Algorithm::all`] by name.
    pub fn by_name(name: &str) -> Option<Algorithm> {
        Algorithm::all().into_iter().find(|a| a.name == name)
    }
}

/// Mean times of one algorithm, aligned with [`ResultTable::sizes`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub algorithm: String,
    /// Mean wall-clock milliseconds, rounded to 3 decimals. NaN marks a
    /// missing measurement.
    pub mean_ms: Vec<f64>,
    /// Whether every trial produced sorted output; `None` when unknown.
    pub verified: Option<bool>,
}

/// Header row of input sizes plus one row of means per algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    sizes: Vec<usize>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(sizes: Vec<usize>, rows: Vec<ResultRow>) -> Self {
        ResultTable { sizes, rows }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn row(&self, algorithm: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }
}

/// Everything one benchmark run produces.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub table: ResultTable,
    pub raw: RawTimings,
    /// Where the raw timings were written, if they were.
    pub raw_path: Option<PathBuf>,
}

/// Per-trial timings of one (algorithm, size) cell.
struct CellTiming {
    seconds: Vec<f64>,
    verified: bool,
}

/// Arithmetic mean of `seconds`, in milliseconds rounded to 3 decimals.
pub fn mean_millis(seconds: &[f64]) -> f64 {
    if seconds.is_empty() {
        return f64::NAN;
    }
    let mean = seconds.iter().sum::<f64>() / seconds.len() as f64;
    (mean * 1_000_000.0).round() / 1000.0
}

/// Run the benchmark with an RNG chosen from `config.seed`.
pub fn run_configured(
    algorithms: &[Algorithm],
    config: &BenchmarkConfig,
) -> Result<BenchmarkRun, BenchmarkError> {
    match config.seed {
        Some(seed) => run(algorithms, config, &mut StdRng::seed_from_u64(seed)),
        None => run(algorithms, config, &mut rand::thread_rng()),
    }
}

/// Time `algorithms` over every configured size, drawing samples from `rng`.
///
/// Invalid configurations abort before any sample is generated. Failing to
/// persist raw timings only logs a warning.
pub fn run<R: Rng + ?Sized>(
    algorithms: &[Algorithm],
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<BenchmarkRun, BenchmarkError> {
    if let Err(e) = config.validate() {
        error!(error = %e, "invalid benchmark configuration, aborting run");
        return Err(e);
    }

    info!(
        algorithms = algorithms.len(),
        sizes = ?config.sizes,
        repetitions = config.repetitions,
        parallel = config.parallel,
        "starting benchmark"
    );

    let (min, max) = config.value_range;
    let samples: Vec<Vec<u32>> = config
        .sizes
        .iter()
        .map(|&n| (0..n).map(|_| rng.gen_range(min..=max)).collect())
        .collect();

    let size_count = config.sizes.len();
    let cells: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..size_count).map(move |s| (a, s)))
        .collect();

    let measure = |&(a, s): &(usize, usize)| {
        measure_cell(&algorithms[a], &samples[s], config.repetitions)
    };
    let timings: Vec<CellTiming> = if config.parallel {
        cells.par_iter().map(measure).collect()
    } else {
        cells.iter().map(measure).collect()
    };

    let mut raw = RawTimings::new(samples);
    let mut rows = Vec::with_capacity(algorithms.len());

    for (algorithm, cells) in algorithms.iter().zip(timings.chunks(size_count)) {
        let mean_ms = cells.iter().map(|c| mean_millis(&c.seconds)).collect();
        let verified = cells.iter().all(|c| c.verified);

        for (&size, cell) in config.sizes.iter().zip(cells) {
            raw.record(algorithm.name, size, cell.seconds.clone());
        }

        rows.push(ResultRow {
            algorithm: algorithm.name.to_string(),
            mean_ms,
            verified: Some(verified),
        });
    }

    let table = ResultTable::new(config.sizes.clone(), rows);

    let raw_path = if config.persist_raw {
        match raw_data::persist(&raw, &config.output_dir) {
            Ok(path) => {
                info!(path = %path.display(), "raw timings written");
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "could not persist raw timings, keeping results in memory");
                None
            }
        }
    } else {
        None
    };

    info!("benchmark finished");
    Ok(BenchmarkRun {
        table,
        raw,
        raw_path,
    })
}

/// Time `repetitions` sorts of fresh copies of `sample`.
fn measure_cell(algorithm: &Algorithm, sample: &[u32], repetitions: usize) -> CellTiming {
    let mut seconds = Vec::with_capacity(repetitions);
    let mut verified = true;

    for _ in 0..repetitions {
        let input = sample.to_vec();
        let start = Instant::now();
        let sorted = (algorithm.sort)(input);
        seconds.push(start.elapsed().as_secs_f64());

        verified &= sorted.len() == sample.len() && is_sorted(&sorted);
    }

    if !verified {
        warn!(
            algorithm = algorithm.name,
            size = sample.len(),
            "sorted output failed verification"
        );
    }
    debug!(
        algorithm = algorithm.name,
        size = sample.len(),
        mean_ms = mean_millis(&seconds),
        "cell measured"
    );

    CellTiming { seconds, verified }
}
