//! Raw Timing Persistence
//!
//! Stores the benchmark samples and every per-trial time so a run can be
//! re-analysed later. On disk the record is JSON shaped as:
//!
//! ```text
//! {
//!   "input": [[3, 1, 2], ...],
//!   "times": {
//!     "heapsort": { "n": { "100": [0.000012, ...], ... } },
//!     ...
//!   }
//! }
//! ```
//!
//! Files are named `timings_<YYYYMMDD_HHMMSS>.json` after local time.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::benchmark::{mean_millis, ResultRow, ResultTable};
use crate::error::BenchmarkError;

/// Per-trial seconds of one algorithm, keyed by input size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmTimings {
    pub n: BTreeMap<usize, Vec<f64>>,
}

/// Samples plus per-trial timings of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimings {
    /// One sample per input size, in configured order.
    pub input: Vec<Vec<u32>>,
    pub times: BTreeMap<String, AlgorithmTimings>,
}

impl RawTimings {
    pub fn new(input: Vec<Vec<u32>>) -> Self {
        RawTimings {
            input,
            times: BTreeMap::new(),
        }
    }

    /// Store the trial times of `algorithm` at `size`, replacing earlier ones.
    pub fn record(&mut self, algorithm: &str, size: usize, seconds: Vec<f64>) {
        self.times
            .entry(algorithm.to_string())
            .or_default()
            .n
            .insert(size, seconds);
    }

    /// Rebuild a table of means. Rows come out in name order; sizes an
    /// algorithm was not timed at show up as NaN.
    pub fn summarize(&self) -> ResultTable {
        let sizes: Vec<usize> = self
            .times
            .values()
            .flat_map(|t| t.n.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let rows = self
            .times
            .iter()
            .map(|(name, timings)| ResultRow {
                algorithm: name.clone(),
                mean_ms: sizes
                    .iter()
                    .map(|size| timings.n.get(size).map_or(f64::NAN, |s| mean_millis(s)))
                    .collect(),
                verified: None,
            })
            .collect();

        ResultTable::new(sizes, rows)
    }

    pub fn to_json(&self) -> Result<String, BenchmarkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, BenchmarkError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a file written by [`persist`].
    pub fn load(path: &Path) -> Result<Self, BenchmarkError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// File name for a run started at `timestamp`.
pub fn file_name(timestamp: &DateTime<Local>) -> String {
    format!("timings_{}.json", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write `raw` into `dir` under a timestamped name and return the path.
pub fn persist(raw: &RawTimings, dir: &Path) -> Result<PathBuf, BenchmarkError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(&Local::now()));

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer(&mut writer, raw)?;
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> RawTimings {
        let mut raw = RawTimings::new(vec![vec![3, 1, 2], vec![9, 8, 7, 6]]);
        raw.record("quicksort", 3, vec![0.001, 0.003]);
        raw.record("quicksort", 4, vec![0.004]);
        raw.record("heapsort", 3, vec![0.002]);
        raw
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["input"][1][0], 9);
        assert_eq!(json["times"]["quicksort"]["n"]["3"][1], 0.003);
        assert_eq!(json["times"]["heapsort"]["n"]["3"][0], 0.002);
    }

    #[test]
    fn test_from_json() {
        let content = r#"{"input":[[1]],"times":{"introsort":{"n":{"1":[0.5]}}}}"#;
        let raw = RawTimings::from_json(content).unwrap();
        assert_eq!(raw.input, vec![vec![1]]);
        assert_eq!(raw.times["introsort"].n[&1], vec![0.5]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            RawTimings::from_json("not json"),
            Err(BenchmarkError::Json(_))
        ));
    }

    #[test]
    fn test_record_replaces() {
        let mut raw = sample();
        raw.record("quicksort", 3, vec![1.0]);
        assert_eq!(raw.times["quicksort"].n[&3], vec![1.0]);
    }

    #[test]
    fn test_summarize() {
        let table = sample().summarize();
        assert_eq!(table.sizes(), &[3, 4]);
        assert_eq!(table.rows()[0].algorithm, "heapsort");

        let quick = table.row("quicksort").unwrap();
        assert_eq!(quick.mean_ms, vec![2.0, 4.0]);
        assert_eq!(quick.verified, None);

        let heap = table.row("heapsort").unwrap();
        assert_eq!(heap.mean_ms[0], 2.0);
        assert!(heap.mean_ms[1].is_nan());
    }

    #[test]
    fn test_file_name() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(file_name(&ts), "timings_20240309_140507.json");
    }

    #[test]
    fn test_persist_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs");
        let raw = sample();

        let path = persist(&raw, &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert_eq!(RawTimings::load(&path).unwrap(), raw);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RawTimings::load(&dir.path().join("missing.json")),
            Err(BenchmarkError::Io(_))
        ));
    }
}
