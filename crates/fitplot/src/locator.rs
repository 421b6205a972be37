//! File naming for per-seed fitness logs and charts.
//!
//! A genetic-algorithm run with seed `N` logs to
//! `<data_dir>/Seed<N>_PopulationFitness.csv`; the chart for that run is
//! written next to it as `Seed<N>_PopulationFitness.png`.

use std::path::{Path, PathBuf};

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Seed used when none is configured.
pub const DEFAULT_SEED: i64 = 27;

const FILE_SUFFIX: &str = "_PopulationFitness";

/// File stem shared by the log and the chart of one run.
pub fn file_stem(seed: i64) -> String {
    format!("Seed{seed}{FILE_SUFFIX}")
}

/// Resolves log and chart paths under a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    data_dir: PathBuf,
}

impl Locator {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the fitness log for `seed`.
    pub fn input_path(&self, seed: i64) -> PathBuf {
        self.data_dir.join(format!("{}.csv", file_stem(seed)))
    }

    /// Path of the rendered chart for `seed`.
    pub fn output_path(&self, seed: i64) -> PathBuf {
        self.data_dir.join(format!("{}.png", file_stem(seed)))
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
