//! # Fitplot
//!
//! Population fitness charts for genetic-algorithm runs.
//!
//! A GA run with seed `N` logs one row per generation to
//! `data/SeedN_PopulationFitness.csv`:
//!
//! ```text
//! Generation,Max Fitness,Avg Fitness,Min Fitness
//! 0,10.0,6.0,2.0,
//! 1,12.0,7.5,3.0,
//! ```
//!
//! Fitplot reads that log and draws max, average and minimum fitness
//! against the generation as three lines, writing the chart next to the
//! log as `SeedN_PopulationFitness.png`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fitplot::prelude::*;
//!
//! let options = PlotOptions {
//!     seed: 27,
//!     viewer: None,
//!     ..PlotOptions::default()
//! };
//! let report = plot_fitness(&options)?;
//! println!("{} generations -> {}", report.generations, report.output.display());
//! # Ok::<(), FitplotError>(())
//! ```
//!
//! ## Modules
//!
//! - [`locator`] - log and chart file names per seed
//! - [`reader`] - header-keyed CSV decoding into a [`record::FitnessSeries`]
//! - [`writer`] - the GA-side log format
//! - [`chart`] - chart description and plotters drawing
//! - [`sink`] - PNG output and the external viewer
//! - [`pipeline`] - the whole run, start to finish

pub mod chart;
pub mod error;
pub mod locator;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod sink;
pub mod writer;

/// Common imports.
pub mod prelude {
    pub use crate::chart::{FitnessChart, Trace};
    pub use crate::error::{ErrorKind, FitplotError, FitplotResult};
    pub use crate::locator::{file_stem, Locator, DEFAULT_DATA_DIR, DEFAULT_SEED};
    pub use crate::pipeline::{plot_fitness, PlotOptions, PlotReport, DEFAULT_IMAGE_SIZE};
    pub use crate::reader::{read_fitness_log, read_fitness_records};
    pub use crate::record::{FitnessRecord, FitnessSeries};
    pub use crate::sink::{display_available, save_png, show_best_effort, DisplayOutcome, Viewer};
    pub use crate::writer::{write_fitness_log, FitnessLogWriter};
}
