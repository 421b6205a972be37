//! One plotting run: locate the log, read it, render the chart, write
//! the image, then optionally show it.

use std::path::PathBuf;

use tracing::debug;

use crate::chart::FitnessChart;
use crate::error::FitplotResult;
use crate::locator::{Locator, DEFAULT_SEED};
use crate::reader::read_fitness_log;
use crate::sink::{save_png, show_best_effort, DisplayOutcome, Viewer};

pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (1024, 768);

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub seed: i64,
    pub locator: Locator,
    pub image_size: (u32, u32),
    pub caption: Option<String>,
    /// Viewer to show the written image with; `None` skips display.
    pub viewer: Option<Viewer>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            locator: Locator::default(),
            image_size: DEFAULT_IMAGE_SIZE,
            caption: None,
            viewer: Some(Viewer::platform_default()),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct PlotReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub generations: usize,
    pub display: DisplayOutcome,
}

/// Plot the fitness log for `options.seed`.
///
/// Any read or render failure aborts before the image is written. A
/// display failure does not: it is reported in [`PlotReport::display`].
pub fn plot_fitness(options: &PlotOptions) -> FitplotResult<PlotReport> {
    let input = options.locator.input_path(options.seed);
    let output = options.locator.output_path(options.seed);
    debug!("Plotting {} -> {}", input.display(), output.display());

    let series = read_fitness_log(&input)?;

    let mut chart = FitnessChart::from_series(&series);
    if let Some(caption) = &options.caption {
        chart = chart.with_caption(caption.as_str());
    }

    save_png(&chart, &output, options.image_size)?;

    let display = match &options.viewer {
        Some(viewer) => show_best_effort(viewer, &output),
        None => DisplayOutcome::Skipped("display disabled".to_string()),
    };

    Ok(PlotReport {
        input,
        output,
        generations: series.len(),
        display,
    })
}
