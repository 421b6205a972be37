//! Plot the fitness log of one seed.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use fitplot::prelude::*;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Args, Debug, Default)]
pub struct PlotArgs {
    /// Seed of the run to plot (default from fitplot.toml, else 27)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Directory holding Seed<N>_PopulationFitness.csv
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Write the image without opening a viewer
    #[arg(long)]
    pub no_show: bool,
}

impl PlotArgs {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(seed) = self.seed {
            config.input.seed = seed;
        }
        if let Some(dir) = &self.data_dir {
            config.input.data_dir = dir.clone();
        }
        if self.no_show {
            config.display.show = false;
        }
        config
    }
}

pub fn run(args: &PlotArgs) -> Result<()> {
    let config = args.apply(Config::load()?);
    let options = config.plot_options();

    println!(
        "{} Plotting seed {} from {}",
        "→".blue(),
        options.seed.to_string().cyan(),
        options.locator.data_dir().display()
    );

    let report = plot_fitness(&options).with_context(|| {
        format!(
            "Failed to plot {}",
            options.locator.input_path(options.seed).display()
        )
    })?;

    println!(
        "  {} Read {} generations from {}",
        "✓".green(),
        report.generations.to_string().cyan(),
        report.input.display()
    );
    println!("  {} Wrote {}", "✓".green(), report.output.display());

    match &report.display {
        DisplayOutcome::Shown => {}
        DisplayOutcome::Skipped(reason) => {
            println!("  {} Viewer skipped: {}", "•".yellow(), reason);
        }
        DisplayOutcome::Failed(reason) => {
            println!("  {} Viewer failed: {}", "•".yellow(), reason);
        }
    }

    Ok(())
}
