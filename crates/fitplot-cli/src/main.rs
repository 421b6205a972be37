//! Fitplot CLI - population fitness charts for genetic-algorithm runs.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitplot")]
#[command(author, version, about = "Fitplot - population fitness charts for GA runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot max/avg/min fitness for one seed (the default command)
    Plot(commands::plot::PlotArgs),

    /// Write a default fitplot.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Some(Commands::Plot(args)) => commands::plot::run(&args),
        Some(Commands::Init { path }) => commands::init::run(path),
        None => commands::plot::run(&commands::plot::PlotArgs::default()),
    }
}
