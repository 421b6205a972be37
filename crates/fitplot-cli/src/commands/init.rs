//! Initialize a fitplot project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    println!("{} Initializing fitplot project...", "→".blue());

    let config = Config::default();

    let data_dir = base_path.join(&config.input.data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    println!("  {} Created {}", "✓".green(), data_dir.display());

    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} fitplot project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  {} copy Seed<N>_PopulationFitness.csv into {}",
        "1.".blue(),
        data_dir.display()
    );
    println!("  {} fitplot plot --seed <N>", "2.".blue());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_config_and_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        run(Some(dir.path().display().to_string())).unwrap();

        assert!(dir.path().join("data").is_dir());
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[input]\nseed = 9\n").unwrap();

        run(Some(dir.path().display().to_string())).unwrap();

        assert_eq!(Config::load_from(&config_path).unwrap().input.seed, 9);
    }
}
