//! Configuration management for the fitplot CLI.

use anyhow::{Context, Result};
use fitplot::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "fitplot.toml";

/// Fitplot project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Chart title; empty for none.
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_show")]
    pub show: bool,
    /// Viewer command line; empty for the platform default.
    #[serde(default)]
    pub viewer: String,
}

// Default value functions
fn default_seed() -> i64 { DEFAULT_SEED }
fn default_data_dir() -> PathBuf { PathBuf::from(DEFAULT_DATA_DIR) }
fn default_width() -> u32 { DEFAULT_IMAGE_SIZE.0 }
fn default_height() -> u32 { DEFAULT_IMAGE_SIZE.1 }
fn default_show() -> bool { true }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            caption: String::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show: default_show(),
            viewer: String::new(),
        }
    }
}

impl Config {
    /// Load config from fitplot.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Viewer to use, or `None` when display is off.
    pub fn viewer(&self) -> Option<Viewer> {
        if !self.display.show {
            return None;
        }
        Some(Viewer::from_command_line(&self.display.viewer).unwrap_or_default())
    }

    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            seed: self.input.seed,
            locator: Locator::new(&self.input.data_dir),
            image_size: (self.chart.width, self.chart.height),
            caption: (!self.chart.caption.is_empty()).then(|| self.chart.caption.clone()),
            viewer: self.viewer(),
        }
    }
}

/// Find fitplot.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library() {
        let config = Config::default();
        assert_eq!(config.input.seed, 27);
        assert_eq!(config.input.data_dir, PathBuf::from("./data"));
        assert_eq!((config.chart.width, config.chart.height), (1024, 768));
        assert!(config.display.show);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[input]\nseed = 4\n").unwrap();
        assert_eq!(config.input.seed, 4);
        assert_eq!(config.input.data_dir, PathBuf::from("./data"));
        assert_eq!(config.chart, ChartConfig::default());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.input.seed = 11;
        config.chart.caption = "Bitstring".to_string();
        config.display.viewer = "feh --scale-down".to_string();

        config.save(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn plot_options_follow_config() {
        let mut config = Config::default();
        config.display.show = false;
        config.input.data_dir = PathBuf::from("runs");

        let options = config.plot_options();

        assert!(options.viewer.is_none());
        assert!(options.caption.is_none());
        assert_eq!(options.locator.input_path(27), Path::new("runs").join("Seed27_PopulationFitness.csv"));
    }

    #[test]
    fn configured_viewer_replaces_default() {
        let mut config = Config::default();
        config.display.viewer = "eog".to_string();
        assert_eq!(config.viewer().unwrap().program(), "eog");

        config.display.viewer = String::new();
        assert_eq!(config.viewer(), Some(Viewer::platform_default()));
    }
}
