//! Chart output: PNG files and an external image viewer.

use std::path::Path;
use std::process::Command;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use tracing::{debug, info, warn};

use crate::chart::FitnessChart;
use crate::error::{FitplotError, FitplotResult};

/// Encode a packed RGB buffer as PNG.
pub fn encode_png(rgb: &[u8], (width, height): (u32, u32)) -> FitplotResult<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(rgb, width, height, ColorType::Rgb8)
        .map_err(FitplotError::render)?;
    Ok(png)
}

/// Render `chart` and write it as a PNG at `path`, replacing any
/// existing file. Nothing is written if rendering fails.
pub fn save_png(chart: &FitnessChart, path: &Path, size: (u32, u32)) -> FitplotResult<()> {
    let png = encode_png(&chart.render_rgb(size)?, size)?;
    std::fs::write(path, &png).map_err(|e| FitplotError::io(path, e))?;
    info!("Wrote {} ({} bytes)", path.display(), png.len());
    Ok(())
}

/// What happened when asked to show a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// The viewer ran and exited successfully.
    Shown,
    /// Display was turned off or no display is available.
    Skipped(String),
    /// The viewer could not be started or reported failure.
    Failed(String),
}

/// External program used to show an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    program: String,
    args: Vec<String>,
}

impl Viewer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse a whitespace-separated command line such as `"feh --scale-down"`.
    /// Returns `None` for a blank command.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let viewer = Viewer::new(parts.next()?);
        Some(parts.fold(viewer, Viewer::with_arg))
    }

    /// The desktop's default image opener.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "windows") {
            Viewer::new("cmd")
                .with_arg("/C")
                .with_arg("start")
                .with_arg("/WAIT")
                .with_arg("")
        } else if cfg!(target_os = "macos") {
            Viewer::new("open").with_arg("-W")
        } else {
            Viewer::new("xdg-open")
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the viewer on `image` and wait for it to exit.
    pub fn show(&self, image: &Path) -> FitplotResult<()> {
        debug!("Opening {} with {}", image.display(), self.program);
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(image)
            .status()
            .map_err(|e| FitplotError::Display(format!("failed to start {}: {e}", self.program)))?;
        if !status.success() {
            return Err(FitplotError::Display(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Whether a graphical session looks available.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

/// Show `image` if possible. Never fails: problems are logged and
/// reported in the outcome.
pub fn show_best_effort(viewer: &Viewer, image: &Path) -> DisplayOutcome {
    if !display_available() {
        let reason = "no graphical display available".to_string();
        warn!("Not showing {}: {}", image.display(), reason);
        return DisplayOutcome::Skipped(reason);
    }
    match viewer.show(image) {
        Ok(()) => DisplayOutcome::Shown,
        Err(e) => {
            warn!("Not showing {}: {}", image.display(), e);
            DisplayOutcome::Failed(e.to_string())
        }
    }
}
