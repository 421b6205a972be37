//! Fitness chart: three line traces (max, avg, min) over generations.
//!
//! [`FitnessChart`] is a plain description of what gets drawn, built from
//! a [`FitnessSeries`]. Drawing goes through plotters and works on any
//! backend; [`FitnessChart::render_rgb`] and [`FitnessChart::render_svg`]
//! cover the in-memory cases.

use std::ops::Range;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use plotters_backend::DrawingBackend;

use crate::error::{FitplotError, FitplotResult};
use crate::record::FitnessSeries;

pub const MAX_COLOR: RGBColor = RGBColor(0, 0, 255);
pub const AVG_COLOR: RGBColor = RGBColor(255, 0, 0);
pub const MIN_COLOR: RGBColor = RGBColor(255, 165, 0);

pub const X_LABEL: &str = "generations";
pub const Y_LABEL: &str = "fitness";

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Axis bounds stay within this magnitude so `end - start` is finite.
const AXIS_LIMIT: f64 = f64::MAX / 16.0;

/// One labelled, coloured line.
#[derive(Debug, Clone)]
pub struct Trace {
    pub label: &'static str,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// Description of a fitness chart. Both axes are linear.
#[derive(Debug, Clone)]
pub struct FitnessChart {
    pub traces: Vec<Trace>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub caption: Option<String>,
    pub show_legend: bool,
}

impl FitnessChart {
    /// Build the max/avg/min chart for `series`.
    ///
    /// Non-finite values are left out of the traces.
    pub fn from_series(series: &FitnessSeries) -> Self {
        let trace = |label, color, values: &[f64]| Trace {
            label,
            color,
            points: series
                .generations()
                .iter()
                .zip(values)
                .map(|(&g, &v)| (f64::from(g), v))
                .filter(|(_, v)| v.is_finite())
                .collect(),
        };

        let traces = vec![
            trace("Max Fitness", MAX_COLOR, series.max()),
            trace("Avg Fitness", AVG_COLOR, series.avg()),
            trace("Min Fitness", MIN_COLOR, series.min()),
        ];

        let x_range = padded_range(traces.iter().flat_map(|t| t.points.iter().map(|p| p.0)));
        let y_range = padded_range(traces.iter().flat_map(|t| t.points.iter().map(|p| p.1)));

        Self {
            traces,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            x_range,
            y_range,
            caption: None,
            show_legend: true,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        let caption = caption.into();
        self.caption = (!caption.is_empty()).then_some(caption);
        self
    }

    /// Draw onto `root`. The caller presents the drawing area.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> FitplotResult<()> {
        ensure_font()?;
        root.fill(&WHITE).map_err(FitplotError::render)?;

        let mut builder = ChartBuilder::on(root);
        builder.margin(20).x_label_area_size(50).y_label_area_size(70);
        if let Some(caption) = &self.caption {
            builder.caption(caption, (FONT_FAMILY, 24));
        }
        let mut chart = builder
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(FitplotError::render)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label)
            .y_desc(self.y_label)
            .axis_desc_style((FONT_FAMILY, 18))
            .label_style((FONT_FAMILY, 14))
            .x_label_formatter(&|x| format!("{x:.0}"))
            .draw()
            .map_err(FitplotError::render)?;

        for trace in &self.traces {
            let style = trace.color.stroke_width(2);
            chart
                .draw_series(LineSeries::new(trace.points.iter().copied(), style))
                .map_err(FitplotError::render)?
                .label(trace.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        if self.show_legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .label_font((FONT_FAMILY, 14))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(FitplotError::render)?;
        }

        Ok(())
    }

    /// Render to a packed RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(&self, (width, height): (u32, u32)) -> FitplotResult<Vec<u8>> {
        check_size(width, height)?;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(FitplotError::render)?;
        }
        Ok(buffer)
    }

    /// Render to an SVG document.
    pub fn render_svg(&self, (width, height): (u32, u32)) -> FitplotResult<String> {
        check_size(width, height)?;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(FitplotError::render)?;
        }
        Ok(svg)
    }
}

fn check_size(width: u32, height: u32) -> FitplotResult<()> {
    if width == 0 || height == 0 {
        return Err(FitplotError::Render(format!(
            "invalid image size {width}x{height}"
        )));
    }
    Ok(())
}

/// Data range of `values` widened by [`AXIS_MARGIN`]; `0..1` when empty.
///
/// The result is never empty and its width is always finite, however far
/// apart the values are.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let bounds = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    });
    let Some((lo, hi)) = bounds else {
        return 0.0..1.0;
    };
    // Scaling each bound before subtracting cannot overflow.
    let pad = hi * AXIS_MARGIN - lo * AXIS_MARGIN;
    let (lo, hi) = if pad > 0.0 {
        (lo - pad, hi + pad)
    } else {
        let pad = (hi.abs() * AXIS_MARGIN).max(0.5);
        (lo - pad, hi + pad)
    };
    let lo = lo.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let hi = hi.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    if hi > lo {
        lo..hi
    } else {
        let pad = AXIS_LIMIT * AXIS_MARGIN;
        (lo - pad)..(hi + pad)
    }
}

fn ensure_font() -> FitplotResult<()> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "failed to load bundled font".to_string())
        })
        .clone()
        .map_err(FitplotError::Render)
}
