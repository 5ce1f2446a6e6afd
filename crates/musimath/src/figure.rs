//! In-memory recording surface.
//!
//! [`Figure`] keeps every series handed to it along with the axis labels.
//! Tests and callers can inspect the recorded samples directly, and
//! [`Figure::render`] rasterizes them.

use crate::color::Color;
use crate::plot::{Style, Surface};

/// One plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// X samples.
    pub xs: Vec<f64>,
    /// Y samples, parallel to `xs`.
    pub ys: Vec<f64>,
    /// Style the series was drawn with.
    pub style: Style,
}

impl Series {
    /// Color to draw with, falling back to the palette entry for `index`.
    pub fn color(&self, index: usize) -> Color {
        self.style.color.unwrap_or_else(|| Color::palette(index))
    }

    /// Iterate over `(x, y)` points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// A surface that records series and labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    series: Vec<Series>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded series, in drawing order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// X axis label, if set.
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Y axis label, if set.
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Whether nothing has been plotted.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.xs.is_empty())
    }

    /// Bounding box of all finite points as `(x_min, x_max, y_min, y_max)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, (x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }
}

impl Surface for Figure {
    fn plot(&mut self, xs: &[f64], ys: &[f64], style: &Style) {
        // Mismatched inputs are cut to the shorter side
        let len = xs.len().min(ys.len());
        self.series.push(Series {
            xs: xs[..len].to_vec(),
            ys: ys[..len].to_vec(),
            style: style.clone(),
        });
    }

    fn set_x_label(&mut self, label: &str) {
        self.x_label = Some(label.to_string());
    }

    fn set_y_label(&mut self, label: &str) {
        self.y_label = Some(label.to_string());
    }
}
