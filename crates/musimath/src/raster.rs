//! Rasterizing figures into RGBA canvases.
//!
//! Rendering is deterministic: the same figure and config always produce
//! the same pixels, so encoded PNGs hash identically.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::RenderError;
use crate::figure::{Figure, Series};

/// Largest accepted canvas side, in pixels.
pub const MAX_DIMENSION: u32 = 4096;

/// A 2D RGBA canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Blend a color onto the pixel, ignoring out-of-bounds coordinates.
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let blended = color.over(&self.get(x, y));
        self.set(x, y, blended);
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}

/// Canvas layout and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Empty border around the plot area, in pixels.
    pub margin: u32,
    /// Background color.
    pub background: Color,
    /// Frame and zero-line color.
    pub axis_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 32,
            background: Color::white(),
            axis_color: Color::gray(0.25),
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<(), RenderError> {
        // Room for both margins plus a two-pixel plot area
        let min_side = self.margin.checked_mul(2).and_then(|m| m.checked_add(2));
        let fits = |side: u32| min_side.is_some_and(|min| side >= min) && side <= MAX_DIMENSION;
        if !fits(self.width) || !fits(self.height) {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Maps data coordinates into the plot area.
struct Viewport {
    left: f64,
    top: f64,
    plot_width: f64,
    plot_height: f64,
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
}

impl Viewport {
    fn new(config: &RenderConfig, bounds: (f64, f64, f64, f64)) -> Self {
        let (x_min, x_max, y_min, y_max) = bounds;
        let (x_min, x_max) = pad_span(x_min, x_max, 0.0);
        let (y_min, y_max) = pad_span(y_min, y_max, 0.05);

        let margin = config.margin as f64;
        Self {
            left: margin,
            top: margin,
            plot_width: (config.width - 1) as f64 - 2.0 * margin,
            plot_height: (config.height - 1) as f64 - 2.0 * margin,
            x_min,
            x_span: x_max - x_min,
            y_min,
            y_span: y_max - y_min,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let px = self.left + (x - self.x_min) / self.x_span * self.plot_width;
        let py = self.top + (1.0 - (y - self.y_min) / self.y_span) * self.plot_height;
        (px.round() as i64, py.round() as i64)
    }

    fn contains_y(&self, y: f64) -> bool {
        y >= self.y_min && y <= self.y_min + self.y_span
    }
}

/// Widen a span by `fraction` on each side, or by a fixed amount if empty.
fn pad_span(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    if span <= f64::EPSILON * min.abs().max(max.abs()).max(1.0) {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.5 };
        (min - pad, max + pad)
    } else {
        (min - span * fraction, max + span * fraction)
    }
}

impl Figure {
    /// Rasterize the figure.
    ///
    /// Draws a frame around the plot area, a zero line when y = 0 is in
    /// view, and every series as connected line segments in order.
    pub fn render(&self, config: &RenderConfig) -> Result<Canvas, RenderError> {
        config.validate()?;
        let bounds = self.bounds().ok_or(RenderError::EmptyFigure)?;

        debug!(
            width = config.width,
            height = config.height,
            series = self.series().len(),
            "rendering figure"
        );

        let mut canvas = Canvas::new(config.width, config.height, config.background);
        let viewport = Viewport::new(config, bounds);

        draw_frame(&mut canvas, config);

        if viewport.contains_y(0.0) {
            let (_, zero_y) = viewport.to_pixel(viewport.x_min, 0.0);
            let left = config.margin as i64;
            let right = (config.width - 1 - config.margin) as i64;
            let mut pen = Pen::dashed(config.axis_color);
            draw_segment(&mut canvas, (left, zero_y), (right, zero_y), &mut pen);
        }

        for (index, series) in self.series().iter().enumerate() {
            draw_series(&mut canvas, &viewport, series, index);
        }

        Ok(canvas)
    }
}

fn draw_frame(canvas: &mut Canvas, config: &RenderConfig) {
    let left = config.margin as i64;
    let top = config.margin as i64;
    let right = (config.width - 1 - config.margin) as i64;
    let bottom = (config.height - 1 - config.margin) as i64;

    let mut pen = Pen::solid(config.axis_color, 1);
    draw_segment(canvas, (left, top), (right, top), &mut pen);
    draw_segment(canvas, (right, top), (right, bottom), &mut pen);
    draw_segment(canvas, (right, bottom), (left, bottom), &mut pen);
    draw_segment(canvas, (left, bottom), (left, top), &mut pen);
}

fn draw_series(canvas: &mut Canvas, viewport: &Viewport, series: &Series, index: usize) {
    let mut pen = Pen {
        color: series.color(index),
        width: series.style.line_width.max(1),
        dash: series.style.line_style.dash_pattern(),
        step: 0,
    };

    let mut previous: Option<(i64, i64)> = None;
    for (x, y) in series.points() {
        if !(x.is_finite() && y.is_finite()) {
            // Gaps break the line
            previous = None;
            continue;
        }
        let current = viewport.to_pixel(x, y);
        match previous {
            Some(start) => draw_segment(canvas, start, current, &mut pen),
            None => pen.stamp(canvas, current),
        }
        previous = Some(current);
    }
}

/// Line drawing state carried across segments so dashes stay continuous.
struct Pen {
    color: Color,
    width: u32,
    dash: Option<(u32, u32)>,
    step: u32,
}

impl Pen {
    fn solid(color: Color, width: u32) -> Self {
        Self {
            color,
            width,
            dash: None,
            step: 0,
        }
    }

    fn dashed(color: Color) -> Self {
        Self {
            color,
            width: 1,
            dash: Some((4, 4)),
            step: 0,
        }
    }

    fn advance(&mut self) -> bool {
        let visible = match self.dash {
            None => true,
            Some((on, off)) => self.step % (on + off) < on,
        };
        self.step = self.step.wrapping_add(1);
        visible
    }

    fn stamp(&self, canvas: &mut Canvas, (x, y): (i64, i64)) {
        let width = self.width as i64;
        let offset = (width - 1) / 2;
        for dy in 0..width {
            for dx in 0..width {
                canvas.blend(x - offset + dx, y - offset + dy, self.color);
            }
        }
    }
}

/// Bresenham line from `start` to `end`, excluding `start` when it was
/// already drawn as the previous segment's end.
fn draw_segment(canvas: &mut Canvas, start: (i64, i64), end: (i64, i64), pen: &mut Pen) {
    let (mut x, mut y) = start;
    let (x1, y1) = end;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let skip_first = pen.step > 0;
    let mut first = true;

    loop {
        if !(first && skip_first) && pen.advance() {
            pen.stamp(canvas, (x, y));
        }
        first = false;

        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
