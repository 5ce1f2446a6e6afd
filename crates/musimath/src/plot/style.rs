//! Drawing options forwarded to a surface.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots.
    Dotted,
}

impl LineStyle {
    /// On/off run lengths in pixels, or `None` for a continuous line.
    pub fn dash_pattern(&self) -> Option<(u32, u32)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((8, 4)),
            LineStyle::Dotted => Some((2, 3)),
        }
    }
}

/// Styling for one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Line color. Surfaces pick one when unset.
    pub color: Option<Color>,
    /// Line width in pixels.
    pub line_width: u32,
    /// Dash pattern.
    pub line_style: LineStyle,
    /// Legend label.
    pub label: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1,
            line_style: LineStyle::Solid,
            label: None,
        }
    }
}

impl Style {
    /// Set the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line width.
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Set the dash pattern.
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the legend label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
