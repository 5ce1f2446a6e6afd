//! Error types for note construction, plotting and rendering.

use thiserror::Error;

/// Result type for note operations.
pub type NoteResult<T> = Result<T, NoteError>;

/// Result type for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that can occur while building a note.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoteError {
    /// Frequency is zero, negative, NaN or infinite, or so extreme that its
    /// period, wavelength or base frequency is not representable.
    #[error("invalid frequency: {frequency} Hz (must be positive and finite)")]
    InvalidFrequency {
        /// The rejected frequency.
        frequency: f64,
    },

    /// Tuning reference is unusable.
    #[error("invalid tuning: {message}")]
    InvalidTuning {
        /// What is wrong with the tuning.
        message: String,
    },
}

impl NoteError {
    /// Creates an invalid tuning error.
    pub fn invalid_tuning(message: impl Into<String>) -> Self {
        Self::InvalidTuning {
            message: message.into(),
        }
    }
}

/// Errors that can occur while plotting a note.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Range start is not strictly below its end.
    #[error("invalid plot range: ({start}, {end}) (start must be less than end)")]
    InvalidRange {
        /// Range start.
        start: f64,
        /// Range end.
        end: f64,
    },

    /// Zero sample points requested.
    #[error("invalid point count: at least one sample point is required")]
    InvalidPointCount,
}

/// Errors that can occur while rasterizing a figure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Figure holds no drawable series.
    #[error("figure has nothing to render")]
    EmptyFigure,

    /// Canvas dimensions are out of bounds.
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}
