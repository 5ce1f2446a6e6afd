//! musimath - Musical Notes as Sinusoidal Waves
//!
//! This crate models a musical note as a pure tone at a fixed frequency and
//! derives the quantities a student of acoustics usually wants to look at:
//! the octave relative to standard pitch, the base frequency at octave 0,
//! the wavelength in air and the period.
//!
//! # Features
//!
//! - **Derived quantities**: octave, base frequency, wavelength and period
//!   computed once at construction
//! - **Equal temperament**: transpose a note by half steps with [`Note::half_step`]
//! - **Ordering**: notes compare and sort by frequency
//! - **Waveform plots**: sample a note over an interval onto any [`Surface`],
//!   or record it in a [`Figure`] and encode a deterministic PNG
//!
//! # Example
//!
//! ```
//! use musimath::{Figure, Note, PlotOptions};
//!
//! let a4 = Note::new(440.0)?;
//! assert_eq!(a4.octave(), 4);
//! assert_eq!(a4.base_frequency(), 27.5);
//!
//! let a5 = a4.half_step(12)?;
//! assert!((a5.frequency() - 880.0).abs() < 1e-9);
//! assert!(a4 < a5);
//!
//! let figure: Figure = a4.plot(&PlotOptions::default(), None)?;
//! assert_eq!(figure.series().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Structure
//!
//! - [`constants`]: Physical and tuning constants
//! - [`tuning`]: Tuning reference used to derive note quantities
//! - [`note`]: The [`Note`] value type
//! - [`numeric`]: Evenly spaced sample generation
//! - [`plot`]: Plot options, styles and the [`Surface`] trait
//! - [`figure`]: In-memory recording surface
//! - [`raster`] and [`png`]: Rendering a figure to PNG bytes

pub mod color;
pub mod constants;
pub mod error;
pub mod figure;
pub mod note;
pub mod numeric;
pub mod plot;
pub mod png;
pub mod raster;
pub mod tuning;

// Re-export main types
pub use color::Color;
pub use error::{NoteError, NoteResult, PlotError, PlotResult, RenderError};
pub use figure::{Figure, Series};
pub use note::Note;
pub use numeric::linspace;
pub use plot::{Domain, LineStyle, PlotOptions, Style, Surface};
pub use crate::png::{PngConfig, PngError};
pub use raster::{Canvas, RenderConfig};
pub use tuning::{Tuning, MAX_STANDARD_OCTAVE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
