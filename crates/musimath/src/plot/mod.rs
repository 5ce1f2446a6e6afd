//! Waveform plotting.
//!
//! A note is plotted by sampling it at evenly spaced points over an
//! interval and handing the samples to a [`Surface`]. The surface is the
//! rendering backend: [`crate::Figure`] records the series in memory and
//! can rasterize them, and callers may implement [`Surface`] for their own
//! backends.

mod style;


use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::note::Note;
use crate::numeric::linspace;

pub use style::{LineStyle, Style};

/// Default number of sample points.
pub const DEFAULT_N_POINTS: usize = 100;

/// A drawable surface that accepts sampled series.
pub trait Surface {
    /// Draw a series of parallel x/y samples.
    fn plot(&mut self, xs: &[f64], ys: &[f64], style: &Style);

    /// Set the x axis label.
    fn set_x_label(&mut self, label: &str);

    /// Set the y axis label.
    fn set_y_label(&mut self, label: &str);
}

/// How x values are interpreted when sampling a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// x is time in seconds, sampled with [`Note::sample`].
    #[default]
    Time,
    /// x is position in meters, sampled with [`Note::displacement`].
    Space,
}

/// Options for [`Note::plot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Sampled interval `(start, end)`. Defaults to one wavelength, `(0, λ)`.
    ///
    /// In [`Domain::Time`] the default is read as `λ` seconds, which holds
    /// `λ·f = speed_of_sound` cycles (343 at the default tuning) and aliases
    /// heavily at [`DEFAULT_N_POINTS`] samples. Use [`Domain::Space`] for a
    /// one-cycle view over the same range, or set a range of a few periods
    /// when plotting in time.
    pub x_range: Option<(f64, f64)>,
    /// Number of evenly spaced samples, both ends included.
    pub n_points: usize,
    /// X axis label, left untouched when unset.
    pub x_label: Option<String>,
    /// Y axis label, left untouched when unset.
    pub y_label: Option<String>,
    /// Interpretation of x values.
    pub domain: Domain,
    /// Drawing options forwarded to the surface.
    pub style: Style,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x_range: None,
            n_points: DEFAULT_N_POINTS,
            x_label: None,
            y_label: None,
            domain: Domain::Time,
            style: Style::default(),
        }
    }
}

impl PlotOptions {
    /// Set the sampled interval.
    pub fn with_x_range(mut self, start: f64, end: f64) -> Self {
        self.x_range = Some((start, end));
        self
    }

    /// Set the number of sample points.
    pub fn with_n_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    /// Set the x axis label.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y axis label.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Set the sampling domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Set the series style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Resolve the interval to sample for `note`, validating it.
    pub fn resolve_range(&self, note: &Note) -> PlotResult<(f64, f64)> {
        let (start, end) = self.x_range.unwrap_or((0.0, note.wavelength()));

        // Negated so NaN bounds are rejected too
        if !(start < end) {
            return Err(PlotError::InvalidRange { start, end });
        }

        if self.n_points == 0 {
            return Err(PlotError::InvalidPointCount);
        }

        Ok((start, end))
    }
}

impl Note {
    /// Plot the note's vibration onto `surface`, or onto a new one.
    ///
    /// # Arguments
    /// * `options` - Range, point count, labels, domain and style
    /// * `surface` - Surface to draw onto. A default one is created if `None`
    ///
    /// # Returns
    /// The surface with the note drawn on it. Invalid options fail before
    /// a surface is created or touched.
    ///
    /// # Examples
    /// ```
    /// use musimath::{Figure, Note, PlotOptions};
    ///
    /// let note = Note::new(440.0).unwrap();
    /// let figure: Figure = note
    ///     .plot(&PlotOptions::default().with_x_label("t (s)"), None)
    ///     .unwrap();
    ///
    /// let series = &figure.series()[0];
    /// assert_eq!(series.xs.len(), 100);
    /// assert_eq!(series.xs[99], note.wavelength());
    /// assert_eq!(figure.x_label(), Some("t (s)"));
    ///
    /// assert!(note
    ///     .plot::<Figure>(&PlotOptions::default().with_x_range(1.0, 0.0), None)
    ///     .is_err());
    /// ```
    pub fn plot<S>(&self, options: &PlotOptions, surface: Option<S>) -> PlotResult<S>
    where
        S: Surface + Default,
    {
        options.resolve_range(self)?;

        let mut surface = surface.unwrap_or_default();
        self.plot_on(options, &mut surface)?;
        Ok(surface)
    }

    /// Plot the note's vibration onto an existing surface.
    pub fn plot_on<S>(&self, options: &PlotOptions, surface: &mut S) -> PlotResult<()>
    where
        S: Surface + ?Sized,
    {
        let (start, end) = options.resolve_range(self)?;

        debug!(
            frequency = self.frequency(),
            start,
            end,
            n_points = options.n_points,
            "plotting note"
        );

        let xs = linspace(start, end, options.n_points);
        let ys = match options.domain {
            Domain::Time => self.sample_all(xs.iter().copied()),
            Domain::Space => self.displacement_all(xs.iter().copied()),
        };

        surface.plot(&xs, &ys, &options.style);

        if let Some(label) = &options.x_label {
            surface.set_x_label(label);
        }

        if let Some(label) = &options.y_label {
            surface.set_y_label(label);
        }

        Ok(())
    }
}
