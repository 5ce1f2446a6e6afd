//! Waveform evaluation.
//!
//! All notes are normalized to an amplitude of 1.

use super::Note;
use crate::constants::TWO_PI;

impl Note {
    /// Height of the vibration at time `t` seconds after it started.
    ///
    /// Evaluates sin(2π · f · t).
    ///
    /// # Examples
    /// ```
    /// use musimath::Note;
    ///
    /// let note = Note::new(1.0).unwrap();
    /// assert_eq!(note.sample(0.0), 0.0);
    /// assert!((note.sample(0.25) - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sample(&self, t: f64) -> f64 {
        (TWO_PI * self.frequency * t).sin()
    }

    /// Evaluate [`Note::sample`] for every time in `ts`.
    pub fn sample_all<I>(&self, ts: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        ts.into_iter().map(|t| self.sample(t)).collect()
    }

    /// Displacement of the wave at position `x` meters along its direction
    /// of travel, frozen at t = 0.
    ///
    /// Evaluates sin(2π · x / λ), so one full cycle spans one wavelength.
    #[inline]
    pub fn displacement(&self, x: f64) -> f64 {
        (TWO_PI * x / self.wavelength).sin()
    }

    /// Evaluate [`Note::displacement`] for every position in `xs`.
    pub fn displacement_all<I>(&self, xs: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        xs.into_iter().map(|x| self.displacement(x)).collect()
    }
}
