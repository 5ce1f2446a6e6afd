//! The note value type.
//!
//! A [`Note`] is a pure tone at a fixed frequency. Its octave, base
//! frequency, wavelength and period are derived once at construction and
//! never change.

mod ordering;
mod transpose;
mod waveform;


use std::fmt;

use tracing::debug;

use crate::error::{NoteError, NoteResult};
use crate::tuning::Tuning;

/// A pure tone at a fixed frequency.
///
/// Equality and ordering consider the frequency only; the tuning a note was
/// built with does not take part in comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    frequency: f64,
    octave: i32,
    base_frequency: f64,
    wavelength: f64,
    tuning: Tuning,
}

impl Note {
    /// Create a note at the given frequency using the default tuning.
    ///
    /// # Arguments
    /// * `frequency` - Frequency in Hz, positive and finite
    ///
    /// # Examples
    /// ```
    /// use musimath::Note;
    ///
    /// let note = Note::new(880.0).unwrap();
    /// assert_eq!(note.octave(), 5);
    /// assert!(Note::new(0.0).is_err());
    /// ```
    pub fn new(frequency: f64) -> NoteResult<Self> {
        Self::with_tuning(frequency, Tuning::default())
    }

    /// Create a note at the given frequency against a custom tuning.
    pub fn with_tuning(frequency: f64, tuning: Tuning) -> NoteResult<Self> {
        tuning.validate()?;

        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(NoteError::InvalidFrequency { frequency });
        }

        let octave = octave_of(frequency, &tuning)?;
        let base_frequency = scale_by_octaves(frequency, -octave);
        let wavelength = tuning.speed_of_sound / frequency;

        // Extreme frequencies can push a derived quantity out of f64 range
        let representable = |value: f64| value.is_finite() && value > 0.0;
        if !(representable(base_frequency)
            && representable(wavelength)
            && representable(1.0 / frequency))
        {
            return Err(NoteError::InvalidFrequency { frequency });
        }

        debug!(frequency, octave, base_frequency, wavelength, "note created");

        Ok(Self {
            frequency,
            octave,
            base_frequency,
            wavelength,
            tuning,
        })
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Octave relative to the tuning's standard pitch.
    ///
    /// Octaves are counted in whole doublings away from the reference, so
    /// any frequency within one doubling of the reference shares its octave.
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// The frequency this note would have at octave 0, in Hz.
    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// Wavelength in meters.
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Period of one oscillation in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    /// Tuning the note was derived with.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Multi-line summary of base frequency, octave and frequency.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Base frequency: {}\nOctave: {}\nFrequency: {}",
            self.base_frequency, self.octave, self.frequency
        )
    }
}

/// Signed number of whole octave doublings between `frequency` and the
/// reference, offset by the reference octave.
fn octave_of(frequency: f64, tuning: &Tuning) -> NoteResult<i32> {
    let ratio = frequency / tuning.standard_pitch;
    // sign(ratio - 1) * floor(|log2(ratio)|)
    let octaves_from_standard = ratio.log2().trunc();
    tuning
        .standard_octave
        .checked_add(octaves_from_standard as i32)
        .ok_or_else(|| {
            NoteError::invalid_tuning(format!(
                "standard_octave {} overflows for {} Hz",
                tuning.standard_octave, frequency
            ))
        })
}

/// `value * 2^octaves`, applied in two halves so that an exponent beyond
/// the f64 range does not overflow to infinity or underflow to zero on its
/// own when the scaled result is representable.
fn scale_by_octaves(value: f64, octaves: i32) -> f64 {
    let half = octaves / 2;
    value * 2.0_f64.powi(half) * 2.0_f64.powi(octaves - half)
}
