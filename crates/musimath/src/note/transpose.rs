//! Equal-temperament transposition.

use tracing::trace;

use super::Note;
use crate::error::NoteResult;

impl Note {
    /// Generate the note `n_steps` equal-tempered half steps away.
    ///
    /// Uses f = f0 * 2^(n / n_tets) with the note's own tuning. Positive
    /// steps go up, negative steps go down.
    ///
    /// # Arguments
    /// * `n_steps` - Signed number of half steps
    ///
    /// # Returns
    /// The transposed note. Fails only when the result leaves the range of
    /// finite positive `f64` frequencies.
    ///
    /// # Examples
    /// ```
    /// use musimath::Note;
    ///
    /// let a4 = Note::new(440.0).unwrap();
    /// let a3 = a4.half_step(-12).unwrap();
    /// assert!((a3.frequency() - 220.0).abs() < 1e-9);
    ///
    /// let c5 = a4.half_step(3).unwrap();
    /// assert!((c5.frequency() - 523.251).abs() < 0.001);
    /// ```
    pub fn half_step(&self, n_steps: i32) -> NoteResult<Note> {
        let ratio = 2.0_f64.powf(n_steps as f64 / self.tuning.n_tets as f64);
        let frequency = self.frequency * ratio;

        trace!(from = self.frequency, n_steps, to = frequency, "half step");

        Note::with_tuning(frequency, self.tuning)
    }

    /// Signed number of half steps from this note to `other`.
    ///
    /// The result is fractional when `other` does not sit on this note's
    /// equal-tempered grid.
    ///
    /// # Examples
    /// ```
    /// use musimath::Note;
    ///
    /// let a4 = Note::new(440.0).unwrap();
    /// let a5 = Note::new(880.0).unwrap();
    /// assert_eq!(a4.half_steps_to(&a5), 12.0);
    /// assert_eq!(a5.half_steps_to(&a4), -12.0);
    /// ```
    pub fn half_steps_to(&self, other: &Note) -> f64 {
        self.tuning.n_tets as f64 * (other.frequency / self.frequency).log2()
    }
}
