//! Tuning reference used to derive note quantities.
//!
//! A [`Tuning`] bundles the constants from [`crate::constants`] so that a
//! note can be built against another reference pitch, another medium or
//! another equal temperament. The default matches the constants exactly.

use serde::{Deserialize, Serialize};

use crate::constants::{N_TETS, SPEED_OF_SOUND, STANDARD_OCTAVE, STANDARD_PITCH};
use crate::error::{NoteError, NoteResult};

/// Largest magnitude accepted for [`Tuning::standard_octave`]. Beyond it the
/// reference pitch itself has no representable base frequency.
pub const MAX_STANDARD_OCTAVE: u32 = 1024;

/// Reference values for octave, wavelength and transposition math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Speed of sound in the medium (m/s).
    pub speed_of_sound: f64,
    /// Frequency of the reference pitch (Hz).
    pub standard_pitch: f64,
    /// Octave the reference pitch belongs to.
    pub standard_octave: i32,
    /// Equal-tempered divisions per octave.
    pub n_tets: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed_of_sound: SPEED_OF_SOUND,
            standard_pitch: STANDARD_PITCH,
            standard_octave: STANDARD_OCTAVE,
            n_tets: N_TETS,
        }
    }
}

impl Tuning {
    /// Set the reference pitch.
    pub fn with_standard_pitch(mut self, standard_pitch: f64) -> Self {
        self.standard_pitch = standard_pitch;
        self
    }

    /// Set the speed of sound.
    pub fn with_speed_of_sound(mut self, speed_of_sound: f64) -> Self {
        self.speed_of_sound = speed_of_sound;
        self
    }

    /// Set the octave the reference pitch belongs to.
    pub fn with_standard_octave(mut self, standard_octave: i32) -> Self {
        self.standard_octave = standard_octave;
        self
    }

    /// Set the number of equal-tempered divisions per octave.
    pub fn with_n_tets(mut self, n_tets: u32) -> Self {
        self.n_tets = n_tets;
        self
    }

    /// Validate the tuning.
    ///
    /// # Returns
    /// * `Ok(())` if every reference value is usable
    /// * `Err(NoteError::InvalidTuning)` otherwise
    ///
    /// # Example
    /// ```
    /// use musimath::Tuning;
    ///
    /// assert!(Tuning::default().validate().is_ok());
    /// assert!(Tuning::default().with_n_tets(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> NoteResult<()> {
        if !(self.speed_of_sound.is_finite() && self.speed_of_sound > 0.0) {
            return Err(NoteError::invalid_tuning(format!(
                "speed_of_sound must be positive and finite, got {}",
                self.speed_of_sound
            )));
        }

        if !(self.standard_pitch.is_finite() && self.standard_pitch > 0.0) {
            return Err(NoteError::invalid_tuning(format!(
                "standard_pitch must be positive and finite, got {}",
                self.standard_pitch
            )));
        }

        if self.standard_octave.unsigned_abs() > MAX_STANDARD_OCTAVE {
            return Err(NoteError::invalid_tuning(format!(
                "standard_octave must be within ±{}, got {}",
                MAX_STANDARD_OCTAVE, self.standard_octave
            )));
        }

        if self.n_tets == 0 {
            return Err(NoteError::invalid_tuning("n_tets must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_matches_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_of_sound, 343.0);
        assert_eq!(tuning.standard_pitch, 440.0);
        assert_eq!(tuning.standard_octave, 4);
        assert_eq!(tuning.n_tets, 12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"standard_pitch": 432.0}"#).unwrap();
        assert_eq!(tuning, Tuning::default().with_standard_pitch(432.0));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Tuning, _> = serde_json::from_str(r#"{"pitch": 432.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Tuning::default()
            .with_speed_of_sound(0.0)
            .validate()
            .is_err());
        assert!(Tuning::default()
            .with_standard_pitch(f64::NAN)
            .validate()
            .is_err());
        assert!(Tuning::default()
            .with_standard_pitch(-440.0)
            .validate()
            .is_err());
        assert!(Tuning::default().with_n_tets(0).validate().is_err());
        assert!(Tuning::default().with_n_tets(19).validate().is_ok());
    }

    #[test]
    fn test_standard_octave_bounds() {
        let tuning = Tuning::default().with_standard_octave(0);
        assert_eq!(tuning.standard_octave, 0);
        assert!(tuning.validate().is_ok());

        let limit = MAX_STANDARD_OCTAVE as i32;
        assert!(Tuning::default().with_standard_octave(limit).validate().is_ok());
        assert!(Tuning::default().with_standard_octave(-limit).validate().is_ok());
        assert!(Tuning::default()
            .with_standard_octave(limit + 1)
            .validate()
            .is_err());
        assert!(Tuning::default()
            .with_standard_octave(i32::MIN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_huge_standard_octave_from_json_rejected() {
        let tuning: Tuning = serde_json::from_str(r#"{"standard_octave": 2147483647}"#).unwrap();
        assert!(matches!(
            tuning.validate(),
            Err(NoteError::InvalidTuning { .. })
        ));
    }
}
