//! Physical and tuning constants.

/// Speed of sound in dry air at room temperature (m/s).
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Frequency of A in the fourth octave (Hz).
pub const STANDARD_PITCH: f64 = 440.0;

/// Octave of the standard pitch.
pub const STANDARD_OCTAVE: i32 = 4;

/// Number of equal-tempered divisions of an octave.
pub const N_TETS: u32 = 12;

/// 2π, used for sinusoid evaluation.
pub const TWO_PI: f64 = std::f64::consts::TAU;
