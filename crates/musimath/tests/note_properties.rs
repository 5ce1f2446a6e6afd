//! Property-based tests for note invariants using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p musimath --test note_properties
//! ```

use proptest::prelude::*;

use musimath::constants::SPEED_OF_SOUND;
use musimath::{Figure, Note, NoteError, PlotError, PlotOptions, Tuning};

/// Audible range and a good margin either side.
fn frequency() -> impl Strategy<Value = f64> {
    1e-3f64..1e6f64
}

/// Nearly the whole positive f64 range.
fn wide_frequency() -> impl Strategy<Value = f64> {
    1e-300f64..1e300f64
}

/// `value * 2^octaves` without forming `2^octaves` on its own.
fn scale_by_octaves(value: f64, octaves: i32) -> f64 {
    let half = octaves / 2;
    value * 2.0_f64.powi(half) * 2.0_f64.powi(octaves - half)
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}

// ============================================================================
// 1. Derived quantities
// ============================================================================

proptest! {
    /// base_frequency * 2^octave reconstructs the frequency.
    #[test]
    fn base_frequency_times_octaves_is_frequency(f in frequency()) {
        let note = Note::new(f).unwrap();
        let rebuilt = note.base_frequency() * 2.0_f64.powi(note.octave());
        prop_assert!(relative_eq(rebuilt, f), "{} != {}", rebuilt, f);
    }

    /// The identity holds across the f64 range, not just audible pitches.
    #[test]
    fn base_frequency_identity_wide_range(f in wide_frequency()) {
        let note = Note::new(f).unwrap();
        prop_assert!(note.base_frequency().is_finite());
        let rebuilt = scale_by_octaves(note.base_frequency(), note.octave());
        prop_assert!(relative_eq(rebuilt, f), "{} != {}", rebuilt, f);
        prop_assert!(relative_eq(note.wavelength() * f, SPEED_OF_SOUND));
    }

    /// Near the bottom of the normal range, where 2^octave alone underflows.
    #[test]
    fn base_frequency_identity_near_min_positive(f in f64::MIN_POSITIVE..1e-300) {
        let tuning = Tuning::default().with_speed_of_sound(1e-300);
        let note = Note::with_tuning(f, tuning).unwrap();
        prop_assert!(note.base_frequency().is_finite());
        prop_assert!(note.base_frequency() > 0.0);
        let rebuilt = scale_by_octaves(note.base_frequency(), note.octave());
        prop_assert!(relative_eq(rebuilt, f), "{} != {}", rebuilt, f);
    }

    /// Subnormal frequencies are rejected rather than given an infinite period.
    #[test]
    fn subnormal_frequencies_rejected(f in 1e-320f64..1e-309) {
        let rejected = matches!(Note::new(f), Err(NoteError::InvalidFrequency { .. }));
        prop_assert!(rejected);
    }

    /// wavelength * frequency is the speed of sound.
    #[test]
    fn wavelength_times_frequency_is_speed_of_sound(f in frequency()) {
        let note = Note::new(f).unwrap();
        prop_assert!(relative_eq(note.wavelength() * f, SPEED_OF_SOUND));
    }

    /// Doubling the frequency moves up exactly one octave away from the
    /// reference octave.
    #[test]
    fn octave_doubling_above_reference(f in 440.0f64..1e5) {
        let low = Note::new(f).unwrap();
        let high = Note::new(f * 2.0).unwrap();
        prop_assert_eq!(high.octave(), low.octave() + 1);
    }

    /// Non-positive frequencies never construct.
    #[test]
    fn non_positive_frequencies_rejected(f in -1e6f64..=0.0) {
        let rejected = matches!(Note::new(f), Err(NoteError::InvalidFrequency { .. }));
        prop_assert!(rejected);
    }
}

// ============================================================================
// 2. Ordering
// ============================================================================

proptest! {
    /// Exactly one of <, ==, > holds.
    #[test]
    fn trichotomy(a in frequency(), b in frequency()) {
        let (a, b) = (Note::new(a).unwrap(), Note::new(b).unwrap());
        let held = [a < b, a == b, a > b].iter().filter(|&&r| r).count();
        prop_assert_eq!(held, 1);
    }

    /// <= and >= agree with their strict forms plus equality.
    #[test]
    fn non_strict_relations(a in frequency(), b in frequency()) {
        let (a, b) = (Note::new(a).unwrap(), Note::new(b).unwrap());
        prop_assert_eq!(a <= b, a < b || a == b);
        prop_assert_eq!(a >= b, a > b || a == b);
    }

    /// A note is never strictly below itself, and always <= and >= itself.
    #[test]
    fn reflexive_relations(f in frequency()) {
        let a = Note::new(f).unwrap();
        let b = Note::new(f).unwrap();
        prop_assert!(a == b);
        prop_assert!(a <= b && a >= b);
        prop_assert!(!(a < b) && !(a > b));
    }
}

// ============================================================================
// 3. Transposition
// ============================================================================

proptest! {
    /// Going up and back down lands on the starting frequency.
    #[test]
    fn half_steps_invert(f in 1.0f64..1e4, n in -48i32..=48) {
        let note = Note::new(f).unwrap();
        let back = note.half_step(n).unwrap().half_step(-n).unwrap();
        prop_assert!(relative_eq(back.frequency(), f));
    }

    /// Twelve half steps is one octave.
    #[test]
    fn twelve_half_steps_double(f in 1.0f64..1e4) {
        let note = Note::new(f).unwrap();
        let up = note.half_step(12).unwrap();
        prop_assert!(relative_eq(up.frequency(), 2.0 * f));
    }

    /// Counting half steps recovers the transposition.
    #[test]
    fn half_steps_to_recovers_steps(f in 1.0f64..1e4, n in -48i32..=48) {
        let note = Note::new(f).unwrap();
        let other = note.half_step(n).unwrap();
        prop_assert!((note.half_steps_to(&other) - n as f64).abs() < 1e-9);
    }

    /// Upward steps always give a higher note.
    #[test]
    fn positive_steps_go_up(f in 1.0f64..1e4, n in 1i32..=48) {
        let note = Note::new(f).unwrap();
        prop_assert!(note.half_step(n).unwrap() > note);
    }
}

// ============================================================================
// 4. Sampling and plotting
// ============================================================================

proptest! {
    /// Samples stay within the unit amplitude.
    #[test]
    fn samples_bounded(f in frequency(), t in -10.0f64..10.0) {
        let note = Note::new(f).unwrap();
        let y = note.sample(t);
        prop_assert!((-1.0..=1.0).contains(&y));
    }

    /// Default plots cover exactly [0, wavelength].
    #[test]
    fn default_plot_covers_wavelength(f in frequency(), n in 2usize..500) {
        let note = Note::new(f).unwrap();
        let figure: Figure = note
            .plot(&PlotOptions::default().with_n_points(n), None)
            .unwrap();
        let xs = &figure.series()[0].xs;
        prop_assert_eq!(xs.len(), n);
        prop_assert_eq!(xs[0], 0.0);
        prop_assert_eq!(xs[n - 1], note.wavelength());
    }

    /// Reversed ranges are always rejected.
    #[test]
    fn reversed_ranges_rejected(f in frequency(), start in -10.0f64..10.0, width in 0.0f64..10.0) {
        let note = Note::new(f).unwrap();
        let options = PlotOptions::default().with_x_range(start, start - width);
        let result = note.plot::<Figure>(&options, None);
        let rejected = matches!(result, Err(PlotError::InvalidRange { .. }));
        prop_assert!(rejected);
    }
}
