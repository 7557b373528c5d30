#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Equal-Tempered Pitch Mapping
============================

Scale degrees map to frequencies with the standard equal-temperament formula:

    frequency(n) = 440 * 2^((n - 49) / 12)

Note 49 is A4, the 440 Hz tuning reference (this is piano-key numbering, not
MIDI numbering - on a MIDI keyboard A4 is note 69). Each step of n is one
semitone; twelve steps double the frequency.

Some instruments want a scale degree (melodic material), others are tuned by
raw frequency (drum bodies, plucked strings with detune ratios). Both forms
appear throughout the scores, so note placement accepts either via `Pitch`.
*/

/// Frequency in Hz of equal-tempered scale degree `n` (note 49 = A4 = 440 Hz).
///
/// Total over all integers: out-of-keyboard degrees simply extrapolate.
pub fn frequency(n: i32) -> f64 {
    440.0 * 2.0_f64.powf((n as f64 - 49.0) / 12.0)
}

/// A note identifier: either an equal-tempered scale degree or a raw
/// frequency in Hz.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pitch {
    /// Scale degree, resolved through [`frequency`].
    Note(i32),
    /// Direct frequency in Hz, bypassing the scale.
    Hz(f64),
}

impl Pitch {
    /// Resolve to a frequency in Hz.
    pub fn frequency(self) -> f64 {
        match self {
            Pitch::Note(n) => frequency(n),
            Pitch::Hz(f) => f,
        }
    }
}

impl From<i32> for Pitch {
    fn from(n: i32) -> Self {
        Pitch::Note(n)
    }
}

impl From<f64> for Pitch {
    fn from(hz: f64) -> Self {
        Pitch::Hz(hz)
    }
}
