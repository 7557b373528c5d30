//! Stateless instrument library.
//!
//! Each voice is a pure function from `(elapsed_seconds, frequency_hz)` to a
//! dimensionless amplitude, roughly in [-1, 1] (some deliberately overshoot
//! and rely on downstream clipping). No state is shared between calls, so the
//! scheduler can evaluate a voice once per sample with no synchronization.
//!
//! Voices are selected by value through the closed [`Instrument`] enum rather
//! than trait objects or plugin loading - the set is known at compile time
//! and every call site dispatches through [`Instrument::sample`].
//!
//! # Example
//!
//! ```ignore
//! use bounce_dsp::{Instrument, Pitch, RenderConfig, Timeline};
//!
//! let mut tl = Timeline::new(RenderConfig::default())?;
//! tl.add_note(0.0, Pitch::Note(40), 0.5, 0.3, Instrument::Piano);
//! tl.add_note(0.0, Pitch::Note(30), 0.5, 0.5, Instrument::Kick);
//! ```

mod cymbal;
mod kick;
mod metal;
mod piano;
mod sine;
mod splash;
mod tom;

pub use cymbal::cymbal;
pub use kick::kick;
pub use metal::metal;
pub use piano::{overdriven_piano, piano};
pub use sine::sine;
pub use splash::splash;
pub use tom::tom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The instrument set, selectable by value at each note placement.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instrument {
    /// Bare sinusoid, no envelope. Reference tone.
    Sine,
    /// Six-harmonic additive piano with cubic saturation.
    Piano,
    /// Piano hard-clipped at a symmetric threshold before loudness scaling.
    /// This clip is per-note distortion, distinct from the final render clip.
    Overdrive { threshold: f64 },
    /// Pitch-drop membrane transient.
    Kick,
    /// Two-partial pitched drum.
    Tom,
    /// Inharmonic metallic ring.
    Metal,
    /// Short, harmonically dense cymbal.
    Cymbal,
    /// Softer washed cymbal.
    Splash,
}

impl Instrument {
    /// Amplitude at `elapsed` seconds into a note at `freq` Hz.
    pub fn sample(self, elapsed: f64, freq: f64) -> f64 {
        match self {
            Instrument::Sine => sine(elapsed, freq),
            Instrument::Piano => piano(elapsed, freq),
            Instrument::Overdrive { threshold } => overdriven_piano(elapsed, freq, threshold),
            Instrument::Kick => kick(elapsed, freq),
            Instrument::Tom => tom(elapsed, freq),
            Instrument::Metal => metal(elapsed, freq),
            Instrument::Cymbal => cymbal(elapsed, freq),
            Instrument::Splash => splash(elapsed, freq),
        }
    }
}
