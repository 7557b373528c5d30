//! Cymbal voice.
//!
//! A very short, harmonically dense hit. Substituting `tan` for `sin` fills
//! the spectrum with strong high harmonics - near the asymptotes the output
//! is essentially wideband noise, which is exactly what a cymbal wants.
//!
//! # How It Works
//!
//! 1. tan of a swept phase (frequency decays as exp(-70t))
//! 2. Aggressive exp(-70t) amplitude envelope keeps the hit to a few ms
//!    and tames the unbounded tan spikes before they ring on
//!
//! The raw output can far exceed [-1, 1]; schedule it quietly (loudness in
//! the 0.01-0.05 range) and let the render-time clip catch the residue.
//!
//! # Variations
//!
//! - See [`splash`](crate::voices::splash) for the softer sin-based wash

use std::f64::consts::TAU;

/// Amplitude of the cymbal voice at `t` seconds into a note at `freq` Hz.
pub fn cymbal(t: f64, freq: f64) -> f64 {
    (-t * 70.0).exp() * (TAU * t * freq * (-t * 70.0).exp()).tan()
}
