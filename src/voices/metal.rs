//! Metallic ring voice.
//!
//! Three sinusoids at deliberately incommensurate frequency multiples, summed
//! under one decay envelope. Because the partials share no common fundamental
//! the ear finds no clear pitch, just a metallic shimmer.
//!
//! # How It Works
//!
//! 1. Partials at 1×, 2.13232× and 6.12342× the base frequency
//! 2. Shared amplitude envelope exp(-4t)
//!
//! # Variations
//!
//! - More partials at odd ratios = closer to a bell
//! - Faster decay = struck pipe rather than ringing plate

use std::f64::consts::TAU;

/// Amplitude of the metal voice at `t` seconds into a note at `freq` Hz.
pub fn metal(t: f64, freq: f64) -> f64 {
    (-t * 4.0).exp()
        * ((TAU * t * freq).sin()
            + (TAU * t * freq * 2.13232).sin()
            + (TAU * t * freq * 6.12342).sin())
}
