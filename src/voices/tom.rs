//! Tom drum voice.
//!
//! A pitched drum built from two swept partials: the kick's fast transient
//! plus a slower, longer-ringing body.
//!
//! # How It Works
//!
//! 1. First partial: exp(-4t) envelope, frequency sweep exp(-20t) - the hit
//! 2. Second partial: exp(-2t) envelope, gentler sweep exp(-5t) - the ring
//! 3. Summed, the attack reads as a drum strike and the tail as resonance
//!
//! # Variations
//!
//! - Tune by scale degree for melodic tom fills
//! - Drop the second partial for a dead, tight tom

use std::f64::consts::TAU;

/// Amplitude of the tom voice at `t` seconds into a note at `freq` Hz.
pub fn tom(t: f64, freq: f64) -> f64 {
    (-t * 4.0).exp() * (TAU * t * freq * (-t * 20.0).exp()).sin()
        + (-t * 2.0).exp() * (TAU * t * freq * (-t * 5.0).exp()).sin()
}
