//! Kick drum voice.
//!
//! A synthesized kick: a sine whose pitch falls rapidly while its amplitude
//! decays, producing the characteristic "punch" of a drum membrane.
//!
//! # How It Works
//!
//! 1. Amplitude envelope exp(-4t) shapes the hit
//! 2. The instantaneous frequency itself decays as exp(-20t), sweeping the
//!    pitch downward through the first few cycles
//!
//! # Variations
//!
//! - Slower frequency decay = more "boing", tom-like character
//! - Slower amplitude decay = boomy 808-style kick
//! - Schedule at a low scale degree (25-35 Hz fundamental) for sub weight

use std::f64::consts::TAU;

/// Amplitude of the kick voice at `t` seconds into a note at `freq` Hz.
pub fn kick(t: f64, freq: f64) -> f64 {
    (-t * 4.0).exp() * (TAU * t * freq * (-t * 20.0).exp()).sin()
}
