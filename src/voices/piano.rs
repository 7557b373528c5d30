//! Additive piano voice.
//!
//! A sustained, piano-like tone built from six harmonics with exponential
//! damping and a touch of cubic saturation.
//!
//! # How It Works
//!
//! 1. Elapsed time becomes angular phase: θ = 2π·f·t
//! 2. Harmonics 1-6 are summed at amplitudes 1, 1/2, 1/4, 1/8, 1/16, 1/32
//! 3. Each harmonic is damped by exp(-0.0004·θ) - damping in phase rather
//!    than in time, so higher notes decay faster, like real strings
//! 4. A cubic term (y += y³) adds odd harmonics for brightness
//!
//! # Variations
//!
//! - Fewer harmonics = darker, more muted tone
//! - Stronger damping = shorter, more percussive note
//! - [`overdriven_piano`] hard-clips the result for a distorted-guitar edge

use std::f64::consts::TAU;

/// Harmonic damping constant, applied per radian of phase.
const DAMPING: f64 = 0.0004;

/// Amplitude of the piano voice at `t` seconds into a note at `freq` Hz.
///
/// The cubic term can push the result outside [-1, 1]; that overshoot is
/// intentional and left for the render-time clip.
pub fn piano(t: f64, freq: f64) -> f64 {
    let theta = TAU * freq * t;
    let damp = (-DAMPING * theta).exp();

    let mut tone = theta.sin() * damp;
    tone += (2.0 * theta).sin() * damp / 2.0;
    tone += (3.0 * theta).sin() * damp / 4.0;
    tone += (4.0 * theta).sin() * damp / 8.0;
    tone += (5.0 * theta).sin() * damp / 16.0;
    tone += (6.0 * theta).sin() * damp / 32.0;

    tone + tone * tone * tone
}

/// Piano hard-clipped to `±threshold` before loudness scaling.
///
/// Low thresholds flatten the waveform tops into audible distortion at the
/// per-note level. This is a sound-design clip, not overflow protection -
/// the timeline's final saturation still applies afterwards.
pub fn overdriven_piano(t: f64, freq: f64, threshold: f64) -> f64 {
    piano(t, freq).clamp(-threshold, threshold)
}
