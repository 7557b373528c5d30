//! Splash cymbal voice.
//!
//! The washed, softer counterpart to the main cymbal: a sine with matched
//! amplitude and frequency decay. Scheduled at high frequencies it reads as
//! an airy accent rather than a sharp strike.
//!
//! # How It Works
//!
//! 1. Amplitude envelope exp(-10t)
//! 2. Frequency sweep exp(-10t), same rate, so the pitch falls with the level
//!
//! # Variations
//!
//! - Faster shared decay = tighter, closed-hat feel
//! - Very high base frequency (aliasing folds it into noise) = hiss accent

use std::f64::consts::TAU;

/// Amplitude of the splash voice at `t` seconds into a note at `freq` Hz.
pub fn splash(t: f64, freq: f64) -> f64 {
    (-t * 10.0).exp() * (TAU * t * freq * (-t * 10.0).exp()).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_by_envelope() {
        for i in 0..44_100 {
            let t = i as f64 / 44_100.0;
            assert!(splash(t, 800.0).abs() <= (-t * 10.0).exp() + 1e-12);
        }
    }
}
