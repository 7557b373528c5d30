//! Pure sine voice.
//!
//! A bare sinusoid with no envelope. Musically plain, but invaluable as a
//! reference: its quantized output can be checked sample-by-sample, which the
//! end-to-end render tests rely on.

use std::f64::consts::TAU;

/// Amplitude of a pure sine at `t` seconds into a note at `freq` Hz.
pub fn sine(t: f64, freq: f64) -> f64 {
    (TAU * freq * t).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_period_returns_to_zero() {
        let period = 1.0 / 440.0;
        assert!(sine(0.0, 440.0).abs() < 1e-12);
        assert!(sine(period, 440.0).abs() < 1e-9);
    }

    #[test]
    fn peak_at_quarter_period() {
        let quarter = 0.25 / 440.0;
        assert!((sine(quarter, 440.0) - 1.0).abs() < 1e-9);
    }
}
