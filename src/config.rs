#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Process-wide render configuration, threaded explicitly into the timeline
/// and renderer rather than read from global state, so the core can be tested
/// at alternate sample rates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Samples per second for every note placement and for the output stream.
    pub sample_rate: f64,
    /// Saturation ceiling at quantization time. Accumulated samples beyond
    /// this magnitude clip to full-scale 16-bit output.
    pub max_amplitude: f32,
    /// Timeline capacity in seconds. The buffer is allocated once at this
    /// size and never grows; notes past the end are silently truncated.
    pub capacity_secs: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            max_amplitude: 1.0,
            capacity_secs: 100.0,
        }
    }
}

impl RenderConfig {
    /// Timeline capacity in samples.
    pub fn capacity_samples(&self) -> usize {
        (self.capacity_secs * self.sample_rate) as usize
    }
}
