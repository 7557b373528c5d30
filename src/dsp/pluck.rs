use rand::Rng;

/*
Karplus-Strong Plucked String
=============================

A physically-modeled string, synthesized with a noise-excited delay line:

1. Allocate a ring of length L = round(sample_rate / frequency) - one period
   of the target pitch - and fill it with uniform noise in [0, 1).
   This is the "pluck": all frequencies excited at once.
2. Each output sample, at ring cursor c:

       ring[c] = (ring[c] + prev) / 2 * decay
       emit ring[c] as the new prev, advance c modulo L

   Averaging with the previous output is a one-pole lowpass in the feedback
   path: high frequencies die first, exactly as on a real string. The decay
   factor (just below 1.0) controls overall sustain.
3. After a few hundred passes the noise has been filtered down to a nearly
   periodic wave at sample_rate / L Hz, decaying smoothly to silence.

Degenerate requests (frequency so low or non-positive that no ring can be
built) produce no generator at all; the scheduler treats them as silence
rather than risking a zero-length ring or a division by zero.
*/

/// Frequency ratios of the four-string chord voicing: root, a major third,
/// a fifth (1.26 x 1.19), and the octave.
pub const CHORD_RATIOS: [f64; 4] = [1.0, 1.26, 1.26 * 1.19, 2.0];

/// One plucked string: a noise-seeded ring buffer with lowpass feedback.
///
/// Owned for the duration of a single note, then discarded.
pub struct PluckedString {
    ring: Vec<f64>,
    cursor: usize,
    prev: f64,
    decay: f64,
}

impl PluckedString {
    /// Build a string for `freq` Hz, seeding the ring from `rng`.
    ///
    /// Returns `None` when no valid ring can be built: non-positive or
    /// non-finite frequency, or a frequency above the sample rate (ring
    /// length would round to zero).
    pub fn with_rng<R: Rng>(sample_rate: f64, freq: f64, decay: f64, rng: &mut R) -> Option<Self> {
        if !freq.is_finite() || freq <= 0.0 {
            return None;
        }

        let len = (sample_rate / freq).round() as usize;
        if len == 0 {
            return None;
        }

        let ring = (0..len).map(|_| rng.gen::<f64>()).collect();

        Some(Self {
            ring,
            cursor: 0,
            prev: 0.0,
            decay,
        })
    }

    /// Build a string seeded from the thread RNG.
    pub fn new(sample_rate: f64, freq: f64, decay: f64) -> Option<Self> {
        Self::with_rng(sample_rate, freq, decay, &mut rand::thread_rng())
    }

    /// Advance the feedback loop by one sample and return its output.
    pub fn next_sample(&mut self) -> f64 {
        let tone = (self.ring[self.cursor] + self.prev) / 2.0 * self.decay;
        self.ring[self.cursor] = tone;
        self.prev = tone;
        self.cursor = (self.cursor + 1) % self.ring.len();
        tone
    }

    /// Ring length in samples (one period of the tuned pitch).
    pub fn period(&self) -> usize {
        self.ring.len()
    }
}
