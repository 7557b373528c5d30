use std::collections::TryReserveError;
use std::fmt;

use rand::Rng;

use crate::config::RenderConfig;
use crate::dsp::pluck::{PluckedString, CHORD_RATIOS};
use crate::tuning::Pitch;
use crate::voices::Instrument;

/*
The Timeline Accumulation Model
===============================

The whole render happens inside one fixed-capacity stereo float buffer. Notes
are not objects with a lifetime; placing a note means evaluating its
instrument once per sample and SUMMING the result into whatever is already in
the buffer:

    left[t]  += instrument(elapsed, freq) * loudness
    right[t] += instrument(elapsed, freq) * loudness

Because placement is additive rather than assignment, overlapping notes
superpose exactly like pressure waves in air. Chords, drum kits and
multi-voice scores all fall out of this one property - the score just places
single notes wherever it wants, in any order, and the mix is the sum.

Two bookkeeping rules keep this safe:

  capacity   The buffer never grows. Samples past the end are dropped
             silently; a note hanging off the edge is an expected condition,
             not an error.

  high-water The furthest sample index any placement has reached, even if
             the signal written there was silent. Only this prefix of the
             buffer is rendered, so a trailing rest (a zero-loudness note)
             deliberately extends the output with silence.

The buffer is exclusively owned by one render pass and everything is
sequential, so the read-modify-write per sample needs no synchronization.
*/

/// The Timeline allocation failed. The render cannot proceed; nothing has
/// been written.
#[derive(Debug)]
pub struct AllocError {
    samples: usize,
    source: TryReserveError,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to allocate timeline buffer of {} stereo samples",
            self.samples
        )
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The shared stereo accumulation buffer spanning one whole render.
pub struct Timeline {
    config: RenderConfig,
    /// High-water mark: samples actually populated, `<= capacity`.
    end: usize,
    left: Vec<f32>,
    right: Vec<f32>,
}

fn try_zeroed(samples: usize) -> Result<Vec<f32>, TryReserveError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(samples)?;
    buf.resize(samples, 0.0);
    Ok(buf)
}

impl Timeline {
    /// Allocate a silent timeline sized per `config` (construct-or-fail; a
    /// failed allocation reports instead of aborting the process).
    pub fn new(config: RenderConfig) -> Result<Self, AllocError> {
        let samples = config.capacity_samples();
        let alloc_err = |source| AllocError { samples, source };

        let left = try_zeroed(samples).map_err(alloc_err)?;
        let right = try_zeroed(samples).map_err(alloc_err)?;

        Ok(Self {
            config,
            end: 0,
            left,
            right,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Total capacity in samples.
    pub fn capacity(&self) -> usize {
        self.left.len()
    }

    /// High-water mark: the number of samples the renderer will emit.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The populated prefix of both channels, `end` samples each.
    pub fn channels(&self) -> (&[f32], &[f32]) {
        (&self.left[..self.end], &self.right[..self.end])
    }

    /// Place one note: evaluate `instrument` over `[start, start + duration)`
    /// seconds, scale by `loudness`, and sum into both channels.
    ///
    /// Mono material duplicated to both channels; there is no stereo
    /// placement. A non-positive duration is a no-op. Zero loudness still
    /// advances the high-water mark (a rest that reserves time).
    pub fn add_note(
        &mut self,
        start: f64,
        pitch: Pitch,
        duration: f64,
        loudness: f64,
        instrument: Instrument,
    ) {
        let Some((tstart, tend)) = self.span(start, duration) else {
            return;
        };

        let rate = self.config.sample_rate;
        let freq = pitch.frequency();
        let limit = tend.min(self.capacity() as i64);

        for t in tstart.max(0)..limit {
            let elapsed = (t - tstart) as f64 / rate;
            let amp = instrument.sample(elapsed, freq) * loudness;

            self.left[t as usize] += amp as f32;
            self.right[t as usize] += amp as f32;
        }

        self.advance_end(tend);
    }

    /// Place one Karplus-Strong plucked string, seeded from the thread RNG.
    ///
    /// A frequency no string can be built for (non-positive, or above the
    /// sample rate) yields silence, but the window still reserves time.
    pub fn add_pluck(&mut self, start: f64, pitch: Pitch, duration: f64, loudness: f64, decay: f64) {
        self.add_pluck_with_rng(start, pitch, duration, loudness, decay, &mut rand::thread_rng());
    }

    /// [`add_pluck`](Self::add_pluck) with a caller-supplied noise source,
    /// for deterministic renders.
    pub fn add_pluck_with_rng<R: Rng>(
        &mut self,
        start: f64,
        pitch: Pitch,
        duration: f64,
        loudness: f64,
        decay: f64,
        rng: &mut R,
    ) {
        let Some((tstart, tend)) = self.span(start, duration) else {
            return;
        };

        if let Some(mut string) =
            PluckedString::with_rng(self.config.sample_rate, pitch.frequency(), decay, rng)
        {
            let limit = tend.min(self.capacity() as i64);
            for t in tstart..limit {
                let amp = string.next_sample() * loudness;

                // A start before time zero still advances the string state,
                // only the audible part lands in the buffer.
                if t >= 0 {
                    self.left[t as usize] += amp as f32;
                    self.right[t as usize] += amp as f32;
                }
            }
        }

        self.advance_end(tend);
    }

    /// Four independent strings at the chord ratios (root, major third,
    /// fifth, octave) summed into the same window.
    pub fn add_pluck_chord(
        &mut self,
        start: f64,
        pitch: Pitch,
        duration: f64,
        loudness: f64,
        decay: f64,
    ) {
        let root = pitch.frequency();
        for ratio in CHORD_RATIOS {
            self.add_pluck(start, Pitch::Hz(root * ratio), duration, loudness, decay);
        }
    }

    /// Sample span of a placement, or `None` for an empty range.
    fn span(&self, start: f64, duration: f64) -> Option<(i64, i64)> {
        let rate = self.config.sample_rate;
        let tstart = (start * rate).round() as i64;
        let tend = tstart + (duration * rate).round() as i64;

        (tend > tstart).then_some((tstart, tend))
    }

    /// Raise the high-water mark to `tend`, capped at capacity. Monotone.
    fn advance_end(&mut self, tend: i64) {
        let capped = tend.clamp(0, self.capacity() as i64) as usize;
        self.end = self.end.max(capped);
    }
}
