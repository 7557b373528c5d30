//! Renderer/quantizer: interleaved 16-bit little-endian PCM.
//!
//! The output format is agreed out-of-band: stereo, signed 16-bit LE at the
//! configured sample rate, no header and no framing. Downstream tools wrap it
//! (`aplay -f S16_LE -r 44100 -c 2`, ffmpeg, a WAV muxer).
//!
//! Quantization is one-way: samples beyond the configured maximum amplitude
//! saturate at full scale. No dithering, no soft limiting - clipping is the
//! defined behavior, and some voices lean on it.

use std::io::{self, Write};

use crate::timeline::Timeline;

/// Emit the populated prefix of `timeline` (left then right, per sample) to
/// `out`. Writes nothing for an empty timeline.
///
/// The caller chooses the sink; stream output wants a `BufWriter`, since this
/// issues one small write per channel sample.
pub fn write_pcm16<W: Write>(timeline: &Timeline, out: &mut W) -> io::Result<()> {
    let max_amplitude = timeline.config().max_amplitude;
    let (left, right) = timeline.channels();

    for (&l, &r) in left.iter().zip(right) {
        out.write_all(&quantize(l, max_amplitude).to_le_bytes())?;
        out.write_all(&quantize(r, max_amplitude).to_le_bytes())?;
    }

    Ok(())
}

/// Saturating conversion of one float sample to signed 16-bit.
///
/// Full scale is symmetric: `-max_amplitude` maps to `-i16::MAX`, not
/// `i16::MIN`.
pub fn quantize(sample: f32, max_amplitude: f32) -> i16 {
    if sample > max_amplitude {
        i16::MAX
    } else if sample < -max_amplitude {
        -i16::MAX
    } else {
        (sample / max_amplitude * i16::MAX as f32).round() as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::tuning::Pitch;
    use crate::voices::Instrument;

    #[test]
    fn quantize_clips_symmetrically() {
        assert_eq!(quantize(1.5, 1.0), i16::MAX);
        assert_eq!(quantize(-1.5, 1.0), -i16::MAX);
        assert_eq!(quantize(0.0, 1.0), 0);
        assert_eq!(quantize(1.0, 1.0), i16::MAX);
        assert_eq!(quantize(-1.0, 1.0), -i16::MAX);
    }

    #[test]
    fn quantize_rounds_midscale_values() {
        let v = quantize(0.5, 1.0);
        assert_eq!(v, (0.5f32 * i16::MAX as f32).round() as i16);
    }

    #[test]
    fn quantize_honors_alternate_max_amplitude() {
        // Half-scale ceiling: 0.5 is already full scale.
        assert_eq!(quantize(0.5, 0.5), i16::MAX);
        assert_eq!(quantize(0.25, 0.5), quantize(0.5, 1.0));
    }

    #[test]
    fn empty_timeline_writes_no_bytes() {
        let tl = Timeline::new(RenderConfig {
            capacity_secs: 0.1,
            ..RenderConfig::default()
        })
        .unwrap();

        let mut bytes = Vec::new();
        write_pcm16(&tl, &mut bytes).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn stream_is_interleaved_four_bytes_per_frame() {
        let mut tl = Timeline::new(RenderConfig {
            capacity_secs: 0.1,
            ..RenderConfig::default()
        })
        .unwrap();
        tl.add_note(0.0, Pitch::Note(49), 0.01, 0.5, Instrument::Sine);

        let mut bytes = Vec::new();
        write_pcm16(&tl, &mut bytes).unwrap();
        assert_eq!(bytes.len(), tl.end() * 4);

        // Mono source: each frame's left and right halves are identical.
        for frame in bytes.chunks_exact(4) {
            assert_eq!(frame[..2], frame[2..]);
        }
    }
}
