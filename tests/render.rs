//! End-to-end render checks: score in, PCM bytes out.

use std::f64::consts::TAU;

use bounce_dsp::{io::write_pcm16, Instrument, Pitch, RenderConfig, Timeline};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn test_config(seconds: f64) -> RenderConfig {
    RenderConfig {
        capacity_secs: seconds,
        ..RenderConfig::default()
    }
}

#[test]
fn one_period_of_a440_quantizes_exactly() {
    let mut tl = Timeline::new(test_config(1.0)).unwrap();

    // Exactly one period of A440: 44100 / 440 rounds to 100 samples.
    tl.add_note(0.0, Pitch::Note(49), 1.0 / 440.0, 1.0, Instrument::Sine);
    assert_eq!(tl.end(), 100);

    let mut bytes = Vec::new();
    write_pcm16(&tl, &mut bytes).unwrap();
    assert_eq!(bytes.len(), 100 * 4);

    for (i, frame) in bytes.chunks_exact(4).enumerate() {
        let left = i16::from_le_bytes([frame[0], frame[1]]);
        let right = i16::from_le_bytes([frame[2], frame[3]]);
        assert_eq!(left, right);

        let expected = ((TAU * 440.0 * i as f64 / 44_100.0).sin() * i16::MAX as f64).round();
        assert!(
            (left as f64 - expected).abs() <= 1.0,
            "sample {i}: got {left}, expected {expected} +- 1"
        );
    }

    // Starts at zero and rises.
    let first = i16::from_le_bytes([bytes[0], bytes[1]]);
    let second = i16::from_le_bytes([bytes[4], bytes[5]]);
    assert_eq!(first, 0);
    assert!(second > first);
}

#[test]
fn high_water_mark_tracks_the_furthest_placement() {
    let mut tl = Timeline::new(test_config(2.0)).unwrap();
    let rate = tl.config().sample_rate;

    let placements = [
        (0.0, 0.5),
        (0.25, 0.1), // ends earlier than the first
        (1.0, 0.75),
        (1.5, 10.0), // truncates at capacity
    ];

    let mut expected = 0usize;
    for (start, duration) in placements {
        tl.add_note(start, Pitch::Note(44), duration, 0.1, Instrument::Piano);

        let tend = ((start * rate).round() + (duration * rate).round()) as usize;
        expected = expected.max(tend.min(tl.capacity()));
        assert_eq!(tl.end(), expected, "after note at {start}s for {duration}s");
    }

    assert_eq!(tl.end(), tl.capacity());
}

#[test]
fn clipped_mix_saturates_at_full_scale() {
    let mut tl = Timeline::new(test_config(0.1)).unwrap();

    // Three full-loudness sines in phase push the mix well past 1.0.
    for _ in 0..3 {
        tl.add_note(0.0, Pitch::Note(49), 0.05, 1.0, Instrument::Sine);
    }

    let mut bytes = Vec::new();
    write_pcm16(&tl, &mut bytes).unwrap();

    let samples: Vec<i16> = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert_eq!(peak, i16::MAX as u16, "overdriven mix must hit full scale");
    // Saturation, not wraparound: i16::MIN never appears.
    assert!(samples.iter().all(|&s| s != i16::MIN));
}

#[test]
fn plucked_string_envelope_decays_across_the_note() {
    let mut tl = Timeline::new(test_config(1.5)).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    tl.add_pluck_with_rng(0.0, Pitch::Hz(220.0), 1.0, 1.0, 0.99, &mut rng);

    let (left, _) = tl.channels();
    let peak_around = |secs: f64| -> f32 {
        let center = (secs * 44_100.0) as usize;
        left[center - 2205..center + 2205]
            .iter()
            .fold(0.0f32, |acc, &s| acc.max(s.abs()))
    };

    let early = peak_around(0.1);
    let late = peak_around(0.9);
    assert!(
        late < early,
        "decay 0.99: peak near 0.9s ({late}) must be below peak near 0.1s ({early})"
    );
}

#[test]
fn overdrive_distorts_before_the_final_clip() {
    // Per-note overdrive at a low threshold flattens the waveform even when
    // the scheduled loudness keeps the mix far below the render clip.
    let mut clean = Timeline::new(test_config(0.2)).unwrap();
    clean.add_note(0.0, Pitch::Note(40), 0.1, 0.1, Instrument::Piano);

    let mut driven = Timeline::new(test_config(0.2)).unwrap();
    driven.add_note(
        0.0,
        Pitch::Note(40),
        0.1,
        0.1,
        Instrument::Overdrive { threshold: 0.3 },
    );

    let peak = |tl: &Timeline| tl.channels().0.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
    assert!(peak(&driven) <= 0.3 * 0.1 + 1e-6);
    assert!(peak(&clean) > peak(&driven));
}

#[test]
fn render_is_deterministic_for_fixed_material() {
    let render = || -> Vec<u8> {
        let mut tl = Timeline::new(test_config(0.5)).unwrap();
        tl.add_note(0.0, Pitch::Note(40), 0.2, 0.3, Instrument::Piano);
        tl.add_note(0.1, Pitch::Note(30), 0.2, 0.5, Instrument::Kick);
        tl.add_note(0.2, Pitch::Note(70), 0.2, 0.02, Instrument::Cymbal);
        let mut rng = SmallRng::seed_from_u64(9);
        tl.add_pluck_with_rng(0.3, Pitch::Hz(330.0), 0.2, 0.4, 0.995, &mut rng);

        let mut bytes = Vec::new();
        write_pcm16(&tl, &mut bytes).unwrap();
        bytes
    };

    assert_eq!(render(), render());
}
