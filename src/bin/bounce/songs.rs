//! Built-in demo scores.
//!
//! Each score is a plain sequence of note placements; there is no score file
//! format, just function calls in composition order. Start times are tracked
//! per musical layer so drums, chords and bass can be laid down independently
//! over the same bars and summed by the timeline.

use bounce_dsp::{Instrument, Pitch, Timeline};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sixteenth-note length in seconds at `bpm`.
fn sixteenth(bpm: f64) -> f64 {
    60.0 / bpm / 4.0
}

/// Drum kit, piano chords and a bass line over the same bars.
pub fn drums_and_piano(tl: &mut Timeline) {
    let vol = 0.5;
    let step = sixteenth(190.0);

    // Drums: cymbal wash on the bar, metal ring behind it, a kick-kick-tom
    // figure underneath.
    let mut at = 0.0;
    for _ in 0..6 {
        tl.add_note(at, Pitch::Note(80), step * 8.0, vol * 0.15, Instrument::Splash);
        tl.add_note(at + step, Pitch::Note(90), step * 8.0, vol * 0.01, Instrument::Metal);

        for _ in 0..4 {
            tl.add_note(at, Pitch::Note(30), step * 2.0, vol, Instrument::Kick);
            at += step;

            tl.add_note(at, Pitch::Note(30), step * 2.0, vol, Instrument::Kick);
            at += step;

            tl.add_note(at, Pitch::Note(30), step * 2.0, vol, Instrument::Tom);
            tl.add_note(at, Pitch::Note(70), step * 2.0, vol * 0.02, Instrument::Cymbal);
            at += step * 2.0;
        }
    }

    // Piano: an E-major shape alternating with its shift down a third.
    let mut at = 0.0;
    for chord in [[40, 44, 47, 52], [37, 41, 44, 49]] {
        for _ in 0..4 {
            for note in chord {
                tl.add_note(at, Pitch::Note(note), step * 6.0, vol * 0.03, Instrument::Piano);
            }
            at += step * 2.0;
        }
    }

    // Bass: root/fifth two octaves down.
    let mut at = 0.0;
    for _ in 0..8 {
        tl.add_note(at, Pitch::Note(40 - 24), step * 2.0, vol * 0.2, Instrument::Piano);
        at += step * 2.0;

        tl.add_note(at, Pitch::Note(40 - 7 - 24), step * 2.0, vol * 0.2, Instrument::Piano);
        at += step * 2.0;
    }
}

/// Karplus-Strong chord progression: I, IV, IV-of-IV, back to I.
pub fn plucked_chords(tl: &mut Timeline) {
    let vol = 0.5;
    let step = sixteenth(190.0);
    let root = 261.63; // middle C

    let mut at = 0.0;
    for degree in [1.0, 1.33, 1.33 * 1.33, 1.0] {
        for _ in 0..8 {
            tl.add_pluck_chord(at, Pitch::Hz(root * degree), step, vol, 0.99);
            at += step;
        }
    }
}

/// Ratios by which the generative melody may step: unison, just fifths,
/// fourths, thirds, sixths, sevenths and the octave, in both directions.
const STEP_RATIOS: [f64; 12] = [
    1.0,
    2.0 / 3.0,
    3.0 / 2.0,
    3.0 / 4.0,
    4.0 / 3.0,
    4.0 / 5.0,
    5.0 / 4.0,
    5.0 / 6.0,
    6.0 / 5.0,
    6.0 / 7.0,
    7.0 / 6.0,
    2.0,
];

/// A seeded random walk through just-intonation intervals: the same eight-note
/// phrase repeats four times, with a few of its pitches re-rolled between
/// passes. The same seed always renders the same bytes.
pub fn random_melody(tl: &mut Timeline, seed: u64) {
    fn walk(rng: &mut SmallRng, fr: f64) -> f64 {
        let ratio = STEP_RATIOS[rng.gen_range(0..STEP_RATIOS.len())];
        if rng.gen::<bool>() {
            fr * ratio
        } else {
            fr / ratio
        }
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let vol = 0.5;
    let step = sixteenth(144.0);

    let mut fr = 440.0;
    let mut phrase: Vec<(f64, f64)> = (0..8)
        .map(|_| {
            fr = walk(&mut rng, fr);
            (fr, step * rng.gen_range(0..8) as f64)
        })
        .collect();

    let mut at = 0.0;
    for pass in 0..4 {
        if pass > 0 {
            // Re-roll a few pitches, keep the rhythm.
            for _ in 0..4 {
                let n = rng.gen_range(0..phrase.len());
                phrase[n].0 = walk(&mut rng, phrase[n].0);
            }
        }

        for &(freq, len) in &phrase {
            tl.add_note(at, Pitch::Hz(freq), len, vol * 0.5, Instrument::Piano);
            at += len;
        }

        // Breath between passes: a rest that still reserves its time.
        tl.add_note(at, Pitch::Hz(0.0), 0.2, 0.0, Instrument::Piano);
        at += 0.2;
    }
}
