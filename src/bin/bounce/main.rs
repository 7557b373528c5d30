//! bounce - renders a built-in demo score to raw PCM on stdout.
//!
//! Run with: cargo run --bin bounce -- drums | aplay -f S16_LE -r 44100 -c 2
//!
//! Songs: `drums` (kit + piano), `plucks` (Karplus-Strong chords),
//! `random [seed]` (seeded generative melody).

mod songs;

use std::io::{self, BufWriter, Write};

use bounce_dsp::{io::write_pcm16, RenderConfig, Timeline};
use color_eyre::eyre::{bail, Result, WrapErr};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    let song = args.next().unwrap_or_else(|| "drums".to_string());

    let mut timeline = Timeline::new(RenderConfig::default())?;

    match song.as_str() {
        "drums" => songs::drums_and_piano(&mut timeline),
        "plucks" => songs::plucked_chords(&mut timeline),
        "random" => {
            let seed = match args.next() {
                Some(raw) => raw
                    .parse()
                    .wrap_err_with(|| format!("seed {raw:?} is not an integer"))?,
                None => 1,
            };
            songs::random_melody(&mut timeline, seed);
        }
        other => bail!("unknown song {other:?} (expected drums, plucks or random [seed])"),
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match write_pcm16(&timeline, &mut out).and_then(|()| out.flush()) {
        // The downstream player hanging up is a normal end of output.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}
