//! Output-side conversion: float timeline to the raw PCM byte stream.

pub mod pcm;

pub use pcm::write_pcm16;
