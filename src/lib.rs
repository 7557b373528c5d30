pub mod config;
pub mod dsp; // Stateful synthesis primitives (delay-line pluck)
pub mod io;
pub mod timeline; // Accumulation buffer and note scheduling
pub mod tuning; // Equal-tempered pitch mapping
pub mod voices; // Stateless instrument library

pub use config::RenderConfig;
pub use timeline::Timeline;
pub use tuning::Pitch;
pub use voices::Instrument;
