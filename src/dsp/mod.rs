//! Stateful synthesis primitives.
//!
//! Unlike the stateless [`voices`](crate::voices) functions, these own
//! transient per-note state (a delay line) and produce samples in order.
//! They stay focused on the signal math; the timeline layers scheduling and
//! accumulation on top.

/// Karplus-Strong plucked-string delay line.
pub mod pluck;

pub use pluck::PluckedString;
