//! Loader-side metadata handling for community-authored song charts.
//!
//! Each difficulty of a chart ships a flat, JSON-shaped blob that may
//! redundantly declare the tempo and carry note jump speed, accent
//! colors, and display tags. This crate extracts those fields without a
//! structured parser (hand-authored blobs are routinely malformed),
//! infers placement-extension requirements from out-of-range note
//! fields, majority-votes the per-difficulty tempos into one song tempo,
//! and applies the result back to each difficulty's derived timing.

pub mod level;
pub mod meta;
