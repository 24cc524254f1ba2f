//! Per-difficulty metadata extraction.
//!
//! Community chart blobs are flat, JSON-shaped, and frequently malformed.
//! A structured parser would reject exactly the charts this crate has to
//! survive, so extraction is a flat scan plus fixed-lookahead field
//! extractors, with each field fault-isolated: one broken key costs that
//! field, never the record.

mod error;
mod extract;
mod infer;
mod record;
mod scanner;
mod tags;

use std::path::Path;

use anyhow::Result;

pub use error::*;
pub use extract::*;
pub use infer::*;
pub use record::*;
pub use scanner::*;
pub use tags::*;

/// Read a difficulty blob from disk, tolerating broken encodings.
///
/// Authoring tools occasionally ship charts with stray non-UTF-8 bytes;
/// those are replaced rather than refused, since extraction only needs
/// the ASCII structure around the known keys to survive.
pub fn read_blob_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
