//! Flat scanner for difficulty blobs.
//!
//! Splits a blob into ordered segments at the key/value delimiter `:`.
//! The remaining structural delimiters (`,` `{` `}` `[` `]`) stay inside
//! segments and are handled as value terminators by the extractors.
//! Splitting on all of them would shift the fixed color lookahead off the
//! positions existing charts depend on, so the segment boundary is `:`
//! alone. No nesting awareness; the keys of interest only occur at a
//! shallow, flat depth.

/// Split a blob into ordered segments for positional lookahead.
pub fn scan(blob: &str) -> Vec<&str> {
    blob.split(':').collect()
}

/// Find the first segment containing `name` as a substring.
///
/// Substring matching, not exact: authoring tools emit segments like
/// `{"_beatsPerMinute"` or `128,"_noteJumpSpeed"`, so a key test must
/// tolerate surrounding delimiters, quotes, and the previous value.
pub fn find_key(segments: &[&str], name: &str) -> Option<usize> {
    segments.iter().position(|seg| seg.contains(name))
}
