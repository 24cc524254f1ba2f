//! Fault-isolated field extractors.
//!
//! Each extractor reads a value relative to a key segment located by the
//! scanner and reports a [`FieldFault`] instead of failing the record.
//! Terminator rules are per key kind and reproduce the authoring-tool
//! conventions existing charts were written against: plain scalars end at
//! the first `,`, color components and anything that can sit last in an
//! object end at the first `,` or `}`.

use serde::{Deserialize, Serialize};

use super::FieldFault;

/// An RGB accent color with components in `[0, 1]`.
///
/// Chart authors use a negative component as an "absent" sentinel, so a
/// `Color` is only ever materialized from non-negative components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Extract the float value following the key at `key_index`.
///
/// The value segment is truncated at the first `,`; a missing segment or
/// unparseable remainder is a fault.
pub fn extract_float(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
) -> Result<f32, FieldFault> {
    let text = value_text(segments, key_index, key, &[','])?;
    text.parse::<f32>().map_err(|_| FieldFault::BadNumber {
        key,
        text: text.to_string(),
    })
}

/// Extract an integer the way chart authors write them: a float form like
/// `3.0` truncates toward zero.
pub fn extract_int(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
) -> Result<i32, FieldFault> {
    let text = value_text(segments, key_index, key, &[','])?;
    let value = text.parse::<f64>().map_err(|_| FieldFault::BadNumber {
        key,
        text: text.to_string(),
    })?;
    if !value.is_finite() || value <= i32::MIN as f64 - 1.0 || value >= i32::MAX as f64 + 1.0 {
        return Err(FieldFault::BadNumber {
            key,
            text: text.to_string(),
        });
    }
    Ok(value as i32)
}

/// Extract a strictly integral value (no float forms).
///
/// Placement fields (`_lineIndex` etc.) are authored as bare integers;
/// anything else in that position is malformed.
pub fn extract_strict_int(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
    terminators: &[char],
) -> Result<i32, FieldFault> {
    let text = value_text(segments, key_index, key, terminators)?;
    text.parse::<i32>().map_err(|_| FieldFault::BadNumber {
        key,
        text: text.to_string(),
    })
}

/// Extract an RGB color via fixed lookahead past the key segment.
///
/// Sub-keys `r`, `g`, `b` are expected in that order in the next three
/// segments, with their values one segment further along. This lookahead
/// is brittle by design and must stay exactly as-is: authoring tools
/// always emit the components in order, and existing charts depend on it.
///
/// A missing segment, missing sub-key, or malformed component is a fault.
/// A negative component is the "absent" sentinel: `Ok(None)`, no fault.
pub fn extract_color(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
) -> Result<Option<Color>, FieldFault> {
    let r = color_component(segments, key_index, key, 'r', 1)?;
    let g = color_component(segments, key_index, key, 'g', 2)?;
    let b = color_component(segments, key_index, key, 'b', 3)?;

    if r < 0.0 || g < 0.0 || b < 0.0 {
        return Ok(None);
    }
    Ok(Some(Color::new(r, g, b)))
}

/// Extract the `[`..`]` string array following the key at `key_index`.
///
/// Quote characters are stripped and the span is split on `,`; elements
/// are returned as-is (deduplication is the tag set's concern). A missing
/// bracket pair is a fault.
pub fn extract_string_array(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
) -> Result<Vec<String>, FieldFault> {
    let segment = segments
        .get(key_index + 1)
        .ok_or(FieldFault::MissingValue { key })?;

    let open = segment
        .find('[')
        .ok_or(FieldFault::MissingBrackets { key })?;
    let rest = &segment[open + 1..];
    let close = rest.find(']').ok_or(FieldFault::MissingBrackets { key })?;

    let span = rest[..close].replace('"', "");
    Ok(span.split(',').map(str::to_string).collect())
}

fn color_component(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
    component: char,
    offset: usize,
) -> Result<f32, FieldFault> {
    let sub_key = segments
        .get(key_index + offset)
        .ok_or(FieldFault::MissingComponent { key, component })?;
    if !sub_key.contains(component) {
        return Err(FieldFault::MissingComponent { key, component });
    }

    let text = value_text(segments, key_index + offset, key, &[',', '}'])?;
    text.parse::<f32>().map_err(|_| FieldFault::BadNumber {
        key,
        text: text.to_string(),
    })
}

fn value_text<'a>(
    segments: &[&'a str],
    key_index: usize,
    key: &'static str,
    terminators: &[char],
) -> Result<&'a str, FieldFault> {
    let segment = segments
        .get(key_index + 1)
        .ok_or(FieldFault::MissingValue { key })?;
    let end = segment
        .find(|c| terminators.contains(&c))
        .unwrap_or(segment.len());
    Ok(segment[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::scan;

    #[test]
    fn test_extract_float_truncates_at_comma() {
        let segments = scan(r#"{"_noteJumpSpeed":10.5,"_other":1}"#);
        assert_eq!(extract_float(&segments, 0, "_noteJumpSpeed"), Ok(10.5));
    }

    #[test]
    fn test_extract_float_malformed_is_fault() {
        let segments = scan(r#"{"_noteJumpSpeed":fast,"_other":1}"#);
        assert!(matches!(
            extract_float(&segments, 0, "_noteJumpSpeed"),
            Err(FieldFault::BadNumber { .. })
        ));
    }

    #[test]
    fn test_extract_float_missing_segment_is_fault() {
        let segments = vec![r#"{"_noteJumpSpeed""#];
        assert_eq!(
            extract_float(&segments, 0, "_noteJumpSpeed"),
            Err(FieldFault::MissingValue {
                key: "_noteJumpSpeed"
            })
        );
    }

    #[test]
    fn test_extract_int_truncates_float_form() {
        let segments = scan(r#"{"_noteJumpStartBeatOffset":3.9,"_x":0}"#);
        assert_eq!(extract_int(&segments, 0, "_noteJumpStartBeatOffset"), Ok(3));
    }

    #[test]
    fn test_extract_int_truncates_toward_zero_when_negative() {
        let segments = scan(r#"{"_noteJumpStartBeatOffset":-2.7,"_x":0}"#);
        assert_eq!(
            extract_int(&segments, 0, "_noteJumpStartBeatOffset"),
            Ok(-2)
        );
    }

    #[test]
    fn test_extract_color_in_order() {
        let segments = scan(r#"{"_colorLeft":{"r":0.5,"g":0.25,"b":1.0},"_x":0}"#);
        assert_eq!(
            extract_color(&segments, 0, "_colorLeft"),
            Ok(Some(Color::new(0.5, 0.25, 1.0)))
        );
    }

    #[test]
    fn test_extract_color_negative_component_is_absent() {
        let segments = scan(r#"{"_colorLeft":{"r":-1,"g":0.25,"b":1.0},"_x":0}"#);
        assert_eq!(extract_color(&segments, 0, "_colorLeft"), Ok(None));
    }

    #[test]
    fn test_extract_color_missing_component_is_fault() {
        let segments = scan(r#"{"_colorLeft":{"r":0.5,"g":0.25},"_x":0}"#);
        assert!(matches!(
            extract_color(&segments, 0, "_colorLeft"),
            Err(FieldFault::MissingComponent { component: 'b', .. })
        ));
    }

    #[test]
    fn test_extract_string_array() {
        let segments = scan(r#"{"_requirements":["Mapping Extensions","Chroma"],"_x":0}"#);
        assert_eq!(
            extract_string_array(&segments, 0, "_requirements"),
            Ok(vec![
                "Mapping Extensions".to_string(),
                "Chroma".to_string()
            ])
        );
    }

    #[test]
    fn test_extract_string_array_missing_brackets_is_fault() {
        let segments = scan(r#"{"_requirements":"oops","_x":0}"#);
        assert_eq!(
            extract_string_array(&segments, 0, "_requirements"),
            Err(FieldFault::MissingBrackets {
                key: "_requirements"
            })
        );
    }
}
