//! Per-difficulty metadata record and its extraction driver.

use serde::{Deserialize, Serialize};

use super::{
    Color, FieldFault, TagSet, cut_direction_requirement, extract_color, extract_float,
    extract_int, extract_strict_int, extract_string_array, line_index_requirement,
    line_layer_requirement, scan,
};

pub const KEY_BEATS_PER_MINUTE: &str = "_beatsPerMinute";
pub const KEY_NOTE_JUMP_SPEED: &str = "_noteJumpSpeed";
pub const KEY_NOTE_JUMP_START_BEAT_OFFSET: &str = "_noteJumpStartBeatOffset";
pub const KEY_COLOR_LEFT: &str = "_colorLeft";
pub const KEY_COLOR_RIGHT: &str = "_colorRight";
pub const KEY_REQUIREMENTS: &str = "_requirements";
pub const KEY_SUGGESTIONS: &str = "_suggestions";
pub const KEY_WARNINGS: &str = "_warnings";
pub const KEY_INFORMATION: &str = "_information";
pub const KEY_LINE_INDEX: &str = "_lineIndex";
pub const KEY_LINE_LAYER: &str = "_lineLayer";
pub const KEY_CUT_DIRECTION: &str = "_cutDirection";

/// Everything extractable from one difficulty's blob.
///
/// Every field is independently optional; a record with nothing set is
/// valid and simply means the difficulty carries no custom metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DifficultyMetadata {
    pub beats_per_minute: Option<f32>,
    pub note_jump_speed: Option<f32>,
    pub note_jump_start_beat_offset: Option<i32>,
    pub color_left: Option<Color>,
    pub color_right: Option<Color>,
    pub requirements: TagSet,
    pub suggestions: TagSet,
    pub warnings: TagSet,
    pub information: TagSet,
}

/// Extract a [`DifficultyMetadata`] from a raw difficulty blob.
///
/// One pass over the scanned segments, dispatching on every segment that
/// contains a known key. Later occurrences of a scalar key overwrite
/// earlier ones, and the placement keys are inferred on every occurrence
/// since each placed note carries them. A fault in one key's region is
/// recorded and the pass continues; an empty or entirely malformed blob
/// yields an all-absent record. This never fails.
pub fn parse_difficulty_blob(blob: &str) -> (DifficultyMetadata, Vec<FieldFault>) {
    let mut meta = DifficultyMetadata::default();
    let mut faults = Vec::new();
    let segments = scan(blob);

    for i in 0..segments.len() {
        let segment = segments[i];

        if segment.contains(KEY_BEATS_PER_MINUTE) {
            match extract_float(&segments, i, KEY_BEATS_PER_MINUTE) {
                Ok(v) => meta.beats_per_minute = Some(v),
                Err(fault) => faults.push(fault),
            }
        }
        if segment.contains(KEY_NOTE_JUMP_SPEED) {
            match extract_float(&segments, i, KEY_NOTE_JUMP_SPEED) {
                Ok(v) => meta.note_jump_speed = Some(v),
                Err(fault) => faults.push(fault),
            }
        }
        if segment.contains(KEY_NOTE_JUMP_START_BEAT_OFFSET) {
            match extract_int(&segments, i, KEY_NOTE_JUMP_START_BEAT_OFFSET) {
                Ok(v) => meta.note_jump_start_beat_offset = Some(v),
                Err(fault) => faults.push(fault),
            }
        }

        if segment.contains(KEY_COLOR_LEFT) {
            match extract_color(&segments, i, KEY_COLOR_LEFT) {
                Ok(color) => meta.color_left = color,
                Err(fault) => faults.push(fault),
            }
        }
        if segment.contains(KEY_COLOR_RIGHT) {
            match extract_color(&segments, i, KEY_COLOR_RIGHT) {
                Ok(color) => meta.color_right = color,
                Err(fault) => faults.push(fault),
            }
        }

        if segment.contains(KEY_REQUIREMENTS) {
            extract_tags(&segments, i, KEY_REQUIREMENTS, &mut meta.requirements, &mut faults);
        }
        if segment.contains(KEY_SUGGESTIONS) {
            extract_tags(&segments, i, KEY_SUGGESTIONS, &mut meta.suggestions, &mut faults);
        }
        if segment.contains(KEY_WARNINGS) {
            extract_tags(&segments, i, KEY_WARNINGS, &mut meta.warnings, &mut faults);
        }
        if segment.contains(KEY_INFORMATION) {
            extract_tags(&segments, i, KEY_INFORMATION, &mut meta.information, &mut faults);
        }

        if segment.contains(KEY_LINE_INDEX) {
            match extract_strict_int(&segments, i, KEY_LINE_INDEX, &[',']) {
                Ok(v) => {
                    if let Some(req) = line_index_requirement(v) {
                        meta.requirements.insert(req);
                    }
                }
                Err(fault) => faults.push(fault),
            }
        }
        if segment.contains(KEY_LINE_LAYER) {
            match extract_strict_int(&segments, i, KEY_LINE_LAYER, &[',']) {
                Ok(v) => {
                    if let Some(req) = line_layer_requirement(v) {
                        meta.requirements.insert(req);
                    }
                }
                Err(fault) => faults.push(fault),
            }
        }
        if segment.contains(KEY_CUT_DIRECTION) {
            // cut direction can sit last in a note object, so `}` also ends it
            match extract_strict_int(&segments, i, KEY_CUT_DIRECTION, &[',', '}']) {
                Ok(v) => {
                    if let Some(req) = cut_direction_requirement(v) {
                        meta.requirements.insert(req);
                    }
                }
                Err(fault) => faults.push(fault),
            }
        }
    }

    (meta, faults)
}

fn extract_tags(
    segments: &[&str],
    key_index: usize,
    key: &'static str,
    tags: &mut TagSet,
    faults: &mut Vec<FieldFault>,
) {
    match extract_string_array(segments, key_index, key) {
        Ok(values) => {
            for value in values {
                tags.insert(value);
            }
        }
        Err(fault) => faults.push(fault),
    }
}
