//! Tests for placement-extension requirement inference boundaries.

use songloader::meta::{
    EXTRA_NOTE_ANGLES, MORE_LANES, PRECISION_PLACEMENT, parse_difficulty_blob,
};

fn requirements_for(blob: &str) -> Vec<String> {
    let (meta, faults) = parse_difficulty_blob(blob);
    assert!(faults.is_empty(), "unexpected faults: {faults:?}");
    meta.requirements.as_slice().to_vec()
}

/// The last official lane (3) infers nothing; lane 4 needs more lanes.
#[test]
fn test_line_index_upper_boundary() {
    assert!(requirements_for(r#"{"_lineIndex":3,"_x":0}"#).is_empty());
    assert_eq!(requirements_for(r#"{"_lineIndex":4,"_x":0}"#), [MORE_LANES]);
}

/// Negative lanes need more lanes until the precision band takes over.
#[test]
fn test_line_index_lower_boundary() {
    assert_eq!(requirements_for(r#"{"_lineIndex":-1,"_x":0}"#), [MORE_LANES]);
    assert_eq!(
        requirements_for(r#"{"_lineIndex":-1000,"_x":0}"#),
        [PRECISION_PLACEMENT]
    );
}

/// 999 is still an extra lane; 1000 flips to precision placement.
#[test]
fn test_line_index_precision_band() {
    assert_eq!(requirements_for(r#"{"_lineIndex":999,"_x":0}"#), [MORE_LANES]);
    assert_eq!(
        requirements_for(r#"{"_lineIndex":1000,"_x":0}"#),
        [PRECISION_PLACEMENT]
    );
}

/// Layers official range tops out at 2, one lower than lanes.
#[test]
fn test_line_layer_boundary() {
    assert!(requirements_for(r#"{"_lineLayer":2,"_x":0}"#).is_empty());
    assert_eq!(requirements_for(r#"{"_lineLayer":3,"_x":0}"#), [MORE_LANES]);
}

/// Both precision-angle bands are closed on both ends.
#[test]
fn test_cut_direction_bands() {
    assert_eq!(
        requirements_for(r#"{"_cutDirection":1000,"_x":0}"#),
        [EXTRA_NOTE_ANGLES]
    );
    assert_eq!(
        requirements_for(r#"{"_cutDirection":1360,"_x":0}"#),
        [EXTRA_NOTE_ANGLES]
    );
    assert!(requirements_for(r#"{"_cutDirection":1361,"_x":0}"#).is_empty());
    assert_eq!(
        requirements_for(r#"{"_cutDirection":2360,"_x":0}"#),
        [EXTRA_NOTE_ANGLES]
    );
    assert!(requirements_for(r#"{"_cutDirection":2361,"_x":0}"#).is_empty());
}

/// Hundreds of in-range notes infer nothing; one outlier is enough, and
/// repeats of the same inference stay deduplicated.
#[test]
fn test_inference_over_many_notes() {
    let mut notes = vec![r#"{"_lineIndex":0,"_lineLayer":0,"_cutDirection":1}"#.to_string(); 50];
    notes.push(r#"{"_lineIndex":7,"_lineLayer":0,"_cutDirection":1}"#.to_string());
    notes.push(r#"{"_lineIndex":7,"_lineLayer":0,"_cutDirection":1}"#.to_string());
    let blob = format!(r#"{{"_notes":[{}],"_x":0}}"#, notes.join(","));

    assert_eq!(requirements_for(&blob), [MORE_LANES]);
}
