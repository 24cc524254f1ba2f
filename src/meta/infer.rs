//! Placement-extension inference.
//!
//! Nothing in a chart states that it needs an unofficial placement
//! extension; the only evidence is note placement fields outside their
//! official ranges. The thresholds here are a compatibility surface with
//! the existing chart ecosystem and must not drift.

/// Requirement tag for lane/layer values outside the official grid.
pub const MORE_LANES: &str = "More Lanes";
/// Requirement tag for thousand-scaled precision placement values.
pub const PRECISION_PLACEMENT: &str = "Precision Placement";
/// Requirement tag for thousand-scaled cut direction angles.
pub const EXTRA_NOTE_ANGLES: &str = "Extra Note Angles";

const PRECISION_SCALE: i32 = 1000;

/// Requirement implied by a `_lineIndex` value. Official range is `[0, 3]`.
pub fn line_index_requirement(value: i32) -> Option<&'static str> {
    placement_requirement(value, 3)
}

/// Requirement implied by a `_lineLayer` value. Official range is `[0, 2]`.
pub fn line_layer_requirement(value: i32) -> Option<&'static str> {
    placement_requirement(value, 2)
}

/// Requirement implied by a `_cutDirection` value.
///
/// Precision angles are encoded as `1000 + degrees` (counterclockwise)
/// or `2000 + degrees` (clockwise), so only `[1000, 1360]` and
/// `[2000, 2360]` count; anything else is an ordinary direction.
pub fn cut_direction_requirement(value: i32) -> Option<&'static str> {
    if (1000..=1360).contains(&value) || (2000..=2360).contains(&value) {
        Some(EXTRA_NOTE_ANGLES)
    } else {
        None
    }
}

fn placement_requirement(value: i32, in_range_max: i32) -> Option<&'static str> {
    if value >= PRECISION_SCALE || value <= -PRECISION_SCALE {
        Some(PRECISION_PLACEMENT)
    } else if value < 0 || value > in_range_max {
        Some(MORE_LANES)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_in_range() {
        assert_eq!(line_index_requirement(0), None);
        assert_eq!(line_index_requirement(3), None);
    }

    #[test]
    fn test_line_index_extra_lanes() {
        assert_eq!(line_index_requirement(4), Some(MORE_LANES));
        assert_eq!(line_index_requirement(-1), Some(MORE_LANES));
        assert_eq!(line_index_requirement(999), Some(MORE_LANES));
    }

    #[test]
    fn test_line_index_precision() {
        assert_eq!(line_index_requirement(1000), Some(PRECISION_PLACEMENT));
        assert_eq!(line_index_requirement(-1000), Some(PRECISION_PLACEMENT));
    }

    #[test]
    fn test_line_layer_bound_differs_from_line_index() {
        assert_eq!(line_layer_requirement(2), None);
        assert_eq!(line_layer_requirement(3), Some(MORE_LANES));
    }

    #[test]
    fn test_cut_direction_bands() {
        assert_eq!(cut_direction_requirement(1000), Some(EXTRA_NOTE_ANGLES));
        assert_eq!(cut_direction_requirement(1360), Some(EXTRA_NOTE_ANGLES));
        assert_eq!(cut_direction_requirement(1361), None);
        assert_eq!(cut_direction_requirement(2360), Some(EXTRA_NOTE_ANGLES));
        assert_eq!(cut_direction_requirement(2361), None);
        assert_eq!(cut_direction_requirement(8), None);
    }
}
