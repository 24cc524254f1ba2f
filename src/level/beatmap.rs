//! Difficulty beatmap variants.
//!
//! A difficulty either carries plain authored values (`Standard`) or an
//! extended record parsed from its blob (`Extended`). The split is an
//! explicit tagged variant; callers branch on it instead of downcasting.

use serde::{Deserialize, Serialize};

use super::BeatmapTiming;
use crate::meta::{Color, DifficultyMetadata};

/// Fields every difficulty has regardless of variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeatmapCore {
    pub difficulty: String,
    pub difficulty_rank: i32,
    pub note_jump_speed: f32,
    pub note_jump_start_beat_offset: i32,
    pub timing: BeatmapTiming,
}

impl BeatmapCore {
    pub fn new(difficulty: impl Into<String>, difficulty_rank: i32) -> Self {
        Self {
            difficulty: difficulty.into(),
            difficulty_rank,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DifficultyBeatmap {
    Standard(BeatmapCore),
    Extended(ExtendedBeatmap),
}

impl DifficultyBeatmap {
    pub fn core(&self) -> &BeatmapCore {
        match self {
            Self::Standard(core) => core,
            Self::Extended(ext) => &ext.core,
        }
    }

    pub fn difficulty(&self) -> &str {
        &self.core().difficulty
    }

    pub fn as_extended(&self) -> Option<&ExtendedBeatmap> {
        match self {
            Self::Standard(_) => None,
            Self::Extended(ext) => Some(ext),
        }
    }

    pub(crate) fn as_extended_mut(&mut self) -> Option<&mut ExtendedBeatmap> {
        match self {
            Self::Standard(_) => None,
            Self::Extended(ext) => Some(ext),
        }
    }
}

/// A difficulty with extracted blob metadata.
///
/// The reconciliation pass writes in two steps: the parsed record is
/// always stored (so the pre-play panel tags survive even when nothing
/// is playable-applied), while jump speed, offset, and colors only reach
/// the applied state via [`apply_stored_metadata`](Self::apply_stored_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedBeatmap {
    pub core: BeatmapCore,
    meta: DifficultyMetadata,
    color_left: Option<Color>,
    color_right: Option<Color>,
    has_custom_colors: bool,
}

impl ExtendedBeatmap {
    pub fn new(core: BeatmapCore) -> Self {
        Self {
            core,
            meta: DifficultyMetadata::default(),
            color_left: None,
            color_right: None,
            has_custom_colors: false,
        }
    }

    /// Store the extracted record. Panel tags become visible immediately;
    /// nothing playable changes until
    /// [`apply_stored_metadata`](Self::apply_stored_metadata) runs.
    pub fn store_metadata(&mut self, meta: DifficultyMetadata) {
        self.meta = meta;
    }

    /// Write the stored record into this difficulty's applied state.
    ///
    /// Jump speed and start beat offset land on the core when present;
    /// each accent color present is applied and marks the custom-colors
    /// flag.
    pub fn apply_stored_metadata(&mut self) {
        if let Some(speed) = self.meta.note_jump_speed {
            self.core.note_jump_speed = speed;
        }
        if let Some(offset) = self.meta.note_jump_start_beat_offset {
            self.core.note_jump_start_beat_offset = offset;
        }
        if let Some(color) = self.meta.color_left {
            self.color_left = Some(color);
            self.has_custom_colors = true;
        }
        if let Some(color) = self.meta.color_right {
            self.color_right = Some(color);
            self.has_custom_colors = true;
        }
    }

    pub fn metadata(&self) -> &DifficultyMetadata {
        &self.meta
    }

    pub fn has_custom_colors(&self) -> bool {
        self.has_custom_colors
    }

    /// The applied left accent color, if any. Stored-but-unapplied colors
    /// stay on [`metadata`](Self::metadata) only.
    pub fn color_left(&self) -> Option<Color> {
        self.color_left
    }

    pub fn color_right(&self) -> Option<Color> {
        self.color_right
    }

    pub fn requirements(&self) -> &[String] {
        self.meta.requirements.as_slice()
    }

    pub fn suggestions(&self) -> &[String] {
        self.meta.suggestions.as_slice()
    }

    pub fn warnings(&self) -> &[String] {
        self.meta.warnings.as_slice()
    }

    pub fn information(&self) -> &[String] {
        self.meta.information.as_slice()
    }
}
