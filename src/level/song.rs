use serde::{Deserialize, Serialize};

use super::DifficultyBeatmap;

/// One authored difficulty's raw record: its label and its blob, exactly
/// as shipped. The blob may be empty or malformed; that is the extraction
/// layer's problem, not an invalid record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyLevel {
    pub difficulty: String,
    pub json: String,
}

/// Static song metadata as authored, including the declared tempo and
/// the shuffle settings pushed into each difficulty's derived timing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongInfo {
    pub song_name: String,
    pub song_sub_name: String,
    pub song_author_name: String,
    pub beats_per_minute: f32,
    pub song_time_offset: f32,
    pub shuffle: f32,
    pub shuffle_period: f32,
    pub preview_start_time: f32,
    pub preview_duration: f32,
    pub environment_name: String,
    pub difficulty_levels: Vec<DifficultyLevel>,
}

/// An in-memory song instance owning its difficulties.
///
/// `beats_per_minute` starts as the declared tempo and is replaced by the
/// reconciled tempo when [`fix_tempo_and_note_speed`] runs; `tempo_fixed`
/// is the one-way latch that makes that run happen at most once.
///
/// [`fix_tempo_and_note_speed`]: Song::fix_tempo_and_note_speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub(crate) info: SongInfo,
    pub(crate) beats_per_minute: f32,
    pub(crate) tempo_fixed: bool,
    pub(crate) beatmaps: Vec<DifficultyBeatmap>,
}

impl Song {
    pub fn new(info: SongInfo, beatmaps: Vec<DifficultyBeatmap>) -> Self {
        let beats_per_minute = info.beats_per_minute;
        Self {
            info,
            beats_per_minute,
            tempo_fixed: false,
            beatmaps,
        }
    }

    /// Stable identifier for duplicate detection across song folders.
    pub fn identifier(&self) -> String {
        format!(
            "{}∎{}∎{}∎{}",
            self.info.song_name,
            self.info.song_sub_name,
            self.info.song_author_name,
            self.info.beats_per_minute,
        )
    }

    pub fn info(&self) -> &SongInfo {
        &self.info
    }

    /// The current song tempo: declared until fixed, reconciled after.
    pub fn beats_per_minute(&self) -> f32 {
        self.beats_per_minute
    }

    pub fn is_tempo_fixed(&self) -> bool {
        self.tempo_fixed
    }

    pub fn beatmaps(&self) -> &[DifficultyBeatmap] {
        &self.beatmaps
    }

    pub fn beatmap(&self, difficulty: &str) -> Option<&DifficultyBeatmap> {
        self.beatmaps.iter().find(|b| b.difficulty() == difficulty)
    }

    /// Release the latch so a reloaded song can be reconciled again.
    pub fn reset(&mut self) {
        self.tempo_fixed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_stable_per_authored_fields() {
        let info = SongInfo {
            song_name: "Song".into(),
            song_author_name: "Author".into(),
            beats_per_minute: 120.0,
            ..SongInfo::default()
        };
        let song = Song::new(info, Vec::new());
        assert_eq!(song.identifier(), Song::new(song.info.clone(), Vec::new()).identifier());
    }

    #[test]
    fn test_new_song_starts_unfixed_at_declared_tempo() {
        let info = SongInfo {
            beats_per_minute: 95.0,
            ..SongInfo::default()
        };
        let song = Song::new(info, Vec::new());
        assert!(!song.is_tempo_fixed());
        assert_eq!(song.beats_per_minute(), 95.0);
    }
}
