use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimingError {
    #[error("cannot derive timing from tempo {bpm}")]
    InvalidTempo { bpm: f32 },
}

/// Derived timing data for one difficulty.
///
/// Staged via [`set_required_data_for_load`](Self::set_required_data_for_load)
/// and materialized by [`load`](Self::load); conversions are only
/// meaningful once loaded. Reconciliation re-stages and reloads every
/// difficulty with the finalized song tempo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeatmapTiming {
    beats_per_minute: f32,
    shuffle: f32,
    shuffle_period: f32,
    ms_per_beat: f32,
    loaded: bool,
}

impl BeatmapTiming {
    /// Stage the inputs the next [`load`](Self::load) derives from.
    pub fn set_required_data_for_load(
        &mut self,
        beats_per_minute: f32,
        shuffle: f32,
        shuffle_period: f32,
    ) {
        self.beats_per_minute = beats_per_minute;
        self.shuffle = shuffle;
        self.shuffle_period = shuffle_period;
        self.loaded = false;
    }

    /// Recompute the derived timing from the staged inputs.
    pub fn load(&mut self) -> Result<(), TimingError> {
        if !self.beats_per_minute.is_finite() || self.beats_per_minute <= 0.0 {
            return Err(TimingError::InvalidTempo {
                bpm: self.beats_per_minute,
            });
        }
        self.ms_per_beat = 60_000.0 / self.beats_per_minute;
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn beats_per_minute(&self) -> f32 {
        self.beats_per_minute
    }

    /// Convert a beat position to milliseconds, applying the shuffle
    /// offset to off-beats within each shuffle period.
    pub fn beat_to_ms(&self, beat: f32) -> f32 {
        let mut beat = beat;
        if self.shuffle != 0.0 && self.shuffle_period > 0.0 {
            let phase = (beat / self.shuffle_period).floor() as i64;
            if phase.rem_euclid(2) == 1 {
                beat += self.shuffle * self.shuffle_period;
            }
        }
        beat * self.ms_per_beat
    }
}
