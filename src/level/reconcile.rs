//! Song-level tempo reconciliation and metadata application.

use log::{debug, warn};

use super::{DifficultyBeatmap, Song};
use crate::meta::parse_difficulty_blob;

/// Majority-vote tally over per-difficulty declared tempos.
///
/// The song's own declared tempo is always a candidate, seeded at zero
/// votes. Candidates are keyed by exact value (bit equality): two
/// nearly-equal floating tempos stay distinct, which is a long-standing
/// quirk of the chart ecosystem rather than something to fix here.
#[derive(Debug)]
pub struct TempoTally {
    candidates: Vec<(f32, u32)>,
}

impl TempoTally {
    pub fn new(declared: f32) -> Self {
        Self {
            candidates: vec![(declared, 0)],
        }
    }

    /// Count one vote for `bpm`, inserting it as a new candidate if unseen.
    pub fn record(&mut self, bpm: f32) {
        match self
            .candidates
            .iter_mut()
            .find(|(candidate, _)| candidate.to_bits() == bpm.to_bits())
        {
            Some((_, votes)) => *votes += 1,
            None => self.candidates.push((bpm, 1)),
        }
    }

    /// The winning tempo.
    ///
    /// Ties resolve to the earliest-inserted candidate, and the declared
    /// tempo is inserted first: declared-tempo-first, then vote count
    /// descending, then insertion order.
    pub fn winner(&self) -> f32 {
        let (mut winner, mut best) = self.candidates[0];
        for &(bpm, votes) in &self.candidates[1..] {
            if votes > best {
                winner = bpm;
                best = votes;
            }
        }
        winner
    }
}

impl Song {
    /// Reconcile per-difficulty metadata into the song, exactly once.
    ///
    /// Extracts every difficulty's blob, majority-votes the song tempo,
    /// applies jump speed / offset / colors per difficulty, then pushes
    /// the finalized tempo and shuffle settings into every extended
    /// difficulty's derived timing. All faults are logged and contained:
    /// this never fails, and the latch is set even when individual
    /// difficulties degrade to defaults. Re-invocation is a no-op.
    ///
    /// A difficulty whose blob carries no jump speed keeps its parsed
    /// panel tags but has nothing applied to its playable state (after
    /// its tempo vote is counted), and the remaining difficulties are
    /// still processed.
    pub fn fix_tempo_and_note_speed(&mut self) {
        if self.tempo_fixed {
            return;
        }

        let mut tally = TempoTally::new(self.info.beats_per_minute);

        for level in &self.info.difficulty_levels {
            if level.json.is_empty() {
                continue;
            }
            let Some(ext) = self
                .beatmaps
                .iter_mut()
                .find(|b| b.difficulty() == level.difficulty)
                .and_then(DifficultyBeatmap::as_extended_mut)
            else {
                continue;
            };

            let (meta, faults) = parse_difficulty_blob(&level.json);
            for fault in &faults {
                warn!("{}: {}", level.difficulty, fault);
            }

            if let Some(bpm) = meta.beats_per_minute {
                tally.record(bpm);
            }

            // tags always surface on the panel; only speed/offset/color
            // application needs a jump speed to anchor to
            let has_jump_speed = meta.note_jump_speed.is_some();
            ext.store_metadata(meta);
            if !has_jump_speed {
                debug!("{}: blob carries no jump speed, keeping defaults", level.difficulty);
                continue;
            }
            ext.apply_stored_metadata();
        }

        self.beats_per_minute = tally.winner();

        for beatmap in &mut self.beatmaps {
            let Some(ext) = beatmap.as_extended_mut() else {
                continue;
            };
            ext.core.timing.set_required_data_for_load(
                self.beats_per_minute,
                self.info.shuffle,
                self.info.shuffle_period,
            );
            if let Err(err) = ext.core.timing.load() {
                warn!("{}: timing reload failed: {}", ext.core.difficulty, err);
            }
        }

        self.tempo_fixed = true;
    }
}
