//! Scoring module - per-frame score and the difficulty derived from it
//!
//! Score grows by a fixed step on every frame that does not end the game.
//! Difficulty is a saturating linear ramp over score:
//!
//! ```text
//! difficulty = min(score * MAX_DIFFICULTY / SCORE_CEILING, MAX_DIFFICULTY)
//! ```
//!
//! It narrows the spawn gap (see [`crate::obstacle::spawn_gap_bounds`]) and
//! shortens the frame delay in checkpoints of [`DELAY_CHECKPOINT_SPAN`].

use crate::types::{
    DELAY_CHECKPOINT_SPAN, FRAME_DELAY_PERCENT, MAX_DIFFICULTY, MIN_FRAME_DELAY_MS, SCORE_CEILING,
};

/// Difficulty for a given score.
pub fn difficulty_for_score(score: u32) -> u32 {
    let ramp = (score as u64 * MAX_DIFFICULTY as u64) / SCORE_CEILING as u64;
    ramp.min(MAX_DIFFICULTY as u64) as u32
}

/// Frame delay after difficulty checkpoints are applied.
///
/// Never drops below [`MIN_FRAME_DELAY_MS`] unless the base delay is already
/// lower, so a zero base delay stays zero.
pub fn frame_delay_ms(base_delay_ms: u64, difficulty: u32) -> u64 {
    let checkpoint = ((difficulty / DELAY_CHECKPOINT_SPAN) as usize).min(FRAME_DELAY_PERCENT.len() - 1);
    let scaled = (base_delay_ms as u128 * FRAME_DELAY_PERCENT[checkpoint] as u128 / 100) as u64;
    scaled.max(MIN_FRAME_DELAY_MS.min(base_delay_ms))
}

/// Score and difficulty for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    difficulty: u32,
    step: u32,
}

impl Progress {
    pub fn new(step: u32) -> Self {
        Self {
            score: 0,
            difficulty: 0,
            step,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Credit one surviving frame and recompute difficulty.
    ///
    /// Returns true when difficulty went up.
    pub fn advance(&mut self) -> bool {
        self.score = self.score.saturating_add(self.step);
        let next = difficulty_for_score(self.score);
        debug_assert!(next >= self.difficulty);
        let raised = next > self.difficulty;
        if raised {
            log::debug!("difficulty {} -> {} at score {}", self.difficulty, next, self.score);
        }
        self.difficulty = next;
        raised
    }
}
