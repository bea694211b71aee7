//! Scoring module - line clear points, level derivation and tick speed
//!
//! All three rules are pure functions so the engine, the scheduler and the
//! display can share them without holding any state.

use crate::types::{BASE_TICK_MS, LINE_SCORES, MIN_TICK_MS, POINTS_PER_LEVEL, TICK_STEP_MS};

/// Points for clearing `lines` rows with a single lock.
///
/// A single lock clears at most as many rows as the tallest shape, so only
/// 1..=4 is reachable. Multi-line clears use the table entry for `lines`,
/// never `lines` single awards.
pub fn line_clear_points(lines: usize) -> u32 {
    debug_assert!(
        (1..=LINE_SCORES.len()).contains(&lines),
        "a single lock cannot clear {} lines",
        lines
    );
    LINE_SCORES[lines - 1]
}

/// `score / 1000 + 1`
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Time between two gravity ticks at `level`.
///
/// Shrinks by 100ms per level and holds at [`MIN_TICK_MS`] from level 10 on.
pub fn tick_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(TICK_STEP_MS);
    BASE_TICK_MS.saturating_sub(reduction).max(MIN_TICK_MS)
}
