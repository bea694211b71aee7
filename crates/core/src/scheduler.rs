//! Scheduler module - fixed-interval tick driver without a real clock
//!
//! The caller supplies "now" in milliseconds, so the same scheduler runs in
//! the terminal loop (fed from `Instant`) and in tests (fed by hand).
//! A tick runs to completion before the next one is armed, and the next
//! interval is read after the tick, so a level-up speeds up the very next wait.

use crate::game_state::GameState;
use crate::rng::PieceSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickScheduler {
    due_at_ms: Option<u64>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick `interval_ms` after `now_ms`
    pub fn arm(&mut self, now_ms: u64, interval_ms: u32) {
        self.due_at_ms = Some(now_ms.saturating_add(interval_ms as u64));
    }

    pub fn disarm(&mut self) {
        self.due_at_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_at_ms.is_some()
    }

    pub fn due_at(&self) -> Option<u64> {
        self.due_at_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        matches!(self.due_at_ms, Some(due) if now_ms >= due)
    }

    /// Milliseconds left before the next tick (zero when overdue)
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.due_at_ms.map(|due| due.saturating_sub(now_ms))
    }

    /// Run at most one tick if it is due, then re-arm from `now_ms`.
    ///
    /// Ticks keep firing while the game is paused, ready or over; the engine
    /// ignores them. Returns whether the tick changed the game.
    pub fn poll<S: PieceSource>(&mut self, now_ms: u64, game: &mut GameState<S>) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        let changed = game.tick();
        self.arm(now_ms, game.tick_interval());
        changed
    }
}
