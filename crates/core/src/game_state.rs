//! Game state module - the engine
//!
//! Owns the board, the active and next pieces, the piece source, score, level
//! and the lifecycle mode. Everything outside the engine reads a
//! [`GameSnapshot`] and talks back through [`Command`]s.
//!
//! Rejected moves and commands issued in the wrong mode are silent no-ops:
//! every command returns whether it changed the state, nothing returns an error.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomSource};
use crate::scoring::{level_for_score, line_clear_points, tick_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::{Command, LockEvent, Mode, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    source: S,
    score: u32,
    level: u32,
    /// Total rows cleared this game
    lines: u32,
    mode: Mode,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers)
    last_event: Option<LockEvent>,
}

impl GameState<RandomSource> {
    /// Create a standard 10x20 game with a seeded uniform piece source
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomSource::new(seed))
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl Default for GameState<RandomSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Standard 10x20 game fed by `source`
    pub fn with_source(source: S) -> Self {
        Self::with_board(source, BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Game on a `width x height` board fed by `source`
    pub fn with_board(source: S, width: u8, height: u8) -> Self {
        Self {
            board: Board::new(width, height),
            active: None,
            next: None,
            source,
            score: 0,
            level: 1,
            lines: 0,
            mode: Mode::Ready,
            episode_id: 0,
            pieces_locked: 0,
            last_event: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn game_over(&self) -> bool {
        self.mode == Mode::GameOver
    }

    /// Gravity interval for the current level, in milliseconds
    pub fn tick_interval(&self) -> u32 {
        tick_interval_ms(self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.mode = self.mode;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start a game on an empty board.
    ///
    /// Only valid from `Ready` or `GameOver`.
    pub fn start(&mut self) -> bool {
        let width = self.board.width();
        let height = self.board.height();
        self.start_with(Board::new(width, height))
    }

    /// Start a game on a prepared board (garbage rows, puzzles, tests).
    ///
    /// Only valid from `Ready` or `GameOver`. Rows that are already full are
    /// cleared without scoring, so a single lock never clears more than four.
    pub fn start_with(&mut self, mut board: Board) -> bool {
        if !matches!(self.mode, Mode::Ready | Mode::GameOver) {
            return false;
        }

        board.clear_full_lines();
        self.board = board;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.pieces_locked = 0;
        self.last_event = None;

        let width = self.board.width();
        self.active = Some(Piece::spawn_from(&mut self.source, width));
        self.next = Some(Piece::spawn_from(&mut self.source, width));
        self.mode = Mode::Running;
        true
    }

    /// One gravity step: move down, or lock when the row below is blocked
    pub fn tick(&mut self) -> bool {
        if self.mode != Mode::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.translated(0, 1);
        if !self.board.collides(&moved) {
            self.active = Some(moved);
        } else {
            self.lock_active();
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate clockwise in place; rejected when the rotated shape collides
    pub fn rotate(&mut self) -> bool {
        self.try_replace(|p| p.rotated())
    }

    /// Same as a tick
    pub fn soft_drop(&mut self) -> bool {
        self.tick()
    }

    /// Drop to the lowest free row and lock immediately.
    ///
    /// A piece that already overlaps the stack (a promoted piece is not
    /// checked at spawn) locks one row up instead, so its top row falls off
    /// the grid and the game goes on.
    pub fn hard_drop(&mut self) -> bool {
        if self.mode != Mode::Running {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        if self.board.collides(&piece) {
            self.active = Some(piece.translated(0, -1));
            self.lock_active();
            return true;
        }

        loop {
            let below = piece.translated(0, 1);
            if self.board.collides(&below) {
                break;
            }
            piece = below;
        }

        self.active = Some(piece);
        self.lock_active();
        true
    }

    /// Running <-> Paused; ignored in any other mode
    pub fn toggle_pause(&mut self) -> bool {
        match self.mode {
            Mode::Running => self.mode = Mode::Paused,
            Mode::Paused => self.mode = Mode::Running,
            Mode::Ready | Mode::GameOver => return false,
        }
        true
    }

    /// End the current game (whatever its mode) and start a fresh one
    pub fn restart(&mut self) -> bool {
        self.mode = Mode::GameOver;
        self.active = None;
        self.next = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start()
    }

    /// Apply a command
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Tick => self.tick(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
        }
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        self.try_replace(|p| p.translated(dx, dy))
    }

    /// Swap the active piece for `f(active)` unless the result collides
    fn try_replace(&mut self, f: impl FnOnce(&Piece) -> Piece) -> bool {
        if self.mode != Mode::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = f(&active);
        if self.board.collides(&candidate) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Merge the active piece, clear lines, score, then either end the game
    /// or promote the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared = self.board.clear_full_lines();
        let mut points = 0;
        if cleared > 0 {
            points = line_clear_points(cleared);
            self.score += points;
            self.lines += cleared as u32;
            self.level = level_for_score(self.score);
        }

        // A piece that locks while still on the top row ends the game. The
        // promoted piece is not checked for overlap at spawn.
        let game_over = piece.y == 0;
        if game_over {
            self.mode = Mode::GameOver;
        } else {
            let width = self.board.width();
            self.active = self.next.take();
            self.next = Some(Piece::spawn_from(&mut self.source, width));
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            score: self.score,
            level: self.level,
            game_over,
        });
    }
}
