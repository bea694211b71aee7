//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the game. It has **no
//! dependencies** on terminals, clocks or files:
//!
//! - **Deterministic**: same piece source, same game (seeded RNG or a script)
//! - **Testable**: time is passed in, commands are plain values
//! - **Portable**: the terminal front end is just one possible renderer
//!
//! # Module Structure
//!
//! - [`geometry`]: shape catalog and clockwise rotation
//! - [`board`]: grid storage, collision test, merge, line clearing
//! - [`piece`]: the falling piece and its spawn rule
//! - [`rng`]: seeded uniform piece source and a scripted one for tests
//! - [`scoring`]: line clear points, level derivation, tick speed
//! - [`game_state`]: the engine state machine (`Ready -> Running <-> Paused -> GameOver`)
//! - [`scheduler`]: fixed-interval tick driver fed with caller time
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ScriptedSource};
//! use blockfall_types::{Color, Command, Mode, ShapeKind};
//!
//! let mut game = GameState::with_source(ScriptedSource::from_kinds(&[ShapeKind::O], Color::Yellow));
//! game.apply(Command::Start);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::HardDrop);
//!
//! assert_eq!(game.mode(), Mode::Running);
//! assert_eq!(game.board().get(5, 19), Some(Some(Color::Yellow)));
//! ```

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use geometry::{rotate, shape, Shape};
pub use piece::Piece;
pub use rng::{pick_uniform, PieceSource, PieceSpec, RandomSource, ScriptedSource, SimpleRng};
pub use scheduler::TickScheduler;
pub use scoring::{level_for_score, line_clear_points, tick_interval_ms};
pub use snapshot::GameSnapshot;
