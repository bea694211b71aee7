//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The mapping is
//! stateless: held keys arrive as terminal auto-repeat events and are treated
//! exactly like fresh presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{accepts_kind, map_key, should_quit};
