//! Terminal renderer.
//!
//! A small, game-oriented rendering layer: the view draws a
//! [`core::GameSnapshot`](blockfall_core::GameSnapshot) into a framebuffer,
//! and the renderer flushes framebuffers to the terminal.
//!
//! The view never touches the engine; it only reads snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
