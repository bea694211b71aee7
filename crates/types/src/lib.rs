//! Shared types - plain data and constants used by every other crate
//!
//! Nothing in here depends on I/O, terminals or randomness, so the same types
//! flow unchanged from the engine to the renderer and the input layer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! The game advances one row per tick. The tick interval shrinks linearly with
//! the level and is held at a floor once it would reach zero:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Scoring
//!
//! | Lines in one lock | Points |
//! |-------------------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 600 |
//! | 4 | 1000 |
//!
//! Level is `score / 1000 + 1`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Color::from_str("Purple"), Some(Color::Purple));
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Edge length of the largest shape bounding box
pub const MAX_SHAPE_SIZE: usize = 4;

/// Tick interval at level 1
pub const BASE_TICK_MS: u32 = 1000;

/// Interval reduction per level
pub const TICK_STEP_MS: u32 = 100;

/// Interval floor; reached at level 10
pub const MIN_TICK_MS: u32 = 100;

/// Points for clearing 1, 2, 3 or 4 lines with a single lock (index = lines - 1)
pub const LINE_SCORES: [u32; 4] = [100, 300, 600, 1000];

/// Score needed per level step
pub const POINTS_PER_LEVEL: u32 = 1000;


/// Catalog tags for the 7 polyomino shapes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    L,
    J,
    O,
    Z,
    S,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
    ];

    /// Position in the catalog
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a kind from its letter (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "o" => Some(ShapeKind::O),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::O => "o",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
        }
    }
}

/// Piece colors. A locked cell remembers the color of the piece that filled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// Every color, in palette order
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Red,
    ];

    /// Parse a color name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "purple" => Some(Color::Purple),
            "red" => Some(Color::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// Board cell (None = empty, Some = locked with a color)
pub type Cell = Option<Color>;

/// Discrete commands accepted by the engine.
///
/// Gameplay commands come from the keyboard; `Start`, `TogglePause` and
/// `Restart` come from the UI control surface. `Tick` is produced by the
/// scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Tick,
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    TogglePause,
    Restart,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "tick" => Some(Command::Tick),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "togglepause" => Some(Command::TogglePause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Tick => "tick",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::TogglePause => "togglePause",
            Command::Restart => "restart",
        }
    }

    /// Commands that come from the UI control surface rather than gameplay keys
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            Command::Start | Command::TogglePause | Command::Restart
        )
    }
}

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// No active piece yet
    #[default]
    Ready,
    /// Active piece falling
    Running,
    /// Ticks and gameplay commands are ignored
    Paused,
    /// Terminal; only restart (or start) leaves it
    GameOver,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ready => "ready",
            Mode::Running => "running",
            Mode::Paused => "paused",
            Mode::GameOver => "gameOver",
        }
    }
}

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded by this lock (0 when nothing cleared)
    pub points: u32,
    /// Score after the lock
    pub score: u32,
    /// Level after the lock
    pub level: u32,
    /// The lock ended the game
    pub game_over: bool,
}
