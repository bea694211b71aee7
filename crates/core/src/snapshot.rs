use crate::board::Board;
use crate::piece::Piece;
use crate::types::Mode;

/// Read-only copy of everything a renderer or score display needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Piece>,
    /// Preview pane piece
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub mode: Mode,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Gameplay input would be accepted
    pub fn playable(&self) -> bool {
        self.mode == Mode::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::default(),
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            mode: Mode::Ready,
            episode_id: 0,
        }
    }
}
