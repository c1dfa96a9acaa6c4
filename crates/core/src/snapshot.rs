//! Read-only copies of the game state for collaborators that draw or inspect it

use crate::game_state::Tetromino;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates of the piece's four blocks
    pub fn blocks(&self) -> [(i8, i8); 4] {
        let cells = crate::shapes::get_shape(self.kind, self.rotation);
        cells.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Field grid (0 = empty, 1..=7 = [`PieceKind::id`]) plus everything a view needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Kind stored at a field cell, `None` when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        let id = *self.board.get(y)?.get(x)?;
        PieceKind::from_id(id)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            paused: false,
            game_over: false,
            episode_id: 0,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}
