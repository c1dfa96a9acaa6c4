//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be shared by
//! the rules engine, the input mapping and any embedding front end.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0) for most pieces, (3, -1) for the I piece
//!
//! # Timing
//!
//! All timing values are milliseconds measured against the embedder's monotonic clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Suggested driver poll interval |
//! | `LOCK_DELAY_MS` | 500 | Grace period once a piece cannot descend |
//! | `GRAVITY_INTERVALS_MS` | 1000 .. 1 | Per-level descent interval, level 1 first |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(-1), Rotation::West);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Suggested interval between driver ticks (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Level a new game starts at
pub const START_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 20;

/// Lines that must be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Lock delay once the falling piece cannot descend (500ms)
pub const LOCK_DELAY_MS: u32 = 500;

/// Gravity intervals by level (milliseconds per row)
///
/// Index 0 = level 1. Levels past the end of the table use the last entry.
pub const GRAVITY_INTERVALS_MS: [u32; MAX_LEVEL as usize] = [
    1000, 793, 618, 473, 355, 262, 190, 135, 94, 64, 43, 28, 18, 11, 7, 4, 3, 2, 1, 1,
];

/// Line clear scoring table
///
/// Base points for clearing N rows at once, multiplied by the current level:
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row for soft drop and gravity descent
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row for hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Spawn column of the bitmap's top-left cell
pub const SPAWN_X: i8 = 3;

/// Spawn row of the bitmap's top-left cell (the I piece sits one row higher)
pub const SPAWN_Y: i8 = 0;

/// The seven tetromino piece kinds
///
/// Each kind maps to a non-zero cell identifier (see [`PieceKind::id`]) which a front end
/// uses to pick a color; the rules engine treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    Z,
    S,
    L,
    J,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Cell identifier (1..=7); 0 is reserved for an empty cell
    pub const fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::id`]
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[id as usize - 1]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Orientation states following the Super Rotation System (SRS)
///
/// - **North**: spawn orientation
/// - **East**: rotated 90° clockwise
/// - **South**: rotated 180°
/// - **West**: rotated 90° counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// 0..=3 in clockwise order starting at North
    pub const fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Orientation for any integer step count, wrapping negatives.
    ///
    /// Uses `rem_euclid`, so `-1` is West rather than an out-of-range remainder.
    pub const fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Orientation after `steps` quarter turns (positive = clockwise)
    pub const fn turned(self, steps: i32) -> Self {
        Self::from_index(self.index() as i32 + steps.rem_euclid(4))
    }

    /// Rotate clockwise
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        self.turned(1)
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        self.turned(-1)
    }

    /// Parse from string ("north" | "n", "east" | "e", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Player intents forwarded from input handling into the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift piece one column left
    MoveLeft,
    /// Shift piece one column right
    MoveRight,
    /// Descend one row (with soft drop scoring)
    SoftDrop,
    /// Drop to the lowest legal row and lock immediately
    HardDrop,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
    /// Ask the embedder to stop
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// A cell on the field
///
/// - `None`: empty
/// - `Some(PieceKind)`: settled block of that kind
pub type Cell = Option<PieceKind>;
