//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the field, collision,
//! rotation with wall kicks, line clearing, scoring, leveling and piece sequencing.
//! It has **no dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and same clock values produce identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 field with collision detection and line clearing
//! - [`shapes`]: The seven tetromino bitmaps, validated at compile time
//! - [`pieces`]: SRS rotation with wall kicks
//! - [`rng`]: 7-bag random piece generation for fair distribution
//! - [`scoring`]: Line clear and drop points, level quota, gravity speed
//! - [`game_state`]: The orchestrator (active piece, timers, lifecycle)
//! - [`snapshot`]: Copyable read-only view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: Every kind appears once in each run of seven draws
//! - **SRS Rotation**: Five kick candidates per transition; O uses the shared table
//! - **Lock Delay**: 500ms from first contact; leaving the ground cancels it
//! - **Scoring**: 100/300/500/800 times level, +1 per soft/gravity row, +2 per hard drop row
//! - **Leveling**: One level per 10 lines, levels 1 to 20
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Check game state
//! assert!(game.score() > 0); // Hard drop awards points
//! assert!(game.take_last_event().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with a monotonic millisecond clock.
//! Gravity runs at 1000ms per row on level 1 and speeds up per
//! [`GRAVITY_INTERVALS_MS`](types::GRAVITY_INTERVALS_MS).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent, Phase, Tetromino};
pub use pieces::{find_kick, try_rotate};
pub use rng::PieceQueue;
pub use scoring::{advance_level, calculate_drop_score, calculate_line_score, LevelProgress};
pub use shapes::{get_shape, shape_of, PieceShape, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
