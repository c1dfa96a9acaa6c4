//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It knows nothing about
//! the game itself; the driver forwards the resulting actions into the core.

pub mod bindings;

pub use blockfall_types as types;

pub use bindings::{action_for_key, key_help, Binding, BINDINGS};
