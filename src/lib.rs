//! Blockfall (workspace facade crate).
//!
//! The rules engine lives in `crates/core`, the shared vocabulary in `crates/types` and the
//! key mapping in `crates/input`; this package re-exports them as
//! `blockfall::{core,input,types}` and hosts the terminal driver's argument parsing.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;
