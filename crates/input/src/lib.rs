//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the simulation. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides
//! non-blocking key sources: one backed by the terminal, one scripted for tests.

pub mod map;
pub mod source;

pub use tui_runner_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{
    CrosstermEvents, EventReader, KeySource, Lookahead, ScriptedKeys, TerminalKeys,
};
