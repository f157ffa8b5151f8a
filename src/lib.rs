//! TUI Runner (workspace facade crate).
//!
//! Exposes `tui_runner::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_runner_core as core;
pub use tui_runner_engine as engine;
pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;
