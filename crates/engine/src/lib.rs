//! Game loop engine.
//!
//! Glues the deterministic simulation in `core` to its three capabilities:
//! a [`KeySource`](crate::input::KeySource), a [`FrameSink`](crate::term::FrameSink)
//! and a [`Sleeper`]. Swapping in `ScriptedKeys`, `MemorySink` and [`NoSleep`]
//! runs whole sessions headless and at full speed.

pub mod driver;
pub mod sleep;

pub use tui_runner_core as core;
pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;

pub use driver::{await_restart, run_session, run_state, SessionOutcome};
pub use sleep::{NoSleep, Sleeper, ThreadSleeper};
