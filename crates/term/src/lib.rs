//! Terminal "game renderer" module.
//!
//! Renders the runner's cell grid into a styled framebuffer and flushes it to
//! a terminal backend, or records it in memory for headless runs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only touch the cells that changed between frames
//! - Let the driver stay agnostic of where frames end up ([`FrameSink`])

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::{FrameSink, MemorySink};
