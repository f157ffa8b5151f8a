//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole runner simulation. It has **no dependencies**
//! on terminals, input devices or clocks, making it:
//!
//! - **Deterministic**: Same seed and same jump frames produce identical sessions
//! - **Testable**: Every frame can be stepped and inspected in memory
//! - **Portable**: The terminal front-end is just one consumer of the grid
//!
//! # Module Structure
//!
//! - [`config`]: startup parameters, validation and row layout
//! - [`map`]: the scrolling H×W cell grid with procedural sky and ground
//! - [`player`]: jump state machine and collision-gated drawing
//! - [`obstacle`]: spawn countdown, travel and edge clipping
//! - [`scoring`]: per-frame score, difficulty ramp and frame delay
//! - [`game_state`]: the session aggregate driving one frame at a time
//! - [`rng`]: seeded LCG
//!
//! # Example
//!
//! ```
//! use tui_runner_core::{GameConfig, GameState};
//!
//! let config = GameConfig::new(80, 32, 12345).with_frame_delay_ms(0);
//! let mut game = GameState::new(config).unwrap();
//!
//! game.scroll();
//! let outcome = game.tick(true);
//! assert!(outcome.jump_started);
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 2);
//! ```

pub mod config;
pub mod game_state;
pub mod map;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod scoring;

pub use tui_runner_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig, Layout};
pub use game_state::{FrameOutcome, GameState};
pub use map::Map;
pub use obstacle::{spawn_gap_bounds, visible_span, Obstacle, Span};
pub use player::{DrawResult, Player};
pub use rng::SimpleRng;
pub use scoring::{difficulty_for_score, frame_delay_ms, Progress};
