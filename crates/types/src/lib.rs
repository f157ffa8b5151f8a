//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, tests).
//!
//! # Viewport Layout
//!
//! The viewport is split into horizontal bands, top to bottom:
//!
//! - **Sky**: rows `0..sky_rows`, sparse stars, scrolls with the landscape
//! - **Play band**: [`PLAY_BAND_ROWS`] rows ending at the ground row; cleared
//!   every frame and redrawn with the player and the obstacle
//! - **Surface**: a single row of hard-surface glyphs
//! - **Ground**: decorative rows below the surface
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAME_DELAY_MS` | 25 | Base delay between frames |
//! | `MIN_FRAME_DELAY_MS` | 10 | Floor once difficulty tightens the delay |
//! | `DEFAULT_RISE_FRAMES` | 7 | Frames spent ascending (one row per frame) |
//! | `DEFAULT_HOVER_FRAMES` | 4 | Extra frames held at the jump apex |
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{CellKind, GameAction, OBSTACLE_HALF_WIDTH, OBSTACLE_WIDTH};
//!
//! assert!(CellKind::ObstacleShell.is_obstacle_edge());
//! assert!(!CellKind::Star.is_obstacle_edge());
//! assert_eq!(CellKind::from_glyph('#'), Some(CellKind::ObstacleShell));
//!
//! assert_eq!(GameAction::Jump.as_str(), "jump");
//! assert_eq!(OBSTACLE_WIDTH as i32, 2 * OBSTACLE_HALF_WIDTH + 1);
//! ```

/// Smallest accepted viewport width in columns
pub const MIN_VIEWPORT_WIDTH: u16 = 32;

/// Smallest accepted viewport height in rows
pub const MIN_VIEWPORT_HEIGHT: u16 = 16;

/// Rows in the dynamic band (player + obstacle), ground row included
pub const PLAY_BAND_ROWS: u16 = 12;

/// Default column of the player's base glyph
pub const PLAYER_COLUMN: u16 = 8;

/// Obstacle pattern width in columns
pub const OBSTACLE_WIDTH: usize = 11;

/// Obstacle pattern height in rows
pub const OBSTACLE_HEIGHT: usize = 6;

/// Columns on each side of the obstacle's center column
pub const OBSTACLE_HALF_WIDTH: i32 = (OBSTACLE_WIDTH / 2) as i32;

/// Frames spent ascending during a jump
pub const DEFAULT_RISE_FRAMES: u16 = 7;

/// Frames held at the apex of a jump (the apex itself adds one more)
pub const DEFAULT_HOVER_FRAMES: u16 = 4;

/// Score added on every frame that does not end the game
pub const SCORE_STEP: u32 = 2;

/// Base delay between frames in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u64 = 25;

/// Frame delay floor once difficulty tightens the cadence
pub const MIN_FRAME_DELAY_MS: u64 = 10;

/// Longest base frame delay a session accepts
pub const MAX_FRAME_DELAY_MS: u64 = 60_000;

/// Default lower bound of the spawn gap (frames between obstacles)
pub const DEFAULT_MIN_SPAWN_GAP: u32 = 20;

/// Default upper bound of the spawn gap at difficulty 0
pub const DEFAULT_MAX_SPAWN_GAP: u32 = 60;

/// Difficulty saturates at this value
pub const MAX_DIFFICULTY: u32 = 30;

/// Score at which difficulty reaches [`MAX_DIFFICULTY`]
pub const SCORE_CEILING: u32 = 6000;

/// Difficulty points per frame-delay checkpoint
pub const DELAY_CHECKPOINT_SPAN: u32 = 10;

/// Frame delay as a percentage of the base delay, by checkpoint
///
/// Index 0 = difficulty 0..10, index 3 = difficulty 30 (saturated)
pub const FRAME_DELAY_PERCENT: [u64; 4] = [100, 90, 80, 70];

/// Chance (per mille) that a sky cell holds a star
pub const STAR_PER_MILLE: u32 = 10;

/// Chance (per mille) that a ground cell is grass rather than gravel
pub const GRASS_PER_MILLE: u32 = 500;

/// What occupies a single cell of the playfield.
///
/// Every kind renders as one fixed-width glyph. Collision is decided on the
/// kind, never on the glyph: see [`CellKind::is_obstacle_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Star,
    Grass,
    Gravel,
    /// Hard walkable surface; the surface row is made only of these
    Surface,
    PlayerFoot,
    /// Alternate leg frame, toggled every advance
    PlayerStride,
    PlayerBody,
    PlayerArmLeft,
    PlayerArmRight,
    PlayerHead,
    /// Obstacle outline
    ObstacleShell,
    /// Obstacle interior
    ObstacleCore,
}

impl CellKind {
    /// Glyph used to render this kind
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Empty => ' ',
            CellKind::Star => '*',
            CellKind::Grass => '\'',
            CellKind::Gravel => '.',
            CellKind::Surface => '=',
            CellKind::PlayerFoot => 'M',
            CellKind::PlayerStride => 'A',
            CellKind::PlayerBody => 'O',
            CellKind::PlayerArmLeft => '/',
            CellKind::PlayerArmRight => '\\',
            CellKind::PlayerHead => '@',
            CellKind::ObstacleShell => '#',
            CellKind::ObstacleCore => 'o',
        }
    }

    /// Reverse of [`CellKind::glyph`]
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_runner_types::CellKind;
    ///
    /// assert_eq!(CellKind::from_glyph('@'), Some(CellKind::PlayerHead));
    /// assert_eq!(CellKind::from_glyph('x'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(CellKind::Empty),
            '*' => Some(CellKind::Star),
            '\'' => Some(CellKind::Grass),
            '.' => Some(CellKind::Gravel),
            '=' => Some(CellKind::Surface),
            'M' => Some(CellKind::PlayerFoot),
            'A' => Some(CellKind::PlayerStride),
            'O' => Some(CellKind::PlayerBody),
            '/' => Some(CellKind::PlayerArmLeft),
            '\\' => Some(CellKind::PlayerArmRight),
            '@' => Some(CellKind::PlayerHead),
            '#' => Some(CellKind::ObstacleShell),
            'o' => Some(CellKind::ObstacleCore),
            _ => None,
        }
    }

    /// True for the obstacle kinds that end the game on contact
    pub const fn is_obstacle_edge(self) -> bool {
        matches!(self, CellKind::ObstacleShell | CellKind::ObstacleCore)
    }

    pub const fn is_player(self) -> bool {
        matches!(
            self,
            CellKind::PlayerFoot
                | CellKind::PlayerStride
                | CellKind::PlayerBody
                | CellKind::PlayerArmLeft
                | CellKind::PlayerArmRight
                | CellKind::PlayerHead
        )
    }
}

/// Jump state machine phases
///
/// The cycle goes: Grounded → Ascending → Hovering → Descending → Grounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpPhase {
    Grounded,
    Ascending,
    Hovering,
    Descending,
}

impl JumpPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            JumpPhase::Grounded => "grounded",
            JumpPhase::Ascending => "ascending",
            JumpPhase::Hovering => "hovering",
            JumpPhase::Descending => "descending",
        }
    }
}

/// Obstacle lifecycle
///
/// - **Pending**: waiting for the spawn countdown, nothing on screen
/// - **Entering**: right side still clipped by the viewport edge
/// - **Full**: entire pattern visible
/// - **Exiting**: left side clipped by the viewport edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstaclePhase {
    Pending,
    Entering,
    Full,
    Exiting,
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a jump (ignored while airborne)
    Jump,
    /// End the session
    Quit,
    /// Start a new session after game over
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Jump => "jump",
            GameAction::Quit => "quit",
            GameAction::Restart => "restart",
        }
    }
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// The player ran into an obstacle
    Collision,
    /// A quit key was pressed
    Quit,
}
