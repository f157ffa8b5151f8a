//! Session configuration and startup validation.
//!
//! A [`GameConfig`] is checked once, before any allocation or rendering, and
//! turned into a [`Layout`] that fixes every row index for the session.

use std::fmt;
use std::ops::RangeInclusive;

use crate::types::{
    DEFAULT_FRAME_DELAY_MS, DEFAULT_HOVER_FRAMES, DEFAULT_MAX_SPAWN_GAP, DEFAULT_MIN_SPAWN_GAP,
    DEFAULT_RISE_FRAMES, MAX_FRAME_DELAY_MS, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH,
    PLAYER_COLUMN, PLAY_BAND_ROWS, SCORE_STEP,
};

/// Startup parameters for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Base delay between frames; 0 runs the loop flat out (tests).
    pub frame_delay_ms: u64,
    pub seed: u32,
    pub rise_frames: u16,
    pub hover_frames: u16,
    pub min_spawn_gap: u32,
    pub max_spawn_gap: u32,
    pub score_step: u32,
    pub player_column: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 32,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            seed: 1,
            rise_frames: DEFAULT_RISE_FRAMES,
            hover_frames: DEFAULT_HOVER_FRAMES,
            min_spawn_gap: DEFAULT_MIN_SPAWN_GAP,
            max_spawn_gap: DEFAULT_MAX_SPAWN_GAP,
            score_step: SCORE_STEP,
            player_column: PLAYER_COLUMN,
        }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    pub fn with_frame_delay_ms(mut self, frame_delay_ms: u64) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn with_jump(mut self, rise_frames: u16, hover_frames: u16) -> Self {
        self.rise_frames = rise_frames;
        self.hover_frames = hover_frames;
        self
    }

    pub fn with_spawn_gap(mut self, min_spawn_gap: u32, max_spawn_gap: u32) -> Self {
        self.min_spawn_gap = min_spawn_gap;
        self.max_spawn_gap = max_spawn_gap;
        self
    }

    /// Check every startup constraint and derive the row layout.
    pub fn validate(&self) -> Result<Layout, ConfigError> {
        if self.width < MIN_VIEWPORT_WIDTH || self.height < MIN_VIEWPORT_HEIGHT {
            return Err(ConfigError::ViewportTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.player_column == 0 || self.player_column + 1 >= self.width {
            return Err(ConfigError::PlayerColumnOutOfRange {
                column: self.player_column,
                width: self.width,
            });
        }

        // Head sits two rows above the base; at the apex it must stay inside the band.
        if self.rise_frames == 0 || self.rise_frames + 2 >= PLAY_BAND_ROWS {
            return Err(ConfigError::InvalidJump {
                rise_frames: self.rise_frames,
                max_rise_frames: PLAY_BAND_ROWS - 3,
            });
        }

        if self.frame_delay_ms > MAX_FRAME_DELAY_MS {
            return Err(ConfigError::FrameDelayTooLong {
                delay_ms: self.frame_delay_ms,
            });
        }

        if self.min_spawn_gap > self.max_spawn_gap {
            return Err(ConfigError::SpawnGapInverted {
                min: self.min_spawn_gap,
                max: self.max_spawn_gap,
            });
        }

        Ok(Layout::for_viewport(self.width, self.height))
    }
}

/// Row indices derived from the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    /// Star field rows `0..sky_rows`.
    pub sky_rows: u16,
    /// Walkable row; player base and obstacle bottom sit here.
    pub ground_row: u16,
    /// Hard-surface boundary row, directly below the ground row.
    pub surface_row: u16,
    /// Decorative rows below the surface.
    pub ground_rows: u16,
}

impl Layout {
    fn for_viewport(width: u16, height: u16) -> Self {
        let ground_rows = (height / 8).max(1);
        let surface_row = height - ground_rows - 1;
        Self {
            width,
            height,
            sky_rows: height - ground_rows - 1 - PLAY_BAND_ROWS,
            ground_row: surface_row - 1,
            surface_row,
            ground_rows,
        }
    }

    /// Rows cleared and redrawn every frame.
    pub fn band(&self) -> RangeInclusive<u16> {
        self.sky_rows..=self.ground_row
    }

    pub fn is_sky_row(&self, row: u16) -> bool {
        row < self.sky_rows
    }

    pub fn is_ground_row(&self, row: u16) -> bool {
        row > self.surface_row
    }
}

/// Fatal startup errors; no frame is rendered after one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ViewportTooSmall { width: u16, height: u16 },
    PlayerColumnOutOfRange { column: u16, width: u16 },
    InvalidJump { rise_frames: u16, max_rise_frames: u16 },
    SpawnGapInverted { min: u32, max: u32 },
    FrameDelayTooLong { delay_ms: u64 },
    /// The frame buffer could not be allocated.
    Allocation { cells: usize },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::ViewportTooSmall { .. } => "viewport_too_small",
            ConfigError::PlayerColumnOutOfRange { .. }
            | ConfigError::InvalidJump { .. }
            | ConfigError::SpawnGapInverted { .. }
            | ConfigError::FrameDelayTooLong { .. } => "invalid_config",
            ConfigError::Allocation { .. } => "resource_exhausted",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::ViewportTooSmall { .. } => "viewport is below the minimum playable size",
            ConfigError::PlayerColumnOutOfRange { .. } => "player column leaves no room for arms",
            ConfigError::InvalidJump { .. } => "jump rise does not fit the play band",
            ConfigError::SpawnGapInverted { .. } => "minimum spawn gap exceeds maximum",
            ConfigError::FrameDelayTooLong { .. } => "frame delay is too long",
            ConfigError::Allocation { .. } => "frame buffer allocation failed",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::ViewportTooSmall { width, height } => write!(
                f,
                "{}: {}x{} (need at least {}x{})",
                self.message(),
                width,
                height,
                MIN_VIEWPORT_WIDTH,
                MIN_VIEWPORT_HEIGHT
            ),
            ConfigError::PlayerColumnOutOfRange { column, width } => {
                write!(f, "{}: column {} in width {}", self.message(), column, width)
            }
            ConfigError::InvalidJump {
                rise_frames,
                max_rise_frames,
            } => write!(
                f,
                "{}: rise {} (allowed 1..={})",
                self.message(),
                rise_frames,
                max_rise_frames
            ),
            ConfigError::SpawnGapInverted { min, max } => {
                write!(f, "{}: {} > {}", self.message(), min, max)
            }
            ConfigError::FrameDelayTooLong { delay_ms } => write!(
                f,
                "{}: {}ms (max {}ms)",
                self.message(),
                delay_ms,
                MAX_FRAME_DELAY_MS
            ),
            ConfigError::Allocation { cells } => write!(f, "{}: {} cells", self.message(), cells),
        }
    }
}

impl std::error::Error for ConfigError {}
