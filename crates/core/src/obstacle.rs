//! Obstacle module - spawn scheduling, travel and edge clipping
//!
//! One obstacle exists at a time. It waits off-screen for a countdown, then
//! travels right to left one column per frame (the same speed as the scroll),
//! and once its last column has left the viewport it goes back to waiting.
//!
//! Positions use a signed center column because the pattern is partly outside
//! the viewport while entering and exiting.

use crate::config::Layout;
use crate::map::Map;
use crate::rng::SimpleRng;
use crate::types::{CellKind, ObstaclePhase, OBSTACLE_HALF_WIDTH, OBSTACLE_HEIGHT, OBSTACLE_WIDTH};

/// Obstacle glyph pattern, top row first. Spaces are transparent.
const PATTERN: [&[u8; OBSTACLE_WIDTH]; OBSTACLE_HEIGHT] = [
    b"     #     ",
    b"    #o#    ",
    b"   #ooo#   ",
    b"  #ooooo#  ",
    b" #ooooooo# ",
    b"#ooooooooo#",
];

/// Cell kind at pattern position `(row, col)`, or `None` if transparent.
pub fn pattern_cell(row: usize, col: usize) -> Option<CellKind> {
    match PATTERN[row][col] {
        b'#' => Some(CellKind::ObstacleShell),
        b'o' => Some(CellKind::ObstacleCore),
        _ => None,
    }
}

/// The part of the pattern that falls inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First visible pattern column.
    pub pattern_start: usize,
    /// Viewport column receiving `pattern_start`.
    pub view_start: usize,
    /// Number of visible columns.
    pub len: usize,
}

/// Intersect the pattern centered at `center` with viewport columns `0..width`.
///
/// - entering (`center >= width`): `width - (center - half)` columns, the
///   pattern's leftmost ones, at the viewport's right edge
/// - exiting (`center - half < 0`): the pattern's rightmost columns, at the
///   viewport's left edge
/// - otherwise the full pattern
pub fn visible_span(center: i32, width: i32) -> Option<Span> {
    let left = center - OBSTACLE_HALF_WIDTH;
    let right = center + OBSTACLE_HALF_WIDTH;
    let view_start = left.max(0);
    let view_end = right.min(width - 1);
    if view_start > view_end {
        return None;
    }
    Some(Span {
        pattern_start: (view_start - left) as usize,
        view_start: view_start as usize,
        len: (view_end - view_start + 1) as usize,
    })
}

/// Inclusive spawn-gap bounds at the given difficulty; never empty.
pub fn spawn_gap_bounds(min_gap: u32, max_gap: u32, difficulty: u32) -> (u32, u32) {
    let hi = max_gap.saturating_sub(difficulty).max(min_gap);
    (min_gap, hi)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    center: i32,
    countdown: u32,
    phase: ObstaclePhase,
    viewport_width: i32,
    ground_row: usize,
    min_gap: u32,
    max_gap: u32,
}

impl Obstacle {
    /// A pending obstacle with its first countdown drawn at difficulty 0.
    pub fn new(layout: &Layout, min_gap: u32, max_gap: u32, rng: &mut SimpleRng) -> Self {
        let mut obstacle = Self {
            center: 0,
            countdown: 0,
            phase: ObstaclePhase::Pending,
            viewport_width: layout.width as i32,
            ground_row: layout.ground_row as usize,
            min_gap,
            max_gap,
        };
        obstacle.reset(rng, 0);
        obstacle
    }

    pub fn center(&self) -> i32 {
        self.center
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Lifecycle of the most recent paint; `Pending` while waiting.
    pub fn phase(&self) -> ObstaclePhase {
        self.phase
    }

    pub fn spawn_column(&self) -> i32 {
        self.viewport_width + OBSTACLE_HALF_WIDTH
    }

    fn reset(&mut self, rng: &mut SimpleRng, difficulty: u32) {
        let (lo, hi) = spawn_gap_bounds(self.min_gap, self.max_gap, difficulty);
        self.center = self.spawn_column();
        self.countdown = rng.range_inclusive(lo, hi);
        self.phase = ObstaclePhase::Pending;
        log::debug!(
            "obstacle pending: countdown {} (gap {}..={}, difficulty {})",
            self.countdown,
            lo,
            hi,
            difficulty
        );
    }

    fn phase_at(&self, center: i32) -> ObstaclePhase {
        if center + OBSTACLE_HALF_WIDTH >= self.viewport_width {
            ObstaclePhase::Entering
        } else if center - OBSTACLE_HALF_WIDTH < 0 {
            ObstaclePhase::Exiting
        } else {
            ObstaclePhase::Full
        }
    }

    /// Run one frame: count down, or paint at the current column and advance.
    ///
    /// Returns true when the obstacle was painted this frame.
    pub fn step(&mut self, map: &mut Map, rng: &mut SimpleRng, difficulty: u32) -> bool {
        if self.phase == ObstaclePhase::Pending && self.countdown > 0 {
            self.countdown -= 1;
            return false;
        }

        self.phase = self.phase_at(self.center);
        self.paint(map);

        self.center -= 1;
        if self.center < -OBSTACLE_HALF_WIDTH {
            self.reset(rng, difficulty);
        }
        true
    }

    /// Paint the visible part of the pattern, bottom row on the ground row.
    pub fn paint(&self, map: &mut Map) {
        let Some(span) = visible_span(self.center, self.viewport_width) else {
            return;
        };
        let top = self.ground_row + 1 - OBSTACLE_HEIGHT;
        for prow in 0..OBSTACLE_HEIGHT {
            for i in 0..span.len {
                if let Some(kind) = pattern_cell(prow, span.pattern_start + i) {
                    map.set(top + prow, span.view_start + i, kind);
                }
            }
        }
    }
}
