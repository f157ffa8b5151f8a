//! Player module - jump state machine and collision-gated drawing
//!
//! The player stays in a fixed column; only its row changes. A jump runs
//! through three airborne phases driven by a frame counter:
//!
//! ```text
//! counter:  0 .. rise-1 | rise ..= rise+hover | rise+hover+1 .. 2*rise+hover-1
//! motion:   up 1 row    | hold                | down 1 row
//! ```
//!
//! When the counter reaches `2*rise + hover` the player lands and its row is
//! reset to the ground row exactly (the hold phase is one frame longer than
//! the plain ascent, so the descent alone would leave it one row short).

use arrayvec::ArrayVec;

use crate::map::Map;
use crate::types::{CellKind, JumpPhase};

/// Number of cells the player occupies
pub const PLAYER_CELLS: usize = 5;

/// A single cell the player wants to draw: `(row, col, kind)`.
pub type PlayerCell = (usize, usize, CellKind);

/// Result of a collision-gated draw.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    Drawn,
    /// An obstacle edge already occupies one of the target cells; nothing was written.
    Collision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    row: u16,
    column: u16,
    ground_row: u16,
    rise_frames: u16,
    hover_frames: u16,
    phase: JumpPhase,
    /// Frames since the current jump began.
    counter: u16,
    /// Leg animation frame.
    stride: bool,
}

impl Player {
    pub fn new(ground_row: u16, column: u16, rise_frames: u16, hover_frames: u16) -> Self {
        Self {
            row: ground_row,
            column,
            ground_row,
            rise_frames,
            hover_frames,
            phase: JumpPhase::Grounded,
            counter: 0,
            stride: false,
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Rows above the ground row.
    pub fn height(&self) -> u16 {
        self.ground_row - self.row
    }

    pub fn is_grounded(&self) -> bool {
        self.phase == JumpPhase::Grounded
    }

    fn jump_frames(&self) -> u16 {
        2 * self.rise_frames + self.hover_frames
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn request_jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.phase = JumpPhase::Ascending;
        self.counter = 0;
        true
    }

    /// Move one frame along the jump arc.
    pub fn advance(&mut self) {
        self.stride = !self.stride;
        if self.is_grounded() {
            return;
        }

        let n = self.counter;
        let apex_end = self.rise_frames + self.hover_frames;
        if n < self.rise_frames {
            assert!(self.row > 0, "player rose above row 0 (counter {})", n);
            self.row -= 1;
            self.phase = JumpPhase::Ascending;
        } else if n <= apex_end {
            self.phase = JumpPhase::Hovering;
        } else {
            self.row += 1;
            self.phase = JumpPhase::Descending;
        }

        self.counter += 1;
        if self.counter == self.jump_frames() {
            self.phase = JumpPhase::Grounded;
            self.counter = 0;
            self.row = self.ground_row;
        }
    }

    /// The five cells the player occupies this frame.
    pub fn cells(&self) -> ArrayVec<PlayerCell, PLAYER_CELLS> {
        let row = self.row as usize;
        let col = self.column as usize;
        let arm_row = if self.is_grounded() { row - 1 } else { row - 2 };
        let base = if self.stride {
            CellKind::PlayerStride
        } else {
            CellKind::PlayerFoot
        };

        let mut cells = ArrayVec::new();
        cells.push((row, col, base));
        cells.push((row - 1, col, CellKind::PlayerBody));
        cells.push((arm_row, col - 1, CellKind::PlayerArmLeft));
        cells.push((arm_row, col + 1, CellKind::PlayerArmRight));
        cells.push((row - 2, col, CellKind::PlayerHead));
        cells
    }

    /// Draw the player unless an obstacle edge already holds one of its cells.
    pub fn try_draw(&self, map: &mut Map) -> DrawResult {
        let cells = self.cells();
        if cells
            .iter()
            .any(|&(row, col, _)| map.get(row, col).is_obstacle_edge())
        {
            return DrawResult::Collision;
        }
        for (row, col, kind) in cells {
            map.set(row, col, kind);
        }
        DrawResult::Drawn
    }
}
