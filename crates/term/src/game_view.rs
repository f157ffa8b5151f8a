//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::CellKind;

const NIGHT: Rgb = Rgb::new(10, 12, 28);
const SOIL: Rgb = Rgb::new(40, 28, 18);

/// A lightweight terminal renderer for the runner.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    show_hud: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_hud: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer is resized to the map once and then reused; every cell
    /// is overwritten each frame.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let map = state.map();
        fb.resize(map.width() as u16, map.height() as u16);

        for row in 0..map.height() {
            for (col, &kind) in map.row(row).iter().enumerate() {
                fb.set(
                    col as u16,
                    row as u16,
                    Cell {
                        ch: kind.glyph(),
                        style: style_for(kind, row as u16 >= state.layout().surface_row),
                    },
                );
            }
        }

        if self.show_hud {
            self.draw_hud(fb, state);
        }
        if state.game_over() {
            self.draw_game_over(fb, state);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::default();
        self.render_into(state, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, state: &GameState) {
        let label = CellStyle {
            bg: NIGHT,
            ..CellStyle::fg(Rgb::new(180, 180, 200))
        }
        .bold();
        let value = CellStyle {
            bg: NIGHT,
            ..CellStyle::fg(Rgb::new(240, 240, 240))
        };

        // Clipped by the framebuffer when the viewport is narrow.
        let mut x = fb.put_str(1, 0, "SCORE ", label);
        x = fb.put_u32(x, 0, state.score(), value);
        x = fb.put_str(x.saturating_add(2), 0, "LEVEL ", label);
        fb.put_u32(x, 0, state.difficulty(), value);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, state: &GameState) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let band = state.layout().band();
        let mid_y = (*band.start() + *band.end()) / 2;

        let banner = "GAME OVER";
        let hint = "r restart  q quit";
        self.put_centered(fb, mid_y.saturating_sub(1), banner, style);
        self.put_centered(fb, mid_y, hint, style.dim());
    }

    fn put_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = fb.width().saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn style_for(kind: CellKind, in_ground: bool) -> CellStyle {
    let bg = if in_ground { SOIL } else { NIGHT };
    let (fg, bold) = match kind {
        CellKind::Empty => (Rgb::new(200, 200, 200), false),
        CellKind::Star => (Rgb::new(250, 240, 170), false),
        CellKind::Grass => (Rgb::new(100, 200, 90), false),
        CellKind::Gravel => (Rgb::new(150, 130, 110), false),
        CellKind::Surface => (Rgb::new(190, 170, 140), true),
        CellKind::PlayerFoot
        | CellKind::PlayerStride
        | CellKind::PlayerBody
        | CellKind::PlayerArmLeft
        | CellKind::PlayerArmRight => (Rgb::new(120, 200, 255), true),
        CellKind::PlayerHead => (Rgb::new(255, 220, 120), true),
        CellKind::ObstacleShell => (Rgb::new(220, 80, 80), true),
        CellKind::ObstacleCore => (Rgb::new(170, 60, 60), false),
    };
    CellStyle {
        fg,
        bg,
        bold,
        dim: false,
    }
}
