//! Frame sinks: where the driver sends each finished frame.

use anyhow::Result;

use crate::core::GameState;
use crate::game_view::GameView;

/// Receives the game state once per frame.
pub trait FrameSink {
    fn write_frame(&mut self, state: &GameState) -> Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn write_frame(&mut self, state: &GameState) -> Result<()> {
        (**self).write_frame(state)
    }
}

/// Records every frame as plain text lines, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    view: GameView,
    frames: Vec<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw map rows without the score line or banner.
    pub fn without_hud() -> Self {
        Self {
            view: GameView::new().with_hud(false),
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSink for MemorySink {
    fn write_frame(&mut self, state: &GameState) -> Result<()> {
        let fb = self.view.render(state);
        let lines = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        self.frames.push(lines);
        Ok(())
    }
}
