//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any resize) is a full redraw; every later frame only
//! emits the runs of cells that changed.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::GameView;
use crate::sink::FrameSink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    frame: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_view(GameView::default())
    }

    pub fn with_view(view: GameView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            frame: FrameBuffer::default(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Used when a new session starts on the same screen.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(0, 0));
        let needs_full = prev.width() != fb.width() || prev.height() != fb.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(fb, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, &mut self.buf)?;
        }
        // Park the cursor so the next frame starts from the top-left.
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .context("write frame to stdout")?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    fn write_frame(&mut self, state: &GameState) -> Result<()> {
        let mut frame = std::mem::take(&mut self.frame);
        self.view.render_into(state, &mut frame);
        let drawn = self.draw_swap(&mut frame);
        self.frame = frame;
        drawn
    }
}

/// Unchanged cells between two dirty runs that are reprinted rather than
/// skipped with a cursor jump. A `MoveTo` costs more bytes than this many
/// glyphs, and a scrolling star field leaves many short gaps.
const RUN_MERGE_GAP: u16 = 4;

/// Tracks the style last sent to the terminal so runs only restyle on change.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                self.current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Every row is addressed explicitly, so the output does not depend on line
/// wrap being disabled.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.print(out, fb.row(y))?;
    }

    Pen::finish(out)
}

/// Encode only what changed between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let row = next.row(y);
        pen.print(out, &row[x as usize..(x + len) as usize])
    })?;

    Pen::finish(out)
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each dirty run of `next`.
///
/// Rows that are identical in both frames are skipped whole; in a running game
/// that is most of the empty sky and, between spawns, the play band. Runs
/// closer than [`RUN_MERGE_GAP`] are joined.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        if old == new {
            continue;
        }

        let mut pending: Option<(u16, u16)> = None;
        let mut x = 0usize;
        while x < new.len() {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < new.len() && old[x] != new[x] {
                x += 1;
            }
            let (start, end) = (start as u16, x as u16);
            pending = match pending {
                Some((s, e)) if start - e <= RUN_MERGE_GAP => Some((s, end)),
                Some((s, e)) => {
                    f(s, y, e - s)?;
                    Some((start, end))
                }
                None => Some((start, end)),
            };
        }
        if let Some((s, e)) = pending {
            f(s, y, e - s)?;
        }
    }

    Ok(())
}
