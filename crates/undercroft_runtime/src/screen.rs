//! A cursor-addressed text canvas with an offset stack.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use undercroft_foundation::{Error, Pos, Result};

/// Drawing surface handed to the render stage.
///
/// Writes are queued on the underlying writer and shown on [`flush`]; the
/// offset stack lets nested draw code address a sub-region without knowing
/// where it sits on screen.
///
/// [`flush`]: Screen::flush
pub struct Screen<W: Write> {
    out: W,
    offsets: Vec<Pos>,
}

impl<W: Write> Screen<W> {
    /// Wraps a writer, usually stdout.
    pub fn new(out: W) -> Self {
        Self {
            out,
            offsets: Vec::new(),
        }
    }

    /// Pushes a drawing offset; subsequent prints are relative to it.
    pub fn push_offset(&mut self, pos: Pos) {
        self.offsets.push(pos);
    }

    /// Pops the innermost drawing offset.
    pub fn pop_offset(&mut self) {
        self.offsets.pop();
    }

    /// Drops every offset, in case a draw path forgot to pop.
    pub fn clear_offsets(&mut self) {
        self.offsets.clear();
    }

    /// The current offset, or the origin with the stack empty.
    #[must_use]
    pub fn offset(&self) -> Pos {
        self.offsets.last().copied().unwrap_or_default()
    }

    /// Queues a whole-screen clear.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer rejects the command.
    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All)).map_err(io_err)
    }

    /// Queues `text` at `pos`, adjusted by the current offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer rejects the command.
    pub fn print_at(&mut self, pos: Pos, text: &str) -> Result<()> {
        let at = self.offset().offset(pos);
        let x = u16::try_from(at.x.max(0)).unwrap_or(u16::MAX);
        let y = u16::try_from(at.y.max(0)).unwrap_or(u16::MAX);
        queue!(self.out, MoveTo(x, y), Print(text)).map_err(io_err)
    }

    /// Flushes everything queued so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(io_err)
    }

    /// Unwraps the underlying writer. Lets tests inspect what was drawn.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn io_err(e: std::io::Error) -> Error {
    Error::Io(e.to_string())
}
