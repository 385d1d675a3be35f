//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush output buffer (single write)
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};

use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame to `writer`, outputting only changed cells.
    ///
    /// Returns the number of cells written.
    pub fn render<W: Write>(&mut self, buffer: &FrameBuffer, writer: &mut W) -> io::Result<usize> {
        let mut changed = 0;

        queue!(self.output, BeginSynchronizedUpdate)?;
        self.cell_renderer.reset();

        let prev = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let same = prev.and_then(|prev| prev.get(x, y)) == Some(cell);
                if !same {
                    changed += 1;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                }
            }
        }

        queue!(self.output, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        self.output.flush_to(writer)?;

        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    /// Invalidate the previous frame; the next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
