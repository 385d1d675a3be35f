//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. All drawing operations work on this buffer.
//!
//! # Design Decisions
//!
//! - **Flat storage**: Uses `Vec<Cell>` with row-major indexing for cache efficiency.
//! - **Clipping**: Drawing functions accept an optional clip `Rect`.
//! - **Wide characters**: Emoji and CJK characters use continuation markers.

use crate::page::text::char_width;
use crate::types::{Attr, Cell, Rect, Rgba};

/// Rounded box-drawing set: horizontal, vertical, corners (tl, tr, br, bl).
const BORDER: (char, char, char, char, char, char) = ('─', '│', '╭', '╮', '╯', '╰');

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgba::TERMINAL_DEFAULT)
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let size = width as usize * height as usize;
        let cell = Cell {
            bg,
            ..Cell::default()
        };
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer as a clip rect.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// A `None` background keeps whatever is already painted there.
    /// Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if clip.is_some_and(|clip| !clip.contains(x, y)) {
            return false;
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = char;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba, clip: Option<&Rect>) {
        let area = match clip {
            Some(clip) => rect.intersect(clip),
            None => Some(rect),
        };
        let Some(area) = area.and_then(|area| area.intersect(&self.bounds())) else {
            return;
        };

        for row in area.y..area.bottom() {
            let start = self.index(area.x, row);
            let end = self.index(area.right(), row);
            for cell in &mut self.cells[start..end] {
                cell.bg = bg;
                cell.char = b' ' as u32;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Change only the background of a rectangle, keeping its text.
    pub fn tint_rect(&mut self, rect: Rect, bg: Rgba, clip: Option<&Rect>) {
        let area = match clip {
            Some(clip) => rect.intersect(clip),
            None => Some(rect),
        };
        let Some(area) = area.and_then(|area| area.intersect(&self.bounds())) else {
            return;
        };

        for row in area.y..area.bottom() {
            for col in area.x..area.right() {
                if let Some(cell) = self.get_mut(col, row) {
                    cell.bg = bg;
                }
            }
        }
    }

    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        self.set_cell(x, y, char as u32, fg, None, attrs, clip)
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let width = char_width(ch);
            if width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, None, attrs, clip) && width == 2 {
                // Mark the next cell as the wide character's tail
                let tail_visible = clip.is_none_or(|c| c.contains(col + 1, y));
                if tail_visible {
                    if let Some(next) = self.get_mut(col + 1, y) {
                        next.char = 0;
                        next.fg = fg;
                        next.attrs = attrs;
                    }
                }
            }

            col = col.saturating_add(width);
        }

        col.saturating_sub(x)
    }

    /// Draw a rounded border around a rectangle.
    pub fn draw_border(&mut self, rect: Rect, color: Rgba, clip: Option<&Rect>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = BORDER;
        let x2 = rect.right() - 1;
        let y2 = rect.bottom() - 1;

        self.draw_char(rect.x, rect.y, tl, color, Attr::NONE, clip);
        self.draw_char(x2, rect.y, tr, color, Attr::NONE, clip);
        self.draw_char(x2, y2, br, color, Attr::NONE, clip);
        self.draw_char(rect.x, y2, bl, color, Attr::NONE, clip);

        for col in (rect.x + 1)..x2 {
            self.draw_char(col, rect.y, horiz, color, Attr::NONE, clip);
            self.draw_char(col, y2, horiz, color, Attr::NONE, clip);
        }
        for row in (rect.y + 1)..y2 {
            self.draw_char(rect.x, row, vert, color, Attr::NONE, clip);
            self.draw_char(x2, row, vert, color, Attr::NONE, clip);
        }
    }

    /// Row `y` as plain text, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row = &self.cells[start..start + self.width as usize];
        let text: String = row
            .iter()
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect();
        text.trim_end().to_string()
    }

    /// Every row as plain text.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let buf = FrameBuffer::with_background(10, 4, Rgba::PAGE);
        assert_eq!((buf.width(), buf.height()), (10, 4));
        assert_eq!(buf.cells().len(), 40);
        assert_eq!(buf.get(9, 3).unwrap().bg, Rgba::PAGE);
        assert!(buf.get(10, 0).is_none());
    }

    #[test]
    fn test_set_cell_clipped() {
        let mut buf = FrameBuffer::new(10, 10);
        let clip = Rect::new(0, 0, 5, 5);
        assert!(buf.set_cell(2, 2, 'X' as u32, Rgba::WHITE, None, Attr::BOLD, Some(&clip)));
        assert!(!buf.set_cell(7, 2, 'Y' as u32, Rgba::WHITE, None, Attr::NONE, Some(&clip)));
        assert_eq!(buf.get(2, 2).unwrap().char, 'X' as u32);
        assert_eq!(buf.get(7, 2).unwrap().char, ' ' as u32);
    }

    #[test]
    fn test_fill_rect_keeps_inside_buffer() {
        let mut buf = FrameBuffer::new(10, 10);
        buf.fill_rect(Rect::new(8, 8, 5, 5), Rgba::PANEL, None);
        assert_eq!(buf.get(9, 9).unwrap().bg, Rgba::PANEL);
        assert_eq!(buf.get(7, 7).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_draw_text_wide_chars() {
        let mut buf = FrameBuffer::new(10, 1);
        let used = buf.draw_text(0, 0, "a中b", Rgba::WHITE, Attr::NONE, None);
        assert_eq!(used, 4);
        assert_eq!(buf.get(1, 0).unwrap().char, '中' as u32);
        assert_eq!(buf.get(2, 0).unwrap().char, 0);
        assert_eq!(buf.row_text(0), "a中b");
    }

    #[test]
    fn test_draw_border() {
        let mut buf = FrameBuffer::new(6, 3);
        buf.draw_border(Rect::new(0, 0, 6, 3), Rgba::SUBTLE, None);
        assert_eq!(buf.to_text(), "╭────╮\n│    │\n╰────╯");
    }
}
