//! Painter - turns a scene plus live controller state into cells.
//!
//! Painting happens in two passes:
//!
//! 1. [`paint_page`] draws every document node into a buffer as tall as the
//!    page. It only changes when the page is recomposed.
//! 2. [`paint_frame`] copies the visible slice of that buffer and draws the
//!    live parts on top: the typed role line, the fixed overlays with the
//!    active nav link highlighted, the cursor and the status line.

use crate::controllers::Point;
use crate::page::{Line, Node, NodeKind, Scene};
use crate::types::{Attr, Rect, Rgba};

use super::buffer::FrameBuffer;

/// Live state read by [`paint_frame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintState<'a> {
    pub height: u16,
    pub scroll_y: u16,
    pub current_section: &'a str,
    pub is_scrolled: bool,
    pub typing_text: &'a str,
    pub dot: Option<Point>,
    pub ring: Option<Point>,
    pub status: Option<&'a str>,
}

const CARET: &str = "▌";

/// Draw the whole document at page coordinates.
pub fn paint_page(scene: &Scene) -> FrameBuffer {
    let mut page = FrameBuffer::with_background(scene.width(), scene.content_height(), Rgba::PAGE);
    for node in scene.document() {
        paint_node(&mut page, node, None);
    }
    log::debug!(
        "event=page_painted width={} height={}",
        page.width(),
        page.height()
    );
    page
}

/// Compose the visible frame from the painted page and live state.
pub fn paint_frame(page: &FrameBuffer, scene: &Scene, state: &PaintState<'_>) -> FrameBuffer {
    let width = scene.width();
    let mut frame = FrameBuffer::with_background(width, state.height, Rgba::PAGE);

    for row in 0..state.height {
        let src_y = state.scroll_y.saturating_add(row);
        for col in 0..width {
            if let (Some(src), Some(dst)) = (page.get(col, src_y), frame.get_mut(col, row)) {
                *dst = *src;
            }
        }
    }

    if let Some(line) = scene.nodes().iter().find(|node| node.kind == NodeKind::TypingLine) {
        paint_typing(&mut frame, line, state);
    }

    for node in scene.overlays() {
        paint_overlay(&mut frame, node, state);
    }

    paint_cursor(&mut frame, state);
    paint_status(&mut frame, state);
    frame
}

// =============================================================================
// NODES
// =============================================================================

/// Paint `node` at its own coordinates. `accent` overrides the text style
/// of every span.
fn paint_node(buf: &mut FrameBuffer, node: &Node, accent: Option<(Rgba, Attr)>) {
    let rect = node.rect;
    if let Some(bg) = node.style.bg {
        buf.fill_rect(rect, bg, None);
    }
    if let Some(border) = node.style.border {
        buf.draw_border(rect, border, None);
    }

    let (x, y) = node.text_origin();
    let border = u16::from(node.style.has_border());
    let clip = Rect::new(
        rect.x,
        rect.y,
        rect.width.saturating_sub(border),
        rect.height.saturating_sub(border),
    );
    for (row, line) in node.lines.iter().enumerate() {
        draw_line(buf, x, y + row as u16, line, accent, &clip);
    }
}

fn draw_line(buf: &mut FrameBuffer, x: u16, y: u16, line: &Line, accent: Option<(Rgba, Attr)>, clip: &Rect) {
    let mut col = x;
    for span in line {
        let (fg, attrs) = accent.unwrap_or((span.fg, span.attrs));
        col += buf.draw_text(col, y, &span.text, fg, attrs, Some(clip));
    }
}

fn paint_typing(frame: &mut FrameBuffer, node: &Node, state: &PaintState<'_>) {
    let (x, y) = node.text_origin();
    let Some(row) = y.checked_sub(state.scroll_y) else {
        return;
    };
    if row >= state.height {
        return;
    }
    let clip = Rect::new(node.rect.x, row, node.rect.width, 1);
    let used = frame.draw_text(x, row, state.typing_text, Rgba::CYAN, Attr::BOLD, Some(&clip));
    frame.draw_text(x + used, row, CARET, Rgba::PURPLE, Attr::NONE, Some(&clip));
}

fn paint_overlay(frame: &mut FrameBuffer, node: &Node, state: &PaintState<'_>) {
    match &node.kind {
        NodeKind::NavBar => {
            let bg = if state.is_scrolled { Rgba::PANEL } else { Rgba::PAGE };
            frame.fill_rect(node.rect, bg, None);
            if state.is_scrolled && node.rect.height > 0 {
                let y = node.rect.bottom() - 1;
                for col in node.rect.x..node.rect.right() {
                    frame.draw_char(col, y, '─', Rgba::SUBTLE, Attr::NONE, None);
                }
            }
        }
        NodeKind::NavLink(id) if id == state.current_section => {
            paint_node(frame, node, Some((Rgba::PRIMARY, Attr::BOLD | Attr::UNDERLINE)));
        }
        NodeKind::ModalBackdrop => dim(frame, node.rect),
        _ => paint_node(frame, node, None),
    }
}

/// Fade everything already painted under `rect`.
fn dim(frame: &mut FrameBuffer, rect: Rect) {
    for row in rect.y..rect.bottom() {
        for col in rect.x..rect.right() {
            if let Some(cell) = frame.get_mut(col, row) {
                cell.fg = Rgba::lerp(cell.fg, Rgba::PAGE, 0.6);
                cell.bg = Rgba::lerp(cell.bg, Rgba::rgb(0, 0, 0), 0.5);
                cell.attrs = Attr::NONE;
            }
        }
    }
}

// =============================================================================
// CURSOR & STATUS
// =============================================================================

fn paint_cursor(frame: &mut FrameBuffer, state: &PaintState<'_>) {
    if let Some((x, y)) = state.ring {
        if state.dot != state.ring {
            if let Some(cell) = frame.get_mut(x, y) {
                cell.bg = Rgba::lerp(cell.bg, Rgba::PURPLE, 0.45);
            }
        }
    }
    if let Some((x, y)) = state.dot {
        if let Some(cell) = frame.get_mut(x, y) {
            cell.bg = Rgba::PRIMARY;
            cell.fg = Rgba::WHITE;
        }
    }
}

fn paint_status(frame: &mut FrameBuffer, state: &PaintState<'_>) {
    let Some(status) = state.status else {
        return;
    };
    let Some(y) = state.height.checked_sub(1) else {
        return;
    };
    let row = Rect::new(0, y, frame.width(), 1);
    frame.fill_rect(row, Rgba::PANEL, None);
    frame.draw_text(1, y, status, Rgba::CYAN, Attr::NONE, Some(&row));
}
