//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with our mouse and keyboard modules.
//! Routing lives in the pipeline, which owns the scene needed to hit-test
//! mouse events.
//!
//! # API
//!
//! - `convert_mouse_event` - Convert crossterm MouseEvent to our MouseEvent
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `poll_event` - Event check with timeout
//! - `read_event` - Blocking event read

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers, MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use super::mouse::{MouseAction, MouseButton, MouseEvent, ScrollDirection, ScrollInfo};
use super::scroll::WHEEL_SCROLL;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified terminal input event
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse event (click, scroll, move, etc.)
    Mouse(MouseEvent),
    /// Keyboard event (key press, release, etc.)
    Key(KeyboardEvent),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to our MouseEvent
///
/// One wheel notch scrolls [`WHEEL_SCROLL`] rows.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> MouseEvent {
    let modifiers = convert_modifiers(event.modifiers);
    let (x, y) = (event.column, event.row);

    let wheel = |direction| MouseEvent {
        modifiers,
        ..MouseEvent::scroll(x, y, direction, WHEEL_SCROLL)
    };

    let (action, button) = match event.kind {
        MouseEventKind::Down(btn) => (MouseAction::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (MouseAction::Up, convert_mouse_button(btn)),
        MouseEventKind::Drag(btn) => (MouseAction::Drag, convert_mouse_button(btn)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::None),
        MouseEventKind::ScrollUp => return wheel(ScrollDirection::Up),
        MouseEventKind::ScrollDown => return wheel(ScrollDirection::Down),
        MouseEventKind::ScrollLeft => return wheel(ScrollDirection::Left),
        MouseEventKind::ScrollRight => return wheel(ScrollDirection::Right),
    };

    MouseEvent {
        modifiers,
        ..MouseEvent::new(action, button, x, y)
    }
}

/// Convert crossterm MouseButton to our MouseButton
fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

/// Signed row delta of a vertical wheel event; horizontal wheels are ignored.
pub fn wheel_delta(scroll: &ScrollInfo) -> i32 {
    match scroll.direction {
        ScrollDirection::Up => -(scroll.delta as i32),
        ScrollDirection::Down => scroll.delta as i32,
        ScrollDirection::Left | ScrollDirection::Right => 0,
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER),
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Mouse(mouse) => Ok(InputEvent::Mouse(convert_mouse_event(mouse))),
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> CrosstermMouseEvent {
        CrosstermMouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers,
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_mouse_down() {
        let event = convert_mouse_event(mouse(
            MouseEventKind::Down(CrosstermMouseButton::Left),
            KeyModifiers::empty(),
        ));

        assert_eq!(event.action, MouseAction::Down);
        assert_eq!(event.button, MouseButton::Left);
        assert_eq!((event.x, event.y), (10, 5));
        assert!(event.scroll.is_none());
        assert!(event.target.is_none());
    }

    #[test]
    fn test_convert_wheel_rows() {
        let event = convert_mouse_event(mouse(MouseEventKind::ScrollDown, KeyModifiers::SHIFT));
        assert_eq!(event.action, MouseAction::Scroll);
        assert!(event.modifiers.shift);

        let scroll = event.scroll.unwrap();
        assert_eq!(scroll.direction, ScrollDirection::Down);
        assert_eq!(wheel_delta(&scroll), WHEEL_SCROLL as i32);

        let up = convert_mouse_event(mouse(MouseEventKind::ScrollUp, KeyModifiers::empty()));
        assert_eq!(wheel_delta(&up.scroll.unwrap()), -(WHEEL_SCROLL as i32));

        let left = convert_mouse_event(mouse(MouseEventKind::ScrollLeft, KeyModifiers::empty()));
        assert_eq!(wheel_delta(&left.scroll.unwrap()), 0);
    }

    #[test]
    fn test_convert_mouse_move_and_drag() {
        let moved = convert_mouse_event(mouse(MouseEventKind::Moved, KeyModifiers::empty()));
        assert_eq!(moved.action, MouseAction::Move);
        assert_eq!(moved.button, MouseButton::None);

        let drag = convert_mouse_event(mouse(
            MouseEventKind::Drag(CrosstermMouseButton::Left),
            KeyModifiers::empty(),
        ));
        assert_eq!(drag.action, MouseAction::Drag);
    }

    #[test]
    fn test_convert_keys() {
        let event = convert_key_event(key(KeyCode::Char('j'), KeyModifiers::empty()));
        assert_eq!(event.key, "j");
        assert!(event.is_press());

        let event = convert_key_event(key(KeyCode::PageDown, KeyModifiers::empty()));
        assert_eq!(event.key, "PageDown");

        let event = convert_key_event(key(KeyCode::Esc, KeyModifiers::empty()));
        assert_eq!(event.key, "Escape");

        let event = convert_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(event.is_interrupt());
    }
}
