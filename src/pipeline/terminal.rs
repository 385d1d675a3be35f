//! Terminal setup and teardown.
//!
//! Handles entering/exiting raw mode, the alternate screen and mouse
//! tracking through crossterm. Teardown also runs on drop, so a panic or an
//! early `?` return still hands the terminal back in a usable state.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};

/// Fallback when the size cannot be queried (not a TTY).
pub const DEFAULT_SIZE: (u16, u16) = (100, 30);

/// Current terminal size as `(width, height)`.
pub fn terminal_size() -> (u16, u16) {
    match terminal::size() {
        Ok((w, h)) if w > 0 && h > 0 => (w, h),
        _ => DEFAULT_SIZE,
    }
}

/// Terminal setup/teardown handle.
#[derive(Debug, Default)]
pub struct TerminalSetup {
    is_fullscreen: bool,
    is_raw: bool,
    mouse_enabled: bool,
}

impl TerminalSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Raw mode, alternate screen, hidden cursor, mouse capture.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.is_raw = true;

        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.is_fullscreen = true;

        execute!(out, EnableMouseCapture)?;
        self.mouse_enabled = true;

        log::debug!("event=terminal_enter");
        Ok(())
    }

    /// Undo everything `enter_fullscreen` did, in reverse order.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        let mut out = io::stdout();

        if self.mouse_enabled {
            execute!(out, DisableMouseCapture)?;
            self.mouse_enabled = false;
        }

        if self.is_fullscreen {
            execute!(out, ResetColor, Show, LeaveAlternateScreen)?;
            self.is_fullscreen = false;
        }
        out.flush()?;

        if self.is_raw {
            disable_raw_mode()?;
            self.is_raw = false;
        }

        log::debug!("event=terminal_exit");
        Ok(())
    }
}

impl Drop for TerminalSetup {
    fn drop(&mut self) {
        if self.is_fullscreen || self.is_raw {
            let _ = self.exit_fullscreen();
        }
    }
}
