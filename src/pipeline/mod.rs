//! Pipeline - from a mounted portfolio to the terminal
//!
//! ```text
//! signals (scroll, section, typing, cursor, menu, modal)
//!     → overlay effect → Scene overlays
//!     → render effect  → paint_frame → sink (DiffRenderer → stdout)
//! ```
//!
//! - **mount** - wires controllers, effects and the event loop
//! - **terminal** - raw mode, alternate screen, mouse capture

pub mod mount;
pub mod terminal;

pub use mount::{mount, print_page, run, MountHandle};
pub use terminal::{terminal_size, TerminalSetup, DEFAULT_SIZE};
