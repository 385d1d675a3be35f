//! Renderer - cells in, escape codes out.
//!
//! - [`buffer`] - the cell grid and drawing primitives
//! - [`paint`] - scene and live state to cells
//! - [`output`] - batched, state-tracking escape code emission
//! - [`diff`] - only changed cells reach the terminal

pub mod buffer;
pub mod diff;
pub mod output;
pub mod paint;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
pub use paint::{paint_frame, paint_page, PaintState};
