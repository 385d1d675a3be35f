//! Page Module - the scrollable document and its fixed overlays
//!
//! - **compose** - catalog content to a laid-out document (Taffy)
//! - **overlay** - navigation bar, mobile menu, detail modal
//! - **scene** - node storage, ancestry queries, hit-testing
//! - **text** - Unicode-aware width, wrapping, truncation

mod compose;
mod node;
mod overlay;
mod scene;
pub mod text;

pub use compose::{compose, CARD_DESCRIPTION_LINES, MAX_CARD_TAGS, MAX_CONTENT_WIDTH, NAV_HEIGHT};
pub use node::{Layer, Line, Node, NodeId, NodeKind, NodeStyle, Span};
pub use overlay::{modal_lines, rebuild_overlays, OverlayState};
pub use scene::{Scene, SharedScene};
