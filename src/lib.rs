//! # folio
//!
//! Reactive terminal portfolio.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! The content catalog is composed once per viewport size into a [`page::Scene`]:
//! positioned document nodes (laid out with Taffy) plus fixed overlays. Small
//! controllers own the interactive state as signals, and two effects turn that
//! state into frames:
//!
//! ```text
//! ContentCatalog → compose → Scene ─┐
//! scroll / section / typing / cursor / menu / modal signals
//!     → overlay effect → render effect → DiffRenderer → terminal
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Profile, sections, projects and contact data
//! - [`config`] - Runtime tunables (tracking mode, typing cadence, cursor)
//! - [`controllers`] - Section tracking, navigation, typing, project detail, cursor
//! - [`page`] - Composition, overlays, hit-testing
//! - [`renderer`] - Cell buffer, painter, diff renderer
//! - [`state`] - Input registries, timers, frames, scroll
//! - [`pipeline`] - Mount, event loop, terminal setup

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod page;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use catalog::{ContactInfo, ContentCatalog, Profile, Project, ProjectDetails, Section};
pub use config::{Config, TrackingMode};
pub use error::{FolioError, Result};

pub use controllers::{
    ActiveSectionTracker, HitTestStrategy, LinkController, MouseFollowCursor, NavLink,
    NavigationController, ProjectDetailController, SectionState, ThresholdStrategy,
    TypingAnimator, TypingMachine, TypingPhase,
};

pub use page::{compose, NodeKind, Scene, SharedScene};

pub use pipeline::{mount, print_page, run, MountHandle};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use state::{
    reset_all, KeyboardEvent, Modifiers, MouseAction, MouseButton, MouseEvent, ScrollController,
    ScrollDirection, Subscription,
};
