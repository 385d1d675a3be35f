//! Controllers - the page's interactive behavior
//!
//! Each controller owns one piece of UI state as signals and exposes the
//! operations that change it. `bind()` registers its input handlers and
//! returns the guards; the mount handle keeps them alive.
//!
//! - **tracker** - which section is current, scrolled nav chrome
//! - **nav** - nav links, section activation, mobile menu
//! - **typing** - cycling role line in the hero
//! - **project_detail** - project modal selection
//! - **links** - outbound links and the status line
//! - **cursor** - pointer-following dot and ring

pub mod cursor;
pub mod links;
pub mod nav;
pub mod project_detail;
pub mod tracker;
pub mod typing;

pub use cursor::{MouseFollowCursor, Point};
pub use links::LinkController;
pub use nav::{NavLink, NavigationController};
pub use project_detail::ProjectDetailController;
pub use tracker::{ActiveSectionTracker, HitTestStrategy, SectionState, ThresholdStrategy};
pub use typing::{TypingAnimator, TypingMachine, TypingPhase};
