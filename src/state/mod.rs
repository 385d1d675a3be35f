//! State Module - Runtime state management systems
//!
//! The registries and owners that drive interactivity:
//!
//! - **Subscription** - RAII guard returned by every registration
//! - **Timer** - Cooperative one-shot timers on a virtual clock
//! - **Frame** - Per-frame callback queue and coalescing gate
//! - **Scroll** - Page scroll offset, smooth scrolling, passive listeners
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Mouse** - Event types, click bubbling, handler registry
//! - **Input** - crossterm conversion and polling
//! - **Global Keys** - quit and page scrolling shortcuts

pub mod frame;
pub mod global_keys;
pub mod input;
pub mod keyboard;
pub mod mouse;
pub mod scroll;
pub mod subscription;
pub mod timer;

pub use frame::{FrameGate, FrameId};
pub use global_keys::{setup_global_keys, GlobalKeysHandle};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use mouse::{MouseAction, MouseButton, MouseEvent, ScrollDirection};
pub use scroll::{ScrollController, ScrollEvent};
pub use subscription::Subscription;
pub use timer::TimerId;

/// Reset every thread-local registry (for testing).
pub fn reset_all() {
    timer::reset_timers();
    frame::reset_frames();
    keyboard::reset_keyboard_state();
    mouse::reset_mouse_state();
}
