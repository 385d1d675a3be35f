//! Global Keys Module - Global keyboard shortcuts
//!
//! Provides global key handlers for:
//! - Ctrl+C / q: Graceful shutdown
//! - ArrowUp/ArrowDown, k/j: Scroll one row
//! - PageUp/PageDown, Space: Scroll one page
//! - Home/End: Jump to the top or bottom of the page
//!
//! These handlers are registered on mount and cleaned up on unmount.
//!
//! # Example
//!
//! ```ignore
//! use folio::state::{global_keys, ScrollController};
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicBool;
//!
//! let running = Arc::new(AtomicBool::new(true));
//! let handle = global_keys::setup_global_keys(running.clone(), ScrollController::new());
//!
//! // Later, on cleanup:
//! handle.cleanup();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::keyboard;
use super::scroll::{ScrollController, LINE_SCROLL};
use super::subscription::Subscription;

// =============================================================================
// GLOBAL KEYS HANDLE
// =============================================================================

/// Cleanup handle for global key handlers
pub struct GlobalKeysHandle {
    subscriptions: Vec<Subscription>,
}

impl GlobalKeysHandle {
    /// Clean up all global key handlers
    pub fn cleanup(self) {
        drop(self.subscriptions);
    }
}

// =============================================================================
// SETUP FUNCTIONS
// =============================================================================

/// Set up global key handlers.
/// Returns a handle for cleanup.
///
/// # Arguments
/// * `running` - Atomic bool to set to false on Ctrl+C or `q`
/// * `scroll` - The page scroll the navigation keys drive
pub fn setup_global_keys(running: Arc<AtomicBool>, scroll: ScrollController) -> GlobalKeysHandle {
    let mut subscriptions = Vec::new();

    // Ctrl+C - Graceful shutdown, checked before any plain-key handler
    let running_clone = running.clone();
    subscriptions.push(keyboard::on(move |event| {
        if event.is_interrupt() {
            log::info!("event=quit_requested key=ctrl-c");
            running_clone.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    }));

    subscriptions.push(keyboard::on_key("q", move || {
        log::info!("event=quit_requested key=q");
        running.store(false, Ordering::SeqCst);
        true
    }));

    let bindings: [(&[&str], fn(&ScrollController) -> bool); 6] = [
        (&["ArrowDown", "j"], |s: &ScrollController| s.scroll_by(LINE_SCROLL as i32)),
        (&["ArrowUp", "k"], |s: &ScrollController| s.scroll_by(-(LINE_SCROLL as i32))),
        (&["PageDown", " "], ScrollController::page_down),
        (&["PageUp"], ScrollController::page_up),
        (&["Home"], ScrollController::scroll_to_top),
        (&["End"], ScrollController::scroll_to_bottom),
    ];

    for (keys, action) in bindings {
        let scroll = scroll.clone();
        subscriptions.push(keyboard::on_keys(keys, move || {
            action(&scroll);
            true
        }));
    }

    GlobalKeysHandle { subscriptions }
}

// =============================================================================
// TESTS
// =============================================================================
