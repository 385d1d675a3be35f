//! Keyboard Module - Keyboard event state and handler registry
//!
//! State and handler registry for keyboard events.
//! Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `last_event` - Get last keyboard event
//! - `last_key` - Get last key pressed
//! - `on(handler)` - Subscribe to all keyboard events
//! - `on_key(key, fn)` / `on_keys(keys, fn)` - Subscribe to specific key(s)
//!
//! Key-specific handlers run before global ones; the first handler to
//! return `true` consumes the event.
//!
//! # Example
//!
//! ```ignore
//! use folio::state::keyboard;
//!
//! let _sub = keyboard::on_key("Escape", || {
//!     println!("close");
//!     true // Consume event
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::subscription::Subscription;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_modifiers(key, Modifiers::default())
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press and auto-repeat both count as input.
    pub fn is_press(&self) -> bool {
        self.state != KeyState::Release
    }

    /// Ctrl+C, which always quits.
    pub fn is_interrupt(&self) -> bool {
        self.modifiers.ctrl && self.key.eq_ignore_ascii_case("c")
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Rc<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for specific key. Return true to consume the event.
pub type KeySpecificHandler = Rc<dyn Fn() -> bool>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// Get the last keyboard event
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get the last key pressed
pub fn last_key() -> String {
    last_event().map(|e| e.key).unwrap_or_default()
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn remove_key_handler(&mut self, key: &str, id: usize) -> Option<KeySpecificHandler> {
        let handlers = self.key_handlers.get_mut(key)?;
        let pos = handlers.iter().position(|(handler_id, _)| *handler_id == id)?;
        let (_, handler) = handlers.remove(pos);
        if handlers.is_empty() {
            self.key_handlers.remove(key);
        }
        Some(handler)
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch a keyboard event to all registered handlers.
/// Returns true if any handler consumed the event.
pub fn dispatch(event: KeyboardEvent) -> bool {
    // Always update reactive state
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    if !event.is_press() {
        return false;
    }

    // Snapshot so handlers can subscribe or unsubscribe while running.
    let (specific, global): (Vec<KeySpecificHandler>, Vec<KeyHandler>) = REGISTRY.with(|reg| {
        let reg = reg.borrow();
        let specific = reg
            .key_handlers
            .get(&event.key)
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default();
        let global = reg.global_handlers.iter().map(|(_, h)| h.clone()).collect();
        (specific, global)
    });

    specific.iter().any(|handler| handler()) || global.iter().any(|handler| handler(&event))
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to all keyboard events.
/// Return true from handler to consume the event.
pub fn on<F>(handler: F) -> Subscription
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Rc::new(handler)));
        id
    });

    Subscription::new(move || {
        let removed = REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            let pos = reg.global_handlers.iter().position(|(handler_id, _)| *handler_id == id);
            pos.map(|pos| reg.global_handlers.remove(pos))
        });
        drop(removed);
    })
}

/// Subscribe to a specific key.
/// Handler receives no arguments - check last_event if needed.
/// Return true to consume the event.
pub fn on_key<F>(key: &str, handler: F) -> Subscription
where
    F: Fn() -> bool + 'static,
{
    on_keys(&[key], handler)
}

/// Subscribe to multiple keys with the same handler.
pub fn on_keys<F>(keys: &[&str], handler: F) -> Subscription
where
    F: Fn() -> bool + 'static,
{
    let handler: KeySpecificHandler = Rc::new(handler);
    let ids: Vec<(String, usize)> = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        keys.iter()
            .map(|key| {
                let id = reg.next_id();
                reg.key_handlers
                    .entry(key.to_string())
                    .or_default()
                    .push((id, handler.clone()));
                (key.to_string(), id)
            })
            .collect()
    });

    Subscription::new(move || {
        let removed: Vec<KeySpecificHandler> = REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            ids.iter()
                .filter_map(|(key, id)| reg.remove_key_handler(key, *id))
                .collect()
        });
        drop(removed);
    })
}

/// Reset keyboard state (for testing)
pub fn reset_keyboard_state() {
    let dropped = REGISTRY.with(|reg| std::mem::replace(&mut *reg.borrow_mut(), HandlerRegistry::new()));
    drop(dropped);
    LAST_EVENT.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_keyboard_state();
    }

    #[test]
    fn test_initial_state() {
        setup();
        assert!(last_event().is_none());
        assert_eq!(last_key(), "");
    }

    #[test]
    fn test_dispatch_updates_state() {
        setup();
        dispatch(KeyboardEvent::new("j"));
        assert_eq!(last_key(), "j");
    }

    #[test]
    fn test_key_specific_before_global() {
        setup();
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (order.clone(), order.clone());
        let _global = on(move |_| {
            a.borrow_mut().push("global");
            false
        });
        let _key = on_key("Enter", move || {
            b.borrow_mut().push("enter");
            false
        });

        dispatch(KeyboardEvent::new("Enter"));
        assert_eq!(*order.borrow(), vec!["enter", "global"]);
    }

    #[test]
    fn test_handler_consumption() {
        setup();
        let reached = Rc::new(Cell::new(false));
        let r = reached.clone();
        let _key = on_key("q", || true);
        let _global = on(move |_| {
            r.set(true);
            false
        });

        assert!(dispatch(KeyboardEvent::new("q")));
        assert!(!reached.get());
    }

    #[test]
    fn test_on_keys_cleanup() {
        setup();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = on_keys(&["j", "ArrowDown"], move || {
            c.set(c.get() + 1);
            true
        });

        dispatch(KeyboardEvent::new("j"));
        dispatch(KeyboardEvent::new("ArrowDown"));
        sub.cancel();
        dispatch(KeyboardEvent::new("j"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_release_not_dispatched() {
        setup();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let _sub = on(move |_| {
            c.set(c.get() + 1);
            true
        });

        let mut event = KeyboardEvent::new("a");
        event.state = KeyState::Release;
        assert!(!dispatch(event));
        assert_eq!(count.get(), 0);
        assert_eq!(last_key(), "a");
    }

    #[test]
    fn test_interrupt() {
        assert!(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).is_interrupt());
        assert!(!KeyboardEvent::new("c").is_interrupt());
    }
}
