//! Mouse Module - Mouse event state and handler registry
//!
//! State and handler registry for mouse events. Does NOT own stdin (that is
//! the input module) and does NOT hit-test: the caller resolves the pointer
//! against the scene and passes the hit path (innermost node kind first).
//!
//! # API
//!
//! - `last_event` - Get last mouse event
//! - `mouse_x`, `mouse_y` - Get cursor position
//! - `is_mouse_down` - Get button state
//! - `dispatch(event, path)` - Dispatch mouse event
//! - `on_node_click(matcher, fn)` - Click handlers matched by node kind,
//!   bubbling from the innermost node outward
//! - `on_mouse_move(fn)` - Global pointer move handler
//! - `on_scroll(fn)` - Global wheel handler
//! - `on_click(fn)` - Global click handler
//!
//! # Example
//!
//! ```ignore
//! use folio::state::mouse;
//! use folio::page::NodeKind;
//!
//! // Clicks on any project card select it; returning true stops bubbling.
//! let sub = mouse::on_node_click(
//!     |kind| matches!(kind, NodeKind::ProjectCard(_)),
//!     |kind, _event| {
//!         println!("card {:?}", kind);
//!         true
//!     },
//! );
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::keyboard::Modifiers;
use super::subscription::Subscription;
use crate::page::NodeKind;

// =============================================================================
// TYPES
// =============================================================================

/// Mouse action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Scroll information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInfo {
    pub direction: ScrollDirection,
    pub delta: u16,
}

/// Mouse event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Action type (down, up, move, drag, scroll)
    pub action: MouseAction,
    /// Button pressed
    pub button: MouseButton,
    /// X coordinate (0-indexed, viewport)
    pub x: u16,
    /// Y coordinate (0-indexed, viewport)
    pub y: u16,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Scroll info (only for scroll events)
    pub scroll: Option<ScrollInfo>,
    /// Innermost node under the pointer (filled by dispatch)
    pub target: Option<NodeKind>,
}

impl MouseEvent {
    /// Create a new mouse event
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::default(),
            scroll: None,
            target: None,
        }
    }

    /// Create a scroll event
    pub fn scroll(x: u16, y: u16, direction: ScrollDirection, delta: u16) -> Self {
        Self {
            scroll: Some(ScrollInfo { direction, delta }),
            ..Self::new(MouseAction::Scroll, MouseButton::None, x, y)
        }
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    /// Create a mouse up event
    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    /// Create a mouse move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(MouseAction::Move, MouseButton::None, x, y)
    }
}

// =============================================================================
// REACTIVE STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<MouseEvent>> = signal(None);
    static MOUSE_X: Signal<u16> = signal(0);
    static MOUSE_Y: Signal<u16> = signal(0);
    static IS_MOUSE_DOWN: Signal<bool> = signal(false);
    static PRESSED: RefCell<Option<(Option<NodeKind>, MouseButton)>> = const { RefCell::new(None) };
}

/// Get the last mouse event
pub fn last_event() -> Option<MouseEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get current mouse X position
pub fn mouse_x() -> u16 {
    MOUSE_X.with(|s| s.get())
}

/// Get current mouse Y position
pub fn mouse_y() -> u16 {
    MOUSE_Y.with(|s| s.get())
}

/// Check if mouse button is currently down
pub fn is_mouse_down() -> bool {
    IS_MOUSE_DOWN.with(|s| s.get())
}

// =============================================================================
// HANDLER TYPES
// =============================================================================

/// Handler for mouse events. Return true to consume the event.
pub type MouseHandler = Rc<dyn Fn(&MouseEvent) -> bool>;

/// Click handler for a matched node. Return true to stop bubbling.
pub type NodeClickHandler = Rc<dyn Fn(&NodeKind, &MouseEvent) -> bool>;

type NodeMatcher = Box<dyn Fn(&NodeKind) -> bool>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    node_click_handlers: Vec<(usize, NodeMatcher, NodeClickHandler)>,
    global_move_handlers: Vec<(usize, MouseHandler)>,
    global_click_handlers: Vec<(usize, MouseHandler)>,
    global_scroll_handlers: Vec<(usize, MouseHandler)>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            node_click_handlers: Vec::new(),
            global_move_handlers: Vec::new(),
            global_click_handlers: Vec::new(),
            global_scroll_handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// PUBLIC API - REGISTRATION
// =============================================================================

/// Register a click handler for nodes whose kind satisfies `matcher`.
///
/// During bubbling, handlers are tried for each node on the hit path from the
/// innermost outward, in registration order; the first to return `true`
/// ends dispatch.
pub fn on_node_click<M, F>(matcher: M, handler: F) -> Subscription
where
    M: Fn(&NodeKind) -> bool + 'static,
    F: Fn(&NodeKind, &MouseEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.node_click_handlers
            .push((id, Box::new(matcher), Rc::new(handler)));
        id
    });

    Subscription::new(move || {
        let removed = REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            let pos = reg
                .node_click_handlers
                .iter()
                .position(|(handler_id, _, _)| *handler_id == id);
            pos.map(|pos| reg.node_click_handlers.remove(pos))
        });
        drop(removed);
    })
}

fn register_global(
    list: fn(&mut HandlerRegistry) -> &mut Vec<(usize, MouseHandler)>,
    handler: MouseHandler,
) -> Subscription {
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        list(&mut reg).push((id, handler));
        id
    });

    Subscription::new(move || {
        let removed = REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            let handlers = list(&mut reg);
            let pos = handlers.iter().position(|(handler_id, _)| *handler_id == id);
            pos.map(|pos| handlers.remove(pos))
        });
        drop(removed);
    })
}

/// Register a global pointer move handler (moves and drags).
pub fn on_mouse_move<F>(handler: F) -> Subscription
where
    F: Fn(&MouseEvent) -> bool + 'static,
{
    register_global(|reg| &mut reg.global_move_handlers, Rc::new(handler))
}

/// Register a global click handler, run after node handlers.
pub fn on_click<F>(handler: F) -> Subscription
where
    F: Fn(&MouseEvent) -> bool + 'static,
{
    register_global(|reg| &mut reg.global_click_handlers, Rc::new(handler))
}

/// Register a global scroll (wheel) handler.
pub fn on_scroll<F>(handler: F) -> Subscription
where
    F: Fn(&MouseEvent) -> bool + 'static,
{
    register_global(|reg| &mut reg.global_scroll_handlers, Rc::new(handler))
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch a mouse event. `path` lists the node kinds under the pointer
/// from the innermost outward (empty when nothing was hit).
///
/// Returns true if any handler consumed the event.
pub fn dispatch(mut event: MouseEvent, path: &[NodeKind]) -> bool {
    event.target = path.first().cloned();

    LAST_EVENT.with(|s| s.set(Some(event.clone())));
    MOUSE_X.with(|s| s.set(event.x));
    MOUSE_Y.with(|s| s.set(event.y));

    match event.action {
        MouseAction::Down => {
            IS_MOUSE_DOWN.with(|s| s.set(true));
            PRESSED.with(|p| *p.borrow_mut() = Some((event.target.clone(), event.button)));
            false
        }
        MouseAction::Up => {
            IS_MOUSE_DOWN.with(|s| s.set(false));
            dispatch_up(&event, path)
        }
        MouseAction::Move | MouseAction::Drag => run_global(&event, |reg| &reg.global_move_handlers),
        MouseAction::Scroll => run_global(&event, |reg| &reg.global_scroll_handlers),
    }
}

/// Snapshot matching handlers so they run without the registry borrowed.
fn run_global(
    event: &MouseEvent,
    list: fn(&HandlerRegistry) -> &Vec<(usize, MouseHandler)>,
) -> bool {
    let handlers: Vec<MouseHandler> = REGISTRY.with(|reg| {
        list(&reg.borrow())
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect()
    });
    handlers.iter().any(|handler| handler(event))
}

fn dispatch_up(event: &MouseEvent, path: &[NodeKind]) -> bool {
    let pressed = PRESSED.with(|p| p.borrow_mut().take());

    // Click: press and release on the same node with the same button.
    let is_click = matches!(
        &pressed,
        Some((target, button)) if *target == event.target && *button == event.button
    );
    if !is_click {
        return false;
    }

    for kind in path {
        let handlers: Vec<NodeClickHandler> = REGISTRY.with(|reg| {
            reg.borrow()
                .node_click_handlers
                .iter()
                .filter(|(_, matcher, _)| matcher(kind))
                .map(|(_, _, handler)| handler.clone())
                .collect()
        });
        for handler in handlers {
            if handler(kind, event) {
                log::trace!("event=click_consumed node={:?}", kind);
                return true;
            }
        }
    }

    run_global(event, |reg| &reg.global_click_handlers)
}

/// Reset all mouse state (for testing).
pub fn reset_mouse_state() {
    let dropped = REGISTRY.with(|reg| std::mem::replace(&mut *reg.borrow_mut(), HandlerRegistry::new()));
    drop(dropped);
    PRESSED.with(|p| *p.borrow_mut() = None);
    LAST_EVENT.with(|s| s.set(None));
    MOUSE_X.with(|s| s.set(0));
    MOUSE_Y.with(|s| s.set(0));
    IS_MOUSE_DOWN.with(|s| s.set(false));
}

/// Press and release at the same point; returns whether the click was consumed.
pub fn click(x: u16, y: u16, path: &[NodeKind]) -> bool {
    dispatch(MouseEvent::down(MouseButton::Left, x, y), path);
    dispatch(MouseEvent::up(MouseButton::Left, x, y), path)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_mouse_state();
    }

    fn card_path() -> Vec<NodeKind> {
        vec![
            NodeKind::SourceLink(7),
            NodeKind::ProjectCard(7),
            NodeKind::Section("projects".into()),
            NodeKind::Page,
        ]
    }

    #[test]
    fn test_dispatch_updates_state() {
        setup();
        dispatch(MouseEvent::move_to(10, 5), &[]);
        assert_eq!(mouse_x(), 10);
        assert_eq!(mouse_y(), 5);
        assert!(!is_mouse_down());

        dispatch(MouseEvent::down(MouseButton::Left, 10, 5), &[NodeKind::Page]);
        assert!(is_mouse_down());
        assert_eq!(last_event().unwrap().target, Some(NodeKind::Page));
    }

    #[test]
    fn test_click_bubbles_to_card() {
        setup();
        let selected = Rc::new(Cell::new(None));
        let s = selected.clone();
        let _card = on_node_click(
            |kind| matches!(kind, NodeKind::ProjectCard(_)),
            move |kind, _| {
                if let NodeKind::ProjectCard(id) = kind {
                    s.set(Some(*id));
                }
                true
            },
        );

        assert!(click(3, 3, &card_path()));
        assert_eq!(selected.get(), Some(7));
    }

    #[test]
    fn test_consuming_link_stops_bubbling() {
        setup();
        let selected = Rc::new(Cell::new(false));
        let opened = Rc::new(Cell::new(false));
        let (s, o) = (selected.clone(), opened.clone());
        let _card = on_node_click(
            |kind| matches!(kind, NodeKind::ProjectCard(_)),
            move |_, _| {
                s.set(true);
                true
            },
        );
        let _link = on_node_click(
            |kind| matches!(kind, NodeKind::SourceLink(_)),
            move |_, _| {
                o.set(true);
                true
            },
        );

        click(3, 3, &card_path());
        assert!(opened.get());
        assert!(!selected.get());
    }

    #[test]
    fn test_release_elsewhere_is_not_click() {
        setup();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let _sub = on_node_click(
            |_| true,
            move |_, _| {
                c.set(c.get() + 1);
                true
            },
        );

        dispatch(MouseEvent::down(MouseButton::Left, 1, 1), &[NodeKind::Brand]);
        dispatch(MouseEvent::up(MouseButton::Left, 9, 9), &[NodeKind::Page]);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_global_handlers_and_cleanup() {
        setup();
        let moves = Rc::new(Cell::new(0));
        let m = moves.clone();
        let sub = on_mouse_move(move |_| {
            m.set(m.get() + 1);
            false
        });

        dispatch(MouseEvent::move_to(1, 1), &[]);
        sub.cancel();
        dispatch(MouseEvent::move_to(2, 2), &[]);
        assert_eq!(moves.get(), 1);
    }

    #[test]
    fn test_scroll_dispatch() {
        setup();
        let delta = Rc::new(Cell::new(0));
        let d = delta.clone();
        let _sub = on_scroll(move |event| {
            d.set(event.scroll.map(|s| s.delta).unwrap_or(0));
            true
        });

        assert!(dispatch(MouseEvent::scroll(0, 0, ScrollDirection::Down, 3), &[]));
        assert_eq!(delta.get(), 3);
    }

    #[test]
    fn test_handler_may_unregister_during_dispatch() {
        setup();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let s = slot.clone();
        let sub = on_click(move |_| {
            s.borrow_mut().take();
            false
        });
        *slot.borrow_mut() = Some(sub);

        click(0, 0, &[]);
        assert!(slot.borrow().is_none());
    }
}
