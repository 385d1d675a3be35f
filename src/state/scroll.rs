//! Scroll State Module - the page viewport's vertical scroll offset
//!
//! Manages scrolling behavior:
//! - Scroll offset (reactive signal, read by the render effect)
//! - Scroll bounds from the composed page (content height - viewport height)
//! - Immediate scroll operations with clamping
//! - Smooth scrolling toward a target, advanced one step per frame
//! - Passive scroll listeners
//!
//! Listeners receive a [`ScrollEvent`] after the offset has changed and
//! cannot veto it: the scroll never waits on a listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};

use super::subscription::Subscription;

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (rows).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// Fraction of the remaining distance covered per smooth-scroll step.
pub const SMOOTH_SCROLL_FACTOR: f32 = 0.3;

// =============================================================================
// TYPES
// =============================================================================

/// Delivered to listeners after every offset change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub offset: u16,
    pub previous: u16,
    pub max_offset: u16,
}

type ScrollListener = Rc<dyn Fn(&ScrollEvent)>;

struct ScrollInner {
    offset: Signal<u16>,
    max_offset: Cell<u16>,
    viewport_height: Cell<u16>,
    target: Cell<Option<u16>>,
    next_listener_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, ScrollListener)>>,
}

/// Owner of the page scroll offset. Clones share the same state.
#[derive(Clone)]
pub struct ScrollController {
    inner: Rc<ScrollInner>,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollController {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScrollInner {
                offset: signal(0),
                max_offset: Cell::new(0),
                viewport_height: Cell::new(0),
                target: Cell::new(None),
                next_listener_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    pub fn offset(&self) -> u16 {
        self.inner.offset.get()
    }

    /// Signal for reactive tracking of the offset.
    pub fn offset_signal(&self) -> Signal<u16> {
        self.inner.offset.clone()
    }

    pub fn max_offset(&self) -> u16 {
        self.inner.max_offset.get()
    }

    pub fn viewport_height(&self) -> u16 {
        self.inner.viewport_height.get()
    }

    /// Where a smooth scroll is heading, if one is running.
    pub fn target(&self) -> Option<u16> {
        self.inner.target.get()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.target.get().is_some()
    }

    /// Update bounds after the page was (re)composed or the terminal resized.
    ///
    /// The current offset and any smooth-scroll target are clamped.
    pub fn set_bounds(&self, content_height: u16, viewport_height: u16) {
        let max = content_height.saturating_sub(viewport_height);
        self.inner.max_offset.set(max);
        self.inner.viewport_height.set(viewport_height);

        if let Some(target) = self.inner.target.get() {
            self.inner.target.set(Some(target.min(max)));
        }
        let current = self.offset();
        if current > max {
            self.apply(max);
        }
    }

    // =========================================================================
    // IMMEDIATE SCROLL OPERATIONS
    // =========================================================================

    /// Jump to `y` (clamped). Interrupts a running smooth scroll.
    ///
    /// Returns `true` if the offset changed.
    pub fn set_offset(&self, y: u16) -> bool {
        self.inner.target.set(None);
        self.apply(y.min(self.max_offset()))
    }

    /// Scroll by a delta amount.
    ///
    /// Returns `true` if scrolling occurred, `false` if already at boundary.
    pub fn scroll_by(&self, delta: i32) -> bool {
        let current = self.offset() as i32;
        let new_y = (current + delta).clamp(0, self.max_offset() as i32) as u16;
        self.set_offset(new_y)
    }

    pub fn scroll_to_top(&self) -> bool {
        self.set_offset(0)
    }

    pub fn scroll_to_bottom(&self) -> bool {
        self.set_offset(self.max_offset())
    }

    pub fn page_down(&self) -> bool {
        self.scroll_by(self.page_amount() as i32)
    }

    pub fn page_up(&self) -> bool {
        self.scroll_by(-(self.page_amount() as i32))
    }

    fn page_amount(&self) -> u16 {
        ((self.viewport_height() as f32 * PAGE_SCROLL_FACTOR) as u16).max(1)
    }

    // =========================================================================
    // SMOOTH SCROLL
    // =========================================================================

    /// Start (or retarget) a smooth scroll toward `y` (clamped).
    ///
    /// Returns `false` when already at the clamped target; nothing moves.
    pub fn smooth_scroll_to(&self, y: u16) -> bool {
        let target = y.min(self.max_offset());
        if target == self.offset() {
            self.inner.target.set(None);
            return false;
        }
        self.inner.target.set(Some(target));
        true
    }

    /// Advance a running smooth scroll by one frame.
    ///
    /// Returns `true` while the scroll is still moving after this step.
    pub fn step(&self) -> bool {
        let Some(target) = self.inner.target.get() else {
            return false;
        };
        let current = self.offset();
        let distance = (target as i32 - current as i32).unsigned_abs();
        let stride = ((distance as f32 * SMOOTH_SCROLL_FACTOR).ceil() as u32).clamp(1, distance.max(1));
        let next = if target > current {
            current.saturating_add(stride as u16)
        } else {
            current.saturating_sub(stride as u16)
        };

        self.apply(next);
        if next == target {
            self.inner.target.set(None);
            false
        } else {
            true
        }
    }

    // =========================================================================
    // LISTENERS
    // =========================================================================

    /// Subscribe to offset changes. Listeners run in registration order.
    pub fn on_scroll<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ScrollEvent) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                let removed: Vec<_> = {
                    let mut listeners = inner.listeners.borrow_mut();
                    let (gone, kept) = std::mem::take(&mut *listeners)
                        .into_iter()
                        .partition(|(listener_id, _)| *listener_id == id);
                    *listeners = kept;
                    gone
                };
                drop(removed);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn apply(&self, y: u16) -> bool {
        let previous = self.offset();
        if y == previous {
            return false;
        }
        self.inner.offset.set(y);

        let event = ScrollEvent {
            offset: y,
            previous,
            max_offset: self.max_offset(),
        };
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<ScrollListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(content: u16, viewport: u16) -> ScrollController {
        let scroll = ScrollController::new();
        scroll.set_bounds(content, viewport);
        scroll
    }

    #[test]
    fn test_bounds() {
        let scroll = controller(100, 20);
        assert_eq!(scroll.max_offset(), 80);
        assert_eq!(scroll.offset(), 0);

        let short = controller(10, 20);
        assert_eq!(short.max_offset(), 0);
        assert!(!short.scroll_by(5));
    }

    #[test]
    fn test_set_offset_clamps() {
        let scroll = controller(100, 20);
        assert!(scroll.set_offset(50));
        assert_eq!(scroll.offset(), 50);

        assert!(scroll.set_offset(500));
        assert_eq!(scroll.offset(), 80);

        assert!(!scroll.set_offset(80));
    }

    #[test]
    fn test_scroll_by_returns_bool() {
        let scroll = controller(30, 20);

        assert!(scroll.scroll_by(5));
        assert_eq!(scroll.offset(), 5);
        assert!(scroll.scroll_by(10));
        assert_eq!(scroll.offset(), 10);

        // At boundary
        assert!(!scroll.scroll_by(1));
        assert!(scroll.scroll_by(-100));
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.scroll_by(-1));
    }

    #[test]
    fn test_page_scroll() {
        let scroll = controller(200, 20);
        assert!(scroll.page_down());
        assert_eq!(scroll.offset(), 18);
        assert!(scroll.page_up());
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_top_bottom() {
        let scroll = controller(100, 20);
        assert!(scroll.scroll_to_bottom());
        assert_eq!(scroll.offset(), 80);
        assert!(scroll.scroll_to_top());
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_shrinking_bounds_clamps_offset() {
        let scroll = controller(100, 20);
        scroll.set_offset(70);
        scroll.set_bounds(60, 20);
        assert_eq!(scroll.offset(), 40);
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let scroll = controller(200, 20);
        assert!(scroll.smooth_scroll_to(60));
        assert_eq!(scroll.target(), Some(60));

        let mut steps = 0;
        while scroll.step() {
            steps += 1;
            assert!(steps < 100, "smooth scroll did not converge");
        }
        assert_eq!(scroll.offset(), 60);
        assert!(!scroll.is_animating());

        // Upward too
        assert!(scroll.smooth_scroll_to(5));
        while scroll.step() {}
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_smooth_scroll_to_current_is_noop() {
        let scroll = controller(200, 20);
        assert!(!scroll.smooth_scroll_to(0));
        assert!(!scroll.is_animating());
        assert!(!scroll.step());
    }

    #[test]
    fn test_smooth_scroll_target_clamped() {
        let scroll = controller(50, 20);
        assert!(scroll.smooth_scroll_to(1000));
        assert_eq!(scroll.target(), Some(30));
    }

    #[test]
    fn test_user_scroll_interrupts_smooth() {
        let scroll = controller(200, 20);
        scroll.smooth_scroll_to(100);
        scroll.step();
        scroll.scroll_by(1);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_listeners_receive_events_and_unsubscribe() {
        let scroll = controller(100, 20);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let sub = scroll.on_scroll(move |event| s.borrow_mut().push((event.previous, event.offset)));

        assert_eq!(scroll.listener_count(), 1);
        scroll.set_offset(10);
        scroll.set_offset(10);
        scroll.scroll_by(-3);
        assert_eq!(*seen.borrow(), vec![(0, 10), (10, 7)]);

        drop(sub);
        assert_eq!(scroll.listener_count(), 0);
        scroll.set_offset(0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let scroll = controller(100, 20);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let s = slot.clone();
        let sub = scroll.on_scroll(move |_| {
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        scroll.set_offset(5);
        assert_eq!(scroll.listener_count(), 0);
    }
}
