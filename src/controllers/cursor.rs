//! Mouse Follow Cursor - a dot and a trailing ring drawn under the pointer
//!
//! Pointer moves only record the latest position; the visible layers update
//! at most once per animation frame. The dot snaps to the pointer, the ring
//! covers `ease` of the remaining distance each frame and keeps requesting
//! frames until it arrives. Both stay hidden until the first move.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::config::Config;
use crate::state::frame::FrameGate;
use crate::state::mouse;
use crate::state::subscription::Subscription;

/// Cell position in viewport coordinates.
pub type Point = (u16, u16);

/// Ring distance (in cells) below which it lands on the target.
const SNAP_DISTANCE: f32 = 0.5;

struct Shared {
    pointer: Cell<Option<Point>>,
    ring_pos: Cell<Option<(f32, f32)>>,
    dot: Signal<Option<Point>>,
    ring: Signal<Option<Point>>,
    gate: FrameGate,
    ease: f32,
    trail: bool,
    updates: Cell<u64>,
}

pub struct MouseFollowCursor {
    shared: Rc<Shared>,
    _on_move: Subscription,
}

impl MouseFollowCursor {
    pub fn mount(config: &Config) -> Self {
        let shared = Rc::new(Shared {
            pointer: Cell::new(None),
            ring_pos: Cell::new(None),
            dot: signal(None),
            ring: signal(None),
            gate: FrameGate::new(),
            ease: config.cursor_ease.clamp(f32::EPSILON, 1.0),
            trail: config.cursor_trail,
            updates: Cell::new(0),
        });

        let this = Rc::clone(&shared);
        let on_move = mouse::on_mouse_move(move |event| {
            this.pointer.set(Some((event.x, event.y)));
            request(&this);
            false
        });

        Self {
            shared,
            _on_move: on_move,
        }
    }

    pub fn dot(&self) -> Option<Point> {
        self.shared.dot.get()
    }

    pub fn ring(&self) -> Option<Point> {
        self.shared.ring.get()
    }

    pub fn dot_signal(&self) -> Signal<Option<Point>> {
        self.shared.dot.clone()
    }

    pub fn ring_signal(&self) -> Signal<Option<Point>> {
        self.shared.ring.clone()
    }

    /// Frames in which the cursor state was updated.
    pub fn update_count(&self) -> u64 {
        self.shared.updates.get()
    }

    pub fn is_pending(&self) -> bool {
        self.shared.gate.is_pending()
    }
}

impl Drop for MouseFollowCursor {
    fn drop(&mut self) {
        self.shared.gate.cancel();
    }
}

fn request(shared: &Rc<Shared>) {
    let this = Rc::clone(shared);
    shared.gate.schedule(move || update(&this));
}

fn update(shared: &Rc<Shared>) {
    let Some(target) = shared.pointer.get() else {
        return;
    };
    shared.updates.set(shared.updates.get() + 1);

    if shared.dot.get() != Some(target) {
        shared.dot.set(Some(target));
    }

    let goal = (target.0 as f32, target.1 as f32);
    let next = match shared.ring_pos.get() {
        Some((x, y)) if shared.trail => {
            let (dx, dy) = (goal.0 - x, goal.1 - y);
            let moved = (x + dx * shared.ease, y + dy * shared.ease);
            if (goal.0 - moved.0).hypot(goal.1 - moved.1) < SNAP_DISTANCE {
                goal
            } else {
                moved
            }
        }
        _ => goal,
    };
    shared.ring_pos.set(Some(next));

    let cell = (next.0.round() as u16, next.1.round() as u16);
    if shared.ring.get() != Some(cell) {
        shared.ring.set(Some(cell));
    }

    if next != goal {
        request(shared);
    }
}
