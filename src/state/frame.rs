//! Animation Frames - per-frame callback queue and event coalescing
//!
//! The event loop calls [`flush_frame`] once per frame interval. Callbacks
//! requested while a flush is running land in the next frame, so a callback
//! that re-requests itself runs once per frame, never in a tight loop.
//!
//! [`FrameGate`] is the "ticking flag" pattern: a burst of scroll or pointer
//! events arriving inside one frame produces a single update.
//!
//! # Example
//!
//! ```ignore
//! use folio::state::frame::{FrameGate, flush_frame};
//!
//! let gate = FrameGate::new();
//! gate.schedule(|| println!("update"));
//! gate.schedule(|| println!("ignored, already pending"));
//! flush_frame(); // prints "update" once
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

struct FrameQueue {
    next_id: u64,
    frames_flushed: u64,
    pending: Vec<(u64, Box<dyn FnOnce()>)>,
}

thread_local! {
    static FRAMES: RefCell<FrameQueue> = RefCell::new(FrameQueue {
        next_id: 0,
        frames_flushed: 0,
        pending: Vec::new(),
    });
}

/// Run `callback` on the next frame.
pub fn request_frame<F>(callback: F) -> FrameId
where
    F: FnOnce() + 'static,
{
    FRAMES.with(|frames| {
        let mut frames = frames.borrow_mut();
        let id = frames.next_id;
        frames.next_id += 1;
        frames.pending.push((id, Box::new(callback)));
        FrameId(id)
    })
}

/// Withdraw a frame request. Unknown ids are ignored.
pub fn cancel_frame(id: FrameId) {
    let removed = FRAMES.with(|frames| {
        let mut frames = frames.borrow_mut();
        frames
            .pending
            .iter()
            .position(|(frame_id, _)| *frame_id == id.0)
            .map(|pos| frames.pending.remove(pos))
    });
    drop(removed);
}

/// Run every callback requested before this call. Returns how many ran.
pub fn flush_frame() -> usize {
    let batch = FRAMES.with(|frames| {
        let mut frames = frames.borrow_mut();
        frames.frames_flushed += 1;
        std::mem::take(&mut frames.pending)
    });

    let count = batch.len();
    for (_, callback) in batch {
        callback();
    }
    count
}

pub fn pending_frames() -> usize {
    FRAMES.with(|frames| frames.borrow().pending.len())
}

/// Frames flushed since start or the last reset.
pub fn frames_flushed() -> u64 {
    FRAMES.with(|frames| frames.borrow().frames_flushed)
}

/// Drop all pending requests (for testing).
pub fn reset_frames() {
    let dropped = FRAMES.with(|frames| {
        let mut frames = frames.borrow_mut();
        frames.frames_flushed = 0;
        std::mem::take(&mut frames.pending)
    });
    drop(dropped);
}

// =============================================================================
// FRAME GATE
// =============================================================================

/// At most one pending frame request at a time.
#[derive(Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<Option<FrameId>>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `callback` for the next frame unless a request is already
    /// pending. Returns `true` when a new request was made.
    pub fn schedule<F>(&self, callback: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if self.pending.get().is_some() {
            return false;
        }
        let pending = self.pending.clone();
        let id = request_frame(move || {
            pending.set(None);
            callback();
        });
        self.pending.set(Some(id));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Withdraw the pending request, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            cancel_frame(id);
        }
    }
}
