//! Timer Queue - cooperative one-shot timers on a virtual clock
//!
//! Timers never block and never spawn threads. The event loop measures real
//! elapsed time and calls [`advance`]; tests call it with exact durations,
//! which makes every time-driven state machine deterministic.
//!
//! # Pattern
//!
//! - `set_timeout(delay, f)` queues `f` at `now + delay`
//! - `advance(elapsed)` fires due callbacks in deadline order (ties in
//!   scheduling order); a callback may schedule further timers, which fire
//!   in the same `advance` call if they fall inside the window
//! - the returned [`Subscription`] clears the timer when dropped
//!
//! # Example
//!
//! ```ignore
//! use folio::state::timer::{set_timeout, advance};
//! use std::time::Duration;
//!
//! let _pending = set_timeout(Duration::from_millis(100), || println!("tick"));
//! advance(Duration::from_millis(100)); // prints "tick"
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

use super::subscription::Subscription;

/// Identifies a queued timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct TimerQueue {
    now: Duration,
    next_id: u64,
    /// Ordered by (deadline, id).
    pending: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
}

impl TimerQueue {
    fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    fn pop_due(&mut self, until: Duration) -> Option<(Duration, Box<dyn FnOnce()>)> {
        let key = *self.pending.keys().next()?;
        if key.0 > until {
            return None;
        }
        self.pending.remove(&key).map(|cb| (key.0, cb))
    }
}

thread_local! {
    static TIMERS: RefCell<TimerQueue> = RefCell::new(TimerQueue::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Queue `callback` to run once after `delay`.
///
/// Returns a guard; dropping it before the deadline cancels the timer.
pub fn set_timeout<F>(delay: Duration, callback: F) -> Subscription
where
    F: FnOnce() + 'static,
{
    let id = schedule(delay, callback);
    Subscription::new(move || clear_timeout(id))
}

/// Queue `callback` without a guard. Cancel with [`clear_timeout`].
pub fn schedule<F>(delay: Duration, callback: F) -> TimerId
where
    F: FnOnce() + 'static,
{
    TIMERS.with(|timers| {
        let mut timers = timers.borrow_mut();
        let id = timers.next_id;
        timers.next_id += 1;
        let deadline = timers.now + delay;
        timers.pending.insert((deadline, id), Box::new(callback));
        TimerId(id)
    })
}

/// Remove a queued timer. Unknown or already-fired ids are ignored.
pub fn clear_timeout(id: TimerId) {
    // Drop the callback after releasing the borrow; it may own guards.
    let removed = TIMERS.with(|timers| {
        let mut timers = timers.borrow_mut();
        let key = timers
            .pending
            .keys()
            .find(|(_, timer_id)| *timer_id == id.0)
            .copied();
        key.and_then(|key| timers.pending.remove(&key))
    });
    drop(removed);
}

/// Move the clock forward by `elapsed`, firing everything that comes due.
///
/// Returns the number of callbacks fired.
pub fn advance(elapsed: Duration) -> usize {
    let until = TIMERS.with(|timers| timers.borrow().now + elapsed);
    let mut fired = 0;

    loop {
        // Pop outside the callback so callbacks can schedule freely.
        let due = TIMERS.with(|timers| {
            let mut timers = timers.borrow_mut();
            let due = timers.pop_due(until);
            if let Some((deadline, _)) = &due {
                timers.now = *deadline;
            }
            due
        });

        match due {
            Some((_, callback)) => {
                callback();
                fired += 1;
            }
            None => break,
        }
    }

    TIMERS.with(|timers| timers.borrow_mut().now = until);
    fired
}

/// Current virtual time since the queue was created or reset.
pub fn now() -> Duration {
    TIMERS.with(|timers| timers.borrow().now)
}

/// Time until the earliest queued timer, `None` when idle.
pub fn time_until_next() -> Option<Duration> {
    TIMERS.with(|timers| {
        let timers = timers.borrow();
        timers
            .pending
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(timers.now))
    })
}

/// Number of queued timers.
pub fn pending_count() -> usize {
    TIMERS.with(|timers| timers.borrow().pending.len())
}

/// Drop every queued timer and rewind the clock (for testing).
pub fn reset_timers() {
    let dropped =
        TIMERS.with(|timers| std::mem::replace(&mut *timers.borrow_mut(), TimerQueue::new()));
    drop(dropped);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_timers();
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_at_deadline() {
        setup();
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        let _t = set_timeout(ms(100), move || l.borrow_mut().push("a"));

        assert_eq!(advance(ms(99)), 0);
        assert!(log.borrow().is_empty());
        assert_eq!(advance(ms(1)), 1);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_deadline_order_and_ties() {
        setup();
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let _t1 = set_timeout(ms(50), move || a.borrow_mut().push(2));
        let _t2 = set_timeout(ms(10), move || b.borrow_mut().push(1));
        let _t3 = set_timeout(ms(50), move || c.borrow_mut().push(3));

        advance(ms(100));
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_cancels() {
        setup();
        let fired = Rc::new(RefCell::new(false));
        let f = fired.clone();
        let guard = set_timeout(ms(10), move || *f.borrow_mut() = true);
        drop(guard);

        assert_eq!(pending_count(), 0);
        advance(ms(20));
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_chained_timers_fire_within_window() {
        setup();
        let count = Rc::new(RefCell::new(0));

        fn arm(count: Rc<RefCell<u32>>) {
            schedule(Duration::from_millis(100), move || {
                *count.borrow_mut() += 1;
                arm(count);
            });
        }
        arm(count.clone());

        advance(ms(350));
        assert_eq!(*count.borrow(), 3);
        assert_eq!(now(), ms(350));
        assert_eq!(time_until_next(), Some(ms(50)));
    }

    #[test]
    fn test_clear_unknown_is_noop() {
        setup();
        let id = schedule(ms(5), || {});
        clear_timeout(id);
        clear_timeout(id);
        assert_eq!(pending_count(), 0);
        assert_eq!(time_until_next(), None);
    }
}
