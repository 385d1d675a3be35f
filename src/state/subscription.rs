//! Subscription guard - deterministic teardown for listeners and timers
//!
//! Every registry in `state` hands back a cleanup closure. `Subscription`
//! owns that closure and runs it exactly once: on `cancel()` or on drop,
//! whichever comes first. Controllers keep their subscriptions in a field,
//! so dropping (unmounting) the controller releases everything it registered.

use std::fmt;

/// Owns an unsubscribe closure and runs it once.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { cleanup: None }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.run();
    }

    pub fn is_active(&self) -> bool {
        self.cleanup.is_some()
    }

    fn run(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_cancel_runs_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));

        assert!(sub.is_active());
        sub.cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_runs_cleanup() {
        let count = Rc::new(Cell::new(0));
        {
            let c = count.clone();
            let _sub = Subscription::new(move || c.set(c.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_empty_is_inactive() {
        let sub = Subscription::empty();
        assert!(!sub.is_active());
    }
}
