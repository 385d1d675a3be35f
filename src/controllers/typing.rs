//! Typing Animator - the hero's role line, typed out one character at a time
//!
//! [`TypingMachine`] is the pure state machine:
//!
//! ```text
//!   Growing --(tick, more to reveal)--> Growing
//!   Growing --(tick, fully shown)-----> Holding
//!   Holding --(hold elapsed)----------> Growing, next role, text cleared
//! ```
//!
//! [`TypingAnimator`] drives it from the timer queue and publishes the text
//! and role index as signals. It never terminates on its own; dropping it
//! cancels the pending timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{signal, Signal};

use crate::state::timer::{self, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Growing,
    Holding,
}

#[derive(Debug, Clone)]
pub struct TypingMachine {
    roles: Vec<Vec<char>>,
    role_index: usize,
    visible: usize,
    phase: TypingPhase,
    tick: Duration,
    hold: Duration,
}

impl TypingMachine {
    pub fn new(roles: &[String], tick: Duration, hold: Duration) -> Self {
        Self {
            roles: roles.iter().map(|role| role.chars().collect()).collect(),
            role_index: 0,
            visible: 0,
            phase: TypingPhase::Growing,
            tick,
            hold,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn text(&self) -> String {
        self.roles
            .get(self.role_index)
            .map(|role| role[..self.visible].iter().collect())
            .unwrap_or_default()
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Wait before the next transition.
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Growing => self.tick,
            TypingPhase::Holding => self.hold,
        }
    }

    /// Apply one transition and return the wait before the next one.
    pub fn advance(&mut self) -> Duration {
        let Some(role) = self.roles.get(self.role_index) else {
            return self.delay();
        };

        match self.phase {
            TypingPhase::Growing => {
                if self.visible < role.len() {
                    self.visible += 1;
                }
                if self.visible >= role.len() {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => {
                self.visible = 0;
                self.role_index = (self.role_index + 1) % self.roles.len();
                self.phase = TypingPhase::Growing;
            }
        }
        self.delay()
    }

    /// Endless `(text, wait)` pairs, one per transition. Empty when there
    /// are no roles.
    pub fn snapshots(mut self) -> impl Iterator<Item = (String, Duration)> {
        let empty = self.is_empty();
        std::iter::from_fn(move || {
            let delay = self.advance();
            Some((self.text(), delay))
        })
        .take_while(move |_| !empty)
    }
}

struct Shared {
    machine: RefCell<TypingMachine>,
    text: Signal<String>,
    role_index: Signal<usize>,
    pending: Cell<Option<TimerId>>,
}

/// Timer-driven typing effect.
pub struct TypingAnimator {
    shared: Rc<Shared>,
}

impl TypingAnimator {
    /// Start typing `roles`. With no roles nothing is ever scheduled.
    pub fn mount(roles: &[String], tick: Duration, hold: Duration) -> Self {
        let machine = TypingMachine::new(roles, tick, hold);
        let first_delay = machine.delay();
        let idle = machine.is_empty();

        let shared = Rc::new(Shared {
            machine: RefCell::new(machine),
            text: signal(String::new()),
            role_index: signal(0),
            pending: Cell::new(None),
        });

        if !idle {
            arm(&shared, first_delay);
        }
        Self { shared }
    }

    pub fn text(&self) -> String {
        self.shared.text.get()
    }

    pub fn text_signal(&self) -> Signal<String> {
        self.shared.text.clone()
    }

    pub fn role_index(&self) -> usize {
        self.shared.role_index.get()
    }

    pub fn phase(&self) -> TypingPhase {
        self.shared.machine.borrow().phase()
    }

    pub fn is_running(&self) -> bool {
        self.shared.pending.get().is_some()
    }
}

fn arm(shared: &Rc<Shared>, delay: Duration) {
    let this = Rc::clone(shared);
    let id = timer::schedule(delay, move || {
        let (text, index, next) = {
            let mut machine = this.machine.borrow_mut();
            let next = machine.advance();
            (machine.text(), machine.role_index(), next)
        };
        this.text.set(text);
        if this.role_index.get() != index {
            this.role_index.set(index);
        }
        arm(&this, next);
    });
    shared.pending.set(Some(id));
}

impl Drop for TypingAnimator {
    fn drop(&mut self) {
        if let Some(id) = self.shared.pending.take() {
            timer::clear_timeout(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timer::{advance, pending_count, reset_timers};

    const TICK: Duration = Duration::from_millis(100);
    const HOLD: Duration = Duration::from_millis(2000);

    fn roles() -> Vec<String> {
        vec!["AI/ML Engineer".into(), "Full-Stack Developer".into()]
    }

    fn setup() {
        reset_timers();
    }

    #[test]
    fn test_reveals_first_role() {
        setup();
        let typing = TypingAnimator::mount(&roles(), TICK, HOLD);
        assert_eq!(typing.text(), "");

        advance(TICK * 3);
        assert_eq!(typing.text(), "AI/");

        advance(TICK * 11);
        assert_eq!(typing.text(), "AI/ML Engineer");
        assert_eq!(typing.phase(), TypingPhase::Holding);
        assert_eq!(typing.role_index(), 0);
    }

    #[test]
    fn test_hold_clears_and_advances() {
        setup();
        let typing = TypingAnimator::mount(&roles(), TICK, HOLD);
        advance(TICK * 14);

        advance(HOLD - Duration::from_millis(1));
        assert_eq!(typing.text(), "AI/ML Engineer");

        advance(Duration::from_millis(1));
        assert_eq!(typing.text(), "");
        assert_eq!(typing.role_index(), 1);
        assert_eq!(typing.phase(), TypingPhase::Growing);
    }

    #[test]
    fn test_index_wraps() {
        setup();
        let typing = TypingAnimator::mount(&roles(), TICK, HOLD);
        // Role 0: 14 ticks + hold, role 1: 20 ticks + hold.
        advance(TICK * 14 + HOLD + TICK * 20 + HOLD);
        assert_eq!(typing.role_index(), 0);
        assert_eq!(typing.text(), "");
        advance(TICK);
        assert_eq!(typing.text(), "A");
    }

    #[test]
    fn test_single_role_restarts() {
        setup();
        let typing = TypingAnimator::mount(&["ab".into()], TICK, HOLD);
        advance(TICK * 2);
        assert_eq!(typing.text(), "ab");

        advance(HOLD);
        assert_eq!(typing.text(), "");
        assert_eq!(typing.role_index(), 0);

        advance(TICK);
        assert_eq!(typing.text(), "a");
    }

    #[test]
    fn test_unicode_reveals_whole_chars() {
        let mut machine = TypingMachine::new(&["héllo→".into()], TICK, HOLD);
        machine.advance();
        machine.advance();
        assert_eq!(machine.text(), "hé");
        for _ in 0..4 {
            machine.advance();
        }
        assert_eq!(machine.text(), "héllo→");
    }

    #[test]
    fn test_drop_cancels_timer() {
        setup();
        let typing = TypingAnimator::mount(&roles(), TICK, HOLD);
        assert_eq!(pending_count(), 1);
        drop(typing);
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_empty_roles_schedule_nothing() {
        setup();
        let typing = TypingAnimator::mount(&[], TICK, HOLD);
        assert!(!typing.is_running());
        assert_eq!(pending_count(), 0);
        assert_eq!(typing.text(), "");
        assert_eq!(TypingMachine::new(&[], TICK, HOLD).snapshots().count(), 0);
    }

    #[test]
    fn test_snapshots_cycle() {
        let machine = TypingMachine::new(&["ab".into(), "c".into()], TICK, HOLD);
        let frames: Vec<(String, Duration)> = machine.snapshots().take(6).collect();
        assert_eq!(
            frames,
            vec![
                ("a".into(), TICK),
                ("ab".into(), HOLD),
                ("".into(), TICK),
                ("c".into(), HOLD),
                ("".into(), TICK),
                ("a".into(), TICK),
            ]
        );
    }
}
