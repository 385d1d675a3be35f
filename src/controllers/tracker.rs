//! Active Section Tracker - which section the reader is looking at
//!
//! Two named strategies watch the page scroll:
//!
//! - [`HitTestStrategy`] resolves the node at the viewport center, walks up
//!   to the nearest section and makes it current. Resolution is coalesced
//!   to one per animation frame however many scroll events arrive.
//! - [`ThresholdStrategy`] only flips the "scrolled" chrome flag once the
//!   offset passes a small threshold. It never decides section identity.
//!
//! Both are passive scroll listeners. The tracker owns their subscriptions,
//! so dropping it detaches everything, including a pending frame request.

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::config::{Config, TrackingMode};
use crate::page::SharedScene;
use crate::state::frame::FrameGate;
use crate::state::scroll::ScrollController;
use crate::state::subscription::Subscription;

// =============================================================================
// SECTION STATE
// =============================================================================

/// Shared view of the current section and the scrolled flag.
///
/// The tracker writes it from scroll events, the navigation controller
/// writes it optimistically on activation, everything else reads it.
#[derive(Clone)]
pub struct SectionState {
    current: Signal<String>,
    is_scrolled: Signal<bool>,
    declared: Rc<[String]>,
}

impl SectionState {
    /// Starts on the first declared section ("" when none are declared).
    pub fn new(declared: Vec<String>) -> Self {
        let first = declared.first().cloned().unwrap_or_default();
        Self {
            current: signal(first),
            is_scrolled: signal(false),
            declared: declared.into(),
        }
    }

    pub fn current(&self) -> String {
        self.current.get()
    }

    pub fn current_signal(&self) -> Signal<String> {
        self.current.clone()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current.get() == id
    }

    pub fn is_declared(&self, id: &str) -> bool {
        self.declared.iter().any(|declared| declared == id)
    }

    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Make `id` current. Undeclared ids are ignored.
    ///
    /// Returns `true` if the current section changed.
    pub fn set_current(&self, id: &str) -> bool {
        if !self.is_declared(id) || self.current.get() == id {
            return false;
        }
        self.current.set(id.to_string());
        true
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled.get()
    }

    pub fn is_scrolled_signal(&self) -> Signal<bool> {
        self.is_scrolled.clone()
    }
}

// =============================================================================
// HIT-TEST STRATEGY
// =============================================================================

/// Resolves the section under the viewport center.
pub struct HitTestStrategy {
    scene: SharedScene,
    scroll: ScrollController,
    state: SectionState,
    gate: FrameGate,
}

impl HitTestStrategy {
    pub fn new(scene: SharedScene, scroll: ScrollController, state: SectionState) -> Rc<Self> {
        Rc::new(Self {
            scene,
            scroll,
            state,
            gate: FrameGate::new(),
        })
    }

    /// Section id under the viewport center, if the hit lands in one.
    pub fn resolve(&self) -> Option<String> {
        let scene = self.scene.try_borrow().ok()?;
        let x = scene.width() / 2;
        let y = self.scroll.viewport_height() / 2;
        let hit = scene.hit_test(x, y, self.scroll.offset())?;
        scene.closest_section(hit).map(str::to_string)
    }

    /// Resolve now and update the current section.
    ///
    /// Keeps the previous value when the center hits nothing, a non-section
    /// node or an undeclared id. Returns `true` if the section changed.
    pub fn sync(&self) -> bool {
        match self.resolve() {
            Some(id) => {
                let changed = self.state.set_current(&id);
                if changed {
                    log::debug!("event=section_changed section={} offset={}", id, self.scroll.offset());
                }
                changed
            }
            None => false,
        }
    }

    /// Resolve on the next frame; further requests before then coalesce.
    pub fn request_sync(self: &Rc<Self>) -> bool {
        let this = Rc::clone(self);
        self.gate.schedule(move || {
            this.sync();
        })
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    fn attach(self: &Rc<Self>) -> Subscription {
        let this = Rc::clone(self);
        let listener = self.scroll.on_scroll(move |_| {
            this.request_sync();
        });

        // The pending frame callback owns a clone; release it with the listener.
        let gate = self.gate.clone();
        Subscription::new(move || {
            listener.cancel();
            gate.cancel();
        })
    }
}

// =============================================================================
// THRESHOLD STRATEGY
// =============================================================================

/// Sets the scrolled flag once the offset passes `threshold` rows.
pub struct ThresholdStrategy {
    state: SectionState,
    threshold: u16,
}

impl ThresholdStrategy {
    pub fn new(state: SectionState, threshold: u16) -> Self {
        Self { state, threshold }
    }

    pub fn apply(&self, offset: u16) {
        let scrolled = offset > self.threshold;
        if self.state.is_scrolled() != scrolled {
            self.state.is_scrolled.set(scrolled);
        }
    }

    fn attach(self, scroll: &ScrollController) -> Subscription {
        self.apply(scroll.offset());
        scroll.on_scroll(move |event| self.apply(event.offset))
    }
}

// =============================================================================
// TRACKER
// =============================================================================

/// Mounted tracking: owns the strategies' subscriptions.
pub struct ActiveSectionTracker {
    state: SectionState,
    mode: TrackingMode,
    hit_test: Option<Rc<HitTestStrategy>>,
    _subscriptions: Vec<Subscription>,
}

impl ActiveSectionTracker {
    /// Attach the strategies `config.tracking` selects and resolve the
    /// initial section synchronously.
    pub fn mount(
        scene: SharedScene,
        scroll: &ScrollController,
        state: SectionState,
        config: &Config,
    ) -> Self {
        let mode = config.tracking;
        let mut subscriptions = Vec::new();

        let hit_test = mode.hit_test().then(|| {
            let strategy = HitTestStrategy::new(scene, scroll.clone(), state.clone());
            strategy.sync();
            subscriptions.push(strategy.attach());
            strategy
        });

        if mode.threshold() {
            let strategy = ThresholdStrategy::new(state.clone(), config.scrolled_threshold);
            subscriptions.push(strategy.attach(scroll));
        }

        log::info!(
            "event=tracker_mounted mode={:?} section={}",
            mode,
            state.current()
        );

        Self {
            state,
            mode,
            hit_test,
            _subscriptions: subscriptions,
        }
    }

    pub fn state(&self) -> &SectionState {
        &self.state
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn current_section(&self) -> String {
        self.state.current()
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled()
    }

    /// Re-resolve immediately, e.g. after the page was recomposed.
    pub fn refresh(&self) -> bool {
        self.hit_test.as_ref().is_some_and(|strategy| strategy.sync())
    }

    /// Whether a coalesced resolution is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.hit_test.as_ref().is_some_and(|strategy| strategy.is_pending())
    }
}
