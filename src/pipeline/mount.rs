//! Mount API - Application lifecycle and render effect.
//!
//! [`mount`] composes the page, mounts every controller, resolves the initial
//! section and installs two effects:
//!
//! - the **overlay effect** rebuilds the fixed overlays (nav bar, mobile
//!   menu, project modal) when the viewport, the menu or the selection
//!   changes;
//! - the **render effect** paints a frame whenever anything it reads
//!   changes and hands it to the sink.
//!
//! Mounting itself does no terminal I/O, so tests drive a [`MountHandle`]
//! with synthetic events and a virtual clock. [`run`] adds the terminal.
//!
//! # Example
//!
//! ```ignore
//! use folio::pipeline::{mount, run};
//!
//! let handle = mount(catalog, config, (100, 30), |_frame| {})?;
//! handle.handle_event(event)?;
//! handle.tick(Duration::from_millis(16));
//! handle.unmount();
//! ```

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use spark_signals::{effect, signal, Signal};

use super::terminal::{terminal_size, TerminalSetup};
use crate::catalog::ContentCatalog;
use crate::config::Config;
use crate::controllers::{
    ActiveSectionTracker, LinkController, MouseFollowCursor, NavigationController,
    ProjectDetailController, SectionState, TypingAnimator,
};
use crate::error::Result;
use crate::page::{compose, rebuild_overlays, OverlayState, SharedScene};
use crate::renderer::{paint_frame, paint_page, DiffRenderer, FrameBuffer, PaintState};
use crate::state::input::{self, InputEvent};
use crate::state::mouse::MouseAction;
use crate::state::{frame, global_keys, keyboard, mouse, timer, ScrollController, Subscription};

// =============================================================================
// Mount Handle
// =============================================================================

/// Everything a mounted portfolio owns. Dropping it unmounts.
pub struct MountHandle {
    catalog: Rc<ContentCatalog>,
    config: Config,
    scene: SharedScene,
    /// Painted document, cleared when the page is recomposed.
    page: Rc<RefCell<Option<FrameBuffer>>>,
    size: Signal<(u16, u16)>,
    last_frame: Rc<RefCell<Option<FrameBuffer>>>,
    frames_painted: Rc<Cell<u64>>,

    scroll: ScrollController,
    tracker: ActiveSectionTracker,
    nav: NavigationController,
    typing: TypingAnimator,
    detail: ProjectDetailController,
    links: LinkController,
    cursor: MouseFollowCursor,

    subscriptions: Vec<Subscription>,
    global_keys: Option<global_keys::GlobalKeysHandle>,
    stop_effects: Vec<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
}

impl MountHandle {
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> SharedScene {
        self.scene.clone()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size.get()
    }

    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub fn tracker(&self) -> &ActiveSectionTracker {
        &self.tracker
    }

    pub fn nav(&self) -> &NavigationController {
        &self.nav
    }

    pub fn typing(&self) -> &TypingAnimator {
        &self.typing
    }

    pub fn detail(&self) -> &ProjectDetailController {
        &self.detail
    }

    pub fn links(&self) -> &LinkController {
        &self.links
    }

    pub fn cursor(&self) -> &MouseFollowCursor {
        &self.cursor
    }

    /// The most recently painted frame.
    pub fn last_frame(&self) -> Option<FrameBuffer> {
        self.last_frame.borrow().clone()
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames_painted.get()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request shutdown; the event loop exits after the current iteration.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Route one terminal event.
    pub fn handle_event(&self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Key(key) => {
                if key.is_press() {
                    self.links.clear_status();
                }
                keyboard::dispatch(key);
            }
            InputEvent::Mouse(event) => self.handle_mouse(event),
            InputEvent::Resize(width, height) => self.resize(width, height)?,
            InputEvent::None => {}
        }
        Ok(())
    }

    fn handle_mouse(&self, event: mouse::MouseEvent) {
        if event.action == MouseAction::Scroll {
            if mouse::dispatch(event.clone(), &[]) || self.detail.is_open() {
                return;
            }
            if let Some(info) = &event.scroll {
                self.scroll.scroll_by(input::wheel_delta(info));
            }
            return;
        }

        // Release the scene before dispatching; handlers may rebuild overlays.
        let path = self
            .scene
            .borrow()
            .hit_path(event.x, event.y, self.scroll.offset());
        mouse::dispatch(event, &path);
    }

    /// Recompose the page for a new viewport and re-resolve the section.
    pub fn resize(&self, width: u16, height: u16) -> Result<()> {
        if (width, height) == self.size.get() {
            return Ok(());
        }
        let scene = compose(&self.catalog, width, height)?;
        let content_height = scene.content_height();
        *self.scene.borrow_mut() = scene;
        self.page.borrow_mut().take();

        self.scroll.set_bounds(content_height, height);
        // Overlay effect rebuilds and bumps the layout version.
        self.size.set((width, height));
        self.tracker.refresh();

        log::info!(
            "event=resize width={} height={} content_height={}",
            width,
            height,
            content_height
        );
        Ok(())
    }

    /// Advance the virtual clock by `elapsed` and run one frame.
    pub fn tick(&self, elapsed: Duration) {
        timer::advance(elapsed);
        self.scroll.step();
        frame::flush_frame();
    }

    /// Stop effects and release every subscription.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        self.subscriptions.clear();
        for stop in self.stop_effects.drain(..) {
            stop();
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the portfolio at `size`, sending every painted frame to `sink`.
pub fn mount<F>(catalog: ContentCatalog, config: Config, size: (u16, u16), sink: F) -> Result<MountHandle>
where
    F: FnMut(&FrameBuffer) + 'static,
{
    let catalog = Rc::new(catalog);
    let (width, height) = size;

    let scene = compose(&catalog, width, height)?.into_shared();
    let content_height = scene.borrow().content_height();

    let scroll = ScrollController::new();
    scroll.set_bounds(content_height, height);

    let sections = SectionState::new(catalog.section_ids().map(str::to_string).collect());
    let nav = NavigationController::new(&catalog, sections.clone(), scroll.clone(), scene.clone(), &config);
    let detail = ProjectDetailController::new(catalog.clone());
    let links = LinkController::new(catalog.clone());
    let typing = TypingAnimator::mount(&catalog.profile.roles, config.typing_tick(), config.typing_hold());
    let cursor = MouseFollowCursor::mount(&config);

    let size = signal(size);
    let layout_version = signal(0u64);
    let page: Rc<RefCell<Option<FrameBuffer>>> = Rc::new(RefCell::new(None));
    let last_frame: Rc<RefCell<Option<FrameBuffer>>> = Rc::new(RefCell::new(None));
    let frames_painted = Rc::new(Cell::new(0));

    let mut stop_effects: Vec<Box<dyn FnOnce()>> = Vec::new();

    // Overlays first, so the tracker's initial hit-test sees the nav bar.
    stop_effects.push(Box::new(overlay_effect(
        scene.clone(),
        catalog.clone(),
        &config,
        size.clone(),
        &nav,
        &detail,
        layout_version.clone(),
    )));

    let tracker = ActiveSectionTracker::mount(scene.clone(), &scroll, sections.clone(), &config);

    // Detail handlers go first: Escape closes the modal before the menu.
    let mut subscriptions = detail.bind();
    subscriptions.extend(links.bind());
    subscriptions.extend(nav.bind());
    let running = Arc::new(AtomicBool::new(true));
    let global_keys = global_keys::setup_global_keys(running.clone(), scroll.clone());

    let render = RenderInputs {
        scene: scene.clone(),
        page: page.clone(),
        size: size.clone(),
        layout_version,
        scroll: scroll.offset_signal(),
        current: sections.current_signal(),
        is_scrolled: sections.is_scrolled_signal(),
        typing: typing.text_signal(),
        dot: cursor.dot_signal(),
        ring: cursor.ring_signal(),
        status: links.status_signal(),
        last_frame: last_frame.clone(),
        frames_painted: frames_painted.clone(),
    };
    stop_effects.push(Box::new(render_effect(render, sink)));

    log::info!(
        "event=mounted width={} height={} sections={} projects={} section={}",
        width,
        height,
        catalog.sections.len(),
        catalog.projects.len(),
        tracker.current_section()
    );

    Ok(MountHandle {
        catalog,
        config,
        scene,
        page,
        size,
        last_frame,
        frames_painted,
        scroll,
        tracker,
        nav,
        typing,
        detail,
        links,
        cursor,
        subscriptions,
        global_keys: Some(global_keys),
        stop_effects,
        running,
    })
}

fn overlay_effect(
    scene: SharedScene,
    catalog: Rc<ContentCatalog>,
    config: &Config,
    size: Signal<(u16, u16)>,
    nav: &NavigationController,
    detail: &ProjectDetailController,
    layout_version: Signal<u64>,
) -> impl FnOnce() + use<> {
    let compact_width = config.compact_width;
    let menu = nav.menu_signal();
    let detail = detail.clone();
    // Counted outside the signal so this effect never tracks its own output.
    let mut rebuilds = 0u64;

    effect(move || {
        let (width, height) = size.get();
        let state = OverlayState {
            width,
            height,
            compact: width < compact_width,
            menu_open: menu.get(),
            selected: detail.selected_project(),
        };
        {
            let mut scene = scene.borrow_mut();
            rebuild_overlays(&mut scene, &catalog, &state);
        }
        log::debug!(
            "event=overlays_rebuilt compact={} menu_open={} selected={:?}",
            state.compact,
            state.menu_open,
            state.selected.map(|project| project.id)
        );
        rebuilds = rebuilds.wrapping_add(1);
        layout_version.set(rebuilds);
    })
}

struct RenderInputs {
    scene: SharedScene,
    page: Rc<RefCell<Option<FrameBuffer>>>,
    size: Signal<(u16, u16)>,
    layout_version: Signal<u64>,
    scroll: Signal<u16>,
    current: Signal<String>,
    is_scrolled: Signal<bool>,
    typing: Signal<String>,
    dot: Signal<Option<(u16, u16)>>,
    ring: Signal<Option<(u16, u16)>>,
    status: Signal<Option<String>>,
    last_frame: Rc<RefCell<Option<FrameBuffer>>>,
    frames_painted: Rc<Cell<u64>>,
}

fn render_effect<F>(inputs: RenderInputs, mut sink: F) -> impl FnOnce()
where
    F: FnMut(&FrameBuffer) + 'static,
{
    effect(move || {
        // Read every signal up front so each one is tracked.
        let (_, height) = inputs.size.get();
        let _ = inputs.layout_version.get();
        let scroll_y = inputs.scroll.get();
        let current = inputs.current.get();
        let is_scrolled = inputs.is_scrolled.get();
        let typing = inputs.typing.get();
        let dot = inputs.dot.get();
        let ring = inputs.ring.get();
        let status = inputs.status.get();

        let Ok(scene) = inputs.scene.try_borrow() else {
            log::warn!("event=render_skipped reason=scene_busy");
            return;
        };
        let mut page = inputs.page.borrow_mut();
        let page = page.get_or_insert_with(|| paint_page(&scene));

        let state = PaintState {
            height,
            scroll_y,
            current_section: &current,
            is_scrolled,
            typing_text: &typing,
            dot,
            ring,
            status: status.as_deref(),
        };
        let frame = paint_frame(page, &scene, &state);
        sink(&frame);
        inputs.frames_painted.set(inputs.frames_painted.get() + 1);
        *inputs.last_frame.borrow_mut() = Some(frame);
    })
}

// =============================================================================
// Event Loop
// =============================================================================

/// Mount on the real terminal and run until `q` or Ctrl+C.
pub fn run(catalog: ContentCatalog, config: Config) -> Result<()> {
    let mut terminal = TerminalSetup::new();
    terminal.enter_fullscreen()?;

    let mut renderer = DiffRenderer::new();
    let sink = move |frame: &FrameBuffer| {
        let mut stdout = io::stdout();
        if let Err(err) = renderer.render(frame, &mut stdout) {
            log::warn!("event=render_failed error={}", err);
        }
    };

    let frame_interval = config.frame_interval();
    let handle = mount(catalog, config, terminal_size(), sink)?;

    let mut last = Instant::now();
    while handle.is_running() {
        let timeout = timer::time_until_next().map_or(frame_interval, |next| next.min(frame_interval));
        if let Some(event) = input::poll_event(timeout)? {
            handle.handle_event(event)?;
        }

        let now = Instant::now();
        handle.tick(now.duration_since(last));
        last = now;
    }

    handle.unmount();
    terminal.exit_fullscreen()?;
    log::info!("event=app_exit status=ok");
    Ok(())
}

/// Render the page once as plain text, as wide as `width`.
pub fn print_page(catalog: &ContentCatalog, config: &Config, width: u16) -> Result<String> {
    let mut scene = compose(catalog, width, 0)?;
    let height = scene.content_height();
    let overlays = OverlayState {
        width,
        height,
        compact: width < config.compact_width,
        menu_open: false,
        selected: None,
    };
    rebuild_overlays(&mut scene, catalog, &overlays);

    let page = paint_page(&scene);
    let typing = catalog.profile.roles.first().cloned().unwrap_or_default();
    let state = PaintState {
        height,
        current_section: catalog.first_section_id(),
        typing_text: &typing,
        ..PaintState::default()
    };
    Ok(paint_frame(&page, &scene, &state).to_text())
}

// =============================================================================
// Tests
// =============================================================================
