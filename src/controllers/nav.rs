//! Navigation Controller - nav links, highlight and section activation
//!
//! `activate(id)` smooth-scrolls the page so the section's top sits just
//! under the fixed navigation bar, makes the section current right away
//! (the tracker confirms or corrects it as the scroll settles) and closes
//! the mobile menu. Unknown ids are ignored entirely.

use spark_signals::{signal, Signal};

use super::tracker::SectionState;
use crate::catalog::ContentCatalog;
use crate::config::Config;
use crate::page::{NodeKind, SharedScene};
use crate::state::keyboard;
use crate::state::mouse;
use crate::state::scroll::ScrollController;
use crate::state::subscription::Subscription;

/// A navigation entry, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

#[derive(Clone)]
pub struct NavigationController {
    links: Vec<NavLink>,
    sections: SectionState,
    scroll: ScrollController,
    scene: SharedScene,
    nav_offset: u16,
    menu_open: Signal<bool>,
}

impl NavigationController {
    pub fn new(
        catalog: &ContentCatalog,
        sections: SectionState,
        scroll: ScrollController,
        scene: SharedScene,
        config: &Config,
    ) -> Self {
        let links = catalog
            .sections
            .iter()
            .map(|section| NavLink {
                id: section.id.clone(),
                label: section.label.clone(),
            })
            .collect();
        Self {
            links,
            sections,
            scroll,
            scene,
            nav_offset: config.nav_offset,
            menu_open: signal(false),
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn current_section(&self) -> String {
        self.sections.current()
    }

    /// Whether the link for `id` is highlighted.
    pub fn is_active(&self, id: &str) -> bool {
        self.sections.is_active(id)
    }

    /// Scroll to section `id` and make it current.
    ///
    /// Returns `false` without touching any state when `id` is not a
    /// declared section. Activating the same id twice has the effect of
    /// activating it once.
    pub fn activate(&self, id: &str) -> bool {
        if !self.sections.is_declared(id) {
            log::debug!("event=nav_ignored section={}", id);
            return false;
        }

        let top = self.scene.borrow().section_top(id);
        if let Some(top) = top {
            self.scroll.smooth_scroll_to(top.saturating_sub(self.nav_offset));
        }
        self.sections.set_current(id);
        self.close_menu();
        log::debug!("event=nav_activate section={} target={:?}", id, self.scroll.target());
        true
    }

    /// Activate the `n`-th link (1-based), as bound to the digit keys.
    pub fn activate_index(&self, n: usize) -> bool {
        match n.checked_sub(1).and_then(|i| self.links.get(i)) {
            Some(link) => {
                let id = link.id.clone();
                self.activate(&id)
            }
            None => false,
        }
    }

    /// Smooth-scroll back to the top of the page.
    pub fn scroll_to_top(&self) -> bool {
        self.close_menu();
        self.scroll.smooth_scroll_to(0)
    }

    // =========================================================================
    // MOBILE MENU
    // =========================================================================

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn menu_signal(&self) -> Signal<bool> {
        self.menu_open.clone()
    }

    pub fn open_menu(&self) {
        if !self.menu_open.get() {
            self.menu_open.set(true);
        }
    }

    pub fn close_menu(&self) {
        if self.menu_open.get() {
            self.menu_open.set(false);
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.set(!self.menu_open.get());
    }

    // =========================================================================
    // INPUT BINDINGS
    // =========================================================================

    /// Register click and key handlers. Dropping the result detaches them.
    pub fn bind(&self) -> Vec<Subscription> {
        let mut subs = Vec::new();

        let nav = self.clone();
        subs.push(mouse::on_node_click(
            |kind| matches!(kind, NodeKind::NavLink(_) | NodeKind::Brand | NodeKind::MenuToggle | NodeKind::BackToTop),
            move |kind, _| {
                match kind {
                    NodeKind::NavLink(id) => {
                        nav.activate(id);
                    }
                    NodeKind::Brand => {
                        if let Some(first) = nav.links.first() {
                            let id = first.id.clone();
                            nav.activate(&id);
                        }
                    }
                    NodeKind::MenuToggle => nav.toggle_menu(),
                    NodeKind::BackToTop => {
                        nav.scroll_to_top();
                    }
                    _ => return false,
                }
                true
            },
        ));

        let nav = self.clone();
        subs.push(keyboard::on(move |event| {
            if event.modifiers.ctrl || event.modifiers.alt {
                return false;
            }
            let mut chars = event.key.chars();
            match (chars.next(), chars.next()) {
                (Some(digit @ '1'..='9'), None) => {
                    nav.activate_index(digit as usize - '0' as usize);
                    true
                }
                _ => false,
            }
        }));

        let nav = self.clone();
        subs.push(keyboard::on_key("m", move || {
            nav.toggle_menu();
            true
        }));

        // Runs after the detail overlay's Escape handler declines.
        let nav = self.clone();
        subs.push(keyboard::on_key("Escape", move || {
            let was_open = nav.is_menu_open();
            nav.close_menu();
            was_open
        }));

        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::compose;
    use crate::state::reset_all;

    fn setup() -> NavigationController {
        reset_all();
        let catalog = ContentCatalog::builtin();
        let scene = compose(&catalog, 100, 30).unwrap();
        let scroll = ScrollController::new();
        scroll.set_bounds(scene.content_height(), 30);
        let sections = SectionState::new(catalog.section_ids().map(str::to_string).collect());
        NavigationController::new(&catalog, sections, scroll, scene.into_shared(), &Config::default())
    }

    fn settle(nav: &NavigationController) {
        while nav.scroll.step() {}
    }

    #[test]
    fn test_activate_scrolls_under_nav_bar() {
        let nav = setup();
        let top = nav.scene.borrow().section_top("projects").unwrap();

        assert!(nav.activate("projects"));
        assert_eq!(nav.current_section(), "projects");
        assert_eq!(nav.scroll.target(), Some(top - 3));

        settle(&nav);
        assert_eq!(nav.scroll.offset(), top - 3);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let nav = setup();
        nav.activate("projects");
        let target = nav.scroll.target();
        nav.activate("projects");
        assert_eq!(nav.scroll.target(), target);
        settle(&nav);
        let once = nav.scroll.offset();

        assert!(nav.activate("projects"));
        settle(&nav);
        assert_eq!(nav.scroll.offset(), once);
        assert_eq!(nav.current_section(), "projects");
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let nav = setup();
        nav.open_menu();

        assert!(!nav.activate("nonexistent"));
        assert_eq!(nav.current_section(), "home");
        assert_eq!(nav.scroll.target(), None);
        assert_eq!(nav.scroll.offset(), 0);
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_activate_closes_menu() {
        let nav = setup();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.activate("about");
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_exactly_one_link_active() {
        let nav = setup();
        nav.activate("skills");
        let active: Vec<&str> = nav
            .links()
            .iter()
            .filter(|link| nav.is_active(&link.id))
            .map(|link| link.label.as_str())
            .collect();
        assert_eq!(active, vec!["Skills"]);
    }

    #[test]
    fn test_digit_keys_and_clicks() {
        let nav = setup();
        let _subs = nav.bind();

        keyboard::dispatch(keyboard::KeyboardEvent::new("4"));
        assert_eq!(nav.current_section(), "projects");
        keyboard::dispatch(keyboard::KeyboardEvent::new("9"));
        assert_eq!(nav.current_section(), "projects");

        mouse::click(0, 0, &[NodeKind::NavLink("about".into()), NodeKind::NavBar]);
        assert_eq!(nav.current_section(), "about");

        settle(&nav);
        mouse::click(0, 0, &[NodeKind::BackToTop, NodeKind::Footer]);
        settle(&nav);
        assert_eq!(nav.scroll.offset(), 0);
    }

    #[test]
    fn test_escape_closes_menu_only_when_open() {
        let nav = setup();
        let _subs = nav.bind();
        assert!(!keyboard::dispatch(keyboard::KeyboardEvent::new("Escape")));
        keyboard::dispatch(keyboard::KeyboardEvent::new("m"));
        assert!(nav.is_menu_open());
        assert!(keyboard::dispatch(keyboard::KeyboardEvent::new("Escape")));
        assert!(!nav.is_menu_open());
    }
}
