//! Project Detail Controller - the project modal's open/closed state
//!
//! At most one project is selected at a time. Selecting an id the catalog
//! does not know leaves the state untouched. Clicks inside the modal panel
//! are consumed there, so only the backdrop and the close button dismiss.

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::catalog::{ContentCatalog, Project};
use crate::page::NodeKind;
use crate::state::keyboard;
use crate::state::mouse;
use crate::state::subscription::Subscription;

/// Page scroll keys swallowed while a project is open.
const SCROLL_KEYS: [&str; 9] = ["ArrowDown", "j", "ArrowUp", "k", "PageDown", " ", "PageUp", "Home", "End"];

#[derive(Clone)]
pub struct ProjectDetailController {
    catalog: Rc<ContentCatalog>,
    selected: Signal<Option<u32>>,
}

impl ProjectDetailController {
    pub fn new(catalog: Rc<ContentCatalog>) -> Self {
        Self {
            catalog,
            selected: signal(None),
        }
    }

    /// Open the detail view for project `id`.
    ///
    /// Returns `false` and changes nothing when `id` is unknown. Selecting
    /// while another project is open replaces it.
    pub fn select(&self, id: u32) -> bool {
        let Some(project) = self.catalog.project(id) else {
            log::debug!("event=project_select_ignored id={}", id);
            return false;
        };
        if self.selected.get() != Some(id) {
            log::debug!("event=project_selected id={} title={:?}", id, project.title);
            self.selected.set(Some(id));
        }
        true
    }

    /// Close the detail view. A no-op when nothing is open.
    pub fn dismiss(&self) -> bool {
        match self.selected.get() {
            Some(id) => {
                log::debug!("event=project_dismissed id={}", id);
                self.selected.set(None);
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.get().is_some()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected.get()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.get().and_then(|id| self.catalog.project(id))
    }

    pub fn selected_signal(&self) -> Signal<Option<u32>> {
        self.selected.clone()
    }

    /// Register click and key handlers. Bind before the navigation
    /// controller so Escape closes the modal ahead of the menu.
    pub fn bind(&self) -> Vec<Subscription> {
        let mut subs = Vec::new();

        let detail = self.clone();
        subs.push(mouse::on_node_click(
            |kind| {
                matches!(
                    kind,
                    NodeKind::ProjectCard(_) | NodeKind::Modal(_) | NodeKind::ModalBackdrop | NodeKind::ModalClose
                )
            },
            move |kind, _| match kind {
                NodeKind::ProjectCard(id) => detail.select(*id),
                NodeKind::ModalClose | NodeKind::ModalBackdrop => {
                    detail.dismiss();
                    true
                }
                // Swallow clicks on the panel so they never reach the backdrop.
                NodeKind::Modal(_) => true,
                _ => false,
            },
        ));

        let detail = self.clone();
        subs.push(keyboard::on_key("Escape", move || detail.dismiss()));

        // The page behind the modal stays put, as it does for the wheel.
        let detail = self.clone();
        subs.push(keyboard::on_keys(&SCROLL_KEYS, move || detail.is_open()));

        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::reset_all;

    fn setup() -> ProjectDetailController {
        reset_all();
        ProjectDetailController::new(Rc::new(ContentCatalog::builtin()))
    }

    fn card_path(id: u32) -> Vec<NodeKind> {
        vec![
            NodeKind::Text,
            NodeKind::ProjectCard(id),
            NodeKind::Section("projects".into()),
            NodeKind::Page,
        ]
    }

    #[test]
    fn test_select_and_dismiss() {
        let detail = setup();
        assert!(!detail.is_open());

        assert!(detail.select(1));
        assert_eq!(detail.selected(), Some(1));
        assert_eq!(detail.selected_project().map(|p| p.id), Some(1));

        assert!(detail.dismiss());
        assert!(!detail.is_open());
        assert!(!detail.dismiss());
    }

    #[test]
    fn test_unknown_id_leaves_state() {
        let detail = setup();
        assert!(!detail.select(999));
        assert!(!detail.is_open());

        detail.select(2);
        assert!(!detail.select(999));
        assert_eq!(detail.selected(), Some(2));
    }

    #[test]
    fn test_select_replaces_open_project() {
        let detail = setup();
        detail.select(1);
        detail.select(3);
        assert_eq!(detail.selected(), Some(3));
    }

    #[test]
    fn test_card_click_opens() {
        let detail = setup();
        let _subs = detail.bind();
        assert!(mouse::click(10, 10, &card_path(2)));
        assert_eq!(detail.selected(), Some(2));
    }

    #[test]
    fn test_click_inside_panel_keeps_open() {
        let detail = setup();
        let _subs = detail.bind();
        detail.select(1);

        let inside = [NodeKind::Text, NodeKind::Modal(1), NodeKind::ModalBackdrop];
        assert!(mouse::click(20, 8, &inside));
        assert!(detail.is_open());

        assert!(mouse::click(1, 1, &[NodeKind::ModalBackdrop]));
        assert!(!detail.is_open());
    }

    #[test]
    fn test_close_button_and_escape() {
        let detail = setup();
        let _subs = detail.bind();

        detail.select(1);
        mouse::click(70, 3, &[NodeKind::ModalClose, NodeKind::Modal(1), NodeKind::ModalBackdrop]);
        assert!(!detail.is_open());

        assert!(!keyboard::dispatch(keyboard::KeyboardEvent::new("Escape")));
        detail.select(1);
        assert!(keyboard::dispatch(keyboard::KeyboardEvent::new("Escape")));
        assert!(!detail.is_open());
    }

    #[test]
    fn test_scroll_keys_swallowed_while_open() {
        let detail = setup();
        let _subs = detail.bind();

        assert!(!keyboard::dispatch(keyboard::KeyboardEvent::new("j")));
        detail.select(2);
        for key in SCROLL_KEYS {
            assert!(keyboard::dispatch(keyboard::KeyboardEvent::new(key)), "{key:?} reached the page");
        }
        detail.dismiss();
        assert!(!keyboard::dispatch(keyboard::KeyboardEvent::new("End")));
    }
}
