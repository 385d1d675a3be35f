//! Fixed overlays - navigation bar, mobile menu, project detail modal
//!
//! Overlays are rebuilt whenever the state they depend on changes (viewport
//! size, menu open, selected project). They are positioned in viewport
//! coordinates and hit-test before the document.

use super::compose::NAV_HEIGHT;
use super::node::{Layer, Line, NodeId, NodeKind, NodeStyle, Span};
use super::scene::Scene;
use super::text::{string_width, truncate_text, wrap_text};
use crate::catalog::{ContentCatalog, Project};
use crate::types::{Attr, Rect, Rgba};

const MODAL_MAX_WIDTH: u16 = 84;

/// Inputs that decide which overlays exist and where.
#[derive(Debug, Clone, Copy)]
pub struct OverlayState<'a> {
    pub width: u16,
    pub height: u16,
    /// Below the compact breakpoint links collapse into a menu toggle.
    pub compact: bool,
    pub menu_open: bool,
    pub selected: Option<&'a Project>,
}

/// Replace the scene's overlays with the ones `state` calls for.
pub fn rebuild_overlays(scene: &mut Scene, catalog: &ContentCatalog, state: &OverlayState<'_>) {
    scene.clear_overlays();
    let nav = nav_bar(scene, catalog, state);
    if state.compact && state.menu_open {
        mobile_menu(scene, nav, catalog, state);
    }
    if let Some(project) = state.selected {
        modal(scene, project, state);
    }
}

fn push(scene: &mut Scene, parent: Option<NodeId>, kind: NodeKind, rect: Rect, style: NodeStyle, lines: Vec<Line>) -> NodeId {
    scene.push(parent, kind, Layer::Fixed, rect, style, lines)
}

fn label(text: &str, fg: Rgba) -> Vec<Line> {
    vec![vec![Span::new(text, fg)]]
}

fn nav_bar(scene: &mut Scene, catalog: &ContentCatalog, state: &OverlayState<'_>) -> NodeId {
    let width = state.width;
    let bar = push(
        scene,
        None,
        NodeKind::NavBar,
        Rect::new(0, 0, width, NAV_HEIGHT.min(state.height)),
        NodeStyle::filled(Rgba::PAGE),
        Vec::new(),
    );

    let brand: String = catalog
        .profile
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    let brand = vec![vec![
        Span::new(brand, Rgba::WHITE).with_attrs(Attr::BOLD),
        Span::new(".", Rgba::PRIMARY).with_attrs(Attr::BOLD),
    ]];
    let brand_width = brand[0].iter().map(|span| string_width(&span.text)).sum();
    push(scene, Some(bar), NodeKind::Brand, Rect::new(2, 1, brand_width, 1), NodeStyle::default(), brand);

    if state.compact {
        let glyph = if state.menu_open { "✕" } else { "☰" };
        let x = width.saturating_sub(4);
        push(
            scene,
            Some(bar),
            NodeKind::MenuToggle,
            Rect::new(x, 1, 2, 1),
            NodeStyle::default(),
            label(glyph, Rgba::WHITE),
        );
        return bar;
    }

    // Links are right-aligned, two spaces apart.
    let widths: Vec<u16> = catalog
        .sections
        .iter()
        .map(|section| string_width(&section.label))
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + 2 * widths.len().saturating_sub(1) as u16;
    let mut x = width.saturating_sub(total + 2);
    for (section, w) in catalog.sections.iter().zip(widths) {
        push(
            scene,
            Some(bar),
            NodeKind::NavLink(section.id.clone()),
            Rect::new(x, 1, w, 1),
            NodeStyle::default(),
            label(&section.label, Rgba::MUTED),
        );
        x = x.saturating_add(w + 2);
    }
    bar
}

fn mobile_menu(scene: &mut Scene, nav: NodeId, catalog: &ContentCatalog, state: &OverlayState<'_>) {
    let rows = catalog.sections.len() as u16;
    let height = (rows + 2).min(state.height.saturating_sub(NAV_HEIGHT));
    let menu = push(
        scene,
        Some(nav),
        NodeKind::MobileMenu,
        Rect::new(0, NAV_HEIGHT, state.width, height),
        NodeStyle {
            bg: Some(Rgba::PANEL),
            border: Some(Rgba::SUBTLE),
        },
        Vec::new(),
    );

    let inner = state.width.saturating_sub(4);
    for (i, section) in catalog.sections.iter().enumerate() {
        let y = NAV_HEIGHT + 1 + i as u16;
        if y + 1 >= NAV_HEIGHT + height {
            break;
        }
        push(
            scene,
            Some(menu),
            NodeKind::NavLink(section.id.clone()),
            Rect::new(2, y, inner, 1),
            NodeStyle::default(),
            label(&section.label, Rgba::MUTED),
        );
    }
}

fn section_title(text: &str) -> Line {
    vec![Span::new(text, Rgba::WHITE).with_attrs(Attr::BOLD)]
}

/// Body text of the detail modal, wrapped to `width`.
pub fn modal_lines(project: &Project, width: u16) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let wrapped = |text: &str, fg: Rgba| -> Vec<Line> {
        wrap_text(text, width)
            .into_iter()
            .map(|line| vec![Span::new(line, fg)])
            .collect()
    };

    let tags: Line = project
        .tags
        .iter()
        .flat_map(|tag| [Span::new(format!("[{tag}]"), Rgba::PRIMARY), Span::new(" ", Rgba::PRIMARY)])
        .collect();
    lines.push(tags);
    lines.extend(
        wrap_text(&project.title, width)
            .into_iter()
            .map(|line| vec![Span::new(line, Rgba::WHITE).with_attrs(Attr::BOLD)]),
    );
    lines.push(Vec::new());

    lines.push(section_title("Overview"));
    lines.extend(wrapped(&project.description, Rgba::MUTED));

    if let Some(details) = &project.details {
        if let Some(architecture) = &details.architecture {
            lines.push(Vec::new());
            lines.push(section_title("Architecture"));
            lines.extend(wrapped(architecture, Rgba::MUTED));
        }
        if !details.features.is_empty() {
            lines.push(Vec::new());
            lines.push(section_title("Key Features"));
            for feature in &details.features {
                for (row, text) in wrap_text(feature, width.saturating_sub(2)).into_iter().enumerate() {
                    let marker = if row == 0 { "✓ " } else { "  " };
                    lines.push(vec![Span::new(marker, Rgba::CYAN), Span::new(text, Rgba::MUTED)]);
                }
            }
        }
        if !details.tech_stack.is_empty() {
            lines.push(Vec::new());
            lines.push(section_title("Tech Stack"));
            lines.extend(wrapped(&details.tech_stack.join(" · "), Rgba::CYAN));
        }
    }
    lines
}

fn modal(scene: &mut Scene, project: &Project, state: &OverlayState<'_>) {
    let (width, height) = (state.width, state.height);
    let backdrop = push(
        scene,
        None,
        NodeKind::ModalBackdrop,
        Rect::new(0, 0, width, height),
        NodeStyle::default(),
        Vec::new(),
    );

    let modal_width = width.saturating_sub(4).min(MODAL_MAX_WIDTH);
    let inner = modal_width.saturating_sub(4);
    let mut lines = modal_lines(project, inner);

    // Border, padding row, the source link row and its spacer.
    let chrome = 6;
    let max_height = height.saturating_sub(2);
    let body_rows = max_height.saturating_sub(chrome) as usize;
    if lines.len() > body_rows {
        lines.truncate(body_rows);
        if let Some(last) = lines.last_mut() {
            *last = vec![Span::new(truncate_text("…", inner), Rgba::SUBTLE)];
        }
    }
    let modal_height = (lines.len() as u16 + chrome).min(max_height);
    let x = (width - modal_width) / 2;
    let y = height.saturating_sub(modal_height) / 2;

    let panel = push(
        scene,
        Some(backdrop),
        NodeKind::Modal(project.id),
        Rect::new(x, y, modal_width, modal_height),
        NodeStyle {
            bg: Some(Rgba::PANEL),
            border: Some(Rgba::PRIMARY),
        },
        Vec::new(),
    );
    push(
        scene,
        Some(panel),
        NodeKind::Text,
        Rect::new(x + 2, y + 2, inner, lines.len() as u16),
        NodeStyle::default(),
        lines,
    );
    push(
        scene,
        Some(panel),
        NodeKind::ModalClose,
        Rect::new(x + modal_width.saturating_sub(5), y + 1, 3, 1),
        NodeStyle::default(),
        label("[✕]", Rgba::WHITE),
    );

    let source = "View Source Code ↗";
    push(
        scene,
        Some(panel),
        NodeKind::Link(project.source_url.clone()),
        Rect::new(x + 2, y + modal_height.saturating_sub(2), string_width(source).min(inner), 1),
        NodeStyle::default(),
        vec![vec![Span::new(source, Rgba::PRIMARY).with_attrs(Attr::BOLD | Attr::UNDERLINE)]],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::compose;

    fn scene_with(state: &OverlayState<'_>) -> Scene {
        let catalog = ContentCatalog::builtin();
        let mut scene = compose(&catalog, state.width, state.height).unwrap();
        rebuild_overlays(&mut scene, &catalog, state);
        scene
    }

    fn base(width: u16, height: u16) -> OverlayState<'static> {
        OverlayState {
            width,
            height,
            compact: width < 80,
            menu_open: false,
            selected: None,
        }
    }

    #[test]
    fn test_wide_nav_has_every_link() {
        let scene = scene_with(&base(120, 30));
        for id in ["home", "about", "skills", "projects", "contact"] {
            assert!(scene.find(&NodeKind::NavLink(id.into())).is_some());
        }
        assert!(scene.find(&NodeKind::MenuToggle).is_none());
    }

    #[test]
    fn test_compact_nav_has_toggle_and_menu() {
        let closed = scene_with(&base(60, 30));
        assert!(closed.find(&NodeKind::MenuToggle).is_some());
        assert!(closed.find(&NodeKind::MobileMenu).is_none());

        let open = scene_with(&OverlayState {
            menu_open: true,
            ..base(60, 30)
        });
        let menu = open.find(&NodeKind::MobileMenu).unwrap();
        let link = open.find(&NodeKind::NavLink("skills".into())).unwrap();
        assert_eq!(link.parent, Some(menu.id));
    }

    #[test]
    fn test_modal_blocks_document() {
        let catalog = ContentCatalog::builtin();
        let project = catalog.project(1).unwrap();
        let scene = scene_with(&OverlayState {
            selected: Some(project),
            ..base(100, 30)
        });

        // Corner of the viewport hits the backdrop, not the page.
        let corner = scene.hit_path(0, 29, 0);
        assert_eq!(corner.first(), Some(&NodeKind::ModalBackdrop));

        let close = scene.find(&NodeKind::ModalClose).unwrap();
        let path = scene.hit_path(close.rect.x, close.rect.y, 0);
        assert_eq!(path[..2], [NodeKind::ModalClose, NodeKind::Modal(1)]);
    }

    #[test]
    fn test_modal_lines_list_details() {
        let catalog = ContentCatalog::builtin();
        let lines = modal_lines(catalog.project(2).unwrap(), 60);
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect();
        assert!(text.iter().any(|line| line == "Overview"));
        assert!(text.iter().any(|line| line == "Key Features"));
        assert!(text.iter().any(|line| line.contains("AWS Amplify")));
        // All tags, not just the card's first three.
        assert!(text[0].contains("[Analytics]"));
    }
}
