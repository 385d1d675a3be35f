//! Scene - the composed page plus its fixed overlays
//!
//! Nodes are stored in pre-order (a parent before its children, siblings in
//! paint order). Document nodes come first, fixed overlay nodes after them.
//! Hit-testing walks the list backwards so the last painted node containing
//! the point wins, overlays before the document.

use std::cell::RefCell;
use std::rc::Rc;

use super::node::{Layer, Line, Node, NodeId, NodeKind, NodeStyle};
use crate::types::Rect;

/// Scene shared between the pipeline, the tracker and the overlay effect.
pub type SharedScene = Rc<RefCell<Scene>>;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    document_len: usize,
    width: u16,
    content_height: u16,
}

impl Scene {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn into_shared(self) -> SharedScene {
        Rc::new(RefCell::new(self))
    }

    // =========================================================================
    // BUILDING
    // =========================================================================

    /// Append a node. Document nodes must all be pushed before any overlay.
    pub fn push(
        &mut self,
        parent: Option<NodeId>,
        kind: NodeKind,
        layer: Layer,
        rect: Rect,
        style: NodeStyle,
        lines: Vec<Line>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        if layer == Layer::Document {
            debug_assert_eq!(self.document_len, self.nodes.len());
            self.document_len += 1;
            self.content_height = self.content_height.max(rect.bottom());
        }
        self.nodes.push(Node {
            id,
            parent,
            kind,
            layer,
            rect,
            style,
            lines,
            inset: (0, 0),
        });
        id
    }

    /// Pad a node's text away from its border.
    pub fn set_inset(&mut self, id: NodeId, inset: (u16, u16)) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.inset = inset;
        }
    }

    /// Remove every fixed node, keeping the document.
    pub fn clear_overlays(&mut self) {
        self.nodes.truncate(self.document_len);
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of the document in rows.
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn document(&self) -> &[Node] {
        &self.nodes[..self.document_len]
    }

    pub fn overlays(&self) -> &[Node] {
        &self.nodes[self.document_len..]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(self.node(id), move |node| {
            node.parent.and_then(|parent| self.node(parent))
        })
    }

    /// Nearest enclosing section of `id`, including `id` itself.
    pub fn closest_section(&self, id: NodeId) -> Option<&str> {
        self.ancestors(id).find_map(|node| node.kind.section_id())
    }

    /// First node of the given kind, in paint order.
    pub fn find(&self, kind: &NodeKind) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.kind == kind)
    }

    /// Document y of a section's top edge.
    pub fn section_top(&self, section_id: &str) -> Option<u16> {
        self.document()
            .iter()
            .find(|node| node.kind.section_id() == Some(section_id))
            .map(|node| node.rect.y)
    }

    /// Section ids in document order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.document()
            .iter()
            .filter_map(|node| node.kind.section_id())
            .collect()
    }

    // =========================================================================
    // HIT TESTING
    // =========================================================================

    /// Topmost node under viewport point `(x, y)` with the page scrolled to
    /// `scroll_y`. Overlays are checked before the document.
    pub fn hit_test(&self, x: u16, y: u16, scroll_y: u16) -> Option<NodeId> {
        let overlay = self
            .overlays()
            .iter()
            .rev()
            .find(|node| node.rect.contains(x, y));
        if let Some(node) = overlay {
            return Some(node.id);
        }

        let page_y = y.checked_add(scroll_y)?;
        self.document()
            .iter()
            .rev()
            .find(|node| node.rect.contains(x, page_y))
            .map(|node| node.id)
    }

    /// Kinds from the hit node outward to the root; empty when nothing is hit.
    pub fn hit_path(&self, x: u16, y: u16, scroll_y: u16) -> Vec<NodeKind> {
        self.hit_test(x, y, scroll_y)
            .map(|id| self.ancestors(id).map(|node| node.kind.clone()).collect())
            .unwrap_or_default()
    }
}
