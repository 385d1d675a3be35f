//! Scene nodes - what a region of the page is and how it paints
//!
//! A node's [`NodeKind`] is its semantic identity: the tracker looks for
//! `Section` ancestors, mouse dispatch matches handlers against kinds, and
//! the painter swaps in live state for `TypingLine` and `NavLink` nodes.

use crate::types::{Attr, Rect, Rgba};

/// Index into a [`Scene`](super::Scene)'s node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which coordinate space a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layer {
    /// Page coordinates; moves with the scroll offset.
    #[default]
    Document,
    /// Viewport coordinates; painted and hit-tested above the document.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Page,
    Section(String),
    Heading,
    Text,
    /// Hero line whose text comes from the typing animator.
    TypingLine,
    /// Bordered, non-interactive panel (skills, timeline, contact).
    Panel,
    ProjectCard(u32),
    /// A card's source link; consumes clicks before the card sees them.
    SourceLink(u32),
    /// Outbound URL or asset path.
    Link(String),
    /// Activates a section: nav bar, mobile menu, hero buttons.
    NavLink(String),
    NavBar,
    Brand,
    MenuToggle,
    MobileMenu,
    ContactSubmit,
    Footer,
    BackToTop,
    ModalBackdrop,
    Modal(u32),
    ModalClose,
}

impl NodeKind {
    /// Section id when this node is a section.
    pub fn section_id(&self) -> Option<&str> {
        match self {
            NodeKind::Section(id) => Some(id),
            _ => None,
        }
    }

    /// Whether a click on this node does something.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            NodeKind::ProjectCard(_)
                | NodeKind::SourceLink(_)
                | NodeKind::Link(_)
                | NodeKind::NavLink(_)
                | NodeKind::Brand
                | NodeKind::MenuToggle
                | NodeKind::ContactSubmit
                | NodeKind::BackToTop
                | NodeKind::ModalBackdrop
                | NodeKind::ModalClose
        )
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub fg: Rgba,
    pub attrs: Attr,
}

impl Span {
    pub fn new(text: impl Into<String>, fg: Rgba) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs: Attr::NONE,
        }
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

/// One painted row of a node.
pub type Line = Vec<Span>;

/// Visual style of a node's box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeStyle {
    pub bg: Option<Rgba>,
    pub border: Option<Rgba>,
}

impl NodeStyle {
    pub fn filled(bg: Rgba) -> Self {
        Self {
            bg: Some(bg),
            border: None,
        }
    }

    pub fn bordered(border: Rgba) -> Self {
        Self {
            bg: None,
            border: Some(border),
        }
    }

    pub fn has_border(&self) -> bool {
        self.border.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub layer: Layer,
    pub rect: Rect,
    pub style: NodeStyle,
    /// Text rows painted inside the border, top-left aligned.
    pub lines: Vec<Line>,
    /// Padding between the border and `lines`, in cells (x, y).
    pub inset: (u16, u16),
}

impl Node {
    /// Where the first text row starts.
    pub fn text_origin(&self) -> (u16, u16) {
        let border = u16::from(self.style.has_border());
        (
            self.rect.x + border + self.inset.0,
            self.rect.y + border + self.inset.1,
        )
    }
}
