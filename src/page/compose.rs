//! Page Composition - content catalog to positioned scene nodes
//!
//! Content is first described as a tree of [`Block`]s (kind, style,
//! pre-wrapped lines, flex direction). The tree is handed to Taffy for a
//! flexbox pass and the computed boxes are pushed into a [`Scene`] in
//! pre-order, converted from parent-relative to page coordinates.
//!
//! Text is wrapped while building blocks, so every leaf has a known height
//! before layout runs and no measure function is needed.

use taffy::prelude::*;
use taffy::{NodeId as TaffyNode, Rect as TaffyRect};

use super::node::{Layer, Line, NodeId, NodeKind, NodeStyle, Span};
use super::scene::Scene;
use super::text::{string_width, truncate_text, wrap_text};
use crate::catalog::{ContentCatalog, Project, Section, MAX_SKILL_LEVEL};
use crate::error::{FolioError, Result};
use crate::types::{Attr, Rect, Rgba};

/// Rows covered by the fixed navigation bar.
pub const NAV_HEIGHT: u16 = 3;

/// Widest the content column gets on large terminals.
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Tags shown on a project card; the detail overlay lists all of them.
pub const MAX_CARD_TAGS: usize = 3;

/// Description rows on a project card before truncation.
pub const CARD_DESCRIPTION_LINES: usize = 3;

const SECTION_PAD_Y: u16 = 2;

// =============================================================================
// BLOCK TREE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Direction {
    #[default]
    Column,
    Row,
}

#[derive(Debug, Clone, Default)]
struct Block {
    kind: Option<NodeKind>,
    style: NodeStyle,
    lines: Vec<Line>,
    direction: Direction,
    spread: bool,
    pad_x: u16,
    pad_y: u16,
    gap: u16,
    width: Option<u16>,
    min_height: Option<u16>,
    children: Vec<Block>,
}

impl Block {
    fn leaf(kind: NodeKind, lines: Vec<Line>) -> Self {
        Self {
            kind: Some(kind),
            lines,
            ..Self::default()
        }
    }

    fn column(kind: NodeKind, children: Vec<Block>) -> Self {
        Self {
            kind: Some(kind),
            children,
            ..Self::default()
        }
    }

    fn row(kind: NodeKind, children: Vec<Block>) -> Self {
        Self {
            direction: Direction::Row,
            ..Self::column(kind, children)
        }
    }

    fn bordered(mut self, color: Rgba) -> Self {
        self.style.border = Some(color);
        self
    }

    fn filled(mut self, bg: Rgba) -> Self {
        self.style.bg = Some(bg);
        self
    }

    fn padded(mut self, x: u16, y: u16) -> Self {
        self.pad_x = x;
        self.pad_y = y;
        self
    }

    fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    fn spread(mut self) -> Self {
        self.spread = true;
        self
    }

    fn min_height(mut self, height: u16) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Fixed width sized to the widest line plus padding and border.
    fn fit_width(mut self) -> Self {
        let text = self
            .lines
            .iter()
            .map(|line| line.iter().map(|span| string_width(&span.text)).sum::<u16>())
            .max()
            .unwrap_or(0);
        self.width = Some(text + 2 * self.pad_x + 2 * self.border());
        self
    }

    fn border(&self) -> u16 {
        u16::from(self.style.has_border())
    }

    fn outer_width(&self) -> u16 {
        self.width.unwrap_or(0)
    }

    fn taffy_style(&self) -> Style {
        let border = self.border() as f32;
        let height = if self.children.is_empty() {
            let rows = self.lines.len() as u16 + 2 * self.pad_y + 2 * self.border();
            Dimension::Length(rows as f32)
        } else {
            Dimension::Auto
        };

        Style {
            display: Display::Flex,
            flex_direction: match self.direction {
                Direction::Column => FlexDirection::Column,
                Direction::Row => FlexDirection::Row,
            },
            justify_content: self.spread.then_some(JustifyContent::SpaceBetween),
            flex_shrink: 0.0,
            size: Size {
                width: self.width.map_or(Dimension::Auto, |w| Dimension::Length(w as f32)),
                height,
            },
            min_size: Size {
                width: Dimension::Auto,
                height: self
                    .min_height
                    .map_or(Dimension::Auto, |h| Dimension::Length(h as f32)),
            },
            padding: TaffyRect {
                left: LengthPercentage::Length(self.pad_x as f32),
                right: LengthPercentage::Length(self.pad_x as f32),
                top: LengthPercentage::Length(self.pad_y as f32),
                bottom: LengthPercentage::Length(self.pad_y as f32),
            },
            border: TaffyRect {
                left: LengthPercentage::Length(border),
                right: LengthPercentage::Length(border),
                top: LengthPercentage::Length(border),
                bottom: LengthPercentage::Length(border),
            },
            gap: Size {
                width: LengthPercentage::Length(self.gap as f32),
                height: LengthPercentage::Length(self.gap as f32),
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// LINE HELPERS
// =============================================================================

fn styled(text: &str, width: u16, fg: Rgba, attrs: Attr) -> Vec<Line> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| vec![Span::new(line, fg).with_attrs(attrs)])
        .collect()
}

fn plain(text: &str, width: u16) -> Vec<Line> {
    styled(text, width, Rgba::MUTED, Attr::NONE)
}

fn heading(text: &str, width: u16) -> Block {
    Block::leaf(NodeKind::Heading, styled(text, width, Rgba::WHITE, Attr::BOLD))
}

fn paragraph(text: &str, width: u16) -> Block {
    Block::leaf(NodeKind::Text, plain(text, width))
}

/// One-line bordered button sized to its label.
fn button(kind: NodeKind, label: &str, color: Rgba) -> Block {
    Block::leaf(kind, vec![vec![Span::new(label, Rgba::WHITE).with_attrs(Attr::BOLD)]])
        .bordered(color)
        .padded(2, 0)
        .fit_width()
}

/// Lay `items` out in a row when they fit in `width`, stacked otherwise.
fn row_or_column(items: Vec<Block>, width: u16, gap: u16) -> Block {
    let needed: u16 = items.iter().map(Block::outer_width).sum::<u16>()
        + gap * items.len().saturating_sub(1) as u16;
    let kind = NodeKind::Text;
    if needed <= width {
        Block::row(kind, items).gap(gap)
    } else {
        Block::column(kind, items)
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

fn hero(catalog: &ContentCatalog, width: u16) -> Vec<Block> {
    let profile = &catalog.profile;
    let mut blocks = vec![
        Block::leaf(
            NodeKind::Heading,
            styled(&profile.headline.to_uppercase(), width, Rgba::PRIMARY, Attr::BOLD),
        ),
        Block::leaf(
            NodeKind::Heading,
            styled(&profile.name, width, Rgba::WHITE, Attr::BOLD),
        ),
        // Text comes from the typing animator at paint time.
        Block::leaf(NodeKind::TypingLine, vec![Vec::new()]),
    ];

    if let Some(intro) = profile.bio.first() {
        blocks.push(paragraph(intro, width));
    }

    let mut buttons = Vec::new();
    if catalog.has_section("projects") {
        buttons.push(button(
            NodeKind::NavLink("projects".into()),
            "View My Work →",
            Rgba::PRIMARY,
        ));
    }
    if let Some(resume) = &profile.resume {
        buttons.push(button(NodeKind::Link(resume.clone()), "Download CV ↓", Rgba::SUBTLE));
    }
    if !buttons.is_empty() {
        blocks.push(row_or_column(buttons, width, 2));
    }
    blocks
}

fn about(catalog: &ContentCatalog, width: u16) -> Vec<Block> {
    let mut blocks = vec![Block::leaf(
        NodeKind::Heading,
        vec![vec![
            Span::new("Engineering ", Rgba::WHITE).with_attrs(Attr::BOLD),
            Span::new("Intelligence", Rgba::PRIMARY).with_attrs(Attr::BOLD),
        ]],
    )];

    // The first paragraph already opens the hero.
    let bio = catalog.profile.bio.get(1..).unwrap_or_default();
    blocks.extend(bio.iter().map(|text| paragraph(text, width)));

    let inner = width.saturating_sub(4);
    if !catalog.achievements.is_empty() {
        let bullets = [Rgba::PRIMARY, Rgba::PURPLE, Rgba::CYAN];
        let mut lines = styled("Key Achievements", inner, Rgba::WHITE, Attr::BOLD);
        for (i, item) in catalog.achievements.iter().enumerate() {
            for (row, text) in wrap_text(item, inner.saturating_sub(2)).into_iter().enumerate() {
                let marker = if row == 0 { "● " } else { "  " };
                lines.push(vec![
                    Span::new(marker, bullets[i % bullets.len()]),
                    Span::new(text, Rgba::MUTED),
                ]);
            }
        }
        blocks.push(Block::leaf(NodeKind::Panel, lines).bordered(Rgba::SUBTLE).padded(1, 0));
    }

    if !catalog.timeline.is_empty() {
        blocks.push(heading("My Journey", width));
        for event in &catalog.timeline {
            let mut lines = styled(&event.period, inner, Rgba::CYAN, Attr::NONE);
            lines.extend(styled(&event.title, inner, Rgba::WHITE, Attr::BOLD));
            lines.extend(styled(&event.organization, inner, Rgba::PRIMARY, Attr::NONE));
            lines.extend(plain(&event.description, inner));
            blocks.push(Block::leaf(NodeKind::Panel, lines).bordered(Rgba::SUBTLE).padded(1, 0));
        }
    }
    blocks
}

fn skills(catalog: &ContentCatalog, width: u16) -> Vec<Block> {
    let mut blocks = vec![
        heading("Technical Expertise", width),
        paragraph(
            "A comprehensive toolkit enabling me to build end-to-end AI solutions and \
             scalable web applications.",
            width,
        ),
    ];

    let inner = width.saturating_sub(4);
    for category in &catalog.skills {
        let mut lines = styled(&category.title, inner, Rgba::WHITE, Attr::BOLD);

        let label_width = category
            .leveled()
            .map(|(name, _)| string_width(name))
            .max()
            .unwrap_or(0)
            .min(inner / 2);
        lines.extend(category.leveled().map(|(name, level)| skill_bar(name, level, label_width, inner)));

        let rest: Vec<&str> = category.unleveled().collect();
        if !rest.is_empty() {
            lines.extend(styled(&rest.join(" · "), inner, Rgba::CYAN, Attr::NONE));
        }
        blocks.push(Block::leaf(NodeKind::Panel, lines).bordered(Rgba::SUBTLE).padded(1, 0));
    }
    blocks
}

const SKILL_BAR_MAX: u16 = 24;

/// `name ████████░░░  88%`, the bar shrinking with `width`. Too narrow for a
/// bar leaves just the name and percentage.
fn skill_bar(name: &str, level: u8, label_width: u16, width: u16) -> Line {
    let label = truncate_text(name, label_width);
    let pad = " ".repeat(usize::from(label_width.saturating_sub(string_width(&label))));
    let percent = format!(" {:>3}%", level.min(MAX_SKILL_LEVEL));

    let bar_width = width.saturating_sub(label_width + 6).min(SKILL_BAR_MAX);
    if bar_width < 4 {
        return vec![Span::new(format!("{label}{pad}"), Rgba::CYAN), Span::new(percent, Rgba::MUTED)];
    }
    let filled = (u32::from(bar_width) * u32::from(level.min(MAX_SKILL_LEVEL)) + 50) / 100;
    let filled = filled as usize;
    vec![
        Span::new(format!("{label}{pad} "), Rgba::CYAN),
        Span::new("█".repeat(filled), Rgba::PRIMARY),
        Span::new("░".repeat(usize::from(bar_width) - filled), Rgba::SUBTLE),
        Span::new(percent, Rgba::MUTED),
    ]
}

fn project_card(project: &Project, width: u16) -> Block {
    let inner = width.saturating_sub(4);

    let tags: Line = project
        .tags
        .iter()
        .take(MAX_CARD_TAGS)
        .flat_map(|tag| [Span::new(format!("[{tag}]"), Rgba::PRIMARY), Span::new(" ", Rgba::PRIMARY)])
        .collect();

    let mut description = plain(&project.description, inner);
    if description.len() > CARD_DESCRIPTION_LINES {
        description.truncate(CARD_DESCRIPTION_LINES);
        if let Some(span) = description.last_mut().and_then(|line| line.first_mut()) {
            span.text = truncate_text(&format!("{}…", span.text), inner);
        }
    }

    let source = Block::leaf(
        NodeKind::SourceLink(project.id),
        vec![vec![Span::new("⌥ Source", Rgba::MUTED).with_attrs(Attr::UNDERLINE)]],
    )
    .fit_width();
    let details = Block::leaf(
        NodeKind::Text,
        vec![vec![Span::new("View Details", Rgba::PRIMARY).with_attrs(Attr::BOLD)]],
    )
    .fit_width();

    Block::column(
        NodeKind::ProjectCard(project.id),
        vec![
            Block::leaf(NodeKind::Text, vec![tags]),
            Block::leaf(
                NodeKind::Heading,
                styled(&project.title, inner, Rgba::WHITE, Attr::BOLD),
            ),
            Block::leaf(NodeKind::Text, description),
            Block::row(NodeKind::Text, vec![source, details]).spread(),
        ],
    )
    .bordered(Rgba::SUBTLE)
    .filled(Rgba::PANEL)
    .padded(1, 0)
    .gap(1)
}

fn projects(catalog: &ContentCatalog, width: u16) -> Vec<Block> {
    let mut blocks = vec![
        heading("Selected Works", width),
        paragraph(
            "A showcase of my projects in Generative AI, Machine Learning, and Full Stack \
             Development.",
            width,
        ),
    ];
    blocks.extend(catalog.projects.iter().map(|project| project_card(project, width)));
    blocks
}

fn contact(catalog: &ContentCatalog, width: u16) -> Vec<Block> {
    let mut blocks = vec![
        heading("Let's Collaborate", width),
        paragraph(
            "I'm always open to discussing new projects, creative ideas, or opportunities \
             to be part of your vision.",
            width,
        ),
    ];

    let info = &catalog.contact;
    let mut links = vec![(info.mailto(), format!("✉ Email     {}", info.email))];
    if let Some(url) = &info.linkedin {
        links.push((url.clone(), "in LinkedIn  Connect on LinkedIn".to_string()));
    }
    if let Some(url) = &info.github {
        links.push((url.clone(), "⌥ GitHub    Follow on GitHub".to_string()));
    }
    for (url, label) in links {
        blocks.push(Block::leaf(
            NodeKind::Link(url),
            vec![vec![Span::new(label, Rgba::WHITE)]],
        ));
    }

    let inner = width.saturating_sub(4);
    let field = |label: &str, placeholder: &str| -> Vec<Line> {
        vec![
            vec![Span::new(label, Rgba::MUTED)],
            vec![Span::new(truncate_text(placeholder, inner), Rgba::SUBTLE).with_attrs(Attr::ITALIC)],
        ]
    };
    let mut form = field("Name", "Seenaiah");
    form.extend(field("Email", "seenaiah@example.com"));
    form.extend(field("Message", "Tell me about your project..."));
    blocks.push(Block::leaf(NodeKind::Panel, form).bordered(Rgba::SUBTLE).padded(1, 0));
    blocks.push(button(NodeKind::ContactSubmit, "Send Message", Rgba::PRIMARY));
    blocks
}

/// Sections with no dedicated layout show their label only.
fn generic(section: &Section, width: u16) -> Vec<Block> {
    vec![heading(&section.label, width)]
}

fn footer(catalog: &ContentCatalog, width: u16) -> Block {
    let brand = Block::leaf(
        NodeKind::Text,
        vec![vec![
            Span::new(initials(&catalog.profile.name), Rgba::WHITE).with_attrs(Attr::BOLD),
            Span::new(".", Rgba::PRIMARY).with_attrs(Attr::BOLD),
        ]],
    );

    let info = &catalog.contact;
    let mut socials = Vec::new();
    if let Some(url) = &info.github {
        socials.push((url.clone(), "GitHub"));
    }
    if let Some(url) = &info.linkedin {
        socials.push((url.clone(), "LinkedIn"));
    }
    socials.push((info.mailto(), "Email"));
    let socials = socials
        .into_iter()
        .map(|(url, label)| {
            Block::leaf(NodeKind::Link(url), vec![vec![Span::new(label, Rgba::MUTED)]]).fit_width()
        })
        .collect();

    let copyright = Block::leaf(
        NodeKind::Text,
        styled(
            &format!("© {}. All rights reserved.", catalog.profile.name),
            width.saturating_sub(16),
            Rgba::SUBTLE,
            Attr::NONE,
        ),
    )
    .fit_width();
    let top = Block::leaf(
        NodeKind::BackToTop,
        vec![vec![Span::new("Back to Top ↑", Rgba::MUTED)]],
    )
    .fit_width();

    Block::column(
        NodeKind::Footer,
        vec![
            brand,
            row_or_column(socials, width, 3),
            Block::row(NodeKind::Text, vec![copyright, top]).spread(),
        ],
    )
    .padded(0, 1)
    .gap(1)
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

// =============================================================================
// COMPOSE
// =============================================================================

/// Lay out the whole page for a `width` x `height` viewport.
///
/// The first section is at least one viewport tall and starts under the
/// navigation bar.
pub fn compose(catalog: &ContentCatalog, width: u16, height: u16) -> Result<Scene> {
    let page_pad_x = if width >= 60 { 2 } else { 1 };
    let content = width
        .saturating_sub(2 * page_pad_x)
        .min(MAX_CONTENT_WIDTH)
        .max(1);
    let side = width.saturating_sub(content) / 2;

    let mut children = Vec::with_capacity(catalog.sections.len() + 1);
    for (i, section) in catalog.sections.iter().enumerate() {
        let blocks = match section.id.as_str() {
            "home" => hero(catalog, content),
            "about" => about(catalog, content),
            "skills" => skills(catalog, content),
            "projects" => projects(catalog, content),
            "contact" => contact(catalog, content),
            _ => generic(section, content),
        };
        let mut block = Block::column(NodeKind::Section(section.id.clone()), blocks)
            .padded(side, SECTION_PAD_Y)
            .gap(1);
        if i == 0 {
            block.pad_y = 0;
            block = block.min_height(height);
            block.children.insert(0, Block::leaf(NodeKind::Text, vec![Vec::new(); NAV_HEIGHT as usize]));
        }
        children.push(block);
    }
    children.push(footer(catalog, content).padded(side, 1));

    let root = Block {
        width: Some(width),
        ..Block::column(NodeKind::Page, children)
    }
    .filled(Rgba::PAGE);

    layout(root, width)
}

fn layout(root: Block, width: u16) -> Result<Scene> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut ids = Vec::new();
    let root_node = build(&mut tree, &root, &mut ids).map_err(layout_error)?;

    let available = Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root_node, available).map_err(layout_error)?;

    let mut scene = Scene::new(width);
    let mut ids = ids.into_iter();
    place(&mut scene, &tree, root, &mut ids, None, (0.0, 0.0))?;
    log::debug!(
        "event=page_composed width={} content_height={} nodes={}",
        width,
        scene.content_height(),
        scene.nodes().len()
    );
    Ok(scene)
}

/// Create Taffy nodes in pre-order, recording each id in `ids`.
fn build(tree: &mut TaffyTree<()>, block: &Block, ids: &mut Vec<TaffyNode>) -> taffy::TaffyResult<TaffyNode> {
    let node = tree.new_leaf(block.taffy_style())?;
    ids.push(node);
    for child in &block.children {
        let child_node = build(tree, child, ids)?;
        tree.add_child(node, child_node)?;
    }
    Ok(node)
}

fn place(
    scene: &mut Scene,
    tree: &TaffyTree<()>,
    block: Block,
    ids: &mut impl Iterator<Item = TaffyNode>,
    parent: Option<NodeId>,
    origin: (f32, f32),
) -> Result<()> {
    let node = ids
        .next()
        .ok_or_else(|| FolioError::Layout("block tree and layout tree diverged".into()))?;
    let layout = tree.layout(node).map_err(layout_error)?;

    let x = origin.0 + layout.location.x;
    let y = origin.1 + layout.location.y;
    let rect = Rect::new(
        x.round() as u16,
        y.round() as u16,
        layout.size.width.round() as u16,
        layout.size.height.round() as u16,
    );

    let kind = block.kind.unwrap_or(NodeKind::Text);
    let id = scene.push(parent, kind, Layer::Document, rect, block.style, block.lines);
    scene.set_inset(id, (block.pad_x, block.pad_y));
    for child in block.children {
        place(scene, tree, child, ids, Some(id), (x, y))?;
    }
    Ok(())
}

fn layout_error(err: taffy::TaffyError) -> FolioError {
    FolioError::Layout(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(width: u16, height: u16) -> Scene {
        compose(&ContentCatalog::builtin(), width, height).unwrap()
    }

    #[test]
    fn test_sections_stack_in_order() {
        let scene = page(100, 30);
        assert_eq!(
            scene.section_ids(),
            vec!["home", "about", "skills", "projects", "contact"]
        );

        let tops: Vec<u16> = scene
            .section_ids()
            .iter()
            .map(|id| scene.section_top(id).unwrap())
            .collect();
        assert_eq!(tops[0], 0);
        assert!(tops.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(scene.content_height() > tops[4]);
    }

    #[test]
    fn test_hero_fills_viewport() {
        let scene = page(100, 30);
        assert!(scene.section_top("about").unwrap() >= 30);
    }

    #[test]
    fn test_source_link_nested_in_card() {
        let scene = page(100, 30);
        let link = scene.find(&NodeKind::SourceLink(2)).unwrap();
        let kinds: Vec<&NodeKind> = scene.ancestors(link.id).map(|node| &node.kind).collect();
        assert!(kinds.contains(&&NodeKind::ProjectCard(2)));
        assert!(kinds.contains(&&NodeKind::Section("projects".into())));

        let card = scene.find(&NodeKind::ProjectCard(2)).unwrap();
        assert!(card.rect.contains(link.rect.x, link.rect.y));
    }

    #[test]
    fn test_card_shows_three_tags() {
        let scene = page(100, 30);
        let card = scene.find(&NodeKind::ProjectCard(1)).unwrap();
        let tags = scene
            .nodes()
            .iter()
            .find(|node| node.parent == Some(card.id))
            .unwrap();
        let text: String = tags.lines[0].iter().map(|span| span.text.as_str()).collect();
        assert_eq!(text.trim_end(), "[GenAI] [Python] [FastAPI]");
    }

    #[test]
    fn test_skill_levels_draw_bars() {
        let line: String = skill_bar("Flask", 50, 8, 40)
            .iter()
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(line, format!("Flask    {}{}  50%", "█".repeat(12), "░".repeat(12)));

        let narrow: String = skill_bar("Flask", 50, 8, 12)
            .iter()
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(narrow, "Flask     50%");

        let scene = page(100, 30);
        let text: Vec<String> = scene
            .document()
            .iter()
            .filter(|node| node.kind == NodeKind::Panel)
            .flat_map(|node| &node.lines)
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect();
        assert!(text.iter().any(|line| line.starts_with("Python") && line.ends_with(" 95%")));
        assert!(text.iter().any(|line| line.contains("Pandas · NumPy · Matplotlib")));
    }

    #[test]
    fn test_narrow_terminal_still_composes() {
        let scene = page(30, 12);
        assert_eq!(scene.section_ids().len(), 5);
        assert!(scene.document().iter().all(|node| node.rect.right() <= 30 || node.rect.width == 0));
    }

    #[test]
    fn test_unknown_section_gets_label() {
        let mut catalog = ContentCatalog::builtin();
        catalog.sections.push(Section::new("blog", "Blog"));
        let scene = compose(&catalog, 80, 24).unwrap();
        assert!(scene.section_top("blog").is_some());
        assert_eq!(scene.find(&NodeKind::Footer).map(|n| n.rect.y > 0), Some(true));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Dommalapati Seenaiah"), "DS");
    }
}
