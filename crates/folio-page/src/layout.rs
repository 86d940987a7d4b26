//! Layout primitives and the resolved page tree.
//!
//! A composed page is a tree of [`Node`]s. Containers are limited to rows,
//! columns, cards and grids, each configured by explicit parameters rather than
//! open-ended style overrides.

use crate::anchor::{AnchorId, AnchorTarget};
use crate::expandable::ExpandableUnit;
use crate::model::{ButtonVariant, ImageHandle};
use crate::theme::Swatch;

/// Cross-axis alignment of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Stretch,
    Start,
    Center,
}

/// Main-axis distribution of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    SpaceBetween,
}

/// Width a container claims inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    #[default]
    Auto,
    /// Share remaining space equally with siblings
    Fill,
    /// Percentage of the parent on wide viewports
    Percent(u8),
}

/// Parameters shared by row, column, card and section containers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutParams {
    /// Gap between children, in theme spacing steps
    pub gap: u8,
    /// Horizontal padding, in theme spacing steps
    pub padding_x: u8,
    /// Vertical padding, in theme spacing steps
    pub padding_y: u8,
    pub align: Align,
    pub justify: Justify,
    pub width: Width,
    pub background: Option<Swatch>,
    /// Reverse child order visually
    pub reverse: bool,
    /// Semantic class hook for styling, e.g. `highlight`
    pub class: Option<&'static str>,
}

impl LayoutParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, steps: u8) -> Self {
        self.gap = steps;
        self
    }

    pub fn padding(mut self, x: u8, y: u8) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn background(mut self, swatch: Swatch) -> Self {
        self.background = Some(swatch);
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

/// Parameters of a responsive grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridParams {
    /// Minimum column width in pixels
    pub min_column: u16,
    /// Gap between cells, in theme spacing steps
    pub gap: u8,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            min_column: 320,
            gap: 8,
        }
    }
}

/// Typographic treatment of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Body,
    Strong,
    Small,
    SmallEmphasis,
    Code,
}

/// What activating a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Smooth-scroll to an anchor on this page
    ScrollTo(AnchorId),
    /// Follow a link
    Href { href: String, external: bool },
}

/// A resolved button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonNode {
    pub html: String,
    pub variant: ButtonVariant,
    pub action: ButtonAction,
    /// Glyph shown before the label
    pub glyph_src: Option<String>,
}

/// A resolved link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    pub href: String,
    pub html: String,
    pub external: bool,
}

/// One node of the composed page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Top-level page section, optionally anchored
    Section {
        anchor: Option<AnchorTarget>,
        params: LayoutParams,
        children: Vec<Node>,
    },
    Row(LayoutParams, Vec<Node>),
    Column(LayoutParams, Vec<Node>),
    Card(LayoutParams, Vec<Node>),
    Grid(GridParams, Vec<Node>),
    Heading {
        level: u8,
        html: String,
        emoji: Option<String>,
        anchor: Option<AnchorTarget>,
    },
    Text {
        html: String,
        style: TextStyle,
    },
    /// Bulleted list; each item holds its own nodes
    List(Vec<Vec<Node>>),
    /// Text and links flowing as one paragraph
    Line(Vec<Node>),
    Image {
        handle: ImageHandle,
        alt: String,
    },
    Glyph {
        src: String,
        alt: String,
    },
    Link(LinkNode),
    Button(ButtonNode),
    Expandable(ExpandableUnit),
    Divider,
}

impl Node {
    /// Direct children of a container node.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Section { children, .. }
            | Node::Row(_, children)
            | Node::Column(_, children)
            | Node::Card(_, children)
            | Node::Grid(_, children)
            | Node::Line(children) => children.iter().collect(),
            Node::List(items) => items.iter().flatten().collect(),
            Node::Expandable(unit) => unit.content.body.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Visit this node and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// The anchor this node declares, if any.
    pub fn anchor(&self) -> Option<&AnchorTarget> {
        match self {
            Node::Section { anchor, .. } | Node::Heading { anchor, .. } => anchor.as_ref(),
            _ => None,
        }
    }

    /// The anchor a button on this node scrolls to, if any.
    pub fn scroll_target(&self) -> Option<&AnchorId> {
        match self {
            Node::Button(ButtonNode {
                action: ButtonAction::ScrollTo(id),
                ..
            }) => Some(id),
            _ => None,
        }
    }
}

/// Every expandable unit in a tree, in document order.
pub fn expandables(nodes: &[Node]) -> Vec<&ExpandableUnit> {
    let mut units = Vec::new();
    for node in nodes {
        node.walk(&mut |n| {
            if let Node::Expandable(unit) = n {
                units.push(unit);
            }
        });
    }
    units
}

/// Every anchor referenced by a scroll control in a tree, in document order.
pub fn scroll_targets(nodes: &[Node]) -> Vec<&AnchorId> {
    let mut targets = Vec::new();
    for node in nodes {
        node.walk(&mut |n| {
            if let Some(id) = n.scroll_target() {
                targets.push(id);
            }
        });
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(html: &str) -> Node {
        Node::Text {
            html: html.to_string(),
            style: TextStyle::Body,
        }
    }

    fn scroll_button(id: &str) -> Node {
        Node::Button(ButtonNode {
            html: "Go".to_string(),
            variant: ButtonVariant::Secondary,
            action: ButtonAction::ScrollTo(AnchorId::new(id)),
            glyph_src: None,
        })
    }

    #[test]
    fn builder_sets_params() {
        let params = LayoutParams::new()
            .gap(8)
            .padding(4, 2)
            .align(Align::Center)
            .background(Swatch::Turquoise)
            .reverse()
            .class("highlight");

        assert_eq!(params.gap, 8);
        assert_eq!((params.padding_x, params.padding_y), (4, 2));
        assert_eq!(params.align, Align::Center);
        assert_eq!(params.background, Some(Swatch::Turquoise));
        assert!(params.reverse);
        assert_eq!(params.class, Some("highlight"));
    }

    #[test]
    fn walks_depth_first() {
        let tree = Node::Row(
            LayoutParams::new(),
            vec![
                Node::Column(LayoutParams::new(), vec![text("a"), text("b")]),
                Node::List(vec![vec![text("c")], vec![text("d")]]),
            ],
        );

        let mut seen = Vec::new();
        tree.walk(&mut |n| {
            if let Node::Text { html, .. } = n {
                seen.push(html.clone());
            }
        });

        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn collects_scroll_targets() {
        let nodes = vec![
            Node::Card(LayoutParams::new(), vec![scroll_button("build-your-own")]),
            Node::List(vec![vec![scroll_button("rasp-pi")]]),
        ];

        let targets = scroll_targets(&nodes);
        let ids: Vec<&str> = targets.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["build-your-own", "rasp-pi"]);
    }
}
