//! In-page anchors and scroll navigation.
//!
//! Anchors are stable element ids other pages may link to. The navigator turns
//! an anchor id into a smooth-scroll request on a [`Viewport`]; the request is
//! fire-and-forget and the viewport settles on its own schedule.

use std::collections::BTreeMap;
use std::fmt;

use crate::layout::Node;

/// Identifier of an anchored element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnchorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An anchored element and the offset it keeps from the viewport top when scrolled to.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTarget {
    /// Element id
    pub id: AnchorId,
    /// Overrides the page-level scroll margin for this element
    pub scroll_margin: Option<f64>,
}

impl AnchorTarget {
    pub fn new(id: impl Into<AnchorId>) -> Self {
        Self {
            id: id.into(),
            scroll_margin: None,
        }
    }

    pub fn with_scroll_margin(mut self, margin: f64) -> Self {
        self.scroll_margin = Some(margin);
        self
    }
}

/// Every anchor present in a composed page.
#[derive(Debug, Clone, Default)]
pub struct AnchorIndex {
    targets: BTreeMap<AnchorId, AnchorTarget>,
}

impl AnchorIndex {
    /// Collect anchors from a layout tree. The first element wins on duplicate ids.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut targets = BTreeMap::new();

        for node in nodes {
            node.walk(&mut |n| {
                if let Some(target) = n.anchor() {
                    if targets.contains_key(&target.id) {
                        tracing::warn!("Duplicate anchor id: {}", target.id);
                    } else {
                        targets.insert(target.id.clone(), target.clone());
                    }
                }
            });
        }

        Self { targets }
    }

    pub fn get(&self, id: &str) -> Option<&AnchorTarget> {
        self.targets.get(&AnchorId::new(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Anchor ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &AnchorId> {
        self.targets.keys()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// The scroll primitive navigation is issued against.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_top(&self) -> f64;

    /// Document-relative top of the element with this id, if it is laid out.
    fn element_top(&self, id: &AnchorId) -> Option<f64>;

    /// Start a smooth scroll toward `top`. Returns before the scroll completes.
    fn smooth_scroll_to(&mut self, top: f64);
}

/// Scrolls a viewport to anchors of one composed page.
#[derive(Debug, Clone, Copy)]
pub struct AnchorNavigator<'a> {
    index: &'a AnchorIndex,
    scroll_margin: f64,
}

impl<'a> AnchorNavigator<'a> {
    /// Create a navigator over a page's anchors with a page-level scroll margin.
    pub fn new(index: &'a AnchorIndex, scroll_margin: f64) -> Self {
        Self {
            index,
            scroll_margin,
        }
    }

    /// Smoothly scroll the viewport so the anchored element comes into view.
    ///
    /// An id absent from the page or from the viewport is a silent no-op.
    pub fn scroll_to_anchor(&self, id: &str, viewport: &mut dyn Viewport) {
        let Some(target) = self.index.get(id) else {
            tracing::debug!("Anchor target not found: {}", id);
            return;
        };

        let Some(top) = viewport.element_top(&target.id) else {
            tracing::debug!("Anchor {} is not laid out in the viewport", id);
            return;
        };

        let margin = target.scroll_margin.unwrap_or(self.scroll_margin);
        viewport.smooth_scroll_to((top - margin).max(0.0));
    }
}

/// A viewport without a display, for driving navigation outside a browser.
///
/// Scroll requests are recorded and only take effect on [`HeadlessViewport::settle`],
/// mirroring an animation that completes after the request returns.
#[derive(Debug, Clone, Default)]
pub struct HeadlessViewport {
    scroll_top: f64,
    pending: Option<f64>,
    elements: BTreeMap<AnchorId, f64>,
    requests: Vec<f64>,
}

impl HeadlessViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an element at a document-relative offset.
    pub fn place(&mut self, id: impl Into<AnchorId>, top: f64) {
        self.elements.insert(id.into(), top);
    }

    /// Scroll target of the animation in flight, if any.
    pub fn pending(&self) -> Option<f64> {
        self.pending
    }

    /// Every scroll request received, in order.
    pub fn requests(&self) -> &[f64] {
        &self.requests
    }

    /// Complete the animation in flight.
    pub fn settle(&mut self) {
        if let Some(top) = self.pending.take() {
            self.scroll_top = top;
        }
    }
}

impl Viewport for HeadlessViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn element_top(&self, id: &AnchorId) -> Option<f64> {
        self.elements.get(id).copied()
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.requests.push(top);
        self.pending = Some(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutParams, Node, TextStyle};

    fn page() -> Vec<Node> {
        vec![
            Node::Section {
                anchor: Some(AnchorTarget::new("what-is-a-node")),
                params: LayoutParams::new(),
                children: vec![Node::Text {
                    html: "A node is software".to_string(),
                    style: TextStyle::Body,
                }],
            },
            Node::Heading {
                level: 3,
                html: "Raspberry Pi".to_string(),
                emoji: None,
                anchor: Some(AnchorTarget::new("rasp-pi").with_scroll_margin(10.0)),
            },
        ]
    }

    fn viewport() -> HeadlessViewport {
        let mut viewport = HeadlessViewport::new();
        viewport.place("what-is-a-node", 900.0);
        viewport.place("rasp-pi", 4000.0);
        viewport
    }

    #[test]
    fn indexes_anchors_in_tree() {
        let index = AnchorIndex::from_nodes(&page());

        assert_eq!(index.len(), 2);
        assert!(index.contains("what-is-a-node"));
        assert!(index.contains("rasp-pi"));
        assert!(!index.contains("getting-started"));
    }

    #[test]
    fn scrolls_toward_present_anchor() {
        let index = AnchorIndex::from_nodes(&page());
        let navigator = AnchorNavigator::new(&index, 88.0);
        let mut viewport = viewport();

        navigator.scroll_to_anchor("what-is-a-node", &mut viewport);

        // Not settled until the animation completes
        assert_eq!(viewport.scroll_top(), 0.0);
        assert_eq!(viewport.pending(), Some(812.0));

        viewport.settle();
        assert_eq!(viewport.scroll_top(), 812.0);
    }

    #[test]
    fn per_anchor_margin_overrides_page_margin() {
        let index = AnchorIndex::from_nodes(&page());
        let navigator = AnchorNavigator::new(&index, 88.0);
        let mut viewport = viewport();

        navigator.scroll_to_anchor("rasp-pi", &mut viewport);

        assert_eq!(viewport.requests(), &[3990.0]);
    }

    #[test]
    fn absent_anchor_is_a_no_op() {
        let index = AnchorIndex::from_nodes(&page());
        let navigator = AnchorNavigator::new(&index, 88.0);
        let mut viewport = viewport();

        navigator.scroll_to_anchor("build-your-own", &mut viewport);
        viewport.settle();

        assert!(viewport.requests().is_empty());
        assert_eq!(viewport.scroll_top(), 0.0);
    }

    #[test]
    fn anchor_missing_from_viewport_is_a_no_op() {
        let index = AnchorIndex::from_nodes(&page());
        let navigator = AnchorNavigator::new(&index, 88.0);
        let mut viewport = HeadlessViewport::new();

        navigator.scroll_to_anchor("rasp-pi", &mut viewport);

        assert!(viewport.requests().is_empty());
    }

    #[test]
    fn never_scrolls_above_document_top() {
        let index = AnchorIndex::from_nodes(&page());
        let navigator = AnchorNavigator::new(&index, 88.0);
        let mut viewport = HeadlessViewport::new();
        viewport.place("what-is-a-node", 20.0);

        navigator.scroll_to_anchor("what-is-a-node", &mut viewport);

        assert_eq!(viewport.requests(), &[0.0]);
    }
}
