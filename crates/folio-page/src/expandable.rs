//! Expandable sections: a header and preview that disclose a body on activation.

use crate::layout::Node;
use crate::model::ImageHandle;
use crate::theme::Swatch;

/// Disclosure state of an expandable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

/// Open/closed state of one expandable section.
///
/// A force-open section starts expanded and ignores activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandableSection {
    state: Disclosure,
    force_open: bool,
}

impl ExpandableSection {
    /// A section starting collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A section fixed in the expanded state.
    pub fn forced() -> Self {
        Self {
            state: Disclosure::Expanded,
            force_open: true,
        }
    }

    pub fn with_force_open(force_open: bool) -> Self {
        if force_open {
            Self::forced()
        } else {
            Self::new()
        }
    }

    pub fn state(&self) -> Disclosure {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == Disclosure::Expanded
    }

    pub fn is_force_open(&self) -> bool {
        self.force_open
    }

    /// Whether activation can change the state.
    pub fn is_toggleable(&self) -> bool {
        !self.force_open
    }

    /// Handle a user activation (click, tap, Enter/Space) on the header.
    pub fn activate(&mut self) -> Disclosure {
        if self.force_open {
            return self.state;
        }

        self.state = match self.state {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        };
        self.state
    }

    /// The parts of `content` visible in the current state.
    pub fn visible<'a>(&self, content: &'a ExpandableContent) -> Visible<'a> {
        let body: &[Node] = if self.is_open() { &content.body } else { &[] };

        Visible {
            title: &content.title,
            preview: &content.preview,
            body,
        }
    }
}

/// Resolved content of an expandable section.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableContent {
    /// Header title (HTML)
    pub title: String,
    /// Short text shown while collapsed (HTML)
    pub preview: String,
    /// Paragraphs and other nodes disclosed when expanded
    pub body: Vec<Node>,
}

/// What an expandable section shows in its current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visible<'a> {
    pub title: &'a str,
    pub preview: &'a str,
    pub body: &'a [Node],
}

/// Visual treatment of an expandable unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpandableKind {
    /// Compact card in a grid, headed by a glyph
    Card { glyph_src: String, glyph_alt: String },
    /// Wide info panel with an image and background
    Info {
        image: Option<ImageHandle>,
        background: Option<Swatch>,
    },
}

/// A rendered expandable unit: state, content and presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableUnit {
    /// Element id, unique within the page
    pub id: String,
    pub section: ExpandableSection,
    pub content: ExpandableContent,
    pub kind: ExpandableKind,
    /// Toggle labels shown while collapsed and expanded
    pub more_label: String,
    pub less_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TextStyle;

    fn content() -> ExpandableContent {
        ExpandableContent {
            title: "Privacy".to_string(),
            preview: "p1".to_string(),
            body: vec![
                Node::Text {
                    html: "b1".to_string(),
                    style: TextStyle::Body,
                },
                Node::Text {
                    html: "b2".to_string(),
                    style: TextStyle::Body,
                },
            ],
        }
    }

    #[test]
    fn starts_collapsed() {
        let section = ExpandableSection::new();

        assert_eq!(section.state(), Disclosure::Collapsed);
        assert!(section.is_toggleable());
    }

    #[test]
    fn activation_toggles() {
        let mut section = ExpandableSection::new();

        assert_eq!(section.activate(), Disclosure::Expanded);
        assert_eq!(section.activate(), Disclosure::Collapsed);
    }

    #[test]
    fn two_activations_restore_visible_state() {
        let content = content();
        let mut expanded = ExpandableSection::new();
        expanded.activate();

        for start in [ExpandableSection::new(), expanded] {
            let mut section = start;
            let before = section.visible(&content);
            section.activate();
            section.activate();
            assert_eq!(section.visible(&content), before);
        }
    }

    #[test]
    fn forced_section_ignores_activation() {
        let mut section = ExpandableSection::forced();

        assert!(section.is_open());
        assert!(!section.is_toggleable());
        for _ in 0..3 {
            assert_eq!(section.activate(), Disclosure::Expanded);
        }
    }

    #[test]
    fn collapsed_shows_preview_only() {
        let content = content();
        let visible = ExpandableSection::new().visible(&content);

        assert_eq!(visible.title, "Privacy");
        assert_eq!(visible.preview, "p1");
        assert!(visible.body.is_empty());
    }

    #[test]
    fn expanded_shows_body_in_order() {
        let content = content();
        let mut section = ExpandableSection::new();
        section.activate();

        let visible = section.visible(&content);
        let texts: Vec<&str> = visible
            .body
            .iter()
            .filter_map(|n| match n {
                Node::Text { html, .. } => Some(html.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(visible.preview, "p1");
        assert_eq!(texts, vec!["b1", "b2"]);
    }

    #[test]
    fn forced_section_always_shows_body() {
        let content = content();
        let mut section = ExpandableSection::with_force_open(true);
        section.activate();

        assert_eq!(section.visible(&content).body.len(), 2);
    }
}
