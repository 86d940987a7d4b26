//! Page composition: turns a page declaration into a resolved layout tree for one locale.

use folio_i18n::rich::emoji;
use folio_i18n::{Catalog, ContentKey, Locale, LocaleCatalog, Resolved, Translator};

use crate::anchor::{AnchorIndex, AnchorNavigator, AnchorTarget};
use crate::expandable::{ExpandableContent, ExpandableKind, ExpandableSection, ExpandableUnit};
use crate::layout::{
    self, Align, ButtonAction, ButtonNode, GridParams, LayoutParams, LinkNode, Node, TextStyle,
};
use crate::model::{
    Action, Block, ButtonSpec, ContentCard, HeroSpec, ImageCatalog, InfoSpec, LinkTarget,
    PageSpec, SectionSpec,
};
use crate::theme::Theme;

/// A content key that resolved to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub key: String,
    pub locale: Locale,
}

/// A page resolved for one locale.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub slug: &'static str,
    pub locale: Locale,
    pub title: Resolved,
    pub description: Resolved,
    /// Sections in declaration order
    pub body: Vec<Node>,
    pub anchors: AnchorIndex,
    /// Keys that resolved to placeholders, each listed once
    pub missing: Vec<MissingTranslation>,
    scroll_margin: f64,
}

impl ComposedPage {
    /// Every expandable unit on the page, in document order.
    pub fn expandables(&self) -> Vec<&ExpandableUnit> {
        layout::expandables(&self.body)
    }

    /// A navigator over this page's anchors using the theme's scroll margin.
    pub fn navigator(&self) -> AnchorNavigator<'_> {
        AnchorNavigator::new(&self.anchors, self.scroll_margin)
    }
}

/// Composes page declarations against a translator, theme and image catalog.
pub struct PageComposer<'a, C: LocaleCatalog = Catalog> {
    translator: &'a Translator<C>,
    theme: &'a Theme,
    images: &'a ImageCatalog,
}

impl<'a, C: LocaleCatalog> PageComposer<'a, C> {
    pub fn new(translator: &'a Translator<C>, theme: &'a Theme, images: &'a ImageCatalog) -> Self {
        Self {
            translator,
            theme,
            images,
        }
    }

    /// Resolve a page for `locale`.
    pub fn compose(&self, page: &PageSpec, locale: &Locale) -> ComposedPage {
        let mut session = Session::new(self, locale);

        let title = session.resolve(page.title);
        let description = session.resolve(page.description);
        let body: Vec<Node> = page
            .sections
            .iter()
            .map(|section| session.section(section))
            .collect();

        let anchors = AnchorIndex::from_nodes(&body);
        for target in layout::scroll_targets(&body) {
            if !anchors.contains(target.as_str()) {
                tracing::warn!(
                    "Scroll control on {} ({}) targets missing anchor: {}",
                    page.slug,
                    locale,
                    target
                );
            }
        }

        ComposedPage {
            slug: page.slug,
            locale: locale.clone(),
            title,
            description,
            body,
            anchors,
            missing: session.missing,
            scroll_margin: self.theme.scroll_margin_top,
        }
    }

    /// Project a list of content cards into expandable units, one per card, in order.
    pub fn project_cards(&self, cards: &[ContentCard], locale: &Locale) -> Vec<ExpandableUnit> {
        let mut session = Session::new(self, locale);
        cards.iter().map(|card| session.card(card)).collect()
    }
}

/// State of one composition: the locale and everything collected while resolving.
struct Session<'s, 'a, C: LocaleCatalog> {
    composer: &'s PageComposer<'a, C>,
    locale: &'s Locale,
    missing: Vec<MissingTranslation>,
    expandables: usize,
}

impl<'s, 'a, C: LocaleCatalog> Session<'s, 'a, C> {
    fn new(composer: &'s PageComposer<'a, C>, locale: &'s Locale) -> Self {
        Self {
            composer,
            locale,
            missing: Vec::new(),
            expandables: 0,
        }
    }

    fn resolve(&mut self, key: ContentKey) -> Resolved {
        let resolved = self.composer.translator.resolve(key, self.locale);
        if resolved.is_missing() && !self.missing.iter().any(|m| m.key == resolved.key) {
            self.missing.push(MissingTranslation {
                key: resolved.key.clone(),
                locale: self.locale.clone(),
            });
        }
        resolved
    }

    fn html(&mut self, key: ContentKey) -> String {
        self.resolve(key).html
    }

    fn text(&mut self, key: ContentKey) -> String {
        self.resolve(key).text
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.expandables += 1;
        format!("{}-{}", prefix, self.expandables)
    }

    fn section(&mut self, section: &SectionSpec) -> Node {
        Node::Section {
            anchor: section.anchor.clone().map(AnchorTarget::new),
            params: section.params.clone(),
            children: self.blocks(&section.blocks),
        }
    }

    fn blocks(&mut self, blocks: &[Block]) -> Vec<Node> {
        blocks.iter().map(|block| self.block(block)).collect()
    }

    fn block(&mut self, block: &Block) -> Node {
        match block {
            Block::Hero(hero) => self.hero(hero),
            Block::Heading {
                level,
                text,
                emoji: shortcode,
                anchor,
            } => Node::Heading {
                level: *level,
                html: self.html(*text),
                emoji: shortcode.and_then(emoji).map(str::to_string),
                anchor: anchor.clone().map(AnchorTarget::new),
            },
            Block::Text {
                text,
                style,
                emoji: shortcode,
            } => {
                let html = self.html(*text);
                let html = match shortcode.and_then(emoji) {
                    Some(e) => format!("{} {}", e, html),
                    None => html,
                };
                Node::Text { html, style: *style }
            }
            Block::Reference {
                lead,
                link,
                target,
                note,
            } => {
                let mut parts = Vec::new();
                if let Some(lead) = lead {
                    parts.push(Node::Text {
                        html: self.html(*lead),
                        style: TextStyle::Body,
                    });
                }
                parts.push(self.link(*link, target));
                if let Some(note) = note {
                    parts.push(Node::Text {
                        html: format!("- <em>{}</em>", self.html(*note)),
                        style: TextStyle::Body,
                    });
                }
                Node::Line(parts)
            }
            Block::List(items) => {
                Node::List(items.iter().map(|item| self.blocks(item)).collect())
            }
            Block::Image { asset, alt } => Node::Image {
                handle: self.composer.images.get(*asset),
                alt: alt.map(|k| self.text(k)).unwrap_or_default(),
            },
            Block::Glyph { glyph, alt } => Node::Glyph {
                src: self.composer.images.glyph_src(*glyph),
                alt: self.text(*alt),
            },
            Block::Link { text, target } => self.link(*text, target),
            Block::Buttons(buttons) => Node::Row(
                LayoutParams::new().gap(4).class("buttons"),
                buttons.iter().map(|b| self.button(b)).collect(),
            ),
            Block::Info(info) => Node::Expandable(self.info(info)),
            Block::Cards(cards) => Node::Grid(
                GridParams::default(),
                cards
                    .iter()
                    .map(|card| Node::Expandable(self.card(card)))
                    .collect(),
            ),
            Block::Row(params, blocks) => Node::Row(params.clone(), self.blocks(blocks)),
            Block::Column(params, blocks) => Node::Column(params.clone(), self.blocks(blocks)),
            Block::Card(params, blocks) => Node::Card(params.clone(), self.blocks(blocks)),
            Block::Divider => Node::Divider,
        }
    }

    fn hero(&mut self, hero: &HeroSpec) -> Node {
        let mut params = LayoutParams::new()
            .gap(8)
            .padding(8, 8)
            .align(Align::Center)
            .class("hero");
        if hero.reverse {
            params = params.reverse();
        }

        let copy = Node::Column(
            LayoutParams::new().gap(4),
            vec![
                Node::Heading {
                    level: 1,
                    html: self.html(hero.title),
                    emoji: None,
                    anchor: None,
                },
                Node::Heading {
                    level: 2,
                    html: self.html(hero.header),
                    emoji: None,
                    anchor: None,
                },
                Node::Text {
                    html: self.html(hero.subtitle),
                    style: TextStyle::Body,
                },
                Node::Row(
                    LayoutParams::new().gap(4).class("buttons"),
                    hero.buttons.iter().map(|b| self.button(b)).collect(),
                ),
            ],
        );
        let image = Node::Image {
            handle: self.composer.images.get(hero.image),
            alt: self.text(hero.alt),
        };

        Node::Row(params, vec![copy, image])
    }

    fn link(&mut self, text: ContentKey, target: &LinkTarget) -> Node {
        Node::Link(LinkNode {
            href: target.href(self.composer.images.base_url(), self.locale),
            html: self.html(text),
            external: target.is_external(),
        })
    }

    fn button(&mut self, button: &ButtonSpec) -> Node {
        let label = self.html(button.label);
        let html = if button.code {
            format!("<code>{}</code>", label)
        } else {
            label
        };

        let action = match &button.action {
            Action::ScrollTo(id) => ButtonAction::ScrollTo(id.clone()),
            Action::Navigate(target) => ButtonAction::Href {
                href: target.href(self.composer.images.base_url(), self.locale),
                external: target.is_external(),
            },
        };

        Node::Button(ButtonNode {
            html,
            variant: button.variant,
            action,
            glyph_src: button.glyph.map(|g| self.composer.images.glyph_src(g)),
        })
    }

    fn card(&mut self, card: &ContentCard) -> ExpandableUnit {
        let body = card
            .body
            .iter()
            .map(|key| Node::Text {
                html: self.html(*key),
                style: TextStyle::Body,
            })
            .collect();

        ExpandableUnit {
            id: self.next_id("card"),
            section: ExpandableSection::new(),
            content: ExpandableContent {
                title: self.html(card.title),
                preview: self.html(card.preview),
                body,
            },
            kind: ExpandableKind::Card {
                glyph_src: self.composer.images.glyph_src(card.icon),
                glyph_alt: self.text(card.alt),
            },
            more_label: self.text(ContentKey::More),
            less_label: self.text(ContentKey::Less),
        }
    }

    fn info(&mut self, info: &InfoSpec) -> ExpandableUnit {
        ExpandableUnit {
            id: self.next_id("info"),
            section: ExpandableSection::with_force_open(info.force_open),
            content: ExpandableContent {
                title: self.html(info.title),
                preview: self.html(info.preview),
                body: self.blocks(&info.body),
            },
            kind: ExpandableKind::Info {
                image: info.image.map(|asset| self.composer.images.get(asset)),
                background: info.background,
            },
            more_label: self.text(ContentKey::More),
            less_label: self.text(ContentKey::Less),
        }
    }
}
