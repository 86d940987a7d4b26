//! Declarative page content: content cards, buttons, links, images and the
//! block tree a page is declared with.

use std::collections::HashMap;

use folio_i18n::{ContentKey, Locale};

use crate::anchor::AnchorId;
use crate::layout::{LayoutParams, TextStyle};
use crate::theme::Swatch;

/// A glyph icon provided by the asset collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Privacy,
    Megaphone,
    Earth,
    Decentralization,
    Vote,
    Sovereignty,
    Hardware,
    Download,
    Terminal,
    Dappnode,
    Dapptap,
    Discord,
}

impl Glyph {
    pub const ALL: &'static [Glyph] = &[
        Self::Privacy,
        Self::Megaphone,
        Self::Earth,
        Self::Decentralization,
        Self::Vote,
        Self::Sovereignty,
        Self::Hardware,
        Self::Download,
        Self::Terminal,
        Self::Dappnode,
        Self::Dapptap,
        Self::Discord,
    ];

    /// File stem of the glyph's SVG.
    pub fn name(self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::Megaphone => "megaphone",
            Self::Earth => "earth",
            Self::Decentralization => "decentralization",
            Self::Vote => "vote",
            Self::Sovereignty => "sovereignty",
            Self::Hardware => "hardware",
            Self::Download => "download",
            Self::Terminal => "terminal",
            Self::Dappnode => "dappnode",
            Self::Dapptap => "dapptap",
            Self::Discord => "discord",
        }
    }
}

/// A raster image the page places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    EthereumInside,
    Hackathon,
    Impact,
    Community,
    Leslie,
}

impl ImageAsset {
    pub const ALL: &'static [ImageAsset] = &[
        Self::EthereumInside,
        Self::Hackathon,
        Self::Impact,
        Self::Community,
        Self::Leslie,
    ];

    /// Path of the image relative to the images directory.
    pub fn default_path(self) -> &'static str {
        match self {
            Self::EthereumInside => "run-a-node/ethereum-inside.png",
            Self::Hackathon => "hackathon_transparent.png",
            Self::Impact => "impact_transparent.png",
            Self::Community => "enterprise-eth.png",
            Self::Leslie => "upgrades/upgrade_rhino.png",
        }
    }

    /// Display width in pixels.
    pub fn width(self) -> u32 {
        match self {
            Self::Impact => 300,
            _ => 624,
        }
    }
}

/// A renderable image: where it lives and how it degrades while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub src: String,
    pub width: u32,
    /// Background colour shown until (or instead of) the image
    pub placeholder: String,
}

/// Resolves image and glyph references to URLs under the built site's assets.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    base_url: String,
    overrides: HashMap<ImageAsset, String>,
    placeholder: String,
}

impl ImageCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            overrides: HashMap::new(),
            placeholder: "#f2f2f2".to_string(),
        }
    }

    /// Site root every asset URL is prefixed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Serve an image from a different path under the images directory.
    pub fn with_override(mut self, asset: ImageAsset, path: impl Into<String>) -> Self {
        self.overrides.insert(asset, path.into());
        self
    }

    /// Path of an image relative to the images directory.
    pub fn relative_path(&self, asset: ImageAsset) -> &str {
        self.overrides
            .get(&asset)
            .map(|s| s.as_str())
            .unwrap_or_else(|| asset.default_path())
    }

    pub fn get(&self, asset: ImageAsset) -> ImageHandle {
        ImageHandle {
            src: format!("{}assets/images/{}", self.base_url, self.relative_path(asset)),
            width: asset.width(),
            placeholder: self.placeholder.clone(),
        }
    }

    pub fn glyph_src(&self, glyph: Glyph) -> String {
        format!("{}assets/glyphs/{}.svg", self.base_url, glyph.name())
    }
}

/// A card in a grid of expandable cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCard {
    pub icon: Glyph,
    pub title: ContentKey,
    pub preview: ContentKey,
    /// Paragraphs disclosed on expansion, in order
    pub body: &'static [ContentKey],
    pub alt: ContentKey,
}

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A path on this site, without locale prefix (`/staking/`)
    Internal(&'static str),
    /// An absolute URL elsewhere
    External(&'static str),
}

impl LinkTarget {
    /// Classify a link by its form: absolute URLs are external.
    pub fn to(href: &'static str) -> Self {
        if href.starts_with("http://") || href.starts_with("https://") {
            Self::External(href)
        } else {
            Self::Internal(href)
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// The href to render for a page in `locale`.
    pub fn href(&self, base_url: &str, locale: &Locale) -> String {
        match self {
            Self::External(url) => url.to_string(),
            Self::Internal(path) => {
                format!("{}{}/{}", base_url, locale, path.trim_start_matches('/'))
            }
        }
    }
}

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    /// Bordered secondary call to action
    Secondary,
    /// Inline text-styled control
    Text,
    Dappnode,
    Avado,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Solid => "button-solid",
            Self::Outline => "button-outline",
            Self::Secondary => "button-secondary",
            Self::Text => "button-text",
            Self::Dappnode => "button-dappnode",
            Self::Avado => "button-avado",
        }
    }
}

/// What a button does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scroll to an anchor on the current page
    ScrollTo(AnchorId),
    /// Navigate via the link service
    Navigate(LinkTarget),
}

/// A declared button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: ContentKey,
    pub action: Action,
    pub variant: ButtonVariant,
    pub glyph: Option<Glyph>,
    /// Render the label as inline code
    pub code: bool,
}

impl ButtonSpec {
    pub fn scroll(label: ContentKey, anchor: &str) -> Self {
        Self {
            label,
            action: Action::ScrollTo(AnchorId::new(anchor)),
            variant: ButtonVariant::Solid,
            glyph: None,
            code: false,
        }
    }

    pub fn link(label: ContentKey, href: &'static str) -> Self {
        Self {
            label,
            action: Action::Navigate(LinkTarget::to(href)),
            variant: ButtonVariant::Solid,
            glyph: None,
            code: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }
}

/// A wide expandable info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSpec {
    pub title: ContentKey,
    pub preview: ContentKey,
    pub body: Vec<Block>,
    pub image: Option<ImageAsset>,
    pub background: Option<Swatch>,
    pub force_open: bool,
}

/// The hero banner opening a page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSpec {
    pub title: ContentKey,
    pub header: ContentKey,
    pub subtitle: ContentKey,
    pub image: ImageAsset,
    pub alt: ContentKey,
    pub buttons: Vec<ButtonSpec>,
    /// Place the image before the text
    pub reverse: bool,
}

/// A declared piece of page content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(HeroSpec),
    Heading {
        level: u8,
        text: ContentKey,
        emoji: Option<&'static str>,
        anchor: Option<AnchorId>,
    },
    Text {
        text: ContentKey,
        style: TextStyle,
        emoji: Option<&'static str>,
    },
    /// A line of the form `lead - link - note`, where lead and note are optional
    Reference {
        lead: Option<ContentKey>,
        link: ContentKey,
        target: LinkTarget,
        note: Option<ContentKey>,
    },
    List(Vec<Vec<Block>>),
    Image {
        asset: ImageAsset,
        alt: Option<ContentKey>,
    },
    Glyph {
        glyph: Glyph,
        alt: ContentKey,
    },
    Link {
        text: ContentKey,
        target: LinkTarget,
    },
    Buttons(Vec<ButtonSpec>),
    Info(InfoSpec),
    Cards(&'static [ContentCard]),
    Row(LayoutParams, Vec<Block>),
    Column(LayoutParams, Vec<Block>),
    Card(LayoutParams, Vec<Block>),
    Divider,
}

/// A top-level section of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub anchor: Option<AnchorId>,
    pub params: LayoutParams,
    pub blocks: Vec<Block>,
}

/// A whole page declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    /// Path segment the page is published under
    pub slug: &'static str,
    pub title: ContentKey,
    pub description: ContentKey,
    /// Sections in display order
    pub sections: Vec<SectionSpec>,
}

impl PageSpec {
    /// Every content key the page references, in declaration order, without duplicates.
    pub fn keys(&self) -> Vec<ContentKey> {
        let mut keys = vec![self.title, self.description];
        for section in &self.sections {
            for block in &section.blocks {
                block.collect_keys(&mut keys);
            }
        }

        let mut seen = std::collections::HashSet::new();
        keys.retain(|k| seen.insert(*k));
        keys
    }
}

impl Block {
    fn collect_keys(&self, keys: &mut Vec<ContentKey>) {
        match self {
            Block::Hero(hero) => {
                keys.extend([hero.title, hero.header, hero.subtitle, hero.alt]);
                keys.extend(hero.buttons.iter().map(|b| b.label));
            }
            Block::Heading { text, .. } | Block::Text { text, .. } | Block::Link { text, .. } => {
                keys.push(*text)
            }
            Block::Reference {
                lead, link, note, ..
            } => {
                keys.extend(lead.iter().chain(Some(link)).chain(note.iter()).copied());
            }
            Block::List(items) => {
                for block in items.iter().flatten() {
                    block.collect_keys(keys);
                }
            }
            Block::Image { alt, .. } => keys.extend(alt.iter().copied()),
            Block::Glyph { alt, .. } => keys.push(*alt),
            Block::Buttons(buttons) => keys.extend(buttons.iter().map(|b| b.label)),
            Block::Info(info) => {
                keys.extend([info.title, info.preview]);
                for block in &info.body {
                    block.collect_keys(keys);
                }
            }
            Block::Cards(cards) => {
                for card in cards.iter() {
                    keys.extend([card.title, card.preview]);
                    keys.extend(card.body.iter().copied());
                    keys.push(card.alt);
                }
            }
            Block::Row(_, blocks) | Block::Column(_, blocks) | Block::Card(_, blocks) => {
                for block in blocks {
                    block.collect_keys(keys);
                }
            }
            Block::Divider => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Locale {
        Locale::parse("en").unwrap()
    }

    #[test]
    fn classifies_links() {
        assert!(LinkTarget::to("https://ava.do/").is_external());
        assert!(!LinkTarget::to("/staking/").is_external());
    }

    #[test]
    fn prefixes_internal_links_with_locale() {
        assert_eq!(LinkTarget::to("/staking/").href("/", &en()), "/en/staking/");
        assert_eq!(
            LinkTarget::to("/developers/docs/nodes-and-clients/run-a-node/#spinning-up-node")
                .href("/site/", &en()),
            "/site/en/developers/docs/nodes-and-clients/run-a-node/#spinning-up-node"
        );
        assert_eq!(
            LinkTarget::to("https://discord.gg/c28an8dA5k").href("/", &en()),
            "https://discord.gg/c28an8dA5k"
        );
    }

    #[test]
    fn resolves_images_and_glyphs() {
        let images = ImageCatalog::new("/").with_override(ImageAsset::Leslie, "leslie.png");

        let hero = images.get(ImageAsset::EthereumInside);
        assert_eq!(hero.src, "/assets/images/run-a-node/ethereum-inside.png");
        assert_eq!(hero.width, 624);
        assert_eq!(images.get(ImageAsset::Impact).width, 300);
        assert_eq!(images.get(ImageAsset::Leslie).src, "/assets/images/leslie.png");
        assert_eq!(images.glyph_src(Glyph::Privacy), "/assets/glyphs/privacy.svg");
    }

    #[test]
    fn collects_page_keys_without_duplicates() {
        const CARDS: &[ContentCard] = &[ContentCard {
            icon: Glyph::Privacy,
            title: ContentKey::PrivacyTitle,
            preview: ContentKey::PrivacyPreview,
            body: &[ContentKey::Privacy1, ContentKey::Privacy2],
            alt: ContentKey::GlyphAltPrivacy,
        }];

        let page = PageSpec {
            slug: "test",
            title: ContentKey::Title,
            description: ContentKey::MetaDescription,
            sections: vec![SectionSpec {
                anchor: None,
                params: LayoutParams::new(),
                blocks: vec![
                    Block::Heading {
                        level: 2,
                        text: ContentKey::Title,
                        emoji: None,
                        anchor: None,
                    },
                    Block::Cards(CARDS),
                ],
            }],
        };

        assert_eq!(
            page.keys(),
            vec![
                ContentKey::Title,
                ContentKey::MetaDescription,
                ContentKey::PrivacyTitle,
                ContentKey::PrivacyPreview,
                ContentKey::Privacy1,
                ContentKey::Privacy2,
                ContentKey::GlyphAltPrivacy,
            ]
        );
    }
}
