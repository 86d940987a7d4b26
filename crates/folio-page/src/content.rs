//! Declaration of the "Run a node" page.

use folio_i18n::ContentKey as K;

use crate::anchor::AnchorId;
use crate::layout::{Align, Justify, LayoutParams, TextStyle, Width};
use crate::model::{
    Block, ButtonSpec, ButtonVariant, ContentCard, Glyph, HeroSpec, ImageAsset, InfoSpec,
    LinkTarget, PageSpec, SectionSpec,
};
use crate::theme::Swatch;

pub const WHAT_IS_A_NODE: &str = "what-is-a-node";
pub const GETTING_STARTED: &str = "getting-started";
pub const BUILD_YOUR_OWN: &str = "build-your-own";
pub const PLAN_ON_STAKING: &str = "plan-on-staking";
pub const RASP_PI: &str = "rasp-pi";

/// Anchors other pages may deep-link to.
pub const STABLE_ANCHORS: &[&str] = &[
    WHAT_IS_A_NODE,
    GETTING_STARTED,
    BUILD_YOUR_OWN,
    PLAN_ON_STAKING,
    RASP_PI,
];

/// Reasons to run a node, shown as expandable cards.
pub const WHY_RUN_A_NODE: &[ContentCard] = &[
    ContentCard {
        icon: Glyph::Privacy,
        title: K::PrivacyTitle,
        preview: K::PrivacyPreview,
        body: &[K::Privacy1, K::Privacy2, K::Privacy3],
        alt: K::GlyphAltPrivacy,
    },
    ContentCard {
        icon: Glyph::Megaphone,
        title: K::CensorshipTitle,
        preview: K::CensorshipPreview,
        body: &[K::Censorship1, K::Censorship2],
        alt: K::GlyphAltCensorship,
    },
    ContentCard {
        icon: Glyph::Earth,
        title: K::ParticipateTitle,
        preview: K::ParticipatePreview,
        body: &[K::Participate1, K::Participate2],
        alt: K::GlyphAltEarth,
    },
    ContentCard {
        icon: Glyph::Decentralization,
        title: K::DecentralizedTitle,
        preview: K::DecentralizedPreview,
        body: &[K::Decentralized1, K::Decentralized2],
        alt: K::GlyphAltDecentralization,
    },
    ContentCard {
        icon: Glyph::Vote,
        title: K::VoiceTitle,
        preview: K::VoicePreview,
        body: &[K::Voice1, K::Voice2],
        alt: K::GlyphAltVote,
    },
    ContentCard {
        icon: Glyph::Sovereignty,
        title: K::SovereigntyTitle,
        preview: K::SovereigntyPreview,
        body: &[K::Sovereignty1, K::Sovereignty2],
        alt: K::GlyphAltSovereignty,
    },
];

fn heading(level: u8, text: K) -> Block {
    Block::Heading {
        level,
        text,
        emoji: None,
        anchor: None,
    }
}

fn emoji_heading(level: u8, text: K, emoji: &'static str, anchor: Option<&str>) -> Block {
    Block::Heading {
        level,
        text,
        emoji: Some(emoji),
        anchor: anchor.map(AnchorId::new),
    }
}

fn text(text: K) -> Block {
    styled(text, TextStyle::Body)
}

fn styled(text: K, style: TextStyle) -> Block {
    Block::Text {
        text,
        style,
        emoji: None,
    }
}

fn section(anchor: Option<&str>, params: LayoutParams, blocks: Vec<Block>) -> SectionSpec {
    SectionSpec {
        anchor: anchor.map(AnchorId::new),
        params,
        blocks,
    }
}

fn content() -> LayoutParams {
    LayoutParams::new().padding(16, 8)
}

fn split() -> LayoutParams {
    LayoutParams::new().gap(8).align(Align::Center).class("split")
}

fn half() -> LayoutParams {
    LayoutParams::new().width(Width::Fill)
}

fn buttons() -> LayoutParams {
    LayoutParams::new().gap(4).class("buttons")
}

/// The complete "Run a node" page, sections in display order.
pub fn run_a_node() -> PageSpec {
    PageSpec {
        slug: "run-a-node",
        title: K::Title,
        description: K::MetaDescription,
        sections: vec![
            hero(),
            what_is_a_node(),
            who_should_run(),
            why_run_a_node(),
            getting_started(),
            choose_your_adventure(),
            build_your_own(),
            community(),
            further_reading(),
            staking(),
            staking_plans_and_rasp_pi(),
        ],
    }
}

fn hero() -> SectionSpec {
    section(
        None,
        LayoutParams::new().background(Swatch::HeroGradient),
        vec![Block::Hero(HeroSpec {
            title: K::Title,
            header: K::HeroHeader,
            subtitle: K::HeroSubtitle,
            image: ImageAsset::EthereumInside,
            alt: K::HeroAlt,
            buttons: vec![
                ButtonSpec::scroll(K::HeroCta1, WHAT_IS_A_NODE),
                ButtonSpec::scroll(K::HeroCta2, GETTING_STARTED).variant(ButtonVariant::Outline),
            ],
            reverse: true,
        })],
    )
}

fn what_is_a_node() -> SectionSpec {
    section(
        Some(WHAT_IS_A_NODE),
        content(),
        vec![Block::Row(
            split(),
            vec![
                Block::Column(
                    half(),
                    vec![
                        heading(2, K::WhatTitle),
                        heading(3, K::What1Subtitle),
                        text(K::What1Text),
                        heading(3, K::What2Subtitle),
                        text(K::What2Text),
                        heading(3, K::What3Subtitle),
                        text(K::What3Text),
                    ],
                ),
                Block::Column(
                    half(),
                    vec![Block::Image {
                        asset: ImageAsset::Hackathon,
                        alt: None,
                    }],
                ),
            ],
        )],
    )
}

fn who_should_run() -> SectionSpec {
    section(
        None,
        content(),
        vec![Block::Info(InfoSpec {
            title: K::WhoTitle,
            preview: K::WhoPreview,
            body: vec![
                text(K::WhoCopy1),
                text(K::WhoCopy2),
                text(K::WhoCopy3),
                styled(K::WhoCopyBold, TextStyle::Strong),
            ],
            image: Some(ImageAsset::Impact),
            background: Some(Swatch::InfoGradient),
            force_open: true,
        })],
    )
}

fn why_run_a_node() -> SectionSpec {
    section(
        None,
        content(),
        vec![heading(2, K::WhyTitle), Block::Cards(WHY_RUN_A_NODE)],
    )
}

fn highlight(background: Swatch, reverse: bool, copy: Vec<Block>, glyph: Glyph, alt: K) -> Block {
    let mut params = LayoutParams::new()
        .gap(8)
        .padding(8, 8)
        .align(Align::Center)
        .justify(Justify::SpaceBetween)
        .background(background)
        .class("highlight");
    if reverse {
        params = params.reverse();
    }

    Block::Card(
        params,
        vec![
            Block::Column(half(), copy),
            Block::Glyph { glyph, alt },
        ],
    )
}

fn getting_started() -> SectionSpec {
    section(
        Some(GETTING_STARTED),
        content(),
        vec![
            heading(2, K::GettingStartedTitle),
            highlight(
                Swatch::Turquoise,
                false,
                vec![
                    text(K::Software1),
                    Block::Text {
                        text: K::Software1Alert,
                        style: TextStyle::Code,
                        emoji: Some("warning"),
                    },
                    Block::Link {
                        text: K::Software1Link,
                        target: LinkTarget::to("/developers/docs/nodes-and-clients/run-a-node/"),
                    },
                ],
                Glyph::Terminal,
                K::GlyphAltTerminal,
            ),
            highlight(
                Swatch::Orange,
                true,
                vec![text(K::Software2)],
                Glyph::Dappnode,
                K::GlyphAltDappnode,
            ),
            highlight(
                Swatch::Purple,
                false,
                vec![text(K::Software3a), text(K::Software3b)],
                Glyph::Dapptap,
                K::GlyphAltPhone,
            ),
        ],
    )
}

fn choose_your_adventure() -> SectionSpec {
    let panel = || {
        LayoutParams::new()
            .gap(4)
            .padding(6, 6)
            .width(Width::Fill)
            .justify(Justify::SpaceBetween)
            .background(Swatch::GrayBackground)
            .class("panel")
    };

    section(
        None,
        content(),
        vec![
            heading(2, K::AdventureTitle),
            text(K::Adventure1),
            text(K::Adventure2),
            Block::Row(
                LayoutParams::new().gap(8),
                vec![
                    Block::Card(
                        panel(),
                        vec![
                            emoji_heading(3, K::BuyTitle, "shopping_cart", None),
                            text(K::BuyDescription),
                            Block::List(vec![
                                vec![text(K::BuyNote1)],
                                vec![text(K::BuyNote2)],
                                vec![styled(K::BuyNote3, TextStyle::SmallEmphasis)],
                            ]),
                            Block::Buttons(vec![
                                ButtonSpec::link(K::ShopDappnode, "https://shop.dappnode.io/")
                                    .variant(ButtonVariant::Dappnode),
                                ButtonSpec::link(K::ShopAvado, "https://ava.do/")
                                    .variant(ButtonVariant::Avado),
                            ]),
                        ],
                    ),
                    Block::Card(
                        panel(),
                        vec![
                            emoji_heading(3, K::BuildTitle, "building_construction", None),
                            text(K::AdventureBuild1),
                            Block::List(vec![
                                vec![text(K::AdventureBuildBullet1)],
                                vec![text(K::AdventureBuildBullet2)],
                                vec![text(K::AdventureBuildBullet3)],
                            ]),
                            Block::Buttons(vec![ButtonSpec::scroll(
                                K::AdventureBuildStart,
                                BUILD_YOUR_OWN,
                            )
                            .variant(ButtonVariant::Secondary)]),
                        ],
                    ),
                ],
            ),
        ],
    )
}

fn build_your_own() -> SectionSpec {
    let group = || {
        LayoutParams::new()
            .gap(8)
            .padding(0, 8)
            .align(Align::Start)
            .class("build-group")
    };
    let build_box = || {
        LayoutParams::new()
            .gap(2)
            .padding(6, 6)
            .width(Width::Fill)
            .background(Swatch::PreBackground)
            .class("build-box")
    };

    section(
        Some(BUILD_YOUR_OWN),
        content(),
        vec![
            heading(2, K::BuildTitle),
            Block::Row(
                group(),
                vec![
                    Block::Glyph {
                        glyph: Glyph::Hardware,
                        alt: K::GlyphAltHardware,
                    },
                    Block::Column(
                        half(),
                        vec![
                            heading(3, K::HardwareTitle),
                            Block::Row(
                                LayoutParams::new().gap(8),
                                vec![
                                    Block::Card(
                                        build_box(),
                                        vec![
                                            heading(4, K::MinimumSpecs),
                                            Block::List(vec![
                                                vec![
                                                    text(K::MinRam),
                                                    Block::Buttons(vec![ButtonSpec::scroll(
                                                        K::RamNote1,
                                                        PLAN_ON_STAKING,
                                                    )
                                                    .variant(ButtonVariant::Text)]),
                                                    Block::Buttons(vec![ButtonSpec::scroll(
                                                        K::RamNote2,
                                                        RASP_PI,
                                                    )
                                                    .variant(ButtonVariant::Text)]),
                                                ],
                                                vec![
                                                    text(K::MinSsd),
                                                    styled(K::SsdNote, TextStyle::SmallEmphasis),
                                                ],
                                            ]),
                                        ],
                                    ),
                                    Block::Card(
                                        build_box(),
                                        vec![
                                            heading(4, K::Recommended),
                                            Block::List(vec![
                                                vec![
                                                    text(K::Nuc),
                                                    styled(K::NucSmall, TextStyle::SmallEmphasis),
                                                ],
                                                vec![
                                                    text(K::Connection),
                                                    styled(
                                                        K::ConnectionSmall,
                                                        TextStyle::SmallEmphasis,
                                                    ),
                                                ],
                                                vec![
                                                    text(K::Peripherals),
                                                    styled(
                                                        K::PeripheralsSmall,
                                                        TextStyle::SmallEmphasis,
                                                    ),
                                                ],
                                            ]),
                                        ],
                                    ),
                                ],
                            ),
                        ],
                    ),
                ],
            ),
            Block::Row(
                group(),
                vec![
                    Block::Glyph {
                        glyph: Glyph::Download,
                        alt: K::GlyphAltSoftware,
                    },
                    Block::Column(
                        half(),
                        vec![
                            heading(3, K::SoftwareTitle),
                            Block::Row(
                                LayoutParams::new().gap(8),
                                vec![
                                    Block::Card(
                                        build_box().justify(Justify::SpaceBetween),
                                        vec![
                                            heading(4, K::Option1Title),
                                            text(K::Option1Description),
                                            Block::Buttons(vec![ButtonSpec::link(
                                                K::Option1Button,
                                                "https://docs.dappnode.io",
                                            )
                                            .variant(ButtonVariant::Dappnode)]),
                                        ],
                                    ),
                                    Block::Card(
                                        build_box().justify(Justify::SpaceBetween),
                                        vec![
                                            heading(4, K::Option2Title),
                                            text(K::Option2Description1),
                                            text(K::Option2Description2),
                                            Block::Buttons(vec![ButtonSpec::link(
                                                K::Option2Button,
                                                "/developers/docs/nodes-and-clients/run-a-node/#spinning-up-node",
                                            )
                                            .variant(ButtonVariant::Outline)
                                            .code()]),
                                        ],
                                    ),
                                ],
                            ),
                        ],
                    ),
                ],
            ),
        ],
    )
}

fn community() -> SectionSpec {
    section(
        None,
        content(),
        vec![Block::Row(
            split(),
            vec![
                Block::Column(
                    half(),
                    vec![
                        heading(2, K::CommunityTitle),
                        text(K::CommunityDescription1),
                        text(K::CommunityDescription2),
                        Block::Row(
                            buttons(),
                            vec![Block::Buttons(vec![
                                ButtonSpec::link(K::CommunityLink1, "https://discord.gg/c28an8dA5k")
                                    .glyph(Glyph::Discord),
                                ButtonSpec::link(K::CommunityLink2, "/community/online/")
                                    .variant(ButtonVariant::Outline),
                            ])],
                        ),
                    ],
                ),
                Block::Column(
                    half(),
                    vec![Block::Image {
                        asset: ImageAsset::Community,
                        alt: None,
                    }],
                ),
            ],
        )],
    )
}

fn further_reading() -> SectionSpec {
    section(
        None,
        content(),
        vec![
            heading(2, K::FurtherReadingTitle),
            Block::List(vec![
                vec![Block::Reference {
                    lead: None,
                    link: K::FurtherReading1Link,
                    target: LinkTarget::to("https://github.com/ethereumbook/ethereumbook/blob/develop/03clients.asciidoc#should-i-run-a-full-node"),
                    note: Some(K::FurtherReading1Author),
                }],
                vec![Block::Reference {
                    lead: None,
                    link: K::FurtherReading2Link,
                    target: LinkTarget::to(
                        "https://ethereum-on-arm-documentation.readthedocs.io/en/latest/",
                    ),
                    note: None,
                }],
                vec![Block::Reference {
                    lead: None,
                    link: K::FurtherReading3Link,
                    target: LinkTarget::to("https://vitalik.ca/general/2021/05/23/scaling.html"),
                    note: Some(K::FurtherReading3Author),
                }],
            ]),
        ],
    )
}

fn staking() -> SectionSpec {
    section(
        None,
        LayoutParams::new(),
        vec![
            Block::Divider,
            Block::Row(
                LayoutParams::new()
                    .gap(8)
                    .padding(16, 12)
                    .align(Align::Center)
                    .background(Swatch::StakingGradient)
                    .class("staking-callout"),
                vec![
                    Block::Column(
                        half(),
                        vec![Block::Image {
                            asset: ImageAsset::Leslie,
                            alt: None,
                        }],
                    ),
                    Block::Column(
                        half(),
                        vec![
                            heading(2, K::StakingTitle),
                            text(K::StakingDescription),
                            Block::Buttons(vec![ButtonSpec::link(K::StakingLink, "/staking/")]),
                        ],
                    ),
                ],
            ),
        ],
    )
}

fn rasp_pi_note(link: K, href: &'static str, note: K) -> Vec<Block> {
    vec![Block::Reference {
        lead: None,
        link,
        target: LinkTarget::to(href),
        note: Some(note),
    }]
}

fn staking_plans_and_rasp_pi() -> SectionSpec {
    section(
        None,
        content(),
        vec![
            emoji_heading(3, K::StakingPlansTitle, "cut_of_meat", Some(PLAN_ON_STAKING)),
            text(K::StakingPlansDescription),
            Block::Reference {
                lead: Some(K::EthstakerDescription),
                link: K::EthstakerLabel,
                target: LinkTarget::to("https://youtu.be/C2wwu1IlhDc"),
                note: None,
            },
            emoji_heading(3, K::RaspPiTitle, "pie", Some(RASP_PI)),
            text(K::RaspPiDescription),
            Block::List(vec![
                rasp_pi_note(
                    K::RaspPiNote1Link,
                    "https://docs.dappnode.io/user/quick-start/Core/installation#arm",
                    K::RaspPiNote1Description,
                ),
                rasp_pi_note(
                    K::RaspPiNote2Link,
                    "https://ethereum-on-arm-documentation.readthedocs.io/en/latest",
                    K::RaspPiNote2Description,
                ),
                rasp_pi_note(
                    K::RaspPiNote3Link,
                    "/developers/tutorials/run-node-raspberry-pi",
                    K::RaspPiNote3Description,
                ),
            ]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_six_reasons() {
        assert_eq!(WHY_RUN_A_NODE.len(), 6);
        assert!(WHY_RUN_A_NODE.iter().all(|card| !card.body.is_empty()));
        assert_eq!(WHY_RUN_A_NODE[0].body, &[K::Privacy1, K::Privacy2, K::Privacy3]);
    }

    #[test]
    fn stable_anchors_are_declared() {
        let page = run_a_node();
        let section_anchors: Vec<&str> = page
            .sections
            .iter()
            .filter_map(|s| s.anchor.as_ref().map(|a| a.as_str()))
            .collect();

        assert_eq!(
            section_anchors,
            vec![WHAT_IS_A_NODE, GETTING_STARTED, BUILD_YOUR_OWN]
        );
    }

    #[test]
    fn references_every_page_key() {
        let keys = run_a_node().keys();

        for key in K::ALL {
            if matches!(key, K::More | K::Less) {
                continue;
            }
            assert!(keys.contains(key), "{} is never placed on the page", key);
        }
    }
}
