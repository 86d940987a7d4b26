//! The enumerated set of content keys the site's pages reference.
//!
//! Every display string is looked up through a [`ContentKey`], so a page
//! declaration cannot name a key that does not exist here, and catalogs can be
//! checked for coverage against [`ContentKey::ALL`].

macro_rules! content_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// A symbolic content key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ContentKey {
            $($variant,)+
        }

        impl ContentKey {
            /// Every declared key, in declaration order.
            pub const ALL: &'static [ContentKey] = &[$(ContentKey::$variant,)+];

            /// The catalog key string.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ContentKey::$variant => $key,)+
                }
            }

            /// Look up a declared key by its catalog string.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(ContentKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

content_keys! {
    // Shared
    More => "more",
    Less => "less",

    // Metadata and hero
    Title => "page-run-a-node-title",
    MetaDescription => "page-run-a-node-meta-description",
    HeroHeader => "page-run-a-node-hero-header",
    HeroSubtitle => "page-run-a-node-hero-subtitle",
    HeroAlt => "page-run-a-node-hero-alt",
    HeroCta1 => "page-run-a-node-hero-cta-1",
    HeroCta2 => "page-run-a-node-hero-cta-2",

    // What is a node
    WhatTitle => "page-run-a-node-what-title",
    What1Subtitle => "page-run-a-node-what-1-subtitle",
    What1Text => "page-run-a-node-what-1-text",
    What2Subtitle => "page-run-a-node-what-2-subtitle",
    What2Text => "page-run-a-node-what-2-text",
    What3Subtitle => "page-run-a-node-what-3-subtitle",
    What3Text => "page-run-a-node-what-3-text",

    // Who should run a node
    WhoTitle => "page-run-a-node-who-title",
    WhoPreview => "page-run-a-node-who-preview",
    WhoCopy1 => "page-run-a-node-who-copy-1",
    WhoCopy2 => "page-run-a-node-who-copy-2",
    WhoCopy3 => "page-run-a-node-who-copy-3",
    WhoCopyBold => "page-run-a-node-who-copy-bold",

    // Why run a node
    WhyTitle => "page-run-a-node-why-title",
    PrivacyTitle => "page-run-a-node-privacy-title",
    PrivacyPreview => "page-run-a-node-privacy-preview",
    Privacy1 => "page-run-a-node-privacy-1",
    Privacy2 => "page-run-a-node-privacy-2",
    Privacy3 => "page-run-a-node-privacy-3",
    GlyphAltPrivacy => "page-run-a-node-glyph-alt-privacy",
    CensorshipTitle => "page-run-a-node-censorship-resistance-title",
    CensorshipPreview => "page-run-a-node-censorship-resistance-preview",
    Censorship1 => "page-run-a-node-censorship-resistance-1",
    Censorship2 => "page-run-a-node-censorship-resistance-2",
    GlyphAltCensorship => "page-run-a-node-glyph-alt-censorship-resistance",
    ParticipateTitle => "page-run-a-node-participate-title",
    ParticipatePreview => "page-run-a-node-participate-preview",
    Participate1 => "page-run-a-node-participate-1",
    Participate2 => "page-run-a-node-participate-2",
    GlyphAltEarth => "page-run-a-node-glyph-alt-earth",
    DecentralizedTitle => "page-run-a-node-decentralized-title",
    DecentralizedPreview => "page-run-a-node-decentralized-preview",
    Decentralized1 => "page-run-a-node-decentralized-1",
    Decentralized2 => "page-run-a-node-decentralized-2",
    GlyphAltDecentralization => "page-run-a-node-glyph-alt-decentralization",
    VoiceTitle => "page-run-a-node-voice-your-choice-title",
    VoicePreview => "page-run-a-node-voice-your-choice-preview",
    Voice1 => "page-run-a-node-voice-your-choice-1",
    Voice2 => "page-run-a-node-voice-your-choice-2",
    GlyphAltVote => "page-run-a-node-glyph-alt-vote",
    SovereigntyTitle => "page-run-a-node-sovereignty-title",
    SovereigntyPreview => "page-run-a-node-sovereignty-preview",
    Sovereignty1 => "page-run-a-node-sovereignty-1",
    Sovereignty2 => "page-run-a-node-sovereignty-2",
    GlyphAltSovereignty => "page-run-a-node-glyph-alt-sovereignty",

    // Getting started
    GettingStartedTitle => "page-run-a-node-getting-started-title",
    Software1 => "page-run-a-node-getting-started-software-section-1",
    Software1Alert => "page-run-a-node-getting-started-software-section-1-alert",
    Software1Link => "page-run-a-node-getting-started-software-section-1-link",
    GlyphAltTerminal => "page-run-a-node-glyph-alt-terminal",
    Software2 => "page-run-a-node-getting-started-software-section-2",
    GlyphAltDappnode => "page-run-a-node-glyph-alt-dappnode",
    Software3a => "page-run-a-node-getting-started-software-section-3a",
    Software3b => "page-run-a-node-getting-started-software-section-3b",
    GlyphAltPhone => "page-run-a-node-glyph-alt-phone",

    // Choose your adventure
    AdventureTitle => "page-run-a-node-choose-your-adventure-title",
    Adventure1 => "page-run-a-node-choose-your-adventure-1",
    Adventure2 => "page-run-a-node-choose-your-adventure-2",
    BuyTitle => "page-run-a-node-buy-fully-loaded-title",
    BuyDescription => "page-run-a-node-buy-fully-loaded-description",
    BuyNote1 => "page-run-a-node-buy-fully-loaded-note-1",
    BuyNote2 => "page-run-a-node-buy-fully-loaded-note-2",
    BuyNote3 => "page-run-a-node-buy-fully-loaded-note-3",
    ShopDappnode => "page-run-a-node-shop-dappnode",
    ShopAvado => "page-run-a-node-shop-avado",
    AdventureBuild1 => "page-run-a-node-choose-your-adventure-build-1",
    AdventureBuildBullet1 => "page-run-a-node-choose-your-adventure-build-bullet-1",
    AdventureBuildBullet2 => "page-run-a-node-choose-your-adventure-build-bullet-2",
    AdventureBuildBullet3 => "page-run-a-node-choose-your-adventure-build-bullet-3",
    AdventureBuildStart => "page-run-a-node-choose-your-adventure-build-start",

    // Build your own
    BuildTitle => "page-run-a-node-build-your-own-title",
    GlyphAltHardware => "page-run-a-node-glyph-alt-hardware",
    HardwareTitle => "page-run-a-node-build-your-own-hardware-title",
    MinimumSpecs => "page-run-a-node-build-your-own-minimum-specs",
    MinRam => "page-run-a-node-build-your-own-min-ram",
    RamNote1 => "page-run-a-node-build-your-own-ram-note-1",
    RamNote2 => "page-run-a-node-build-your-own-ram-note-2",
    MinSsd => "page-run-a-node-build-your-own-min-ssd",
    SsdNote => "page-run-a-node-build-your-own-ssd-note",
    Recommended => "page-run-a-node-build-your-own-recommended",
    Nuc => "page-run-a-node-build-your-own-nuc",
    NucSmall => "page-run-a-node-build-your-own-nuc-small",
    Connection => "page-run-a-node-build-your-own-connection",
    ConnectionSmall => "page-run-a-node-build-your-own-connection-small",
    Peripherals => "page-run-a-node-build-your-own-peripherals",
    PeripheralsSmall => "page-run-a-node-build-your-own-peripherals-small",
    GlyphAltSoftware => "page-run-a-node-glyph-alt-software",
    SoftwareTitle => "page-run-a-node-build-your-own-software",
    Option1Title => "page-run-a-node-build-your-own-software-option-1-title",
    Option1Description => "page-run-a-node-build-your-own-software-option-1-description",
    Option1Button => "page-run-a-node-build-your-own-software-option-1-button",
    Option2Title => "page-run-a-node-build-your-own-software-option-2-title",
    Option2Description1 => "page-run-a-node-build-your-own-software-option-2-description-1",
    Option2Description2 => "page-run-a-node-build-your-own-software-option-2-description-2",
    Option2Button => "page-run-a-node-build-your-own-software-option-2-button",

    // Community
    CommunityTitle => "page-run-a-node-community-title",
    CommunityDescription1 => "page-run-a-node-community-description-1",
    CommunityDescription2 => "page-run-a-node-community-description-2",
    CommunityLink1 => "page-run-a-node-community-link-1",
    CommunityLink2 => "page-run-a-node-community-link-2",

    // Further reading
    FurtherReadingTitle => "page-run-a-node-further-reading-title",
    FurtherReading1Link => "page-run-a-node-further-reading-1-link",
    FurtherReading1Author => "page-run-a-node-further-reading-1-author",
    FurtherReading2Link => "page-run-a-node-further-reading-2-link",
    FurtherReading3Link => "page-run-a-node-further-reading-3-link",
    FurtherReading3Author => "page-run-a-node-further-reading-3-author",

    // Staking
    StakingTitle => "page-run-a-node-staking-title",
    StakingDescription => "page-run-a-node-staking-description",
    StakingLink => "page-run-a-node-staking-link",
    StakingPlansTitle => "page-run-a-node-staking-plans-title",
    StakingPlansDescription => "page-run-a-node-staking-plans-description",
    EthstakerDescription => "page-run-a-node-staking-plans-ethstaker-link-description",
    EthstakerLabel => "page-run-a-node-staking-plans-ethstaker-link-label",

    // Raspberry Pi
    RaspPiTitle => "page-run-a-node-rasp-pi-title",
    RaspPiDescription => "page-run-a-node-rasp-pi-description",
    RaspPiNote1Link => "page-run-a-node-rasp-pi-note-1-link",
    RaspPiNote1Description => "page-run-a-node-rasp-pi-note-1-description",
    RaspPiNote2Link => "page-run-a-node-rasp-pi-note-2-link",
    RaspPiNote2Description => "page-run-a-node-rasp-pi-note-2-description",
    RaspPiNote3Link => "page-run-a-node-rasp-pi-note-3-link",
    RaspPiNote3Description => "page-run-a-node-rasp-pi-note-3-description",
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
