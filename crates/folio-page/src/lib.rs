//! Page composition and static rendering for folio sites.
//!
//! A page is declared once as data ([`model::PageSpec`]), composed per locale
//! into a layout tree ([`layout::Node`]) with every string resolved, rendered to
//! HTML and written out as a static site.

pub mod anchor;
pub mod assets;
pub mod builder;
pub mod composer;
pub mod content;
pub mod expandable;
pub mod layout;
pub mod model;
pub mod render;
pub mod templates;
pub mod theme;

pub use anchor::{AnchorId, AnchorIndex, AnchorNavigator, AnchorTarget, HeadlessViewport, Viewport};
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use composer::{ComposedPage, MissingTranslation, PageComposer};
pub use expandable::{Disclosure, ExpandableSection};
pub use model::{ContentCard, ImageCatalog, PageSpec};
pub use render::render_page;
pub use theme::Theme;
