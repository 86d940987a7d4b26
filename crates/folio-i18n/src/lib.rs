//! Locale catalogs and translation resolution for folio pages.
//!
//! Catalogs are flat `key: message` maps, one file per locale. Messages may carry
//! inline markdown and emoji shortcodes, which are rendered to HTML on lookup.

pub mod catalog;
pub mod keys;
pub mod locale;
pub mod rich;
pub mod translator;

pub use catalog::{Catalog, CatalogError, Coverage, LocaleCatalog, Message};
pub use keys::ContentKey;
pub use locale::{Locale, LocaleError};
pub use rich::{escape_html, render_inline, to_plain_text};
pub use translator::{Resolved, Source, Translator};
