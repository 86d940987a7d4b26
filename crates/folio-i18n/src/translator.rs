//! Translation resolution with default-locale fallback.

use crate::catalog::{Catalog, LocaleCatalog};
use crate::keys::ContentKey;
use crate::locale::Locale;
use crate::rich::{escape_html, render_inline, to_plain_text};

/// Where a resolved message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Found in the requested locale
    Requested,
    /// Found in the default locale after the requested locale missed
    Fallback,
    /// Not found anywhere; the content is a placeholder
    Missing,
}

/// A resolved message, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The key that was resolved
    pub key: String,
    /// Plain-text rendering, for attributes
    pub text: String,
    /// HTML rendering, for element content
    pub html: String,
    /// Where the message came from
    pub source: Source,
}

impl Resolved {
    /// Build the placeholder shown for a missing translation.
    fn placeholder(key: &str) -> Self {
        let escaped = escape_html(key);
        Self {
            key: key.to_string(),
            text: key.to_string(),
            html: format!(
                r#"<span class="missing-translation" data-key="{}">{}</span>"#,
                escaped, escaped
            ),
            source: Source::Missing,
        }
    }

    /// Whether this is a missing-translation placeholder.
    pub fn is_missing(&self) -> bool {
        self.source == Source::Missing
    }
}

/// Resolves content keys against a catalog.
#[derive(Debug, Clone)]
pub struct Translator<C = Catalog> {
    catalog: C,
    default_locale: Locale,
}

impl<C: LocaleCatalog> Translator<C> {
    /// Create a translator falling back to `default_locale`.
    pub fn new(catalog: C, default_locale: Locale) -> Self {
        Self {
            catalog,
            default_locale,
        }
    }

    /// The locale used when a requested locale has no entry.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolve a declared content key.
    pub fn resolve(&self, key: ContentKey, locale: &Locale) -> Resolved {
        self.resolve_str(key.as_str(), locale)
    }

    /// Resolve an arbitrary key string.
    ///
    /// Never fails: a key missing from both the requested and the default locale
    /// resolves to a visible placeholder and is logged.
    pub fn resolve_str(&self, key: &str, locale: &Locale) -> Resolved {
        if let Some(message) = self.catalog.lookup(key, locale) {
            return render(key, message.as_str(), Source::Requested);
        }

        if locale != &self.default_locale {
            if let Some(message) = self.catalog.lookup(key, &self.default_locale) {
                tracing::debug!(
                    "Translation {} missing for {}, using {}",
                    key,
                    locale,
                    self.default_locale
                );
                return render(key, message.as_str(), Source::Fallback);
            }
        }

        tracing::warn!("Missing translation: {} ({})", key, locale);
        Resolved::placeholder(key)
    }

    /// Resolve a key straight to plain text.
    pub fn text(&self, key: ContentKey, locale: &Locale) -> String {
        self.resolve(key, locale).text
    }
}

fn render(key: &str, message: &str, source: Source) -> Resolved {
    Resolved {
        key: key.to_string(),
        text: to_plain_text(message),
        html: render_inline(message),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(code: &str) -> Locale {
        Locale::parse(code).unwrap()
    }

    fn translator() -> Translator {
        let mut catalog = Catalog::new();
        catalog.extend(
            locale("en"),
            [
                ("page-run-a-node-title", "Run a node"),
                ("page-run-a-node-privacy-title", "Privacy and security"),
                ("page-run-a-node-hero-header", "Take **full control**"),
            ],
        );
        catalog.extend(locale("es"), [("page-run-a-node-title", "Ejecutar un nodo")]);
        Translator::new(catalog, locale("en"))
    }

    #[test]
    fn resolves_requested_locale() {
        let resolved = translator().resolve(ContentKey::Title, &locale("es"));

        assert_eq!(resolved.text, "Ejecutar un nodo");
        assert_eq!(resolved.source, Source::Requested);
    }

    #[test]
    fn falls_back_to_default_locale() {
        let resolved = translator().resolve(ContentKey::PrivacyTitle, &locale("es"));

        assert_eq!(resolved.text, "Privacy and security");
        assert_eq!(resolved.source, Source::Fallback);
    }

    #[test]
    fn renders_rich_and_plain_forms() {
        let resolved = translator().resolve(ContentKey::HeroHeader, &locale("en"));

        assert_eq!(resolved.html, "Take <strong>full control</strong>");
        assert_eq!(resolved.text, "Take full control");
    }

    #[test]
    fn missing_translation_yields_placeholder() {
        let resolved = translator().resolve(ContentKey::WhoTitle, &locale("es"));

        assert!(resolved.is_missing());
        assert_eq!(resolved.text, "page-run-a-node-who-title");
        assert!(resolved.html.contains("missing-translation"));
        assert!(resolved.html.contains("page-run-a-node-who-title"));
    }

    #[test]
    fn unsupported_locale_falls_back() {
        let resolved = translator().resolve(ContentKey::Title, &locale("de"));

        assert_eq!(resolved.text, "Run a node");
        assert_eq!(resolved.source, Source::Fallback);
    }

    #[test]
    fn every_declared_key_resolves_to_non_empty_content() {
        let translator = translator();
        for code in ["en", "es", "de"] {
            for key in ContentKey::ALL {
                let resolved = translator.resolve(*key, &locale(code));
                assert!(!resolved.text.is_empty(), "{} empty for {}", key, code);
                assert!(!resolved.html.is_empty(), "{} empty for {}", key, code);
            }
        }
    }

    #[test]
    fn placeholder_escapes_key() {
        let resolved = translator().resolve_str("<script>", &locale("en"));
        assert!(!resolved.html.contains("<script>"));
        assert!(resolved.html.contains("&lt;script&gt;"));
    }
}
