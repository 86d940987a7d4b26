//! Static site builder.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use folio_i18n::{Catalog, CatalogError, Locale, LocaleCatalog, LocaleError, Translator};

use crate::assets::AssetPipeline;
use crate::composer::PageComposer;
use crate::content;
use crate::model::{Glyph, ImageAsset, ImageCatalog, PageSpec};
use crate::render::render_page;
use crate::templates::{Alternate, Context, TemplateEngine};
use crate::theme::Theme;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding one catalog file per locale
    pub catalog_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Static files copied to `<output>/assets`
    pub static_dir: Option<PathBuf>,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Locale missing translations fall back to
    pub default_locale: String,

    /// Locales to build; every catalog locale when unset
    pub locales: Option<Vec<String>>,

    pub theme: Theme,

    /// Extra stylesheet URLs linked after the generated CSS
    pub stylesheets: Vec<String>,

    /// Include the live-reload client in every page
    pub live_reload: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from("locales"),
            output_dir: PathBuf::from("dist"),
            static_dir: None,
            minify: true,
            base_url: "/".to_string(),
            title: "ethereum.org".to_string(),
            default_locale: "en".to_string(),
            locales: None,
            theme: Theme::default(),
            stylesheets: Vec::new(),
            live_reload: false,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of placeholders rendered across all pages
    pub missing_translations: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid locale in configuration: {0}")]
    Locale(#[from] LocaleError),

    #[error("No locales to build")]
    NoLocales,

    #[error("Failed to read: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let catalog = Catalog::load_dir(&self.config.catalog_dir)?;
        let default_locale = Locale::parse(&self.config.default_locale)?;
        let locales = self.locales(&catalog, &default_locale)?;
        let translator = Translator::new(catalog, default_locale.clone());

        let images = ImageCatalog::new(self.config.base_url.clone());
        self.check_images(&images);

        let page = content::run_a_node();

        // Compose and render every locale in parallel
        let results: Vec<Result<usize, BuildError>> = locales
            .par_iter()
            .map(|locale| self.build_locale(&translator, &images, &page, locale, &locales))
            .collect();

        let mut missing = 0;
        for result in results {
            missing += result?;
        }

        self.generate_assets()?;
        self.copy_static()?;
        self.generate_redirect(&default_locale, &page).await?;
        if is_absolute_url(&self.config.base_url) {
            self.generate_sitemap(&locales, &default_locale, &page).await?;
        } else {
            tracing::warn!(
                "Skipping sitemap.xml and robots.txt: base_url {} is not an absolute URL",
                self.config.base_url
            );
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: locales.len(),
            missing_translations: missing,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Locales to build, default locale first.
    fn locales(&self, catalog: &Catalog, default: &Locale) -> Result<Vec<Locale>, BuildError> {
        let mut locales = match &self.config.locales {
            Some(codes) => codes
                .iter()
                .map(|code| Locale::parse(code))
                .collect::<Result<Vec<_>, _>>()?,
            None => catalog.locales(),
        };

        for locale in &locales {
            if !catalog.has_locale(locale) {
                tracing::warn!(
                    "No catalog for {}; every message falls back to {}",
                    locale,
                    default
                );
            }
        }
        if !catalog.has_locale(default) {
            tracing::warn!("No catalog for default locale {}", default);
        }

        locales.sort_by_key(|l| l != default);
        let mut seen = HashSet::new();
        locales.retain(|l| seen.insert(l.clone()));

        if locales.is_empty() {
            return Err(BuildError::NoLocales);
        }
        Ok(locales)
    }

    /// Warn about images and glyphs the page references but the static directory lacks.
    fn check_images(&self, images: &ImageCatalog) {
        let Some(static_dir) = &self.config.static_dir else {
            return;
        };

        for asset in ImageAsset::ALL {
            let path = static_dir.join("images").join(images.relative_path(*asset));
            if !path.exists() {
                tracing::warn!("Image not found: {}", path.display());
            }
        }
        for glyph in Glyph::ALL {
            let path = static_dir
                .join("glyphs")
                .join(format!("{}.svg", glyph.name()));
            if !path.exists() {
                tracing::warn!("Glyph not found: {}", path.display());
            }
        }
    }

    fn page_url(&self, locale: &Locale, page: &PageSpec) -> String {
        format!("{}{}/{}/", self.config.base_url, locale, page.slug)
    }

    fn output_path(&self, locale: &Locale, page: &PageSpec) -> PathBuf {
        self.config
            .output_dir
            .join(locale.as_str())
            .join(page.slug)
            .join("index.html")
    }

    /// Build the page for one locale. Returns the number of missing translations.
    fn build_locale(
        &self,
        translator: &Translator,
        images: &ImageCatalog,
        page: &PageSpec,
        locale: &Locale,
        locales: &[Locale],
    ) -> Result<usize, BuildError> {
        let composer = PageComposer::new(translator, &self.config.theme, images);
        let composed = composer.compose(page, locale);

        for missing in &composed.missing {
            tracing::debug!("Placeholder rendered for {} ({})", missing.key, missing.locale);
        }

        let context = Context {
            title: composed.title.text.clone(),
            description: composed.description.text.clone(),
            site_title: self.config.title.clone(),
            lang: locale.to_string(),
            content: render_page(&composed, &self.config.theme),
            base_url: self.config.base_url.clone(),
            alternates: locales
                .iter()
                .map(|l| Alternate {
                    lang: l.to_string(),
                    href: self.page_url(l, page),
                })
                .collect(),
            styles: self.config.stylesheets.clone(),
            live_reload: self.config.live_reload,
        };

        let html = self
            .templates
            .render_page("page.html", &context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        let output_path = self.output_path(locale, page);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }
        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::info!(
            "Built {} ({} missing translations)",
            output_path.display(),
            composed.missing.len()
        );

        Ok(composed.missing.len())
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css(&self.config.theme);
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Serving unminified CSS: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Copy the static directory into `<output>/assets`.
    fn copy_static(&self) -> Result<(), BuildError> {
        let Some(static_dir) = &self.config.static_dir else {
            return Ok(());
        };
        if !static_dir.exists() {
            tracing::warn!("Static directory not found: {}", static_dir.display());
            return Ok(());
        }

        let assets_dir = self.config.output_dir.join("assets");
        let mut copied = 0;

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir).unwrap_or(path);
            let target = assets_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }
            fs::copy(path, &target)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;
            copied += 1;
        }

        tracing::info!("Copied {} static files from {}", copied, static_dir.display());
        Ok(())
    }

    /// Write the site root, redirecting to the default locale.
    async fn generate_redirect(&self, default: &Locale, page: &PageSpec) -> Result<(), BuildError> {
        let html = self
            .templates
            .render_redirect(&self.page_url(default, page))
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        write(&self.config.output_dir.join("index.html"), html).await
    }

    /// Generate sitemap with hreflang alternates, and robots.txt.
    async fn generate_sitemap(
        &self,
        locales: &[Locale],
        default: &Locale,
        page: &PageSpec,
    ) -> Result<(), BuildError> {
        let origin = self.config.base_url.trim_end_matches('/');
        let absolute = |locale: &Locale| format!("{}/{}/{}/", origin, locale, page.slug);

        let urls: Vec<String> = locales
            .iter()
            .map(|locale| {
                let mut links: Vec<String> = locales
                    .iter()
                    .map(|alt| {
                        format!(
                            r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                            alt,
                            absolute(alt)
                        )
                    })
                    .collect();
                links.push(format!(
                    r#"    <xhtml:link rel="alternate" hreflang="x-default" href="{}"/>"#,
                    absolute(default)
                ));

                format!(
                    "  <url>\n    <loc>{}</loc>\n{}\n  </url>",
                    absolute(locale),
                    links.join("\n")
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
{}
</urlset>"#,
            urls.join("\n")
        );

        write(&self.config.output_dir.join("sitemap.xml"), sitemap).await?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        write(&self.config.output_dir.join("robots.txt"), robots).await
    }
}

/// Sitemaps only accept fully qualified URLs.
fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

async fn write(path: &Path, contents: String) -> Result<(), BuildError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const EN: &str = r#"
page-run-a-node-title: Run a node
page-run-a-node-meta-description: Become a fully-sovereign user
page-run-a-node-privacy-title: Privacy and security
page-run-a-node-privacy-preview: Stop leaking your personal information
more: More
less: Less
"#;

    const ES: &str = r#"
page-run-a-node-title: Ejecutar un nodo
"#;

    fn site(root: &Path) -> BuildConfig {
        let locales = root.join("locales");
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("en.yaml"), EN).unwrap();
        fs::write(locales.join("es.yaml"), ES).unwrap();

        BuildConfig {
            catalog_dir: locales,
            output_dir: root.join("dist"),
            minify: false,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_every_locale() {
        let temp = tempdir().unwrap();
        let config = site(temp.path());
        let out = config.output_dir.clone();

        let result = StaticBuilder::new(config).build().await.unwrap();

        assert_eq!(result.pages, 2);
        assert!(result.missing_translations > 0);
        assert!(out.join("en/run-a-node/index.html").exists());
        assert!(out.join("es/run-a-node/index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
    }

    #[tokio::test]
    async fn falls_back_to_default_locale() {
        let temp = tempdir().unwrap();
        let config = site(temp.path());
        let out = config.output_dir.clone();

        StaticBuilder::new(config).build().await.unwrap();

        let es = fs::read_to_string(out.join("es/run-a-node/index.html")).unwrap();
        assert!(es.contains(r#"<html lang="es">"#));
        assert!(es.contains("<title>Ejecutar un nodo | ethereum.org</title>"));
        assert!(es.contains("Privacy and security"));
        assert!(es.contains(r#"class="missing-translation""#));
    }

    #[tokio::test]
    async fn redirects_root_to_default_locale() {
        let temp = tempdir().unwrap();
        let config = site(temp.path());
        let out = config.output_dir.clone();

        StaticBuilder::new(config).build().await.unwrap();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("url=/en/run-a-node/"));
    }

    #[tokio::test]
    async fn sitemap_lists_alternates() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            base_url: "https://ethereum.org/".to_string(),
            ..site(temp.path())
        };
        let out = config.output_dir.clone();

        StaticBuilder::new(config).build().await.unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 2);
        assert!(sitemap.contains("<loc>https://ethereum.org/en/run-a-node/</loc>"));
        assert!(sitemap.contains(r#"hreflang="es" href="https://ethereum.org/es/run-a-node/""#));
        assert!(sitemap.contains(r#"hreflang="x-default" href="https://ethereum.org/en/run-a-node/""#));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://ethereum.org/sitemap.xml"));
    }

    #[tokio::test]
    async fn relative_base_url_skips_sitemap() {
        let temp = tempdir().unwrap();
        let config = site(temp.path());
        let out = config.output_dir.clone();

        StaticBuilder::new(config).build().await.unwrap();

        assert!(out.join("en/run-a-node/index.html").exists());
        assert!(!out.join("sitemap.xml").exists());
        assert!(!out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn links_configured_stylesheets() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            stylesheets: vec!["/fonts/inter.css".to_string()],
            ..site(temp.path())
        };
        let out = config.output_dir.clone();

        StaticBuilder::new(config).build().await.unwrap();

        let en = fs::read_to_string(out.join("en/run-a-node/index.html")).unwrap();
        assert!(en.contains(r#"<link rel="stylesheet" href="/fonts/inter.css">"#));
    }

    #[tokio::test]
    async fn builds_only_configured_locales() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            locales: Some(vec!["es".to_string()]),
            ..site(temp.path())
        };
        let out = config.output_dir.clone();

        let result = StaticBuilder::new(config).build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert!(out.join("es/run-a-node/index.html").exists());
        assert!(!out.join("en/run-a-node/index.html").exists());
    }

    #[tokio::test]
    async fn copies_static_files() {
        let temp = tempdir().unwrap();
        let static_dir = temp.path().join("static");
        fs::create_dir_all(static_dir.join("glyphs")).unwrap();
        fs::write(static_dir.join("glyphs/privacy.svg"), "<svg/>").unwrap();

        let config = BuildConfig {
            static_dir: Some(static_dir),
            ..site(temp.path())
        };
        let out = config.output_dir.clone();

        StaticBuilder::new(config).build().await.unwrap();

        assert!(out.join("assets/glyphs/privacy.svg").exists());
    }

    #[tokio::test]
    async fn missing_catalog_dir_is_an_error() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            catalog_dir: temp.path().join("nope"),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        };

        let err = StaticBuilder::new(config).build().await.unwrap_err();

        assert!(matches!(err, BuildError::Catalog(CatalogError::DirectoryNotFound(_))));
    }
}
