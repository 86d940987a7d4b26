//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use folio_page::{BuildConfig, Theme};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub i18n: I18nSection,
    #[serde(default)]
    pub assets: AssetsSection,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub base_url: String,
    pub output: String,
    /// Extra stylesheet URLs linked from every page
    pub stylesheets: Vec<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "ethereum.org".to_string(),
            base_url: "/".to_string(),
            output: "dist".to_string(),
            stylesheets: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct I18nSection {
    pub dir: String,
    pub default_locale: String,
    /// Locales to build; every catalog found when unset
    pub locales: Option<Vec<String>>,
}

impl Default for I18nSection {
    fn default() -> Self {
        Self {
            dir: "locales".to_string(),
            default_locale: "en".to_string(),
            locales: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AssetsSection {
    /// Copied to `<output>/assets`
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self { minify: true }
    }
}

impl SiteConfig {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Paths whose changes should trigger a rebuild.
    pub fn watch_paths(&self, config_path: &Path) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(&self.i18n.dir), config_path.to_path_buf()];
        if let Some(dir) = &self.assets.dir {
            paths.push(PathBuf::from(dir));
        }
        paths
    }

    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            catalog_dir: PathBuf::from(&self.i18n.dir),
            output_dir: PathBuf::from(&self.site.output),
            static_dir: self.assets.dir.as_ref().map(PathBuf::from),
            minify: self.build.minify,
            base_url: normalize_base_url(&self.site.base_url),
            title: self.site.title.clone(),
            default_locale: self.i18n.default_locale.clone(),
            locales: self.i18n.locales.clone(),
            theme: self.theme.clone(),
            stylesheets: self.site.stylesheets.clone(),
            live_reload: false,
        }
    }
}

/// Base URLs always start and end with `/`.
fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        format!("{}/", trimmed)
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = SiteConfig::load(&temp.path().join("site.toml")).unwrap();

        let build = config.build_config();
        assert_eq!(build.catalog_dir, PathBuf::from("locales"));
        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert_eq!(build.default_locale, "en");
        assert!(build.minify);
        assert!(build.locales.is_none());
    }

    #[test]
    fn parses_every_section() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            r##"
[site]
title = "Example"
base_url = "docs"
stylesheets = ["/fonts/inter.css"]

[i18n]
dir = "copy"
default_locale = "es"
locales = ["es", "en"]

[assets]
dir = "static"

[theme]
primary = "#1c1cff"

[build]
minify = false
"##,
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        let build = config.build_config();

        assert_eq!(build.title, "Example");
        assert_eq!(build.base_url, "/docs/");
        assert_eq!(build.stylesheets, vec!["/fonts/inter.css".to_string()]);
        assert_eq!(build.catalog_dir, PathBuf::from("copy"));
        assert_eq!(build.default_locale, "es");
        assert_eq!(build.locales, Some(vec!["es".to_string(), "en".to_string()]));
        assert_eq!(build.static_dir, Some(PathBuf::from("static")));
        assert_eq!(build.theme.primary, "#1c1cff");
        assert_eq!(build.theme.scroll_margin_top, 88.0);
        assert!(!build.minify);

        assert_eq!(
            config.watch_paths(&path),
            vec![PathBuf::from("copy"), path.clone(), PathBuf::from("static")]
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(SiteConfig::load(&path).is_err());
    }

    #[test]
    fn normalizes_base_urls() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("/site"), "/site/");
        assert_eq!(normalize_base_url("https://example.org/"), "https://example.org/");
    }
}
