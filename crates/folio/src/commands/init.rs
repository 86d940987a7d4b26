//! Initialize a folio site in a directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
///
/// Files are created next to the config file; existing files are kept unless
/// `yes` is set.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let locales_dir = root.join("locales");

    if locales_dir.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            locales_dir.display()
        );
        return Ok(());
    }
    fs::create_dir_all(&locales_dir).context("Failed to create locales directory")?;

    write_file(config_path, DEFAULT_CONFIG, yes)?;
    write_file(&locales_dir.join("en.yaml"), DEFAULT_EN, yes)?;
    write_file(&locales_dir.join("es.yaml"), DEFAULT_ES, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio dev' to start the development server.");

    Ok(())
}

fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::debug!("Keeping existing {}", path.display());
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# Folio Configuration

[site]
# Shown after the page title in the browser tab
title = "ethereum.org"

# Base URL (for deployment)
base_url = "/"

# Output directory for the built site
output = "dist"

# Extra stylesheets linked from every page
# stylesheets = ["/fonts/inter.css"]

[i18n]
# Directory of <locale>.yaml / <locale>.json catalogs
dir = "locales"

# Locale used when a translation is missing
default_locale = "en"

# Locales to build (defaults to every catalog found)
# locales = ["en", "es"]

[assets]
# Images and glyphs, copied to <output>/assets
# dir = "static"

[theme]
# primary = "#1c1ce1"
# scroll_margin_top = 88.0

[build]
minify = true
"##;

pub(crate) const DEFAULT_EN: &str = include_str!("../../templates/locales/en.yaml");

const DEFAULT_ES: &str = include_str!("../../templates/locales/es.yaml");
