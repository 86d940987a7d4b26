//! Build the static site.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_page::StaticBuilder;

use crate::config::SiteConfig;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    let site = SiteConfig::load(config_path)?;

    let mut config = site.build_config();
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    tracing::info!("Building site...");
    tracing::debug!("Catalogs: {}", config.catalog_dir.display());
    tracing::debug!("Output: {}", config.output_dir.display());

    let result = StaticBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} pages in {}ms",
        result.pages,
        result.duration_ms
    );
    if result.missing_translations > 0 {
        tracing::warn!(
            "{} strings have no translation in any locale; run 'folio check' for details",
            result.missing_translations
        );
    }
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_from_config_file() {
        let temp = tempdir().unwrap();
        let locales = temp.path().join("locales");
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("en.yaml"), crate::commands::init::DEFAULT_EN).unwrap();

        let config_path = temp.path().join("site.toml");
        fs::write(
            &config_path,
            format!("[i18n]\ndir = {:?}\n", locales.display().to_string()),
        )
        .unwrap();

        let output = temp.path().join("out");
        run(&config_path, Some(output.clone()), Some(false)).await.unwrap();

        assert!(output.join("en/run-a-node/index.html").exists());
        assert!(output.join("assets/main.css").exists());
    }
}
