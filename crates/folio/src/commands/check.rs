//! Report translation coverage.

use std::path::Path;

use anyhow::{bail, Result};
use folio_i18n::{Catalog, ContentKey, Coverage, Locale, LocaleCatalog};

use crate::config::SiteConfig;

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    let site = SiteConfig::load(config_path)?;
    let catalog = Catalog::load_dir(Path::new(&site.i18n.dir))?;

    let report = check(&catalog, &site)?;
    for coverage in &report {
        log_coverage(coverage);
    }

    let incomplete = report.iter().filter(|c| !c.is_complete()).count();
    if incomplete == 0 {
        tracing::info!("All {} locales are complete", report.len());
    } else if strict {
        bail!("{} of {} locales are missing translations", incomplete, report.len());
    }

    Ok(())
}

/// Coverage of the locales that will be built, default locale first.
fn check(catalog: &Catalog, site: &SiteConfig) -> Result<Vec<Coverage>> {
    let default_locale = Locale::parse(&site.i18n.default_locale)?;
    if !catalog.has_locale(&default_locale) {
        bail!("No catalog for default locale '{}'", default_locale);
    }

    let selected: Option<Vec<Locale>> = site
        .i18n
        .locales
        .as_ref()
        .map(|codes| codes.iter().map(|c| Locale::parse(c)).collect::<Result<Vec<_>, _>>())
        .transpose()?;

    let keys: Vec<&str> = ContentKey::ALL.iter().map(|k| k.as_str()).collect();
    let mut report: Vec<Coverage> = catalog
        .coverage(&keys)
        .into_iter()
        .filter(|c| selected.as_ref().map_or(true, |s| s.contains(&c.locale)))
        .collect();

    // A configured locale without a catalog translates nothing
    for locale in selected.iter().flatten() {
        if !catalog.has_locale(locale) && !report.iter().any(|c| &c.locale == locale) {
            tracing::warn!("{}: no catalog, every string falls back to {}", locale, default_locale);
            report.push(Coverage {
                locale: locale.clone(),
                total: keys.len(),
                missing: keys.iter().map(|k| k.to_string()).collect(),
                unknown: Vec::new(),
            });
        }
    }
    report.sort_by_key(|c| (c.locale != default_locale, c.locale.clone()));

    tracing::debug!("Checked {} locales: {:?}", report.len(), catalog.locales());
    Ok(report)
}

fn log_coverage(coverage: &Coverage) {
    let percent = if coverage.total == 0 {
        100.0
    } else {
        coverage.translated() as f64 * 100.0 / coverage.total as f64
    };

    if coverage.is_complete() {
        tracing::info!(
            "{}: {}/{} keys ({:.0}%)",
            coverage.locale,
            coverage.translated(),
            coverage.total,
            percent
        );
    } else {
        tracing::warn!(
            "{}: {}/{} keys ({:.0}%), {} missing",
            coverage.locale,
            coverage.translated(),
            coverage.total,
            percent,
            coverage.missing.len()
        );
        for key in &coverage.missing {
            tracing::debug!("  missing: {}", key);
        }
    }

    for key in &coverage.unknown {
        tracing::warn!("{}: unused key {}", coverage.locale, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write_site(root: &Path, extra: &str) -> std::path::PathBuf {
        let locales = root.join("locales");
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("en.yaml"), crate::commands::init::DEFAULT_EN).unwrap();
        fs::write(locales.join("es.yaml"), "more: Más\nold-key: Viejo\n").unwrap();

        let config_path = root.join("site.toml");
        fs::write(
            &config_path,
            format!("[i18n]\ndir = {:?}\n{}", locales.display().to_string(), extra),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn reports_default_locale_first() {
        let temp = tempdir().unwrap();
        let config_path = write_site(temp.path(), "");
        let site = SiteConfig::load(&config_path).unwrap();
        let catalog = Catalog::load_dir(Path::new(&site.i18n.dir)).unwrap();

        let report = check(&catalog, &site).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].locale.as_str(), "en");
        assert!(report[0].is_complete());
        assert_eq!(report[1].locale.as_str(), "es");
        assert_eq!(report[1].translated(), 1);
        assert_eq!(report[1].unknown, vec!["old-key".to_string()]);
    }

    #[test]
    fn limits_report_to_configured_locales() {
        let temp = tempdir().unwrap();
        let config_path = write_site(temp.path(), "locales = [\"en\"]\n");
        let site = SiteConfig::load(&config_path).unwrap();
        let catalog = Catalog::load_dir(Path::new(&site.i18n.dir)).unwrap();

        let report = check(&catalog, &site).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].locale.as_str(), "en");
    }

    #[test]
    fn strict_fails_on_missing_keys() {
        let temp = tempdir().unwrap();
        let config_path = write_site(temp.path(), "");

        assert!(run(&config_path, false).is_ok());
        assert!(run(&config_path, true).is_err());
    }

    #[test]
    fn configured_locale_without_catalog_is_incomplete() {
        let temp = tempdir().unwrap();
        let config_path = write_site(temp.path(), "locales = [\"en\", \"de\"]\n");
        let site = SiteConfig::load(&config_path).unwrap();
        let catalog = Catalog::load_dir(Path::new(&site.i18n.dir)).unwrap();

        let report = check(&catalog, &site).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[1].locale.as_str(), "de");
        assert_eq!(report[1].translated(), 0);
        assert_eq!(report[1].missing.len(), ContentKey::ALL.len());

        assert!(run(&config_path, false).is_ok());
        assert!(run(&config_path, true).is_err());
    }

    #[test]
    fn requires_default_locale_catalog() {
        let temp = tempdir().unwrap();
        let config_path = write_site(temp.path(), "default_locale = \"de\"\n");
        let site = SiteConfig::load(&config_path).unwrap();
        let catalog = Catalog::load_dir(Path::new(&site.i18n.dir)).unwrap();

        assert!(check(&catalog, &site).is_err());
    }
}
