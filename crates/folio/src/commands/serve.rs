//! Preview the built site.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_server::StaticServer;

use crate::config::SiteConfig;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: Option<PathBuf>) -> Result<()> {
    let dir = serve_dir(config_path, dir)?;
    if !dir.exists() {
        anyhow::bail!(
            "Directory {} does not exist. Run 'folio build' first.",
            dir.display()
        );
    }

    StaticServer::new(dir, port).start().await?;

    Ok(())
}

/// The directory given on the command line, or the configured build output.
fn serve_dir(config_path: &Path, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(SiteConfig::load(config_path)?.build_config().output_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_configured_output() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, "[site]\noutput = \"public\"\n").unwrap();

        assert_eq!(serve_dir(&config_path, None).unwrap(), PathBuf::from("public"));
    }

    #[test]
    fn explicit_dir_wins() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, "[site]\noutput = \"public\"\n").unwrap();

        assert_eq!(
            serve_dir(&config_path, Some(PathBuf::from("out"))).unwrap(),
            PathBuf::from("out")
        );
    }

    #[test]
    fn falls_back_to_dist_without_config() {
        let temp = tempdir().unwrap();

        assert_eq!(
            serve_dir(&temp.path().join("site.toml"), None).unwrap(),
            PathBuf::from("dist")
        );
    }
}
