//! Development server command.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use folio_server::{DevServer, DevServerConfig};

use crate::config::SiteConfig;

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let site = SiteConfig::load(config_path)?;

    let config = DevServerConfig {
        build: site.build_config(),
        watch: site.watch_paths(config_path),
        port,
        open,
        ..Default::default()
    };

    let path = config_path.to_path_buf();
    DevServer::new(config)
        .on_config_change(Arc::new(move || {
            SiteConfig::load(&path)
                .map(|site| site.build_config())
                .map_err(|e| format!("{:#}", e))
        }))
        .start()
        .await?;

    Ok(())
}
