//! Development and preview servers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::sync::broadcast::{self, error::RecvError};
use tower_http::services::ServeDir;

use folio_page::{BuildConfig, BuildError, StaticBuilder};

use crate::reload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::watcher::{FileWatcher, WatchEvent};

const RELOAD_PATH: &str = "/__reload";

/// Reloads the build configuration after the site config file changes.
pub type Reconfigure = Arc<dyn Fn() -> Result<BuildConfig, String> + Send + Sync>;

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// How to build the site; live reload is always enabled
    pub build: BuildConfig,

    /// Files and directories whose changes trigger a rebuild
    pub watch: Vec<PathBuf>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            watch: vec![PathBuf::from("locales"), PathBuf::from("site.toml")],
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Development server: build, serve, watch and live-reload.
pub struct DevServer {
    config: DevServerConfig,
    reconfigure: Option<Reconfigure>,
}

impl DevServer {
    pub fn new(config: DevServerConfig) -> Self {
        Self {
            config,
            reconfigure: None,
        }
    }

    /// Re-read the build configuration whenever a watched config file changes.
    pub fn on_config_change(mut self, reconfigure: Reconfigure) -> Self {
        self.reconfigure = Some(reconfigure);
        self
    }

    /// Build the site once, then serve it until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = socket_addr(&self.config.host, self.config.port)?;

        let build = BuildConfig {
            live_reload: true,
            ..self.config.build.clone()
        };
        let output_dir = build.output_dir.clone();

        let result = StaticBuilder::new(build.clone()).build().await?;
        tracing::info!(
            "Built {} pages in {}ms",
            result.pages,
            result.duration_ms
        );

        let hub = ReloadHub::new();

        let (watcher, mut rx) = FileWatcher::new(&self.config.watch)
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let rebuild_hub = hub.clone();
        let reconfigure = self.reconfigure.clone();
        tokio::spawn(async move {
            let mut build = build;
            while let Some(event) = rx.recv().await {
                if let WatchEvent::ConfigChanged(_) = event {
                    if let Some(reconfigure) = &reconfigure {
                        match reconfigure() {
                            Ok(config) => {
                                build = BuildConfig {
                                    live_reload: true,
                                    ..config
                                };
                            }
                            Err(e) => {
                                tracing::error!("Config reload failed: {}", e);
                                rebuild_hub.send(ReloadMessage::BuildFailed { message: e });
                                continue;
                            }
                        }
                    }
                }
                rebuild(&build, &rebuild_hub, &event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = dev_router(hub, output_dir);

        tracing::info!("Starting dev server at http://{}", addr);
        serve(addr, app, self.config.open).await
    }
}

/// Rebuild after a change and tell clients the outcome.
async fn rebuild(config: &BuildConfig, hub: &ReloadHub, event: &WatchEvent) {
    tracing::info!("Changed: {}", event.path().display());

    match StaticBuilder::new(config.clone()).build().await {
        Ok(result) => {
            tracing::info!(
                "Rebuilt {} pages in {}ms ({} missing translations)",
                result.pages,
                result.duration_ms,
                result.missing_translations
            );
            hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            tracing::error!("Rebuild failed: {}", e);
            hub.send(ReloadMessage::BuildFailed {
                message: e.to_string(),
            });
        }
    }
}

fn dev_router(hub: ReloadHub, output_dir: PathBuf) -> Router {
    Router::new()
        .route(RELOAD_PATH, get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .fallback_service(ServeDir::new(output_dir))
        .with_state(hub)
}

/// Preview server for a built site.
pub struct StaticServer {
    dir: PathBuf,
    host: String,
    port: u16,
    open: bool,
}

impl StaticServer {
    pub fn new(dir: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            dir: dir.into(),
            host: "127.0.0.1".to_string(),
            port,
            open: true,
        }
    }

    pub fn open_browser(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub async fn start(self) -> Result<(), ServerError> {
        if !self.dir.is_dir() {
            return Err(ServerError::DirectoryNotFound(self.dir));
        }

        let addr = socket_addr(&self.host, self.port)?;
        let app = Router::new().fallback_service(ServeDir::new(&self.dir));

        tracing::info!("Serving {} at http://{}", self.dir.display(), addr);
        serve(addr, app, self.open).await
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", host, port);
    addr.parse()
        .map_err(|_| ServerError::InvalidAddress(addr))
}

async fn serve(addr: SocketAddr, app: Router, open_browser: bool) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

    if open_browser {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::BindError(addr, e.to_string()))
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(hub): State<ReloadHub>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, hub))
}

/// Forward reload messages to one client until it disconnects.
async fn handle_ws(mut socket: WebSocket, hub: ReloadHub) {
    let mut rx = hub.subscribe();

    if send(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Some(msg) = next_message(&mut rx).await {
        if send(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

/// Next message for a client. A client that fell behind skips what it missed.
async fn next_message(rx: &mut broadcast::Receiver<ReloadMessage>) -> Option<ReloadMessage> {
    loop {
        match rx.recv().await {
            Ok(msg) => return Some(msg),
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!("Reload client lagged, skipped {} messages", skipped);
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

async fn send(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), ()> {
    let json = serde_json::to_string(msg).map_err(|_| ())?;
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| ())
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        reload_client_script(RELOAD_PATH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert!(server.reconfigure.is_none());
    }

    #[test]
    fn rejects_invalid_address() {
        let err = socket_addr("not a host", 80).unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn lagging_client_keeps_receiving() {
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        for _ in 0..20 {
            hub.send(ReloadMessage::Reload);
        }
        hub.send(ReloadMessage::BuildFailed {
            message: "last".to_string(),
        });

        assert_eq!(next_message(&mut rx).await, Some(ReloadMessage::Reload));

        let mut last = None;
        while let Ok(Some(msg)) =
            tokio::time::timeout(std::time::Duration::from_millis(50), next_message(&mut rx)).await
        {
            last = Some(msg);
        }
        assert_eq!(
            last,
            Some(ReloadMessage::BuildFailed {
                message: "last".to_string()
            })
        );
    }

    #[tokio::test]
    async fn closed_hub_ends_client() {
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();
        drop(hub);

        assert_eq!(next_message(&mut rx).await, None);
    }

    #[tokio::test]
    async fn preview_requires_built_site() {
        let temp = tempdir().unwrap();
        let server = StaticServer::new(temp.path().join("dist"), 0).open_browser(false);

        let err = server.start().await.unwrap_err();

        assert!(matches!(err, ServerError::DirectoryNotFound(_)));
    }

    #[tokio::test]
    async fn rebuild_notifies_clients() {
        let temp = tempdir().unwrap();
        let locales = temp.path().join("locales");
        std::fs::create_dir_all(&locales).unwrap();
        std::fs::write(locales.join("en.yaml"), "page-run-a-node-title: Run a node\n").unwrap();

        let config = BuildConfig {
            catalog_dir: locales.clone(),
            output_dir: temp.path().join("dist"),
            live_reload: true,
            ..Default::default()
        };
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        rebuild(&config, &hub, &WatchEvent::CatalogChanged(locales.join("en.yaml"))).await;

        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);
        let page = std::fs::read_to_string(temp.path().join("dist/en/run-a-node/index.html")).unwrap();
        assert!(page.contains("/__reload.js"));
    }

    #[tokio::test]
    async fn failed_rebuild_is_reported() {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            catalog_dir: temp.path().join("missing"),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        };
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        rebuild(&config, &hub, &WatchEvent::Removed(temp.path().join("missing/en.yaml"))).await;

        assert!(matches!(
            rx.try_recv().unwrap(),
            ReloadMessage::BuildFailed { .. }
        ));
    }
}
