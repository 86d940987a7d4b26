//! Development server with live reload for folio sites.
//!
//! Builds the site, serves the output directory and rebuilds whenever a
//! catalog, static asset or the site config changes. Connected browsers are
//! told to reload over a WebSocket.

pub mod reload;
pub mod server;
pub mod watcher;

pub use reload::{ReloadHub, ReloadMessage};
pub use server::{DevServer, DevServerConfig, ServerError, StaticServer};
pub use watcher::{FileWatcher, WatchEvent};
