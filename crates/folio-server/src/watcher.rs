//! File watching for rebuilds.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A locale catalog was created or modified
    CatalogChanged(PathBuf),

    /// The site config was modified
    ConfigChanged(PathBuf),

    /// A static asset was created or modified
    AssetChanged(PathBuf),

    /// A watched file was deleted
    Removed(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            Self::CatalogChanged(p)
            | Self::ConfigChanged(p)
            | Self::AssetChanged(p)
            | Self::Removed(p) => p,
        }
    }
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Directories are watched recursively, files on their own. Paths that do
    /// not exist are skipped. Returns the watcher and a channel to receive events.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if !path.exists() {
                tracing::debug!("Not watching missing path {}", path.display());
                continue;
            }
            let mode = if path.is_dir() {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            watcher.watch(path, mode).map_err(std::io::Error::other)?;
        }

        // Forward events from notify's thread into the async channel
        std::thread::spawn(move || {
            let debounce = Duration::from_millis(100);
            let mut last: Option<(PathBuf, Instant)> = None;

            while let Ok(event) = sync_rx.recv() {
                for path in event.paths {
                    let Some(watch_event) = classify_event(&path, &event.kind) else {
                        continue;
                    };

                    // Editors often write the same file several times in a row
                    let now = Instant::now();
                    if let Some((last_path, at)) = &last {
                        if last_path == &path && now.duration_since(*at) < debounce {
                            continue;
                        }
                    }
                    last = Some((path.clone(), now));

                    if async_tx.blocking_send(watch_event).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match kind {
        EventKind::Remove(_) => Some(WatchEvent::Removed(path.to_path_buf())),
        EventKind::Create(_) | EventKind::Modify(_) => match ext {
            "yaml" | "yml" | "json" => Some(WatchEvent::CatalogChanged(path.to_path_buf())),
            "toml" => Some(WatchEvent::ConfigChanged(path.to_path_buf())),
            _ => Some(WatchEvent::AssetChanged(path.to_path_buf())),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_by_extension() {
        let modify = EventKind::Modify(ModifyKind::Any);

        assert_eq!(
            classify_event(Path::new("locales/es.yaml"), &modify),
            Some(WatchEvent::CatalogChanged(PathBuf::from("locales/es.yaml")))
        );
        assert_eq!(
            classify_event(Path::new("site.toml"), &modify),
            Some(WatchEvent::ConfigChanged(PathBuf::from("site.toml")))
        );
        assert_eq!(
            classify_event(Path::new("static/images/hero.png"), &EventKind::Create(CreateKind::File)),
            Some(WatchEvent::AssetChanged(PathBuf::from("static/images/hero.png")))
        );
        assert_eq!(
            classify_event(Path::new("locales/es.yaml"), &EventKind::Remove(RemoveKind::File)),
            Some(WatchEvent::Removed(PathBuf::from("locales/es.yaml")))
        );
        assert_eq!(classify_event(Path::new("a.yaml"), &EventKind::Any), None);
    }

    #[tokio::test]
    async fn watches_catalog_changes() {
        let temp = tempdir().unwrap();
        let catalog = temp.path().join("en.yaml");

        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&catalog, "more: More").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        let event = event.expect("timeout waiting for file watch event");
        assert!(event.is_some(), "channel should not be closed");
    }

    #[test]
    fn skips_missing_paths() {
        let temp = tempdir().unwrap();
        let result = FileWatcher::new(&[temp.path().join("missing")]);
        assert!(result.is_ok());
    }
}
