use anyhow::Result;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Poll interval for change detection. Editors commonly replace files
/// instead of rewriting them, so the parent directory is watched and
/// events are filtered back down to the one content file.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Watches a single portfolio file for edits. Dropping the watcher
/// stops the polling.
pub struct ContentWatcher {
    _watcher: PollWatcher,
    rx: Receiver<()>,
    path: PathBuf,
}

impl ContentWatcher {
    pub fn new(path: &Path) -> Result<Self> {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let watch_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let (tx, rx) = channel();
        let config = notify::Config::default().with_poll_interval(POLL_INTERVAL);

        let target = path.clone();
        let mut watcher = PollWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                if let Ok(event) = res
                    && matches!(
                        event.kind,
                        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any
                    )
                    && event.paths.iter().any(|p| p == &target)
                {
                    let _ = tx.send(());
                }
            },
            config,
        )?;
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending notifications. True when the file changed at least
    /// once since the last call; rapid edit bursts collapse into one.
    pub fn poll_change(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reports_change_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio.toml");
        std::fs::write(&path, "a = 1\n").unwrap();

        let watcher = ContentWatcher::new(&path).unwrap();
        assert!(!watcher.poll_change(), "no edit yet, no change expected");

        std::thread::sleep(Duration::from_millis(50));
        std::fs::write(&path, "a = 2\n").unwrap();

        // Polling needs a moment; allow a few intervals before giving up.
        let mut seen = false;
        for _ in 0..8 {
            std::thread::sleep(POLL_INTERVAL / 2);
            if watcher.poll_change() {
                seen = true;
                break;
            }
        }
        assert!(seen, "edit was never reported");
    }

    #[test]
    fn test_ignores_sibling_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio.toml");
        std::fs::write(&path, "a = 1\n").unwrap();

        let watcher = ContentWatcher::new(&path).unwrap();
        std::fs::write(temp_dir.path().join("other.toml"), "b = 1\n").unwrap();

        std::thread::sleep(POLL_INTERVAL + Duration::from_millis(200));
        assert!(!watcher.poll_change(), "sibling edits must not trigger a reload");
    }
}
