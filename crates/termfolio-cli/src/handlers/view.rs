use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::presentation::renderers::tui::PageApp;
use crate::watcher::ContentWatcher;
use termfolio_core::Portfolio;

/// Open the interactive viewer. Watches the content file for edits only
/// when one was passed explicitly.
pub fn handle(content: Option<&Path>, tick_rate_ms: u64) -> Result<()> {
    let (portfolio, source) = Portfolio::resolve(content)?;

    let watcher = match source.path() {
        Some(path) if source.is_watchable() => Some(
            ContentWatcher::new(path)
                .with_context(|| format!("Failed to watch content file: {}", path.display()))?,
        ),
        _ => None,
    };

    let app = PageApp::new(portfolio);
    app.run(Duration::from_millis(tick_rate_ms.max(1)), watcher)
}
