use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use termfolio_core::SectionId;

use crate::args::ColorMode;
use crate::presentation::document::{Document, Row};
use crate::presentation::style::TextRole;
use crate::presentation::view_models::PageViewModel;

const DEFAULT_WIDTH: usize = 80;

/// Wider terminals get a capped measure; long lines read badly.
const MAX_WIDTH: usize = 96;

/// Flat-text rendition of the page for stdout. No scrolling happens
/// here, so nothing reveals and no section is ever active.
pub struct ConsoleRenderer {
    color: bool,
    width: usize,
}

impl ConsoleRenderer {
    /// Renderer for the current stdout: color only when requested or
    /// when stdout is an interactive terminal, width from the terminal
    /// when it reports one.
    pub fn stdout(mode: ColorMode) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(DEFAULT_WIDTH)
            .min(MAX_WIDTH);
        Self { color, width }
    }

    pub fn with_width(color: bool, width: usize) -> Self {
        Self { color, width }
    }

    pub fn render_page(&self, page: &PageViewModel) -> String {
        let document = Document::layout(page, self.width);
        self.render_rows(document.rows())
    }

    pub fn render_section(&self, page: &PageViewModel, id: SectionId) -> String {
        let document = Document::layout(page, self.width);
        match document.section_rows(id) {
            Some(rows) => self.render_rows(rows),
            None => String::new(),
        }
    }

    fn render_rows(&self, rows: &[Row]) -> String {
        let mut out = String::new();
        for row in rows {
            let mut line = String::new();
            for span in &row.spans {
                line.push_str(&self.paint(span.role, &span.text));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    fn paint(&self, role: TextRole, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match role {
            TextRole::Kicker => text.bright_black().to_string(),
            TextRole::Name => text.bold().to_string(),
            TextRole::Heading => text.bold().to_string(),
            TextRole::Body => text.to_string(),
            TextRole::Muted => text.bright_black().to_string(),
            TextRole::Tag => text.bright_black().to_string(),
            TextRole::Link => text.underline().to_string(),
            TextRole::StatusDot => text.green().to_string(),
            TextRole::Credit => text.bright_black().to_string(),
        }
    }
}
