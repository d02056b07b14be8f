use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};

use crate::presentation::document::Document;
use crate::presentation::presenters::build_page_view_model;
use crate::presentation::style::{Palette, RevealPhase};
use crate::presentation::view_models::{PageViewModel, StatusBarViewModel};
use crate::presentation::views::rail::RailView;
use crate::presentation::views::status_bar::StatusBarView;
use crate::watcher::ContentWatcher;
use termfolio_core::{
    Portfolio, RevealTracker, ScrollState, SectionId, ThemeMode, Viewport, SECTION_COUNT,
};

/// Columns reserved for the indicator rail.
const RAIL_WIDTH: u16 = 6;
/// Rows reserved for the status bar.
const STATUS_HEIGHT: u16 = 1;
/// Ticks a freshly revealed section spends in each ramp-up phase.
const PHASE_TICKS: u64 = 2;

const KEY_HINTS: &str = "1-3 jump · j/k scroll · t theme · q quit";

/// The interactive page. Owns all UI state; the event loop in `run`
/// drives it, and tests drive the same methods directly.
pub struct PageApp {
    portfolio: Portfolio,
    page: PageViewModel,
    document: Document,
    scroll: ScrollState,
    tracker: RevealTracker,
    theme: ThemeMode,
    ticks: u64,
    reveal_tick: [Option<u64>; SECTION_COUNT],
    content_width: usize,
    body_rows: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl PageApp {
    pub fn new(portfolio: Portfolio) -> Self {
        let page = build_page_view_model(&portfolio);
        let document = Document::layout(&page, 80);
        Self {
            portfolio,
            page,
            document,
            scroll: ScrollState::new(),
            tracker: RevealTracker::new(),
            theme: ThemeMode::default(),
            ticks: 0,
            reveal_tick: [None; SECTION_COUNT],
            content_width: 80,
            body_rows: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Adopt the terminal size. A width change relays the document out
    /// afresh; its regions are new mounts, so reveal state starts over.
    /// Height changes only move the viewport bounds.
    pub fn resize(&mut self, width: u16, height: u16) {
        let content_width = width.saturating_sub(RAIL_WIDTH) as usize;
        self.body_rows = height.saturating_sub(STATUS_HEIGHT) as usize;

        if content_width != self.content_width {
            self.content_width = content_width;
            self.remount();
        }
        self.scroll.set_bounds(self.document.height(), self.body_rows);
    }

    fn remount(&mut self) {
        self.document = Document::layout(&self.page, self.content_width);
        self.tracker.reset();
        self.reveal_tick = [None; SECTION_COUNT];
        self.scroll.set_bounds(self.document.height(), self.body_rows);
    }

    /// Swap in reloaded content. Same remount semantics as a width
    /// change.
    pub fn reload(&mut self, portfolio: Portfolio) {
        self.portfolio = portfolio;
        self.page = build_page_view_model(&self.portfolio);
        self.remount();
        self.notice = None;
    }

    pub fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
    }

    /// One animation step: advance any glide in flight, then re-test
    /// section visibility at the new offset.
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.scroll.tick();
        self.evaluate();
    }

    fn evaluate(&mut self) {
        let viewport = Viewport::new(self.scroll.top(), self.body_rows);
        self.tracker.evaluate(self.document.registry(), viewport);
        for id in SectionId::ALL {
            if self.tracker.is_revealed(id) && self.reveal_tick[id.index()].is_none() {
                self.reveal_tick[id.index()] = Some(self.ticks);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll.scroll_by(1);
                self.evaluate();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll.scroll_by(-1);
                self.evaluate();
            }
            KeyCode::PageDown => {
                self.scroll.scroll_by(self.body_rows.saturating_sub(1) as isize);
                self.evaluate();
            }
            KeyCode::PageUp => {
                self.scroll.scroll_by(-(self.body_rows.saturating_sub(1) as isize));
                self.evaluate();
            }
            KeyCode::Home => {
                self.scroll.to_top();
                self.evaluate();
            }
            KeyCode::End => {
                self.scroll.to_bottom();
                self.evaluate();
            }
            KeyCode::Char('1') => self.jump(SectionId::Intro),
            KeyCode::Char('2') => self.jump(SectionId::Work),
            KeyCode::Char('3') => self.jump(SectionId::Connect),
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
            }
            _ => {}
        }
    }

    /// Indicator activation: glide the section into view, nearest edge
    /// first. Silently does nothing when the region is not mounted.
    pub fn jump(&mut self, id: SectionId) {
        if let Some(region) = self.document.registry().get(id) {
            self.scroll.scroll_into_view(region, self.body_rows);
        }
    }

    fn phase_of(&self, id: SectionId) -> RevealPhase {
        match self.reveal_tick[id.index()] {
            None => RevealPhase::Hidden,
            Some(start) => {
                let elapsed = self.ticks.saturating_sub(start);
                if elapsed < PHASE_TICKS {
                    RevealPhase::Faint
                } else if elapsed < PHASE_TICKS * 2 {
                    RevealPhase::Dim
                } else {
                    RevealPhase::Full
                }
            }
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let palette = Palette::for_mode(self.theme);
        let area = f.area();

        f.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let vertical =
            Layout::vertical([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)]).split(area);
        let horizontal =
            Layout::horizontal([Constraint::Length(RAIL_WIDTH), Constraint::Min(10)])
                .split(vertical[0]);

        f.render_widget(RailView::new(self.tracker.active(), palette), horizontal[0]);
        self.render_document(f, horizontal[1], palette);
        f.render_widget(
            StatusBarView::new(&self.status_model(), palette),
            vertical[1],
        );
    }

    fn render_document(&self, f: &mut Frame, area: ratatui::layout::Rect, palette: &Palette) {
        let top = self.scroll.top();
        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);

        for offset in 0..area.height as usize {
            let Some(row) = self.document.rows().get(top + offset) else {
                break;
            };
            let phase = self
                .document
                .section_at(top + offset)
                .map(|id| self.phase_of(id))
                .unwrap_or(RevealPhase::Full);

            if phase == RevealPhase::Hidden {
                lines.push(Line::default());
                continue;
            }
            let spans: Vec<Span> = row
                .spans
                .iter()
                .map(|span| {
                    Span::styled(span.text.clone(), palette.phased_style(span.role, phase))
                })
                .collect();
            lines.push(Line::from(spans));
        }

        f.render_widget(Paragraph::new(lines), area);
    }

    fn status_model(&self) -> StatusBarViewModel {
        StatusBarViewModel {
            active_section: self.tracker.active().map(|id| id.as_str().to_string()),
            theme: self.theme.as_str().to_string(),
            clock: chrono::Local::now().format("%H:%M").to_string(),
            hints: KEY_HINTS.to_string(),
            notice: self.notice.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn tracker(&self) -> &RevealTracker {
        &self.tracker
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Run the interactive viewer until quit. Sets up the terminal,
    /// drives the tick loop and restores the terminal on the way out.
    pub fn run(mut self, tick_rate: Duration, watcher: Option<ContentWatcher>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, tick_rate, watcher);

        // Stop observing before the terminal goes back to the shell.
        self.tracker.disconnect();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
        watcher: Option<ContentWatcher>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            let size = terminal.size()?;
            self.resize(size.width, size.height);

            terminal.draw(|f| self.render(f))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if let Some(watcher) = &watcher
                && watcher.poll_change()
            {
                match Portfolio::load_from(watcher.path()) {
                    Ok(portfolio) => self.reload(portfolio),
                    Err(err) => self.set_notice(format!("reload failed: {}", err)),
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.tick();
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
