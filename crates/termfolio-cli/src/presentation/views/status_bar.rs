use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::style::Palette;
use crate::presentation::view_models::StatusBarViewModel;

/// Bottom chrome row: active section and theme on the left, clock and
/// key hints on the right. Never scrolls.
pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    palette: &'a Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.palette.muted).bg(self.palette.background);
        let accent = Style::default()
            .fg(self.palette.accent)
            .bg(self.palette.background)
            .add_modifier(Modifier::BOLD);

        let chunks = Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let section_label = self
            .model
            .active_section
            .as_deref()
            .unwrap_or("·")
            .to_uppercase();
        let left = Line::from(vec![
            Span::styled(format!(" {}", section_label), accent),
            Span::styled(format!("  {} theme", self.model.theme), muted),
        ]);
        Paragraph::new(left).render(chunks[0], buf);

        let right_text = match &self.model.notice {
            Some(notice) => format!("{} ", notice),
            None => format!("{}  {} ", self.model.hints, self.model.clock),
        };
        let right_style = if self.model.notice.is_some() {
            Style::default()
                .fg(self.palette.foreground)
                .bg(self.palette.background)
                .add_modifier(Modifier::BOLD)
        } else {
            muted
        };
        Paragraph::new(Line::from(Span::styled(right_text, right_style)))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
