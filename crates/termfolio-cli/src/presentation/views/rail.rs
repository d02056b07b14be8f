use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use termfolio_core::{SectionId, SECTION_COUNT};

use crate::presentation::style::Palette;

const ACTIVE_BAR: &str = "────";
const IDLE_BAR: &str = "──";

/// Fixed left-gutter navigation rail: one indicator per section,
/// vertically centered. The active indicator renders longer and in the
/// full foreground; the rest stay faint.
pub struct RailView<'a> {
    active: Option<SectionId>,
    palette: &'a Palette,
}

impl<'a> RailView<'a> {
    pub fn new(active: Option<SectionId>, palette: &'a Palette) -> Self {
        Self { active, palette }
    }
}

impl Widget for RailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let needed = (SECTION_COUNT * 2 - 1) as u16;
        if area.width < 2 || area.height < needed {
            return;
        }

        let top = area.y + (area.height - needed) / 2;
        for (i, id) in SectionId::ALL.iter().enumerate() {
            let y = top + (i * 2) as u16;
            let (bar, fg) = if self.active == Some(*id) {
                (ACTIVE_BAR, self.palette.foreground)
            } else {
                (IDLE_BAR, self.palette.faint)
            };
            let style = Style::default().fg(fg).bg(self.palette.background);
            buf.set_string(area.x + 1, y, bar, style);
        }
    }
}
