use crate::presentation::document::{Row, RowSpan};
use crate::presentation::style::TextRole;
use crate::presentation::view_models::IntroViewModel;
use termfolio_core::text;

pub fn build(intro: &IntroViewModel, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();

    rows.push(Row::single(intro.kicker.clone(), TextRole::Kicker));
    rows.push(Row::blank());
    rows.push(Row::single(intro.name.to_uppercase(), TextRole::Name));
    rows.push(Row::blank());

    for line in text::wrap(&intro.tagline, width) {
        rows.push(Row::single(line, TextRole::Body));
    }
    rows.push(Row::blank());

    rows.push(Row::from_spans(vec![
        RowSpan {
            text: "● ".to_string(),
            role: TextRole::StatusDot,
        },
        RowSpan {
            text: intro.availability.clone(),
            role: TextRole::Muted,
        },
        RowSpan {
            text: format!("  ·  {}", intro.location),
            role: TextRole::Muted,
        },
    ]));
    rows.push(Row::blank());

    rows.push(Row::single("CURRENTLY", TextRole::Muted));
    rows.push(Row::single(intro.current_role.clone(), TextRole::Body));
    rows.push(Row::single(intro.current_org.clone(), TextRole::Muted));
    for line in text::wrap(&intro.current_detail, width) {
        rows.push(Row::single(line, TextRole::Muted));
    }
    rows.push(Row::blank());

    rows.push(Row::single("FOCUS", TextRole::Muted));
    for line in text::wrap(&intro.focus.join(" · "), width) {
        rows.push(Row::single(line, TextRole::Tag));
    }

    rows
}
