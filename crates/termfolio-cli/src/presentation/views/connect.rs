use crate::presentation::document::{Row, RowSpan};
use crate::presentation::style::TextRole;
use crate::presentation::view_models::ConnectViewModel;
use termfolio_core::text;

pub fn build(connect: &ConnectViewModel, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();

    rows.push(Row::single(connect.heading.clone(), TextRole::Heading));
    rows.push(Row::blank());

    for line in text::wrap(&connect.pitch, width) {
        rows.push(Row::single(line, TextRole::Body));
    }
    rows.push(Row::blank());

    rows.push(Row::single(connect.email.clone(), TextRole::Link));
    rows.push(Row::blank());

    rows.push(Row::single("ELSEWHERE", TextRole::Muted));
    rows.push(Row::blank());

    let name_col = connect
        .elsewhere
        .iter()
        .map(|link| link.name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    for (i, link) in connect.elsewhere.iter().enumerate() {
        if i > 0 {
            rows.push(Row::blank());
        }
        rows.push(Row::from_spans(vec![
            RowSpan {
                text: format!("{:<col$}", link.name, col = name_col),
                role: TextRole::Body,
            },
            RowSpan {
                text: link.handle.clone(),
                role: TextRole::Muted,
            },
        ]));
        rows.push(Row::from_spans(vec![
            RowSpan {
                text: " ".repeat(name_col),
                role: TextRole::Muted,
            },
            RowSpan {
                text: link.url.clone(),
                role: TextRole::Link,
            },
        ]));
    }

    rows
}
