use crate::presentation::document::{Row, RowSpan};
use crate::presentation::style::TextRole;
use crate::presentation::view_models::{TimelineEntryViewModel, WorkViewModel};
use termfolio_core::text;

/// Width of the year gutter, including its trailing gap.
const YEAR_COL: usize = 7;

pub fn build(work: &WorkViewModel, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();

    rows.extend(heading_rows(&work.heading, &work.span_label, width));
    rows.push(Row::blank());

    for (i, entry) in work.entries.iter().enumerate() {
        if i > 0 {
            rows.push(Row::blank());
        }
        push_entry(&mut rows, entry, width);
    }

    rows
}

fn push_entry(rows: &mut Vec<Row>, entry: &TimelineEntryViewModel, width: usize) {
    let indent = " ".repeat(YEAR_COL);
    let body_width = width.saturating_sub(YEAR_COL);

    rows.push(Row::from_spans(vec![
        RowSpan {
            text: format!("{:<col$}", entry.year, col = YEAR_COL),
            role: TextRole::Muted,
        },
        RowSpan {
            text: entry.role.clone(),
            role: TextRole::Body,
        },
    ]));
    rows.push(Row::from_spans(vec![
        RowSpan {
            text: indent.clone(),
            role: TextRole::Muted,
        },
        RowSpan {
            text: entry.company.clone(),
            role: TextRole::Muted,
        },
    ]));

    // Literal newlines in the description start new paragraphs.
    for part in entry.description.split('\n') {
        let lines = text::wrap(part, body_width);
        if lines.is_empty() {
            rows.push(Row::blank());
            continue;
        }
        for line in lines {
            rows.push(Row::from_spans(vec![
                RowSpan {
                    text: indent.clone(),
                    role: TextRole::Body,
                },
                RowSpan {
                    text: line,
                    role: TextRole::Body,
                },
            ]));
        }
    }

    if !entry.tech.is_empty() {
        for line in text::wrap(&entry.tech.join(" · "), body_width) {
            rows.push(Row::from_spans(vec![
                RowSpan {
                    text: indent.clone(),
                    role: TextRole::Tag,
                },
                RowSpan {
                    text: line,
                    role: TextRole::Tag,
                },
            ]));
        }
    }
}

/// Heading left, year range pushed to the right edge. When the two
/// cannot share the row with at least one space between them, the
/// range drops to its own right-aligned row instead of overflowing.
fn heading_rows(heading: &str, span_label: &str, width: usize) -> Vec<Row> {
    if span_label.is_empty() {
        return vec![Row::single(heading.to_string(), TextRole::Heading)];
    }

    let used = heading.chars().count() + span_label.chars().count();
    if used < width {
        return vec![Row::from_spans(vec![
            RowSpan {
                text: heading.to_string(),
                role: TextRole::Heading,
            },
            RowSpan {
                text: format!("{}{}", " ".repeat(width - used), span_label),
                role: TextRole::Muted,
            },
        ])];
    }

    let mut rows = vec![Row::single(heading.to_string(), TextRole::Heading)];
    for line in text::wrap(span_label, width) {
        let pad = width.saturating_sub(line.chars().count());
        rows.push(Row::single(
            format!("{}{}", " ".repeat(pad), line),
            TextRole::Muted,
        ));
    }
    rows
}
