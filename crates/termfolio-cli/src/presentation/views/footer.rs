use crate::presentation::document::Row;
use crate::presentation::style::TextRole;
use crate::presentation::view_models::FooterViewModel;
use termfolio_core::text;

pub fn build(footer: &FooterViewModel, width: usize) -> Vec<Row> {
    let mut rows = vec![Row::blank()];
    for line in text::wrap(&footer.credit, width) {
        rows.push(Row::single(line, TextRole::Credit));
    }
    rows
}
