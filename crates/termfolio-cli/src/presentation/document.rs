use crate::presentation::style::TextRole;
use crate::presentation::view_models::PageViewModel;
use crate::presentation::views;
use termfolio_core::{Region, SectionId, SectionRegistry};

/// Narrower terminals than this get a best-effort layout at this width
/// and let the renderer clip.
pub const MIN_LAYOUT_WIDTH: usize = 40;

/// Blank rows between sections.
const SECTION_GAP: usize = 2;

/// One styled run of text within a row.
#[derive(Debug, Clone)]
pub struct RowSpan {
    pub text: String,
    pub role: TextRole,
}

/// One document row. Rows carry semantic roles, never colors; each
/// renderer maps roles to its own styling.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub spans: Vec<RowSpan>,
}

impl Row {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn single(text: impl Into<String>, role: TextRole) -> Self {
        Self {
            spans: vec![RowSpan {
                text: text.into(),
                role,
            }],
        }
    }

    pub fn from_spans(spans: Vec<RowSpan>) -> Self {
        Self { spans }
    }

    /// Unstyled text of the row.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| span.text.chars().count()).sum()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|span| span.text.trim().is_empty())
    }
}

/// The fully laid-out page: styled rows plus the section bounds the
/// reveal tracker observes. Rebuilt when the width changes or content
/// reloads; never mutated in place.
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    registry: SectionRegistry,
    width: usize,
}

impl Document {
    /// Lay the page out at `width` columns, recording each section's
    /// row bounds as it is placed.
    pub fn layout(page: &PageViewModel, width: usize) -> Self {
        let width = width.max(MIN_LAYOUT_WIDTH);
        let mut rows: Vec<Row> = vec![Row::blank()];
        let mut registry = SectionRegistry::new();

        let sections: [(SectionId, Vec<Row>); 3] = [
            (SectionId::Intro, views::intro::build(&page.intro, width)),
            (SectionId::Work, views::work::build(&page.work, width)),
            (SectionId::Connect, views::connect::build(&page.connect, width)),
        ];

        for (id, section_rows) in sections {
            let top = rows.len();
            registry.mount(id, Region::new(top, section_rows.len()));
            rows.extend(section_rows);
            rows.extend(std::iter::repeat_with(Row::blank).take(SECTION_GAP));
        }

        rows.extend(views::footer::build(&page.footer, width));

        Self {
            rows,
            registry,
            width,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Section owning a document row, if any. Gap and footer rows
    /// belong to no section.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.registry
            .iter()
            .find(|(_, region)| {
                region.is_some_and(|r| row >= r.top && row < r.bottom())
            })
            .map(|(id, _)| id)
    }

    /// The rows of one section, if mounted.
    pub fn section_rows(&self, id: SectionId) -> Option<&[Row]> {
        let region = self.registry.get(id)?;
        self.rows.get(region.top..region.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_page_view_model;
    use termfolio_core::Portfolio;

    fn builtin_page() -> PageViewModel {
        build_page_view_model(Portfolio::builtin())
    }

    #[test]
    fn test_layout_mounts_all_sections_in_order() {
        let document = Document::layout(&builtin_page(), 80);
        let registry = document.registry();

        assert_eq!(registry.mounted_count(), 3);

        let intro = registry.get(SectionId::Intro).unwrap();
        let work = registry.get(SectionId::Work).unwrap();
        let connect = registry.get(SectionId::Connect).unwrap();

        assert!(intro.height > 0 && work.height > 0 && connect.height > 0);
        assert!(intro.bottom() <= work.top, "intro must end before work starts");
        assert!(work.bottom() <= connect.top, "work must end before connect starts");
        assert!(connect.bottom() <= document.height());
    }

    #[test]
    fn test_footer_rows_belong_to_no_section() {
        let document = Document::layout(&builtin_page(), 80);
        let last = document.height() - 1;

        assert!(!document.rows()[last].is_blank(), "footer credit must be laid out");
        assert_eq!(document.section_at(last), None);
    }

    #[test]
    fn test_section_at_resolves_rows_and_gaps() {
        let document = Document::layout(&builtin_page(), 80);
        let work = document.registry().get(SectionId::Work).unwrap();

        assert_eq!(document.section_at(work.top), Some(SectionId::Work));
        assert_eq!(document.section_at(work.bottom() - 1), Some(SectionId::Work));
        assert_eq!(document.section_at(work.bottom()), None, "gap rows have no owner");
        assert_eq!(document.section_at(0), None, "leading margin has no owner");
    }

    #[test]
    fn test_rows_respect_width() {
        for width in [60, 80, 100] {
            let document = Document::layout(&builtin_page(), width);
            for (i, row) in document.rows().iter().enumerate() {
                assert!(
                    row.width() <= width,
                    "row {} wider than {}: {:?}",
                    i,
                    width,
                    row.text()
                );
            }
        }
    }

    #[test]
    fn test_narrow_layout_wraps_taller() {
        let page = builtin_page();
        let narrow = Document::layout(&page, 48);
        let wide = Document::layout(&page, 100);
        assert!(
            narrow.height() > wide.height(),
            "narrow layout should need more rows ({} vs {})",
            narrow.height(),
            wide.height()
        );
    }

    #[test]
    fn test_tiny_width_is_clamped() {
        let document = Document::layout(&builtin_page(), 5);
        assert_eq!(document.width(), MIN_LAYOUT_WIDTH);
        assert_eq!(document.registry().mounted_count(), 3);
    }

    #[test]
    fn test_section_rows_match_registry() {
        let document = Document::layout(&builtin_page(), 80);
        for id in SectionId::ALL {
            let region = document.registry().get(id).unwrap();
            let rows = document.section_rows(id).unwrap();
            assert_eq!(rows.len(), region.height);
        }
    }
}
