use crate::presentation::view_models::{
    ConnectViewModel, FooterViewModel, IntroViewModel, PageViewModel, SocialLinkViewModel,
    TimelineEntryViewModel, WorkViewModel,
};
use termfolio_core::Portfolio;

const WORK_HEADING: &str = "SELECTED WORK";
const CONNECT_HEADING: &str = "CONNECT";

/// Map loaded content onto the page view-model. Pure; both renderers
/// consume the result.
pub fn build_page_view_model(portfolio: &Portfolio) -> PageViewModel {
    let entries: Vec<TimelineEntryViewModel> = portfolio
        .work
        .iter()
        .map(|entry| TimelineEntryViewModel {
            year: entry.year.clone(),
            role: entry.role.clone(),
            company: entry.company.clone(),
            description: entry.description.clone(),
            tech: entry.tech.clone(),
        })
        .collect();

    PageViewModel {
        intro: IntroViewModel {
            kicker: portfolio.intro.kicker.clone(),
            name: portfolio.intro.name.clone(),
            tagline: portfolio.intro.tagline.clone(),
            availability: portfolio.intro.availability.clone(),
            location: portfolio.intro.location.clone(),
            current_role: portfolio.intro.current.role.clone(),
            current_org: portfolio.intro.current.org.clone(),
            current_detail: portfolio.intro.current.detail.clone(),
            focus: portfolio.intro.focus.clone(),
        },
        work: WorkViewModel {
            heading: WORK_HEADING.to_string(),
            span_label: span_label(&portfolio.work),
            entries,
        },
        connect: ConnectViewModel {
            heading: CONNECT_HEADING.to_string(),
            pitch: portfolio.connect.pitch.clone(),
            email: portfolio.connect.email.clone(),
            elsewhere: portfolio
                .connect
                .links
                .iter()
                .map(|link| SocialLinkViewModel {
                    name: link.name.clone(),
                    handle: link.handle.clone(),
                    url: link.url.clone(),
                })
                .collect(),
        },
        footer: FooterViewModel {
            credit: portfolio.footer.credit.clone(),
        },
    }
}

/// Entries are listed newest first; the label reads oldest to newest.
fn span_label(entries: &[termfolio_core::TimelineEntry]) -> String {
    match (entries.last(), entries.first()) {
        (Some(oldest), Some(newest)) if oldest.year != newest.year => {
            format!("{} — {}", oldest.year, newest.year)
        }
        (Some(only), Some(_)) => only.year.clone(),
        _ => String::new(),
    }
}
