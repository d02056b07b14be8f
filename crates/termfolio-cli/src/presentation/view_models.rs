use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub intro: IntroViewModel,
    pub work: WorkViewModel,
    pub connect: ConnectViewModel,
    pub footer: FooterViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntroViewModel {
    pub kicker: String,
    pub name: String,
    pub tagline: String,
    pub availability: String,
    pub location: String,
    pub current_role: String,
    pub current_org: String,
    pub current_detail: String,
    pub focus: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkViewModel {
    pub heading: String,
    /// Year range label, oldest entry to newest.
    pub span_label: String,
    pub entries: Vec<TimelineEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntryViewModel {
    pub year: String,
    pub role: String,
    pub company: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectViewModel {
    pub heading: String,
    pub pitch: String,
    pub email: String,
    pub elsewhere: Vec<SocialLinkViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkViewModel {
    pub name: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterViewModel {
    pub credit: String,
}

/// Runtime chrome for the viewer's bottom bar. Built fresh every frame.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub active_section: Option<String>,
    pub theme: String,
    pub clock: String,
    pub hints: String,
    /// Transient problem report (a failed content reload). Shown in
    /// place of the key hints until content loads cleanly again.
    pub notice: Option<String>,
}
