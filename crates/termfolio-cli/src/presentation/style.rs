use ratatui::style::{Color, Modifier, Style};
use termfolio_core::ThemeMode;

/// Semantic role of a piece of laid-out text. Renderers map roles to
/// concrete styling; the document itself never holds colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Small uppercase line above the name.
    Kicker,
    /// The page owner's name.
    Name,
    /// Section headings ("SELECTED WORK", "CONNECT").
    Heading,
    /// Regular paragraph text.
    Body,
    /// De-emphasized text (years, labels, handles).
    Muted,
    /// Skill and tech tags.
    Tag,
    /// Mail and profile URLs.
    Link,
    /// The availability dot.
    StatusDot,
    /// Footer credit line.
    Credit,
}

/// How far a section's entry animation has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet revealed; rows render blank.
    Hidden,
    /// First frames after the reveal.
    Faint,
    /// Almost there.
    Dim,
    /// Fully visible, normal styling.
    Full,
}

/// Concrete colors for one theme.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub faint: Color,
    pub accent: Color,
}

static DARK: Palette = Palette {
    background: Color::Rgb(10, 10, 10),
    foreground: Color::Rgb(237, 237, 237),
    muted: Color::Rgb(140, 140, 140),
    faint: Color::Rgb(70, 70, 70),
    accent: Color::Rgb(110, 231, 183),
};

static LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    foreground: Color::Rgb(23, 23, 23),
    muted: Color::Rgb(115, 115, 115),
    faint: Color::Rgb(190, 190, 190),
    accent: Color::Rgb(5, 150, 105),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    /// Style for `role` at full visibility.
    pub fn role_style(&self, role: TextRole) -> Style {
        let base = Style::default().bg(self.background);
        match role {
            TextRole::Kicker => base.fg(self.muted),
            TextRole::Name => base.fg(self.foreground).add_modifier(Modifier::BOLD),
            TextRole::Heading => base.fg(self.foreground).add_modifier(Modifier::BOLD),
            TextRole::Body => base.fg(self.foreground),
            TextRole::Muted => base.fg(self.muted),
            TextRole::Tag => base.fg(self.muted).add_modifier(Modifier::ITALIC),
            TextRole::Link => base.fg(self.foreground).add_modifier(Modifier::UNDERLINED),
            TextRole::StatusDot => base.fg(self.accent),
            TextRole::Credit => base.fg(self.faint),
        }
    }

    /// Style for `role` part-way through the entry animation. Earlier
    /// phases collapse everything toward the background.
    pub fn phased_style(&self, role: TextRole, phase: RevealPhase) -> Style {
        match phase {
            RevealPhase::Hidden => Style::default().bg(self.background),
            RevealPhase::Faint => Style::default().bg(self.background).fg(self.faint),
            RevealPhase::Dim => Style::default().bg(self.background).fg(self.muted),
            RevealPhase::Full => self.role_style(role),
        }
    }
}
