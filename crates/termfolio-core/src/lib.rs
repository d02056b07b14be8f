pub mod content;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod text;
pub mod theme;

pub use content::{Connect, ContentSource, Current, Footer, Intro, Portfolio, SocialLink, TimelineEntry};
pub use error::{Error, Result};
pub use reveal::{RevealTracker, Viewport, BOTTOM_MARGIN_RATIO, INTERSECTION_THRESHOLD};
pub use scroll::ScrollState;
pub use section::{Region, SectionId, SectionRegistry, SECTION_COUNT};
pub use theme::ThemeMode;
