// NOTE: termfolio Architecture Rationale
//
// Why tick-driven visibility (not scroll callbacks)?
// - A terminal has no notion of element visibility; the page is a flat row buffer
// - The scroll offset only changes on input and animation ticks, so re-testing
//   each section's row range against the viewport once per tick IS the observer
// - Keeps reveal/active-section logic in termfolio-core pure and testable
//   without a terminal attached
//
// Why view-models between content and rendering?
// - The same page renders in two places (ratatui viewer, `print` to stdout)
// - Presenters are pure functions: content in, serializable view-model out
// - Both renderers consume the same view-model, so the two outputs cannot
//   drift apart, and `print --format json` falls out for free
//
// Why role-tagged rows (not styled rows) in the laid-out document?
// - Rows carry semantic roles; each renderer maps role -> style itself
// - Theme toggling then only repaints; it never relayouts, so section bounds
//   and reveal state survive the toggle (only width changes remount)

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod watcher;

pub use args::{Cli, ColorMode, Commands, PrintFormat, SectionArg};
pub use commands::run;
