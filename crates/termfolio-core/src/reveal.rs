use crate::section::{Region, SectionId, SectionRegistry, SECTION_COUNT};

/// Fraction of a section that must be inside the effective viewport
/// before the section counts as visible.
pub const INTERSECTION_THRESHOLD: f64 = 0.10;

/// Fraction of the viewport height shaved off the bottom edge when
/// testing visibility. Rows in that strip do not count, so a section
/// only entering from below must clear it first.
pub const BOTTOM_MARGIN_RATIO: f64 = 0.05;

/// Window onto the laid-out document, in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document row.
    pub top: usize,
    /// Full height of the window in rows.
    pub height: usize,
}

impl Viewport {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// Height that participates in visibility tests, with the bottom
    /// margin strip removed.
    pub fn effective_height(&self) -> usize {
        let margin = (self.height as f64 * BOTTOM_MARGIN_RATIO).round() as usize;
        self.height.saturating_sub(margin)
    }
}

/// Tracks which sections have been seen and which one the reader is on.
///
/// Visibility is evaluated against the registry on demand. A section
/// that crosses the threshold is revealed once and stays revealed; every
/// crossing also claims the active slot, so when several sections cross
/// in the same pass the one latest in document order wins.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: [bool; SECTION_COUNT],
    intersecting: [bool; SECTION_COUNT],
    active: Option<SectionId>,
    connected: bool,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTracker {
    pub fn new() -> Self {
        Self {
            revealed: [false; SECTION_COUNT],
            intersecting: [false; SECTION_COUNT],
            active: None,
            connected: true,
        }
    }

    /// Re-test every mounted section against the viewport and record
    /// enter transitions. Does nothing once disconnected.
    pub fn evaluate(&mut self, registry: &SectionRegistry, viewport: Viewport) {
        if !self.connected {
            return;
        }

        for (id, region) in registry.iter() {
            let Some(region) = region else {
                continue;
            };
            let now = Self::is_intersecting(region, viewport);
            let was = self.intersecting[id.index()];
            if now && !was {
                self.revealed[id.index()] = true;
                self.active = Some(id);
            }
            self.intersecting[id.index()] = now;
        }
    }

    fn is_intersecting(region: Region, viewport: Viewport) -> bool {
        if region.height == 0 {
            return false;
        }
        let view_bottom = viewport.top + viewport.effective_height();
        let lo = region.top.max(viewport.top);
        let hi = region.bottom().min(view_bottom);
        let overlap = hi.saturating_sub(lo);
        let ratio = overlap as f64 / region.height as f64;
        ratio >= INTERSECTION_THRESHOLD
    }

    /// Whether the section has ever crossed the visibility threshold.
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed[id.index()]
    }

    /// Section that most recently entered the viewport, if any has.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Stop observing. Later `evaluate` calls are no-ops; revealed and
    /// active state keep their last values.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Forget everything and start observing again. Used when the
    /// document is torn down and laid out afresh.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(regions: &[(SectionId, Region)]) -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        for (id, region) in regions {
            registry.mount(*id, *region);
        }
        registry
    }

    /// Three stacked 40-row sections, the shape most tests want.
    fn stacked_registry() -> SectionRegistry {
        registry_of(&[
            (SectionId::Intro, Region::new(0, 40)),
            (SectionId::Work, Region::new(40, 40)),
            (SectionId::Connect, Region::new(80, 40)),
        ])
    }

    #[test]
    fn test_starts_unrevealed_and_inactive() {
        let tracker = RevealTracker::new();
        for id in SectionId::ALL {
            assert!(!tracker.is_revealed(id), "{} revealed before any evaluate", id);
        }
        assert_eq!(tracker.active(), None);
        assert!(tracker.is_connected());
    }

    #[test]
    fn test_entering_section_is_revealed_and_activated() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 30));

        assert!(tracker.is_revealed(SectionId::Intro));
        assert!(!tracker.is_revealed(SectionId::Work));
        assert_eq!(tracker.active(), Some(SectionId::Intro));
    }

    #[test]
    fn test_reveal_persists_after_leaving() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 30));
        // Scroll well past the intro.
        tracker.evaluate(&registry, Viewport::new(80, 30));

        assert!(tracker.is_revealed(SectionId::Intro), "reveal must not be undone");
        assert_eq!(tracker.active(), Some(SectionId::Connect));
    }

    #[test]
    fn test_scrolling_through_page_reveals_in_order() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        for top in (0..=90).step_by(10) {
            tracker.evaluate(&registry, Viewport::new(top, 30));
        }

        assert_eq!(tracker.revealed_count(), 3);
        assert_eq!(tracker.active(), Some(SectionId::Connect));
    }

    #[test]
    fn test_returning_section_reclaims_active_without_new_reveal() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 30));
        tracker.evaluate(&registry, Viewport::new(80, 30));
        assert_eq!(tracker.active(), Some(SectionId::Connect));

        // Back to the top. Intro re-enters and takes active again.
        tracker.evaluate(&registry, Viewport::new(0, 30));
        assert_eq!(tracker.active(), Some(SectionId::Intro));
        assert_eq!(tracker.revealed_count(), 2, "revisit must not reveal anything new");
    }

    #[test]
    fn test_simultaneous_entries_last_in_document_order_wins() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        // Viewport straddles intro and work with both above threshold.
        tracker.evaluate(&registry, Viewport::new(20, 42));

        assert!(tracker.is_revealed(SectionId::Intro));
        assert!(tracker.is_revealed(SectionId::Work));
        assert_eq!(tracker.active(), Some(SectionId::Work));
    }

    #[test]
    fn test_threshold_boundary() {
        // 40-row section; effective viewport must cover >= 4 rows.
        let registry = registry_of(&[(SectionId::Intro, Region::new(100, 40))]);

        let mut tracker = RevealTracker::new();
        // Viewport height 20 loses one margin row, effective 19.
        // Top 85 puts rows 100..104 in view: exactly 10% of the section.
        tracker.evaluate(&registry, Viewport::new(85, 20));
        assert!(tracker.is_revealed(SectionId::Intro), "exact threshold counts as visible");

        let mut tracker = RevealTracker::new();
        // Top 84 covers rows 100..103: three rows, one short of threshold.
        tracker.evaluate(&registry, Viewport::new(84, 20));
        assert!(
            !tracker.is_revealed(SectionId::Intro),
            "overlap below threshold must not reveal"
        );
    }

    #[test]
    fn test_bottom_margin_strip_does_not_count() {
        // Viewport rows 0..100, margin 5, effective rows 0..95.
        // Section sits entirely inside the margin strip.
        let registry = registry_of(&[(SectionId::Work, Region::new(95, 8))]);
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 100));
        assert!(
            !tracker.is_revealed(SectionId::Work),
            "rows in the bottom margin must not trigger a reveal"
        );

        // One row higher and 5 of 8 rows clear the strip.
        let registry = registry_of(&[(SectionId::Work, Region::new(90, 8))]);
        tracker.reset();
        tracker.evaluate(&registry, Viewport::new(0, 100));
        assert!(tracker.is_revealed(SectionId::Work));
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let registry = registry_of(&[(SectionId::Work, Region::new(0, 40))]);
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 50));

        assert!(tracker.is_revealed(SectionId::Work));
        assert!(!tracker.is_revealed(SectionId::Intro));
        assert!(!tracker.is_revealed(SectionId::Connect));
    }

    #[test]
    fn test_disconnect_freezes_state() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 30));
        tracker.disconnect();
        tracker.evaluate(&registry, Viewport::new(80, 30));

        assert!(!tracker.is_revealed(SectionId::Connect), "evaluate after disconnect must be a no-op");
        assert_eq!(tracker.active(), Some(SectionId::Intro));
    }

    #[test]
    fn test_reset_forgets_and_reconnects() {
        let registry = stacked_registry();
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 120));
        tracker.disconnect();
        tracker.reset();

        assert!(tracker.is_connected());
        assert_eq!(tracker.revealed_count(), 0);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_zero_height_region_never_intersects() {
        let registry = registry_of(&[(SectionId::Intro, Region::new(0, 0))]);
        let mut tracker = RevealTracker::new();

        tracker.evaluate(&registry, Viewport::new(0, 50));
        assert!(!tracker.is_revealed(SectionId::Intro));
    }

    #[test]
    fn test_very_tall_section_can_stay_below_threshold() {
        // Section ten times taller than the effective viewport can never
        // reach 10% coverage, so it is never revealed.
        let registry = registry_of(&[(SectionId::Work, Region::new(0, 1000))]);
        let mut tracker = RevealTracker::new();

        for top in (0..=900).step_by(30) {
            tracker.evaluate(&registry, Viewport::new(top, 95));
        }
        assert!(!tracker.is_revealed(SectionId::Work));
    }
}
