use crate::section::Region;

/// Fraction of the remaining distance covered per tick while easing.
const EASE_FACTOR: f64 = 0.35;

/// Smallest eased step, so long glides still finish in bounded time.
const MIN_STEP: f64 = 1.0;

/// Distance under which an eased position snaps onto its target.
const SNAP_DISTANCE: f64 = 0.5;

/// Vertical scroll position over the laid-out document.
///
/// The position is fractional so eased glides land between rows; the
/// renderer reads the rounded `top`. Direct scrolling moves the
/// position immediately, while `scroll_into_view` only retargets and
/// lets `tick` glide there.
#[derive(Debug, Clone)]
pub struct ScrollState {
    position: f64,
    target: f64,
    max: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            max: 0.0,
        }
    }

    /// Update the scrollable range after layout or a resize. Positions
    /// beyond the new range are pulled back inside it.
    pub fn set_bounds(&mut self, document_height: usize, viewport_height: usize) {
        self.max = document_height.saturating_sub(viewport_height) as f64;
        self.position = self.position.clamp(0.0, self.max);
        self.target = self.target.clamp(0.0, self.max);
    }

    /// First visible document row.
    pub fn top(&self) -> usize {
        self.position.round() as usize
    }

    /// Move immediately by `delta` rows, cancelling any glide in flight.
    pub fn scroll_by(&mut self, delta: isize) {
        self.position = (self.position + delta as f64).clamp(0.0, self.max);
        self.target = self.position;
    }

    pub fn to_top(&mut self) {
        self.position = 0.0;
        self.target = 0.0;
    }

    pub fn to_bottom(&mut self) {
        self.position = self.max;
        self.target = self.max;
    }

    /// Start a glide that brings `region` into view, aligning whichever
    /// edge is nearer. A region already fully in view leaves the target
    /// untouched.
    pub fn scroll_into_view(&mut self, region: Region, viewport_height: usize) {
        let top = region.top as f64;
        let bottom = region.bottom() as f64;
        let view_bottom = self.position + viewport_height as f64;

        if top >= self.position && bottom <= view_bottom {
            return;
        }

        let goal = if top < self.position {
            top
        } else {
            // Align the bottom edge; a region taller than the viewport
            // gets its top aligned instead.
            top.min(bottom - viewport_height as f64)
        };
        self.target = goal.clamp(0.0, self.max);
    }

    /// Advance any glide in flight by one tick.
    pub fn tick(&mut self) {
        let diff = self.target - self.position;
        if diff.abs() < SNAP_DISTANCE {
            self.position = self.target;
            return;
        }
        let step = (diff.abs() * EASE_FACTOR).max(MIN_STEP).min(diff.abs());
        self.position += step * diff.signum();
    }

    /// True once the position has reached its target.
    pub fn is_settled(&self) -> bool {
        self.position == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(document_height: usize, viewport_height: usize) -> ScrollState {
        let mut state = ScrollState::new();
        state.set_bounds(document_height, viewport_height);
        state
    }

    #[test]
    fn test_starts_at_top_settled() {
        let state = ScrollState::new();
        assert_eq!(state.top(), 0);
        assert!(state.is_settled());
    }

    #[test]
    fn test_scroll_by_is_instant_and_clamped() {
        let mut state = bounded(200, 50);

        state.scroll_by(30);
        assert_eq!(state.top(), 30);
        assert!(state.is_settled(), "direct scroll must not leave a glide pending");

        state.scroll_by(-100);
        assert_eq!(state.top(), 0, "scrolling past the top clamps to row 0");

        state.scroll_by(9999);
        assert_eq!(state.top(), 150, "scrolling past the end clamps to max");
    }

    #[test]
    fn test_viewport_taller_than_document_pins_to_top() {
        let mut state = bounded(20, 50);
        state.scroll_by(10);
        assert_eq!(state.top(), 0);
        state.to_bottom();
        assert_eq!(state.top(), 0);
    }

    #[test]
    fn test_set_bounds_pulls_position_back_in_range() {
        let mut state = bounded(200, 50);
        state.to_bottom();
        assert_eq!(state.top(), 150);

        // Viewport grows; the old position is now past the end.
        state.set_bounds(200, 120);
        assert_eq!(state.top(), 80);
    }

    #[test]
    fn test_unmounted_section_leaves_scroll_untouched() {
        use crate::section::{SectionId, SectionRegistry};

        let mut state = bounded(400, 50);
        state.scroll_by(120);

        // Indicator jumps look the region up first; an empty slot is
        // skipped rather than scrolled to.
        let registry = SectionRegistry::new();
        for id in SectionId::ALL {
            if let Some(region) = registry.get(id) {
                state.scroll_into_view(region, 50);
            }
        }

        assert_eq!(state.top(), 120, "an empty slot must not move the scroll");
        assert!(state.is_settled());
    }

    #[test]
    fn test_scroll_into_view_noop_when_fully_visible() {
        let mut state = bounded(200, 50);
        state.scroll_by(10);

        state.scroll_into_view(Region::new(20, 30), 50);
        assert!(state.is_settled(), "fully visible region must not retarget");
        assert_eq!(state.top(), 10);
    }

    #[test]
    fn test_scroll_into_view_aligns_top_when_above() {
        let mut state = bounded(200, 50);
        state.scroll_by(100);

        state.scroll_into_view(Region::new(40, 20), 50);
        while !state.is_settled() {
            state.tick();
        }
        assert_eq!(state.top(), 40);
    }

    #[test]
    fn test_scroll_into_view_aligns_bottom_when_below() {
        let mut state = bounded(200, 50);

        state.scroll_into_view(Region::new(100, 30), 50);
        while !state.is_settled() {
            state.tick();
        }
        // Region bottom 130 sits on the viewport bottom edge.
        assert_eq!(state.top(), 80);
    }

    #[test]
    fn test_scroll_into_view_tall_region_aligns_top() {
        let mut state = bounded(400, 50);

        state.scroll_into_view(Region::new(100, 90), 50);
        while !state.is_settled() {
            state.tick();
        }
        assert_eq!(state.top(), 100, "region taller than viewport aligns its top edge");
    }

    #[test]
    fn test_glide_converges_in_bounded_ticks() {
        let mut state = bounded(2000, 50);

        state.scroll_into_view(Region::new(1900, 50), 50);
        let mut ticks = 0;
        while !state.is_settled() {
            state.tick();
            ticks += 1;
            assert!(ticks < 200, "glide failed to converge");
        }
        assert_eq!(state.top(), 1900);
        // Eased motion takes several frames, it is not a jump.
        assert!(ticks > 5, "glide settled suspiciously fast ({} ticks)", ticks);
    }

    #[test]
    fn test_glide_first_step_is_proportional() {
        let mut state = bounded(2000, 50);
        state.scroll_into_view(Region::new(1000, 50), 50);

        state.tick();
        assert_eq!(state.top(), 350, "first step covers 35% of the distance");
    }

    #[test]
    fn test_direct_scroll_cancels_glide() {
        let mut state = bounded(500, 50);
        state.scroll_into_view(Region::new(400, 50), 50);
        state.tick();
        assert!(!state.is_settled());

        state.scroll_by(-5);
        assert!(state.is_settled(), "direct input takes over from the glide");
    }

    #[test]
    fn test_home_end() {
        let mut state = bounded(300, 60);
        state.to_bottom();
        assert_eq!(state.top(), 240);
        state.to_top();
        assert_eq!(state.top(), 0);
    }
}
