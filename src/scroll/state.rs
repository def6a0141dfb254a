//! Scroll state management.
//!
//! This module provides [`ScrollState`], which encapsulates the list's scroll
//! position, momentum, animated scroll targets and boundary tracking.

/// Which end of the list a scroll ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBoundary {
    Top,
    Bottom,
}

/// Velocity friction applied on every tick.
const FRICTION: f64 = 0.92;
/// Velocity cap, in list units per tick.
const MAX_VELOCITY: f64 = 50.0;
/// Share of the remaining distance covered per tick by animated scrolls.
const ANIMATION_STEP: f64 = 0.35;

/// Scroll state of the asset list.
///
/// Offsets grow downwards: 0 is the top of the list and `max_scroll` shows
/// its last rows.
pub struct ScrollState {
    /// Current offset from the top.
    pub offset: f64,
    /// Maximum offset (content height minus viewport height).
    pub max_scroll: f64,
    /// Momentum velocity (units per tick, positive = down).
    pub velocity: f64,
    /// Destination of an animated scroll in progress.
    pub target: Option<f64>,
    /// Scroll boundary hit state (for visual feedback)
    pub boundary_hit: Option<ScrollBoundary>,
    /// Tick counter when boundary was hit (for timing the highlight)
    pub boundary_hit_tick: u64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_scroll: 0.0,
            velocity: 0.0,
            target: None,
            boundary_hit: None,
            boundary_hit_tick: 0,
        }
    }

    /// Jump to `offset`, clamped to the valid range.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_scroll);
        self.target = None;
    }

    /// Start an animated scroll towards `offset`.
    pub fn animate_to(&mut self, offset: f64) {
        self.target = Some(offset.clamp(0.0, self.max_scroll));
        self.velocity = 0.0;
    }

    pub fn scroll_to_top(&mut self) {
        self.set_offset(0.0);
        self.velocity = 0.0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set_offset(self.max_scroll);
        self.velocity = 0.0;
    }

    /// Update scroll limits after a layout pass.
    pub fn update_limits(&mut self, content_height: f64, viewport_height: f64) {
        self.max_scroll = (content_height - viewport_height).max(0.0);
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
        if let Some(target) = self.target {
            self.target = Some(target.min(self.max_scroll));
        }
    }

    /// Advance momentum and animated scrolls by one tick.
    ///
    /// Returns true if the scroll position changed.
    pub fn apply_velocity(&mut self) -> bool {
        if let Some(target) = self.target {
            let old = self.offset;
            let remaining = target - self.offset;
            if remaining.abs() < 0.5 {
                self.offset = target;
                self.target = None;
            } else {
                self.offset += remaining * ANIMATION_STEP;
            }
            return (self.offset - old).abs() > 0.01;
        }

        if self.velocity.abs() < 0.1 {
            self.velocity = 0.0;
            return false;
        }

        let old = self.offset;
        self.offset = (self.offset + self.velocity).clamp(0.0, self.max_scroll);
        self.velocity *= FRICTION;

        if self.offset <= 0.0 {
            self.velocity = 0.0;
            self.boundary_hit = Some(ScrollBoundary::Top);
        } else if self.offset >= self.max_scroll {
            self.velocity = 0.0;
            self.boundary_hit = Some(ScrollBoundary::Bottom);
        }

        (self.offset - old).abs() > 0.01
    }

    pub fn add_velocity(&mut self, velocity: f64) {
        self.target = None;
        self.velocity = (self.velocity + velocity).clamp(-MAX_VELOCITY, MAX_VELOCITY);
    }

    // Boundary hit tracking

    pub fn record_boundary_hit(&mut self, boundary: ScrollBoundary, tick: u64) {
        self.boundary_hit = Some(boundary);
        self.boundary_hit_tick = tick;
    }

    /// Clear the boundary hit state if enough ticks have passed.
    pub fn maybe_clear_boundary_hit(&mut self, current_tick: u64, duration_ticks: u64) {
        if self.boundary_hit.is_some() && current_tick >= self.boundary_hit_tick + duration_ticks {
            self.boundary_hit = None;
        }
    }

    pub fn get_boundary_hit(&self) -> Option<ScrollBoundary> {
        self.boundary_hit
    }
}

impl std::fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollState")
            .field("offset", &self.offset)
            .field("max_scroll", &self.max_scroll)
            .field("velocity", &self.velocity)
            .field("target", &self.target)
            .field("boundary_hit", &self.boundary_hit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max: f64) -> ScrollState {
        let mut s = ScrollState::new();
        s.update_limits(max + 10.0, 10.0);
        s
    }

    #[test]
    fn test_scroll_state_new() {
        let s = ScrollState::new();
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.velocity, 0.0);
        assert!(s.target.is_none());
        assert!(s.boundary_hit.is_none());
    }

    #[test]
    fn test_update_limits_clamps() {
        let mut s = state(100.0);
        assert_eq!(s.max_scroll, 100.0);
        s.set_offset(80.0);
        s.update_limits(50.0, 10.0);
        assert_eq!(s.max_scroll, 40.0);
        assert_eq!(s.offset, 40.0);

        s.update_limits(5.0, 10.0);
        assert_eq!(s.max_scroll, 0.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_update_limits_clamps_animation_target() {
        let mut s = state(100.0);
        s.animate_to(90.0);
        s.update_limits(40.0, 10.0);
        assert_eq!(s.target, Some(30.0));
    }

    #[test]
    fn test_set_offset_clamped() {
        let mut s = state(50.0);
        s.set_offset(30.0);
        assert_eq!(s.offset, 30.0);
        s.set_offset(100.0);
        assert_eq!(s.offset, 50.0);
        s.set_offset(-4.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_scroll_to_top_and_bottom() {
        let mut s = state(100.0);
        s.add_velocity(4.0);
        s.scroll_to_bottom();
        assert_eq!(s.offset, 100.0);
        assert_eq!(s.velocity, 0.0);
        s.scroll_to_top();
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_animated_scroll_converges() {
        let mut s = state(100.0);
        s.animate_to(60.0);
        assert!(s.target.is_some());
        for _ in 0..50 {
            s.apply_velocity();
        }
        assert!(s.target.is_none());
        assert_eq!(s.offset, 60.0);
    }

    #[test]
    fn test_animation_target_clamped() {
        let mut s = state(20.0);
        s.animate_to(60.0);
        assert_eq!(s.target, Some(20.0));
    }

    #[test]
    fn test_set_offset_cancels_animation() {
        let mut s = state(100.0);
        s.animate_to(60.0);
        s.set_offset(10.0);
        assert!(s.target.is_none());
        assert!(!s.apply_velocity());
        assert_eq!(s.offset, 10.0);
    }

    #[test]
    fn test_momentum_scrolling() {
        let mut s = state(100.0);
        s.set_offset(50.0);
        s.add_velocity(5.0);
        assert!(s.apply_velocity());
        assert!(s.offset > 50.0);

        for _ in 0..100 {
            s.apply_velocity();
        }
        assert_eq!(s.velocity, 0.0);
        assert!(s.boundary_hit.is_none());
    }

    #[test]
    fn test_momentum_stops_at_boundary() {
        let mut s = state(10.0);
        s.add_velocity(40.0);
        s.apply_velocity();
        assert_eq!(s.offset, 10.0);
        assert_eq!(s.velocity, 0.0);
        assert_eq!(s.boundary_hit, Some(ScrollBoundary::Bottom));

        s.add_velocity(-40.0);
        s.apply_velocity();
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.boundary_hit, Some(ScrollBoundary::Top));
    }

    #[test]
    fn test_velocity_capped() {
        let mut s = state(1000.0);
        s.add_velocity(100.0);
        assert_eq!(s.velocity, 50.0);
        s.add_velocity(-200.0);
        assert_eq!(s.velocity, -50.0);
    }

    #[test]
    fn test_add_velocity_cancels_animation() {
        let mut s = state(100.0);
        s.animate_to(80.0);
        s.add_velocity(2.0);
        assert!(s.target.is_none());
    }

    #[test]
    fn test_boundary_hit_tracking() {
        let mut s = ScrollState::new();
        s.record_boundary_hit(ScrollBoundary::Top, 100);
        assert_eq!(s.get_boundary_hit(), Some(ScrollBoundary::Top));

        s.maybe_clear_boundary_hit(105, 10);
        assert!(s.get_boundary_hit().is_some());

        s.maybe_clear_boundary_hit(115, 10);
        assert!(s.get_boundary_hit().is_none());
    }
}
