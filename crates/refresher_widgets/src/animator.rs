//! Refresh animator capability
//!
//! The footer owns no visuals. It tells an animator what state it is in and
//! how far the user has pulled, and the animator renders whatever it likes.

use refresher_core::RefreshState;

/// Visual feedback driven by a refresh control
pub trait RefreshAnimator {
    /// Extra pull distance beyond the footer's own height before a refresh triggers
    fn trigger_distance(&self) -> f32 {
        0.0
    }

    /// The control entered a new state
    fn update_state(&mut self, state: RefreshState);

    /// Pull progress toward the trigger threshold (0.0 to 1.0)
    fn update_progress(&mut self, progress: f32);

    fn start_animating(&mut self);

    fn stop_animating(&mut self);
}
