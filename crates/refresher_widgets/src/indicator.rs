//! Arrow indicator
//!
//! Stock animator for footers: an arrow that turns as the user pulls, a
//! spinner while loading, and a label per state. It keeps a plain model that a
//! renderer reads each frame; it draws nothing itself.

use std::sync::{Arc, Mutex, PoisonError};

use refresher_core::RefreshState;

use crate::animator::RefreshAnimator;

/// Braille spinner frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Label text for each footer state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub pull: String,
    pub release: String,
    pub loading: String,
    pub no_more_data: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            pull: "Pull up to load more".to_string(),
            release: "Release to load more".to_string(),
            loading: "Loading...".to_string(),
            no_more_data: "No more data".to_string(),
        }
    }
}

/// What a renderer needs to draw the indicator
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorModel {
    pub state: RefreshState,
    pub progress: f32,
    /// Arrow rotation in degrees, 0 pointing up and 180 once fully pulled
    pub arrow_rotation: f32,
    pub arrow_visible: bool,
    pub spinning: bool,
    pub spinner_frame: usize,
    pub label: String,
}

impl IndicatorModel {
    /// Current spinner glyph
    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

/// Rotating-arrow animator
///
/// Clones share one model, so keep a clone to read it after handing the
/// indicator to a footer.
#[derive(Debug, Clone)]
pub struct ArrowIndicator {
    model: Arc<Mutex<IndicatorModel>>,
    labels: Arc<LabelSet>,
    trigger_distance: f32,
}

impl Default for ArrowIndicator {
    fn default() -> Self {
        Self::new(LabelSet::default())
    }
}

impl ArrowIndicator {
    pub fn new(labels: LabelSet) -> Self {
        let model = IndicatorModel {
            state: RefreshState::Idle,
            progress: 0.0,
            arrow_rotation: 0.0,
            arrow_visible: true,
            spinning: false,
            spinner_frame: 0,
            label: labels.pull.clone(),
        };
        Self {
            model: Arc::new(Mutex::new(model)),
            labels: Arc::new(labels),
            trigger_distance: 0.0,
        }
    }

    /// Require an extra pull beyond the footer height
    pub fn with_trigger_distance(mut self, distance: f32) -> Self {
        self.trigger_distance = distance;
        self
    }

    /// Snapshot of the current model
    pub fn model(&self) -> IndicatorModel {
        self.model
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Advance the spinner by one frame; returns true while spinning
    pub fn tick(&self) -> bool {
        let mut model = self.model.lock().unwrap_or_else(PoisonError::into_inner);
        if model.spinning {
            model.spinner_frame = (model.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        model.spinning
    }

    fn with_model(&self, f: impl FnOnce(&mut IndicatorModel, &LabelSet)) {
        let mut model = self.model.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut model, &self.labels);
    }
}

impl RefreshAnimator for ArrowIndicator {
    fn trigger_distance(&self) -> f32 {
        self.trigger_distance
    }

    fn update_state(&mut self, state: RefreshState) {
        self.with_model(|model, labels| {
            model.state = state;
            match state {
                RefreshState::Idle => {
                    model.arrow_visible = true;
                    model.arrow_rotation = 0.0;
                    model.label = labels.pull.clone();
                }
                RefreshState::Refreshing => {
                    model.arrow_visible = false;
                    model.label = labels.loading.clone();
                }
                RefreshState::NoMoreData => {
                    model.arrow_visible = false;
                    model.label = labels.no_more_data.clone();
                }
            }
        });
    }

    fn update_progress(&mut self, progress: f32) {
        self.with_model(|model, labels| {
            model.progress = progress;
            if model.state != RefreshState::Idle {
                return;
            }
            model.arrow_rotation = progress * 180.0;
            model.label = if progress >= 1.0 {
                labels.release.clone()
            } else {
                labels.pull.clone()
            };
        });
    }

    fn start_animating(&mut self) {
        self.with_model(|model, _| {
            model.spinning = true;
            model.spinner_frame = 0;
        });
    }

    fn stop_animating(&mut self) {
        self.with_model(|model, _| model.spinning = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_follows_progress_while_idle() {
        let mut indicator = ArrowIndicator::default();
        indicator.update_progress(0.5);
        let model = indicator.model();
        assert_eq!(model.arrow_rotation, 90.0);
        assert_eq!(model.label, "Pull up to load more");

        indicator.update_progress(1.0);
        let model = indicator.model();
        assert_eq!(model.arrow_rotation, 180.0);
        assert_eq!(model.label, "Release to load more");
    }

    #[test]
    fn test_refreshing_hides_arrow_and_spins() {
        let mut indicator = ArrowIndicator::default();
        let reader = indicator.clone();

        indicator.update_state(RefreshState::Refreshing);
        indicator.start_animating();
        assert!(reader.tick());
        assert!(reader.tick());

        let model = reader.model();
        assert!(!model.arrow_visible);
        assert!(model.spinning);
        assert_eq!(model.spinner_frame, 2);
        assert_eq!(model.spinner_glyph(), "⠹");
        assert_eq!(model.label, "Loading...");

        indicator.stop_animating();
        assert!(!reader.tick());
    }

    #[test]
    fn test_progress_ignored_outside_idle() {
        let mut indicator = ArrowIndicator::default();
        indicator.update_state(RefreshState::NoMoreData);
        indicator.update_progress(1.0);

        let model = indicator.model();
        assert_eq!(model.label, "No more data");
        assert_eq!(model.arrow_rotation, 0.0);
    }

    #[test]
    fn test_custom_labels() {
        let labels = LabelSet {
            loading: "Fetching".to_string(),
            ..Default::default()
        };
        let mut indicator = ArrowIndicator::new(labels).with_trigger_distance(20.0);
        assert_eq!(indicator.trigger_distance(), 20.0);

        indicator.update_state(RefreshState::Refreshing);
        assert_eq!(indicator.model().label, "Fetching");
    }
}
