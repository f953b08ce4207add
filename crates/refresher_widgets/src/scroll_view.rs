//! In-memory scroll view
//!
//! A headless scroll container with momentum and animated offset changes.
//! It queues a `ScrollEvent` for every offset or content-size change; the host
//! drains them and forwards them to its refresh controls.
//!
//! # Example
//!
//! ```rust
//! use refresher_core::{ScrollContainer, Size};
//! use refresher_widgets::{ScrollPhase, ScrollView};
//!
//! let mut view = ScrollView::new(Size::new(320.0, 600.0));
//! view.set_content_size(Size::new(320.0, 2000.0));
//!
//! view.drag_by(120.0);
//! view.release(900.0);
//! assert_eq!(view.phase(), ScrollPhase::Decelerating);
//!
//! while view.tick(1.0 / 60.0) {}
//! assert!(view.content_offset().y > 120.0);
//! assert!(view.drain_events().len() > 2);
//! ```

use std::sync::{Arc, Mutex, PoisonError, Weak};

use refresher_animation::{AnimationId, AnimationScheduler, Easing};
use refresher_core::{EdgeInsets, Point, ScrollContainer, ScrollEvent, ScrollEvents, Size};

/// Deceleration applied to momentum scrolling (points/second²)
const DECELERATION: f32 = 1500.0;

/// Momentum stops below this speed (points/second)
const VELOCITY_THRESHOLD: f32 = 10.0;

/// Scroll view interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// Finger down and moving the content
    Dragging,
    /// Coasting on momentum after release
    Decelerating,
    /// Driven by a programmatic offset animation
    Animating,
}

/// Headless scroll container
pub struct ScrollView {
    offset: Point,
    content_size: Size,
    bounds_size: Size,
    inset: EdgeInsets,
    /// Platform-adjusted top inset (safe area, bars), if any
    adjusted_top_inset: Option<f32>,
    phase: ScrollPhase,
    velocity_y: f32,
    scheduler: Weak<Mutex<AnimationScheduler>>,
    offset_animation: Option<AnimationId>,
    events: ScrollEvents,
}

impl ScrollView {
    pub fn new(bounds_size: Size) -> Self {
        Self {
            offset: Point::ZERO,
            content_size: Size::ZERO,
            bounds_size,
            inset: EdgeInsets::ZERO,
            adjusted_top_inset: None,
            phase: ScrollPhase::Idle,
            velocity_y: 0.0,
            scheduler: Weak::new(),
            offset_animation: None,
            events: ScrollEvents::new(),
        }
    }

    /// Create a view whose animated offset changes run on `scheduler`
    pub fn with_scheduler(bounds_size: Size, scheduler: &Arc<Mutex<AnimationScheduler>>) -> Self {
        Self {
            scheduler: Arc::downgrade(scheduler),
            ..Self::new(bounds_size)
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// True while a programmatic offset animation is running
    pub fn is_animating_offset(&self) -> bool {
        self.offset_animation.is_some()
    }

    /// Scheduler entry driving the current offset animation
    pub fn offset_animation(&self) -> Option<AnimationId> {
        self.offset_animation
    }

    pub fn set_content_size(&mut self, size: Size) {
        let old = self.content_size;
        if old == size {
            return;
        }
        self.content_size = size;
        self.events
            .push(ScrollEvent::ContentSizeChanged { old, new: size });
    }

    pub fn set_bounds_size(&mut self, size: Size) {
        self.bounds_size = size;
    }

    pub fn set_adjusted_top_inset(&mut self, top: Option<f32>) {
        self.adjusted_top_inset = top;
    }

    /// Smallest resting offset (content top edge under the top inset)
    pub fn min_offset_y(&self) -> f32 {
        -self.effective_top_inset()
    }

    /// Largest resting offset (content bottom edge plus bottom inset)
    pub fn max_offset_y(&self) -> f32 {
        let max = self.content_size.height + self.inset.bottom - self.bounds_size.height;
        max.max(self.min_offset_y())
    }

    /// Move the content with the finger
    ///
    /// Positive deltas drag the content up (reveal what is below).
    pub fn drag_by(&mut self, delta_y: f32) {
        self.cancel_offset_animation();
        self.phase = ScrollPhase::Dragging;
        self.velocity_y = 0.0;
        self.move_to(self.offset.with_y(self.offset.y + delta_y));
    }

    /// Lift the finger with a vertical velocity (points/second)
    pub fn release(&mut self, velocity_y: f32) {
        if velocity_y.abs() > VELOCITY_THRESHOLD {
            self.velocity_y = velocity_y;
            self.phase = ScrollPhase::Decelerating;
        } else {
            self.velocity_y = 0.0;
            self.settle();
        }
    }

    /// Advance momentum and offset animations by `dt` seconds
    ///
    /// Returns true while the view is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.phase {
            ScrollPhase::Idle => false,
            ScrollPhase::Dragging => true,
            ScrollPhase::Decelerating => {
                let y = self.offset.y + self.velocity_y * dt;
                self.move_to(self.offset.with_y(y));

                let decel = DECELERATION * dt;
                if self.velocity_y > 0.0 {
                    self.velocity_y = (self.velocity_y - decel).max(0.0);
                } else {
                    self.velocity_y = (self.velocity_y + decel).min(0.0);
                }

                if self.velocity_y.abs() <= VELOCITY_THRESHOLD {
                    self.velocity_y = 0.0;
                    self.settle();
                }
                self.phase != ScrollPhase::Idle
            }
            ScrollPhase::Animating => {
                let Some(id) = self.offset_animation else {
                    self.phase = ScrollPhase::Idle;
                    return false;
                };
                let Some(scheduler) = self.scheduler.upgrade() else {
                    self.offset_animation = None;
                    self.phase = ScrollPhase::Idle;
                    return false;
                };

                let (value, playing) = {
                    let scheduler = scheduler.lock().unwrap_or_else(PoisonError::into_inner);
                    match scheduler.get(id) {
                        Some(anim) => (anim.value(), anim.is_playing()),
                        None => (self.offset.y, false),
                    }
                };
                self.move_to(self.offset.with_y(value));

                if !playing {
                    scheduler
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .remove(id);
                    self.offset_animation = None;
                    self.phase = ScrollPhase::Idle;
                }
                playing
            }
        }
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> ScrollEvents {
        std::mem::take(&mut self.events)
    }

    fn move_to(&mut self, offset: Point) {
        let old = self.offset;
        if old == offset {
            return;
        }
        self.offset = offset;
        self.events.push(ScrollEvent::OffsetChanged { old, new: offset });
    }

    /// Come to rest, pulling an overscrolled offset back into range
    fn settle(&mut self) {
        let y = self.offset.y.clamp(self.min_offset_y(), self.max_offset_y());
        if y != self.offset.y {
            self.set_content_offset_animated(self.offset.with_y(y), 250);
        } else {
            self.phase = ScrollPhase::Idle;
        }
    }

    fn cancel_offset_animation(&mut self) {
        let Some(id) = self.offset_animation.take() else {
            return;
        };
        if let Some(scheduler) = self.scheduler.upgrade() {
            scheduler
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(id);
        }
    }
}

impl ScrollContainer for ScrollView {
    fn content_offset(&self) -> Point {
        self.offset
    }

    /// Jump to `offset`, stopping any momentum or animation
    fn set_content_offset(&mut self, offset: Point) {
        self.cancel_offset_animation();
        self.velocity_y = 0.0;
        self.phase = ScrollPhase::Idle;
        self.move_to(offset);
    }

    /// Animate to `offset`; snaps when no scheduler is attached
    fn set_content_offset_animated(&mut self, offset: Point, duration_ms: u32) {
        let Some(scheduler) = self.scheduler.upgrade() else {
            self.set_content_offset(offset);
            return;
        };

        self.cancel_offset_animation();
        self.velocity_y = 0.0;
        self.offset.x = offset.x;

        let id = scheduler
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tween(self.offset.y, offset.y, duration_ms, Easing::SCROLL);
        self.offset_animation = Some(id);
        self.phase = ScrollPhase::Animating;
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn bounds_size(&self) -> Size {
        self.bounds_size
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.inset = inset;
    }

    fn effective_top_inset(&self) -> f32 {
        self.adjusted_top_inset.unwrap_or(self.inset.top)
    }

    fn is_decelerating(&self) -> bool {
        self.phase == ScrollPhase::Decelerating
    }
}
