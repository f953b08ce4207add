//! Refresher Animation
//!
//! Time-based tweens used when a refresh control nudges its scroll container.
//!
//! # Features
//!
//! - **Easing**: standard ease curves plus CSS-style cubic bezier
//! - **Keyframe Animations**: single-value timed sequences
//! - **Scheduler**: ticks every running animation once per frame

pub mod easing;
pub mod keyframe;
pub mod scheduler;

pub use easing::Easing;
pub use keyframe::{Keyframe, KeyframeAnimation};
pub use scheduler::{AnimationId, AnimationScheduler};
