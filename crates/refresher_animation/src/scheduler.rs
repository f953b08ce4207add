//! Animation scheduler
//!
//! Owns every running animation and advances them once per frame. Consumers
//! keep the `AnimationId` and read the current value after each tick.

use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;
use crate::keyframe::KeyframeAnimation;

new_key_type! {
    pub struct AnimationId;
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, KeyframeAnimation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, animation: KeyframeAnimation) -> AnimationId {
        self.animations.insert(animation)
    }

    /// Start a tween and return its id
    pub fn tween(&mut self, from: f32, to: f32, duration_ms: u32, easing: Easing) -> AnimationId {
        let mut animation = KeyframeAnimation::tween(from, to, duration_ms, easing);
        animation.start();
        tracing::trace!(from, to, duration_ms, "tween started");
        self.add(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&KeyframeAnimation> {
        self.animations.get(id)
    }

    /// Current value of an animation
    pub fn value(&self, id: AnimationId) -> Option<f32> {
        self.animations.get(id).map(|anim| anim.value())
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<KeyframeAnimation> {
        self.animations.remove(id)
    }

    /// Advance all animations by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(dt_ms);
        }
    }

    /// Check if any animations are still running
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|(_, anim)| anim.is_playing())
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
