//! Keyframe animations
//!
//! Single-value timed sequences. A two-keyframe animation is a tween.

use smallvec::{smallvec, SmallVec};

use crate::easing::Easing;

/// A single keyframe in a single-value animation
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Target value at this keyframe
    pub value: f32,
    /// Easing function to use when transitioning TO this keyframe
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(time: f32, value: f32, easing: Easing) -> Self {
        Self {
            time,
            value,
            easing,
        }
    }
}

/// A keyframe-based animation (single value)
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    duration_ms: u32,
    keyframes: SmallVec<[Keyframe; 2]>,
    current_time: f32,
    playing: bool,
}

impl KeyframeAnimation {
    pub fn new(duration_ms: u32, keyframes: Vec<Keyframe>) -> Self {
        Self {
            duration_ms,
            keyframes: SmallVec::from_vec(keyframes),
            current_time: 0.0,
            playing: false,
        }
    }

    /// Animate from one value to another
    pub fn tween(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            keyframes: smallvec![
                Keyframe::new(0.0, from, Easing::Linear),
                Keyframe::new(1.0, to, easing),
            ],
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Value of the last keyframe
    pub fn target(&self) -> f32 {
        self.keyframes.last().map(|kf| kf.value).unwrap_or(0.0)
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        let Some(first) = self.keyframes.first() else {
            return 0.0;
        };

        let progress = self.progress();

        let mut prev_kf = first;
        let mut next_kf = first;
        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return prev_kf.value;
        }

        let local = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let eased = next_kf.easing.apply(local);

        prev_kf.value + (next_kf.value - prev_kf.value) * eased
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }
}
