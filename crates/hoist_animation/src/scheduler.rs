//! Animation scheduler
//!
//! Owns every active spring and tween and advances them each frame.

use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::keyframe::KeyframeAnimation;
use crate::spring::Spring;

new_key_type! {
    pub struct SpringId;
    pub struct KeyframeId;
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
    keyframes: SlotMap<KeyframeId, KeyframeAnimation>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            keyframes: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Add a tween and start it
    pub fn add_keyframe(&mut self, mut animation: KeyframeAnimation) -> KeyframeId {
        animation.start();
        self.keyframes.insert(animation)
    }

    pub fn get_keyframe(&self, id: KeyframeId) -> Option<&KeyframeAnimation> {
        self.keyframes.get(id)
    }

    pub fn remove_keyframe(&mut self, id: KeyframeId) -> Option<KeyframeAnimation> {
        self.keyframes.remove(id)
    }

    /// Tick all animations using wall-clock time since the previous tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.advance(dt);
    }

    /// Tick all animations by an explicit frame delta
    pub fn advance(&mut self, dt: Duration) {
        let dt_secs = dt.as_secs_f32();
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt_secs);
        }

        let dt_ms = dt_secs * 1000.0;
        for (_, animation) in self.keyframes.iter_mut() {
            animation.tick(dt_ms);
        }
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.springs.values().any(|s| !s.is_settled())
            || self.keyframes.values().any(KeyframeAnimation::is_playing)
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
