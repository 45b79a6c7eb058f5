//! Keyframe animations
//!
//! Single-value timed sequences. Used for opacity ramps such as the
//! content fade-in of a freshly mounted pane.

use crate::easing::Easing;

/// A single keyframe
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

/// A keyframe-based animation of one value
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    duration_ms: u32,
    keyframes: Vec<Keyframe>,
    current_time: f32,
    playing: bool,
}

impl KeyframeAnimation {
    pub fn new(duration_ms: u32, keyframes: Vec<Keyframe>) -> Self {
        Self {
            duration_ms,
            keyframes,
            current_time: 0.0,
            playing: false,
        }
    }

    /// Two-keyframe ramp from `from` to `to`
    pub fn ramp(duration_ms: u32, from: f32, to: f32, easing: Easing) -> Self {
        Self::new(
            duration_ms,
            vec![
                Keyframe::new(0.0, from, Easing::Linear),
                Keyframe::new(1.0, to, easing),
            ],
        )
    }

    /// Opacity ramp 0 -> 1
    pub fn fade_in(duration_ms: u32) -> Self {
        Self::ramp(duration_ms, 0.0, 1.0, Easing::EaseInOutQuad)
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Check if the animation ran to its end
    pub fn is_finished(&self) -> bool {
        !self.playing && self.progress() >= 1.0
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.current_time / self.duration_ms as f32
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        let Some(first) = self.keyframes.first() else {
            return 0.0;
        };

        let progress = self.progress().clamp(0.0, 1.0);

        // Find surrounding keyframes
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

        let local_progress = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let eased = next_kf.easing.apply(local_progress);

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

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }
}
