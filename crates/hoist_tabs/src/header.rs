//! Header transform
//!
//! Collapse and Snap modes translate the header by the shared scroll
//! position. RevealOnScroll and DiffClampSnap translate it by an accumulator
//! fed with scroll deltas, so scrolling up anywhere in the list reveals it.
//! DiffClampSnap springs the accumulator fully open or closed after a drag;
//! the spring lives in the container's [`AnimationScheduler`].

use hoist_animation::{AnimationScheduler, KeyframeAnimation, KeyframeId, Spring, SpringConfig, SpringId};
use tracing::debug;

use crate::config::{MotionMode, TabsConfig};

pub struct HeaderMotionController {
    mode: MotionMode,
    snap_threshold: f32,
    spring_config: SpringConfig,
    accumulator: f32,
    accumulator_spring: Option<SpringId>,
    /// Header is hidden until its height is known, unless configured
    revealed: bool,
    fade: Option<KeyframeId>,
}

impl HeaderMotionController {
    pub fn new(config: &TabsConfig) -> Self {
        Self {
            mode: config.motion_mode,
            snap_threshold: config.snap_threshold,
            spring_config: config.snap_spring,
            accumulator: 0.0,
            accumulator_spring: None,
            revealed: config.header_height.is_some(),
            fade: None,
        }
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn is_snapping(&self) -> bool {
        self.accumulator_spring.is_some()
    }

    /// Feed a scroll delta into the accumulator
    pub fn apply_delta(&mut self, delta: f32, header_scroll_distance: f32) {
        if !self.mode.is_diff_clamp() || !delta.is_finite() {
            return;
        }
        self.accumulator = (self.accumulator + delta).clamp(0.0, header_scroll_distance);
    }

    /// Re-clamp after the collapsible distance changed
    pub fn clamp_to(&mut self, header_scroll_distance: f32) {
        self.accumulator = self.accumulator.clamp(0.0, header_scroll_distance);
    }

    /// Vertical header translation, never positive
    pub fn translate_y(&self, shared: f32, header_scroll_distance: f32, measured: bool) -> f32 {
        if !measured {
            return 0.0;
        }
        let hidden = if self.mode.is_diff_clamp() {
            self.accumulator.clamp(0.0, header_scroll_distance)
        } else {
            shared.clamp(0.0, header_scroll_distance)
        };
        -hidden
    }

    /// Where a Snap-mode release at `offset` settles, if inside the collapsible region
    pub fn snap_target(&self, offset: f32, header_scroll_distance: f32) -> Option<f32> {
        if offset <= header_scroll_distance * self.snap_threshold {
            Some(0.0)
        } else if offset <= header_scroll_distance {
            Some(header_scroll_distance)
        } else {
            None
        }
    }

    /// Where a DiffClampSnap release settles the accumulator, if partially open
    pub fn accumulator_snap_target(&self, header_scroll_distance: f32) -> Option<f32> {
        let acc = self.accumulator;
        if acc <= 0.0 || acc >= header_scroll_distance {
            return None;
        }
        if acc <= header_scroll_distance * self.snap_threshold {
            Some(0.0)
        } else {
            Some(header_scroll_distance)
        }
    }

    /// Spring the accumulator toward `target`
    pub fn start_accumulator_snap(&mut self, scheduler: &mut AnimationScheduler, target: f32) {
        self.cancel_snap(scheduler);

        let mut spring = Spring::new(self.spring_config, self.accumulator);
        spring.set_target(target);
        debug!(from = self.accumulator, target, "accumulator snap started");
        self.accumulator_spring = Some(scheduler.add_spring(spring));
    }

    /// Drop an in-flight accumulator spring, leaving the accumulator where it is
    pub fn cancel_snap(&mut self, scheduler: &mut AnimationScheduler) -> bool {
        match self.accumulator_spring.take() {
            Some(id) => scheduler.remove_spring(id).is_some(),
            None => false,
        }
    }

    /// Pull the animated accumulator from the scheduler
    ///
    /// Returns `true` on the frame the spring comes to rest.
    pub fn sync_from_scheduler(
        &mut self,
        scheduler: &mut AnimationScheduler,
        header_scroll_distance: f32,
    ) -> bool {
        let Some(id) = self.accumulator_spring else {
            return false;
        };

        let Some(spring) = scheduler.get_spring(id) else {
            self.accumulator_spring = None;
            return false;
        };

        self.accumulator = spring.value().clamp(0.0, header_scroll_distance);
        if spring.is_settled() {
            scheduler.remove_spring(id);
            self.accumulator_spring = None;
            debug!(accumulator = self.accumulator, "accumulator snap settled");
            return true;
        }
        false
    }

    /// Height resolved: fade the header in
    pub fn reveal(&mut self, scheduler: &mut AnimationScheduler, fade_ms: u32) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        self.fade = Some(scheduler.add_keyframe(KeyframeAnimation::fade_in(fade_ms)));
    }

    pub fn opacity(&self, scheduler: &AnimationScheduler) -> f32 {
        if !self.revealed {
            return 0.0;
        }
        self.fade
            .and_then(|id| scheduler.get_keyframe(id))
            .map_or(1.0, KeyframeAnimation::value)
    }
}
