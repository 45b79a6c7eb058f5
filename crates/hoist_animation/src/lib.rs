//! Hoist Animation System
//!
//! Spring physics, tweens, and delayed continuations driven by the frame clock.
//!
//! # Features
//!
//! - **Spring Physics**: damped springs with stiffness, damping, mass
//! - **Keyframe Tweens**: timed single-value sequences with easing functions
//! - **Scheduler**: one place that ticks every live spring and tween per frame
//! - **Timers**: cancellable delayed payloads keyed by id, fired on frame ticks

pub mod easing;
pub mod keyframe;
pub mod scheduler;
pub mod spring;
pub mod timer;

pub use easing::Easing;
pub use keyframe::{Keyframe, KeyframeAnimation};
pub use scheduler::{AnimationScheduler, KeyframeId, SpringId};
pub use spring::{Spring, SpringConfig};
pub use timer::{TimerId, TimerQueue};
