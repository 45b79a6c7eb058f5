//! Container configuration
//!
//! Everything here is fixed at construction. `TabsConfig` derives
//! `Deserialize` so hosts can keep it next to the rest of their settings:
//!
//! ```toml
//! motion_mode = "diff_clamp_snap"
//! min_header_height = 56
//! lazy = true
//!
//! [timing]
//! lazy_debounce_ms = 80
//! ```

use std::time::Duration;

use hoist_animation::SpringConfig;
use hoist_core::TabName;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the header responds to the focused pane's scroll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Header translates 1:1 with the focused list until fully collapsed
    #[default]
    Collapse,
    /// Header hides on scroll down and reappears on scroll up
    RevealOnScroll,
    /// Collapse, then spring fully open or closed after a drag
    Snap,
    /// Reveal-on-scroll, then spring fully open or closed after a drag
    DiffClampSnap,
}

impl MotionMode {
    /// Header position follows the accumulated scroll delta
    pub fn is_diff_clamp(self) -> bool {
        matches!(self, MotionMode::RevealOnScroll | MotionMode::DiffClampSnap)
    }

    /// Header settles fully open or closed after a gesture
    pub fn snaps(self) -> bool {
        matches!(self, MotionMode::Snap | MotionMode::DiffClampSnap)
    }
}

/// Delays used by the container's timers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Focus must be held this long before a lazy pane starts mounting
    pub lazy_debounce_ms: u64,
    /// Delay after a lazy pane's first layout before it counts as mounted
    pub lazy_settle_ms: u64,
    /// Wait for momentum to begin before treating a drag end as final
    pub drag_end_grace_ms: u64,
    /// Give up waiting for a snap scroll to echo back after this long
    pub snap_timeout_ms: u64,
    /// Content and header fade-in duration
    pub fade_in_ms: u32,
    /// Suggested scroll event throttle for panes
    pub scroll_throttle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            lazy_debounce_ms: 50,
            lazy_settle_ms: 100,
            drag_end_grace_ms: 16,
            snap_timeout_ms: 400,
            fade_in_ms: 300,
            scroll_throttle_ms: 16,
        }
    }
}

impl TimingConfig {
    pub fn lazy_debounce(&self) -> Duration {
        Duration::from_millis(self.lazy_debounce_ms)
    }

    pub fn lazy_settle(&self) -> Duration {
        Duration::from_millis(self.lazy_settle_ms)
    }

    pub fn drag_end_grace(&self) -> Duration {
        Duration::from_millis(self.drag_end_grace_ms)
    }

    pub fn snap_timeout(&self) -> Duration {
        Duration::from_millis(self.snap_timeout_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }
}

/// Configuration for a [`TabsContainer`](crate::TabsContainer)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Authoritative header height; measured when `None`
    pub header_height: Option<f32>,
    /// Portion of the header that never scrolls away
    pub min_header_height: f32,
    pub tab_bar_height: f32,
    pub motion_mode: MotionMode,
    /// Fraction of the collapsible distance below which a snap opens the header
    pub snap_threshold: f32,
    /// Defer mounting pane content until the pane is focused
    pub lazy: bool,
    /// Show lazily mounted content immediately instead of fading it in
    pub cancel_lazy_fade_in: bool,
    /// Tabs that skip lazy deferral
    pub start_mounted: Vec<TabName>,
    pub initial_tab_name: Option<TabName>,
    /// Offset lists by a content inset instead of top padding
    pub allow_header_overscroll: bool,
    /// Width override; the environment's width is used otherwise
    pub width: Option<f32>,
    /// Spring used to animate the diff-clamp accumulator
    #[serde(skip)]
    pub snap_spring: SpringConfig,
    pub timing: TimingConfig,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            header_height: None,
            min_header_height: 0.0,
            tab_bar_height: 48.0,
            motion_mode: MotionMode::Collapse,
            snap_threshold: 0.5,
            lazy: false,
            cancel_lazy_fade_in: false,
            start_mounted: Vec::new(),
            initial_tab_name: None,
            allow_header_overscroll: false,
            width: None,
            snap_spring: SpringConfig::snappy(),
            timing: TimingConfig::default(),
        }
    }
}

impl TabsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapse() -> Self {
        Self::default()
    }

    pub fn reveal_on_scroll() -> Self {
        Self::default().with_motion_mode(MotionMode::RevealOnScroll)
    }

    pub fn snap() -> Self {
        Self::default().with_motion_mode(MotionMode::Snap)
    }

    pub fn diff_clamp_snap() -> Self {
        Self::default().with_motion_mode(MotionMode::DiffClampSnap)
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: TabsConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_motion_mode(mut self, mode: MotionMode) -> Self {
        self.motion_mode = mode;
        self
    }

    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = Some(height);
        self
    }

    pub fn with_min_header_height(mut self, height: f32) -> Self {
        self.min_header_height = height;
        self
    }

    pub fn with_tab_bar_height(mut self, height: f32) -> Self {
        self.tab_bar_height = height;
        self
    }

    pub fn with_snap_threshold(mut self, threshold: f32) -> Self {
        self.snap_threshold = threshold;
        self
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn with_cancel_lazy_fade_in(mut self, cancel: bool) -> Self {
        self.cancel_lazy_fade_in = cancel;
        self
    }

    pub fn with_start_mounted(mut self, tabs: impl IntoIterator<Item = impl Into<TabName>>) -> Self {
        self.start_mounted = tabs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_initial_tab(mut self, name: impl Into<TabName>) -> Self {
        self.initial_tab_name = Some(name.into());
        self
    }

    pub fn with_header_overscroll(mut self, allow: bool) -> Self {
        self.allow_header_overscroll = allow;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Check ranges that deserialization cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.snap_threshold) {
            return Err(ConfigError::SnapThreshold(self.snap_threshold));
        }

        let heights = [
            ("header_height", self.header_height),
            ("min_header_height", Some(self.min_header_height)),
            ("tab_bar_height", Some(self.tab_bar_height)),
            ("width", self.width),
        ];
        for (field, value) in heights {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::Height { field, value });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TabsConfig::default();
        assert_eq!(config.min_header_height, 0.0);
        assert_eq!(config.tab_bar_height, 48.0);
        assert_eq!(config.snap_threshold, 0.5);
        assert_eq!(config.motion_mode, MotionMode::Collapse);
        assert!(!config.lazy);
        assert_eq!(config.timing.lazy_debounce(), Duration::from_millis(50));
        assert_eq!(config.timing.lazy_settle(), Duration::from_millis(100));
    }

    #[test]
    fn test_from_toml() {
        let config = TabsConfig::from_toml_str(
            r#"
            motion_mode = "diff_clamp_snap"
            header_height = 250.0
            lazy = true
            start_mounted = ["feed"]
            initial_tab_name = "photos"

            [timing]
            lazy_debounce_ms = 80
            "#,
        )
        .unwrap();

        assert_eq!(config.motion_mode, MotionMode::DiffClampSnap);
        assert_eq!(config.header_height, Some(250.0));
        assert!(config.lazy);
        assert_eq!(config.start_mounted, vec![TabName::from("feed")]);
        assert_eq!(config.initial_tab_name.as_ref().map(TabName::as_str), Some("photos"));
        assert_eq!(config.timing.lazy_debounce_ms, 80);
        // Unspecified fields keep their defaults
        assert_eq!(config.timing.lazy_settle_ms, 100);
        assert_eq!(config.tab_bar_height, 48.0);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = TabsConfig::from_toml_str("snap_threshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::SnapThreshold(t) if t == 1.5));
    }

    #[test]
    fn test_rejects_negative_height() {
        let err = TabsConfig::snap().with_tab_bar_height(-1.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Height { field: "tab_bar_height", .. }));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            TabsConfig::from_toml_str("motion_mode = \"sideways\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_mode_predicates() {
        assert!(MotionMode::RevealOnScroll.is_diff_clamp());
        assert!(!MotionMode::RevealOnScroll.snaps());
        assert!(MotionMode::DiffClampSnap.is_diff_clamp());
        assert!(MotionMode::DiffClampSnap.snaps());
        assert!(MotionMode::Snap.snaps());
        assert!(!MotionMode::Collapse.is_diff_clamp());
    }
}
