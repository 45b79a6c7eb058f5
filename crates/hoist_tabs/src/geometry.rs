//! Header, tab bar and container measurements
//!
//! Layout callbacks arrive repeatedly with the same values; a report within
//! [`LAYOUT_EPSILON`] of the stored value is a no-op so it never re-triggers
//! synchronization.

use hoist_core::LAYOUT_EPSILON;
use tracing::{debug, warn};

use crate::config::TabsConfig;

/// Raw measurements, `None` until first reported
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub header_height: Option<f32>,
    pub min_header_height: f32,
    pub tab_bar_height: Option<f32>,
    pub container_height: Option<f32>,
    pub width: Option<f32>,
}

/// Outcome of a layout report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryChange {
    /// Dropped, or within epsilon of the stored value
    Unchanged,
    Updated,
    /// The value was unmeasured before this report
    FirstMeasured,
}

impl GeometryChange {
    pub fn is_changed(self) -> bool {
        self != GeometryChange::Unchanged
    }
}

/// Tracks measured geometry and derives layout values from it
#[derive(Clone, Debug)]
pub struct GeometryTracker {
    geometry: Geometry,
    allow_header_overscroll: bool,
    width_override: Option<f32>,
}

impl GeometryTracker {
    pub fn new(config: &TabsConfig) -> Self {
        Self {
            geometry: Geometry {
                header_height: config.header_height.filter(|h| h.is_finite() && *h >= 0.0),
                min_header_height: config.min_header_height.max(0.0),
                tab_bar_height: Some(config.tab_bar_height.max(0.0)),
                container_height: None,
                width: None,
            },
            allow_header_overscroll: config.allow_header_overscroll,
            width_override: config.width,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn report_header_height(&mut self, height: f32) -> GeometryChange {
        Self::update(&mut self.geometry.header_height, height, "header_height")
    }

    pub fn report_tab_bar_height(&mut self, height: f32) -> GeometryChange {
        Self::update(&mut self.geometry.tab_bar_height, height, "tab_bar_height")
    }

    pub fn report_container_height(&mut self, height: f32) -> GeometryChange {
        Self::update(&mut self.geometry.container_height, height, "container_height")
    }

    pub fn report_width(&mut self, width: f32) -> GeometryChange {
        Self::update(&mut self.geometry.width, width, "width")
    }

    fn update(slot: &mut Option<f32>, value: f32, field: &'static str) -> GeometryChange {
        if !value.is_finite() || value < 0.0 {
            warn!(field, value, "dropping invalid layout report");
            return GeometryChange::Unchanged;
        }

        match *slot {
            Some(current) if (current - value).abs() < LAYOUT_EPSILON => GeometryChange::Unchanged,
            Some(current) => {
                debug!(field, from = current, to = value, "geometry updated");
                *slot = Some(value);
                GeometryChange::Updated
            }
            None => {
                debug!(field, value, "geometry measured");
                *slot = Some(value);
                GeometryChange::FirstMeasured
            }
        }
    }

    pub fn header_height(&self) -> Option<f32> {
        self.geometry.header_height
    }

    pub fn is_header_measured(&self) -> bool {
        self.geometry.header_height.is_some()
    }

    pub fn tab_bar_height(&self) -> f32 {
        self.geometry.tab_bar_height.unwrap_or(0.0)
    }

    pub fn container_height(&self) -> Option<f32> {
        self.geometry.container_height
    }

    pub fn width(&self) -> Option<f32> {
        self.width_override.or(self.geometry.width)
    }

    /// How far the header can scroll away
    pub fn header_scroll_distance(&self) -> f32 {
        self.geometry
            .header_height
            .map_or(0.0, |h| (h - self.geometry.min_header_height).max(0.0))
    }

    fn header_and_tab_bar(&self) -> f32 {
        self.geometry.header_height.unwrap_or(0.0) + self.tab_bar_height()
    }

    /// Offset between content coordinates and list coordinates
    pub fn content_inset(&self) -> f32 {
        if self.allow_header_overscroll {
            self.header_and_tab_bar()
        } else {
            0.0
        }
    }

    /// Top padding reserving room for the header and tab bar
    pub fn padding_top(&self) -> f32 {
        if self.allow_header_overscroll {
            0.0
        } else {
            self.header_and_tab_bar()
        }
    }

    /// Content must be tall enough to scroll the header fully away
    pub fn min_content_height(&self) -> f32 {
        let container = self.geometry.container_height.unwrap_or(0.0);
        if self.allow_header_overscroll {
            (container - self.tab_bar_height()).max(0.0)
        } else {
            container + self.geometry.header_height.unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(config: TabsConfig) -> GeometryTracker {
        GeometryTracker::new(&config)
    }

    #[test]
    fn test_unmeasured_header_has_no_distance() {
        let geometry = tracker(TabsConfig::default());
        assert!(!geometry.is_header_measured());
        assert_eq!(geometry.header_scroll_distance(), 0.0);
    }

    #[test]
    fn test_scroll_distance_respects_min_header() {
        let mut geometry = tracker(TabsConfig::default().with_min_header_height(50.0));
        assert_eq!(geometry.report_header_height(250.0), GeometryChange::FirstMeasured);
        assert_eq!(geometry.header_scroll_distance(), 200.0);

        geometry.report_header_height(30.0);
        assert_eq!(geometry.header_scroll_distance(), 0.0);
    }

    #[test]
    fn test_report_within_epsilon_is_noop() {
        let mut geometry = tracker(TabsConfig::default());
        geometry.report_header_height(200.0);
        assert_eq!(geometry.report_header_height(200.05), GeometryChange::Unchanged);
        assert_eq!(geometry.report_header_height(201.0), GeometryChange::Updated);
    }

    #[test]
    fn test_invalid_reports_dropped() {
        let mut geometry = tracker(TabsConfig::default());
        assert_eq!(geometry.report_header_height(f32::NAN), GeometryChange::Unchanged);
        assert_eq!(geometry.report_container_height(-5.0), GeometryChange::Unchanged);
        assert!(!geometry.is_header_measured());
        assert_eq!(geometry.container_height(), None);
    }

    #[test]
    fn test_padding_mode() {
        let mut geometry = tracker(TabsConfig::default().with_header_height(200.0));
        geometry.report_container_height(600.0);

        assert_eq!(geometry.content_inset(), 0.0);
        assert_eq!(geometry.padding_top(), 248.0);
        assert_eq!(geometry.min_content_height(), 800.0);
    }

    #[test]
    fn test_inset_mode() {
        let mut geometry = tracker(
            TabsConfig::default()
                .with_header_height(200.0)
                .with_header_overscroll(true),
        );
        geometry.report_container_height(600.0);

        assert_eq!(geometry.content_inset(), 248.0);
        assert_eq!(geometry.padding_top(), 0.0);
        assert_eq!(geometry.min_content_height(), 552.0);
    }

    #[test]
    fn test_width_override_wins() {
        let mut geometry = tracker(TabsConfig::default().with_width(320.0));
        geometry.report_width(400.0);
        assert_eq!(geometry.width(), Some(320.0));
    }
}
