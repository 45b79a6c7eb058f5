//! Render-facing snapshots
//!
//! Pure values derived from container state on demand. Collaborators render
//! from these and never read engine internals.

use std::time::Duration;

use hoist_core::TabName;

/// Everything the header component needs for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderProps {
    /// Vertical translation, 0 when fully expanded, never positive
    pub translate_y: f32,
    pub opacity: f32,
    /// `None` until measured
    pub height: Option<f32>,
    pub focused_tab: TabName,
    pub index_decimal: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabBarProps {
    pub tab_names: Vec<TabName>,
    pub focused_tab: TabName,
    pub index_decimal: f32,
    pub height: f32,
}

/// Per-pane properties
#[derive(Clone, Debug, PartialEq)]
pub struct SceneProps {
    pub tab: TabName,
    pub scroll_enabled: bool,
    /// Whether the pane's content should be built at all
    pub should_render: bool,
    pub content_opacity: f32,
    pub padding_top: f32,
    pub min_height: f32,
    pub content_inset: f32,
    pub scroll_event_throttle: Duration,
}

/// Header position within the container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderMeasurements {
    /// Same as the header's `translate_y`
    pub top: f32,
    pub height: Option<f32>,
}

/// Emitted after every focus switch
#[derive(Clone, Debug, PartialEq)]
pub struct TabChange {
    pub prev_index: usize,
    pub index: usize,
    pub prev_tab_name: TabName,
    pub tab_name: TabName,
}
