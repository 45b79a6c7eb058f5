//! Per-tab scroll offsets and the shared scroll position
//!
//! Offsets are stored in content coordinates (list offset plus content
//! inset) and are never negative. The accumulated position
//! `offset(focused) + switch_correction` is what the diff-clamp accumulator
//! consumes: it stays continuous across tab switches and engine writes, so
//! only user scrolling produces deltas.

use hoist_core::TabName;
use rustc_hash::FxHashMap;
use tracing::trace;

#[derive(Clone, Debug, Default)]
pub struct ScrollPositionStore {
    offsets: FxHashMap<TabName, f32>,
    content_heights: FxHashMap<TabName, f32>,
    /// Shared scroll position
    current: f32,
    /// Focused tab's own offset, 0 until it records one
    focused_offset: f32,
    switch_correction: f32,
}

impl ScrollPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded offset; `None` for tabs never focused or synchronized
    pub fn offset(&self, tab: &str) -> Option<f32> {
        self.offsets.get(tab).copied()
    }

    /// Recorded offset, with unvisited tabs reading as the top
    pub fn offset_or_top(&self, tab: &str) -> f32 {
        self.offset(tab).unwrap_or(0.0)
    }

    /// Shared scroll position: the focused tab's offset, or the previous
    /// tab's while the focused one has none recorded
    pub fn current_offset(&self) -> f32 {
        self.current
    }

    pub fn switch_correction(&self) -> f32 {
        self.switch_correction
    }

    pub fn accumulated(&self) -> f32 {
        self.focused_offset + self.switch_correction
    }

    /// Record a scroll event, returning the accumulated delta
    ///
    /// Events from any tab other than `focused` are ignored.
    pub fn record_offset(&mut self, focused: &TabName, tab: &str, y: f32) -> Option<f32> {
        if focused.as_str() != tab {
            trace!(tab, "ignoring offset from unfocused tab");
            return None;
        }

        let y = y.max(0.0);
        let before = self.accumulated();
        self.offsets.insert(focused.clone(), y);
        self.current = y;
        self.focused_offset = y;
        Some(self.accumulated() - before)
    }

    /// Engine write to an unfocused tab
    pub(crate) fn set_offset(&mut self, tab: &TabName, y: f32) {
        self.offsets.insert(tab.clone(), y.max(0.0));
    }

    /// Engine write to the focused tab, absorbed by the switch correction
    pub(crate) fn align_focused(&mut self, tab: &TabName, y: f32) {
        let y = y.max(0.0);
        self.switch_correction += self.focused_offset - y;
        self.offsets.insert(tab.clone(), y);
        self.current = y;
        self.focused_offset = y;
    }

    /// Move the shared position from a tab at `from_offset` onto `to`
    pub(crate) fn switch_to(&mut self, from_offset: f32, to: &str) {
        let to_offset = self.offset_or_top(to);
        self.switch_correction += from_offset - to_offset;
        self.focused_offset = to_offset;
        if let Some(offset) = self.offset(to) {
            self.current = offset;
        }
        trace!(
            to,
            from_offset,
            to_offset,
            correction = self.switch_correction,
            "switch correction applied"
        );
    }

    pub fn record_content_height(&mut self, tab: &TabName, height: f32) {
        self.content_heights.insert(tab.clone(), height.max(0.0));
    }

    pub fn content_height(&self, tab: &str) -> Option<f32> {
        self.content_heights.get(tab).copied()
    }

    /// Clamp a target offset to how far the tab's list can actually scroll
    pub fn clamp_to_content(
        &self,
        tab: &str,
        y: f32,
        container_height: Option<f32>,
        content_inset: f32,
    ) -> f32 {
        match (self.content_height(tab), container_height) {
            (Some(content), Some(container)) => {
                let max = (content + content_inset - container).max(0.0);
                y.min(max)
            }
            _ => y,
        }
    }

    /// Forget a removed tab
    pub fn remove(&mut self, tab: &str) {
        self.offsets.remove(tab);
        self.content_heights.remove(tab);
    }
}
