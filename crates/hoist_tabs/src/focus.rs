//! Which pane is focused
//!
//! The pager reports a fractional page position while the user swipes. The
//! focused index follows the nearest page; the container applies the switch
//! correction and then commits the new index in the same call.

use hoist_core::TabName;
use tracing::{debug, trace};

/// How a tab list replacement affected focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refocus {
    /// Focused tab kept its index
    Unchanged,
    /// Focused tab survived at a different index
    Moved { from: usize, to: usize },
    /// Focused tab was removed; `to` is the re-clamped index
    Removed { from: usize, to: usize },
}

/// Focused index and fractional pager position
#[derive(Clone, Debug)]
pub struct FocusTracker {
    tabs: Vec<TabName>,
    index: usize,
    index_decimal: f32,
    /// Target of a programmatic jump still animating in the pager
    pending_jump: Option<usize>,
}

impl FocusTracker {
    /// `tabs` must be non-empty and `initial` in range
    pub fn new(tabs: Vec<TabName>, initial: usize) -> Self {
        let index = initial.min(tabs.len().saturating_sub(1));
        Self {
            tabs,
            index,
            index_decimal: index as f32,
            pending_jump: None,
        }
    }

    pub fn tabs(&self) -> &[TabName] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn index_decimal(&self) -> f32 {
        self.index_decimal
    }

    pub fn focused_tab(&self) -> &TabName {
        &self.tabs[self.index]
    }

    pub fn tab_at(&self, index: usize) -> Option<&TabName> {
        self.tabs.get(index)
    }

    pub fn position(&self, tab: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.as_str() == tab)
    }

    pub fn is_focused(&self, tab: &str) -> bool {
        self.focused_tab().as_str() == tab
    }

    pub fn is_jumping(&self) -> bool {
        self.pending_jump.is_some()
    }

    fn last_index(&self) -> usize {
        self.tabs.len().saturating_sub(1)
    }

    /// Nearest page to the pager position, or the jump target while one is in flight
    pub fn target_index(&self) -> usize {
        if let Some(target) = self.pending_jump {
            return target;
        }
        (self.index_decimal.round().max(0.0) as usize).min(self.last_index())
    }

    /// Pager frame. Returns the index to switch to, if focus must move.
    pub fn on_page_scroll(&mut self, page: usize, fraction: f32) -> Option<usize> {
        if !fraction.is_finite() {
            return None;
        }

        let position = page as f32 + fraction.clamp(0.0, 1.0);
        self.index_decimal = position.clamp(0.0, self.last_index() as f32);
        trace!(page, fraction, index_decimal = self.index_decimal, "page scroll");

        if let Some(target) = self.pending_jump {
            if (self.index_decimal - target as f32).abs() < f32::EPSILON {
                self.pending_jump = None;
            }
            return None;
        }

        let target = self.target_index();
        (target != self.index).then_some(target)
    }

    /// Pager came to rest on `index`
    pub fn on_page_settled(&mut self, index: usize) -> Option<usize> {
        let index = index.min(self.last_index());
        self.pending_jump = None;
        self.index_decimal = index as f32;
        (index != self.index).then_some(index)
    }

    /// Start a programmatic jump; intermediate pager frames will not retarget
    pub fn begin_jump(&mut self, index: usize) {
        self.pending_jump = Some(index);
    }

    /// Make `index` the focused index
    pub fn commit(&mut self, index: usize) {
        let index = index.min(self.last_index());
        if self.pending_jump.is_some() {
            self.index_decimal = index as f32;
        }
        self.index = index;
    }

    /// Replace the tab list, keeping the focused tab when it survives
    ///
    /// `tabs` must be non-empty.
    pub fn replace_tabs(&mut self, tabs: Vec<TabName>) -> Refocus {
        let from = self.index;
        let focused = self.focused_tab().clone();
        self.tabs = tabs;
        self.pending_jump = None;

        let refocus = match self.position(focused.as_str()) {
            Some(to) if to == from => Refocus::Unchanged,
            Some(to) => Refocus::Moved { from, to },
            None => Refocus::Removed {
                from,
                to: from.min(self.last_index()),
            },
        };

        match refocus {
            Refocus::Unchanged => {}
            Refocus::Moved { to, .. } | Refocus::Removed { to, .. } => {
                debug!(?refocus, "focus re-clamped after tab list change");
                self.index = to;
                self.index_decimal = to as f32;
            }
        }
        refocus
    }
}
