//! The tabs container
//!
//! `TabsContainer` owns every piece of engine state and is the only writer.
//! Each input (scroll, layout, pager frame, frame tick) is one `&mut self`
//! call and all derived updates happen before it returns.

use std::time::Duration;

use hoist_animation::{AnimationScheduler, TimerQueue};
use hoist_core::events::event_types::{INDEX_CHANGE, TAB_CHANGE};
use hoist_core::{approx_eq, finite, within_collapsible, ListenerId, Listeners, Tab, TabName};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::{MotionMode, TabsConfig};
use crate::error::{Result, TabsError};
use crate::focus::{FocusTracker, Refocus};
use crate::geometry::{GeometryChange, GeometryTracker};
use crate::header::HeaderMotionController;
use crate::lazy::{LazyMountController, MountState};
use crate::props::{HeaderMeasurements, HeaderProps, SceneProps, TabBarProps, TabChange};
use crate::registry::{PaneHandle, PaneRegistry};
use crate::store::ScrollPositionStore;
use crate::sync::{GestureState, ReconcileContext, SyncEngine};

/// Imperative page control of the horizontal pager
pub trait Pager: Send {
    fn jump_to_page(&mut self, index: usize, animated: bool);
}

impl<F> Pager for F
where
    F: FnMut(usize, bool) + Send,
{
    fn jump_to_page(&mut self, index: usize, animated: bool) {
        self(index, animated)
    }
}

/// Delayed continuations, keyed by tab or gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TabsTimer {
    LazyDebounce(TabName),
    LazySettle(TabName),
    /// One frame after a drag end, unless momentum begins
    DragEndGrace(u64),
    /// Snap scroll never echoed back
    SnapTimeout(u64),
}

impl TabsTimer {
    fn is_gesture(&self) -> bool {
        matches!(self, TabsTimer::DragEndGrace(_) | TabsTimer::SnapTimeout(_))
    }
}

fn validate_tabs(tabs: Vec<TabName>) -> Result<Vec<TabName>> {
    if tabs.is_empty() {
        return Err(TabsError::EmptyTabs);
    }
    let mut seen = FxHashSet::default();
    for tab in &tabs {
        if !seen.insert(tab) {
            return Err(TabsError::DuplicateTab(tab.clone()));
        }
    }
    Ok(tabs)
}

/// Collapsible-header tab container
pub struct TabsContainer {
    config: TabsConfig,
    geometry: GeometryTracker,
    registry: PaneRegistry,
    focus: FocusTracker,
    store: ScrollPositionStore,
    sync: SyncEngine,
    header: HeaderMotionController,
    lazy: LazyMountController,
    scheduler: AnimationScheduler,
    timers: TimerQueue<TabsTimer>,
    pager: Option<Box<dyn Pager>>,
    listeners: Listeners<TabChange>,
}

impl TabsContainer {
    /// Create a container over `tabs`
    ///
    /// Fails on an empty or duplicate tab list, an unknown initial tab, or an
    /// invalid configuration.
    pub fn new<I, T>(tabs: I, config: TabsConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<TabName>,
    {
        config.validate()?;
        let tabs = validate_tabs(tabs.into_iter().map(Into::into).collect())?;

        let initial = match &config.initial_tab_name {
            Some(name) => tabs
                .iter()
                .position(|tab| tab == name)
                .ok_or_else(|| TabsError::UnknownTab(name.clone()))?,
            None => 0,
        };

        debug!(
            tabs = tabs.len(),
            initial,
            mode = ?config.motion_mode,
            lazy = config.lazy,
            "tabs container created"
        );

        Ok(Self {
            geometry: GeometryTracker::new(&config),
            registry: PaneRegistry::new(),
            store: ScrollPositionStore::new(),
            sync: SyncEngine::new(config.motion_mode),
            header: HeaderMotionController::new(&config),
            lazy: LazyMountController::new(&config, &tabs, &tabs[initial]),
            focus: FocusTracker::new(tabs, initial),
            scheduler: AnimationScheduler::new(),
            timers: TimerQueue::new(),
            pager: None,
            listeners: Listeners::new(),
            config,
        })
    }

    pub fn with_pager(mut self, pager: impl Pager + 'static) -> Self {
        self.set_pager(pager);
        self
    }

    pub fn set_pager(&mut self, pager: impl Pager + 'static) {
        self.pager = Some(Box::new(pager));
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GeometryTracker {
        &self.geometry
    }

    pub fn tabs(&self) -> &[TabName] {
        self.focus.tabs()
    }

    pub fn focused_tab(&self) -> &TabName {
        self.focus.focused_tab()
    }

    pub fn current_index(&self) -> usize {
        self.focus.index()
    }

    pub fn index_decimal(&self) -> f32 {
        self.focus.index_decimal()
    }

    /// Named tab with its current position
    pub fn tab(&self, name: &str) -> Option<Tab> {
        let index = self.focus.position(name)?;
        let name = self.focus.tab_at(index)?.clone();
        Some(Tab::new(name, index))
    }

    /// Recorded content offset of a tab
    pub fn offset(&self, tab: &str) -> Option<f32> {
        self.store.offset(tab)
    }

    pub fn shared_scroll_position(&self) -> f32 {
        self.store.current_offset()
    }

    pub fn accumulated_position(&self) -> f32 {
        self.store.accumulated()
    }

    pub fn switch_correction(&self) -> f32 {
        self.store.switch_correction()
    }

    pub fn accumulator(&self) -> f32 {
        self.header.accumulator()
    }

    pub fn header_scroll_distance(&self) -> f32 {
        self.geometry.header_scroll_distance()
    }

    pub fn mount_state(&self, tab: &str) -> MountState {
        self.lazy.state(tab)
    }

    pub fn gesture_state(&self) -> GestureState {
        self.sync.gesture_state()
    }

    pub fn last_snap_target(&self) -> f32 {
        self.sync.last_snap_target()
    }

    /// Whether any spring, tween or timer still needs frames
    pub fn needs_frame(&self) -> bool {
        self.scheduler.has_active_animations() || !self.timers.is_empty()
    }

    fn tab_name(&self, tab: &str) -> Option<TabName> {
        let name = self.focus.position(tab).and_then(|i| self.focus.tab_at(i)).cloned();
        if name.is_none() {
            debug!(tab, "ignoring event for unknown tab");
        }
        name
    }

    /// Events are only live for the focused, mounted pane
    fn is_live(&self, tab: &str) -> bool {
        self.focus.is_focused(tab) && self.lazy.is_mounted(tab)
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn report_header_height(&mut self, height: f32) {
        let change = self.geometry.report_header_height(height);
        let hsd = self.geometry.header_scroll_distance();
        match change {
            GeometryChange::Unchanged => {}
            GeometryChange::FirstMeasured => {
                self.header.clamp_to(hsd);
                self.header.reveal(&mut self.scheduler, self.config.timing.fade_in_ms);
                self.resync_mounted();
            }
            GeometryChange::Updated => {
                self.header.clamp_to(hsd);
                self.reconcile();
            }
        }
    }

    pub fn report_tab_bar_height(&mut self, height: f32) {
        if self.geometry.report_tab_bar_height(height).is_changed() {
            self.reconcile();
        }
    }

    pub fn report_container_height(&mut self, height: f32) {
        self.geometry.report_container_height(height);
    }

    pub fn report_width(&mut self, width: f32) {
        self.geometry.report_width(width);
    }

    /// Re-issue every mounted pane's stored offset, then synchronize
    fn resync_mounted(&mut self) {
        let inset = self.geometry.content_inset();
        for tab in self.focus.tabs() {
            if !self.lazy.is_mounted(tab) {
                continue;
            }
            if let Some(y) = self.store.offset(tab) {
                self.registry.scroll_to(tab, y - inset, false);
            }
        }
        self.reconcile();
    }

    // -------------------------------------------------------------------------
    // Panes
    // -------------------------------------------------------------------------

    /// Register a pane's scroll handle; unknown tabs are ignored
    pub fn register_pane(&mut self, tab: &str, handle: impl PaneHandle + 'static) -> bool {
        let Some(name) = self.tab_name(tab) else {
            return false;
        };

        self.registry.register(name.clone(), Box::new(handle));
        if self.lazy.is_mounted(&name) {
            let inset = self.geometry.content_inset();
            match self.store.offset(&name) {
                Some(y) if y > 0.0 => {
                    self.registry.scroll_to(&name, y - inset, false);
                }
                None if self.focus.is_focused(&name) => {
                    let target = self.store.clamp_to_content(
                        &name,
                        self.store.current_offset(),
                        self.geometry.container_height(),
                        inset,
                    );
                    if target > 0.0 {
                        self.store.align_focused(&name, target);
                        self.registry.scroll_to(&name, target - inset, false);
                        debug!(tab = %name, target, "late pane aligned to shared position");
                    }
                }
                _ => {}
            }
            self.reconcile();
        }
        true
    }

    pub fn unregister_pane(&mut self, tab: &str) -> bool {
        self.registry.unregister(tab)
    }

    /// First layout of a pane's list
    pub fn on_pane_layout(&mut self, tab: &str) {
        if let Some(name) = self.tab_name(tab) {
            self.lazy.on_layout(&name, &mut self.timers);
        }
    }

    pub fn on_pane_content_height(&mut self, tab: &str, height: f32) {
        let Some(height) = finite(height) else {
            warn!(tab, height, "dropping non-finite content height");
            return;
        };
        if let Some(name) = self.tab_name(tab) {
            self.store.record_content_height(&name, height);
        }
    }

    /// Scroll event from a pane's list, in list coordinates
    pub fn on_pane_scroll(&mut self, tab: &str, content_offset_y: f32) {
        let Some(y) = finite(content_offset_y) else {
            warn!(tab, content_offset_y, "dropping non-finite scroll offset");
            return;
        };
        if self.tab_name(tab).is_none() {
            return;
        }
        if !self.is_live(tab) {
            trace!(tab, "ignoring scroll from inactive pane");
            return;
        }

        let y = y + self.geometry.content_inset();
        let focused = self.focus.focused_tab().clone();
        let Some(delta) = self.store.record_offset(&focused, tab, y) else {
            return;
        };
        trace!(tab, y, delta, "pane scroll");

        if !self.header.is_snapping() {
            let hsd = self.geometry.header_scroll_distance();
            self.header.apply_delta(delta, hsd);
        }

        if let Some(target) = self.sync.snap_target() {
            if self.header.mode() == MotionMode::Snap && approx_eq(target, self.store.current_offset()) {
                self.finish_snap();
                return;
            }
        }

        self.reconcile();
    }

    pub fn on_pane_drag_begin(&mut self, tab: &str) {
        if !self.is_live(tab) {
            return;
        }
        if self.header.cancel_snap(&mut self.scheduler) {
            debug!("accumulator snap interrupted by drag");
        }
        self.timers.retain(|timer| !timer.is_gesture());
        self.sync.begin_drag();
    }

    pub fn on_pane_drag_end(&mut self, tab: &str) {
        if !self.is_live(tab) {
            return;
        }
        self.sync.end_drag();
        if self.header.mode().snaps() {
            let id = self.sync.gesture_id();
            self.timers
                .schedule(self.config.timing.drag_end_grace(), TabsTimer::DragEndGrace(id));
        } else {
            self.sync.settle_release();
        }
    }

    pub fn on_pane_momentum_begin(&mut self, tab: &str) {
        if !self.is_live(tab) {
            return;
        }
        self.timers
            .retain(|timer| !matches!(timer, TabsTimer::DragEndGrace(_)));
        self.sync.begin_momentum();
    }

    pub fn on_pane_momentum_end(&mut self, tab: &str) {
        if !self.is_live(tab) {
            return;
        }
        if self.sync.end_momentum() {
            self.snap();
        }
    }

    // -------------------------------------------------------------------------
    // Header
    // -------------------------------------------------------------------------

    /// The user started dragging the header itself
    pub fn on_header_drag_begin(&mut self) {
        self.sync.begin_header_drag();
    }

    pub fn on_header_drag_end(&mut self) {
        self.sync.end_header_drag();
        self.reconcile();
    }

    fn snap(&mut self) {
        let hsd = self.geometry.header_scroll_distance();
        if hsd <= 0.0 {
            return;
        }
        match self.header.mode() {
            MotionMode::Snap => self.snap_header(hsd),
            MotionMode::DiffClampSnap => self.snap_accumulator(hsd),
            MotionMode::Collapse | MotionMode::RevealOnScroll => {}
        }
    }

    fn snap_header(&mut self, hsd: f32) {
        let offset = self.store.current_offset();
        let Some(target) = self.header.snap_target(offset, hsd) else {
            return;
        };

        if approx_eq(offset, target) {
            self.sync.record_snap(target);
            self.reconcile();
            return;
        }
        if !self.sync.start_snap(target) {
            return;
        }

        let focused = self.focus.focused_tab().clone();
        let inset = self.geometry.content_inset();
        self.registry.scroll_to(&focused, target - inset, true);
        let id = self.sync.gesture_id();
        self.timers
            .schedule(self.config.timing.snap_timeout(), TabsTimer::SnapTimeout(id));
    }

    fn snap_accumulator(&mut self, hsd: f32) {
        let Some(target) = self.header.accumulator_snap_target(hsd) else {
            return;
        };
        if !self.sync.start_snap(target) {
            return;
        }
        self.header.start_accumulator_snap(&mut self.scheduler, target);

        // Hiding the header over a list still inside the collapsible region
        // would uncover blank padding, so the list moves with it
        let offset = self.store.current_offset();
        if target >= hsd && within_collapsible(offset, hsd) && !approx_eq(offset, hsd) {
            let focused = self.focus.focused_tab().clone();
            let inset = self.geometry.content_inset();
            self.registry.scroll_to(&focused, hsd - inset, true);
        }
    }

    fn finish_snap(&mut self) {
        if self.sync.finish_snap() {
            self.timers
                .retain(|timer| !matches!(timer, TabsTimer::SnapTimeout(_)));
            self.reconcile();
        }
    }

    // -------------------------------------------------------------------------
    // Synchronization
    // -------------------------------------------------------------------------

    /// Bring unfocused panes in line with the focused one
    ///
    /// Returns the number of panes scrolled. Runs after every focused scroll
    /// event; exposed for hosts that need to force a pass.
    pub fn reconcile(&mut self) -> usize {
        if self.sync.is_suppressed() {
            trace!("reconciliation suppressed");
            return 0;
        }

        let ctx = ReconcileContext {
            tabs: self.focus.tabs(),
            focused: self.focus.focused_tab(),
            header_scroll_distance: self.geometry.header_scroll_distance(),
            content_inset: self.geometry.content_inset(),
            accumulator: self.header.accumulator(),
            container_height: self.geometry.container_height(),
        };
        self.sync.reconcile(&ctx, &mut self.store, &mut self.registry)
    }

    // -------------------------------------------------------------------------
    // Pager and focus
    // -------------------------------------------------------------------------

    pub fn on_page_scroll(&mut self, page: usize, fraction: f32) {
        if let Some(target) = self.focus.on_page_scroll(page, fraction) {
            self.switch_focus(target);
        }
    }

    pub fn on_page_settled(&mut self, index: usize) {
        if let Some(target) = self.focus.on_page_settled(index) {
            self.switch_focus(target);
        }
    }

    fn switch_focus(&mut self, target: usize) {
        let prev_index = self.focus.index();
        let prev_tab = self.focus.focused_tab().clone();
        let from_offset = self.store.offset_or_top(&prev_tab);
        self.commit_switch(prev_index, prev_tab, from_offset, target);
    }

    /// Apply the correction, move focus and notify, in that order
    fn commit_switch(&mut self, prev_index: usize, prev_tab: TabName, from_offset: f32, target: usize) {
        let Some(to) = self.focus.tab_at(target).cloned() else {
            return;
        };

        if let Some(snap) = self.sync.snap_target() {
            // The old pane keeps animating to its snap target
            if self.header.mode() == MotionMode::Snap && self.focus.position(&prev_tab).is_some() {
                self.store.set_offset(&prev_tab, snap);
            }
        }
        self.sync.reset_gesture();
        self.timers.retain(|timer| !timer.is_gesture());

        self.sync.apply_switch(&mut self.store, from_offset, &to);
        self.focus.commit(target);
        self.lazy.on_focus(&to, &mut self.timers);

        let change = TabChange {
            prev_index,
            index: target,
            prev_tab_name: prev_tab,
            tab_name: to,
        };
        self.listeners.dispatch(TAB_CHANGE, &change);
        self.listeners.dispatch(INDEX_CHANGE, &change);
    }

    /// Jump to the tab at `index`
    pub fn try_set_index(&mut self, index: usize) -> Result<()> {
        let len = self.focus.len();
        if index >= len {
            return Err(TabsError::IndexOutOfRange { index, len });
        }
        if index == self.focus.index() {
            return Ok(());
        }

        self.focus.begin_jump(index);
        self.switch_focus(index);
        if let Some(pager) = self.pager.as_mut() {
            pager.jump_to_page(index, true);
        }
        Ok(())
    }

    /// Jump to the tab at `index`; `false` if out of range
    pub fn set_index(&mut self, index: usize) -> bool {
        match self.try_set_index(index) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "set_index rejected");
                false
            }
        }
    }

    pub fn try_jump_to_tab(&mut self, name: &str) -> Result<()> {
        match self.focus.position(name) {
            Some(index) => self.try_set_index(index),
            None => Err(TabsError::UnknownTab(TabName::from(name))),
        }
    }

    /// Jump to the named tab; `false` if no such tab
    pub fn jump_to_tab(&mut self, name: &str) -> bool {
        match self.try_jump_to_tab(name) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "jump_to_tab rejected");
                false
            }
        }
    }

    /// Tab bar press
    ///
    /// Pressing another tab jumps to it. Pressing the focused tab scrolls its
    /// list back to the top of the content with the header collapsed.
    pub fn on_tab_press(&mut self, name: &str) -> bool {
        let Some(index) = self.focus.position(name) else {
            debug!(name, "press on unknown tab");
            return false;
        };
        if index != self.focus.index() {
            return self.set_index(index);
        }

        if self.lazy.is_mounted(name) {
            let hsd = self.geometry.header_scroll_distance();
            let inset = self.geometry.content_inset();
            self.registry.scroll_to(name, hsd - inset, true);
        }
        true
    }

    /// Replace the tab list
    ///
    /// Removed tabs are purged from every per-tab map. If the focused tab was
    /// removed, focus moves to the re-clamped index with a switch correction
    /// computed from the removed tab's last offset.
    pub fn set_tabs<I, T>(&mut self, tabs: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<TabName>,
    {
        let tabs = validate_tabs(tabs.into_iter().map(Into::into).collect())?;

        let prev_tab = self.focus.focused_tab().clone();
        let from_offset = self.store.offset_or_top(&prev_tab);

        let keep: FxHashSet<&TabName> = tabs.iter().collect();
        let removed: SmallVec<[TabName; 4]> = self
            .focus
            .tabs()
            .iter()
            .filter(|tab| !keep.contains(tab))
            .cloned()
            .collect();
        for tab in &removed {
            self.store.remove(tab);
            self.registry.unregister(tab);
            debug!(%tab, "tab removed");
        }

        self.lazy
            .sync_tabs(&tabs, &mut self.timers, &mut self.scheduler);

        match self.focus.replace_tabs(tabs) {
            Refocus::Unchanged => {}
            Refocus::Moved { from, to } => {
                let change = TabChange {
                    prev_index: from,
                    index: to,
                    prev_tab_name: prev_tab.clone(),
                    tab_name: prev_tab,
                };
                self.listeners.dispatch(INDEX_CHANGE, &change);
                if let Some(pager) = self.pager.as_mut() {
                    pager.jump_to_page(to, false);
                }
            }
            Refocus::Removed { from, to } => {
                self.commit_switch(from, prev_tab, from_offset, to);
                if let Some(pager) = self.pager.as_mut() {
                    pager.jump_to_page(to, false);
                }
            }
        }

        self.reconcile();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Called after every focus switch
    pub fn on_tab_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&TabChange) + Send + 'static,
    {
        self.listeners.register(TAB_CHANGE, listener)
    }

    /// Called with the new index whenever the focused index changes
    pub fn on_index_change<F>(&mut self, mut listener: F) -> ListenerId
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.listeners
            .register(INDEX_CHANGE, move |change: &TabChange| listener(change.index))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // -------------------------------------------------------------------------
    // Frame clock
    // -------------------------------------------------------------------------

    /// Advance springs, tweens and timers by one frame
    pub fn on_frame(&mut self, dt: Duration) {
        self.scheduler.advance(dt);

        let hsd = self.geometry.header_scroll_distance();
        if self.header.sync_from_scheduler(&mut self.scheduler, hsd) {
            self.finish_snap();
        }

        for timer in self.timers.advance(dt) {
            self.fire(timer);
        }
    }

    fn fire(&mut self, timer: TabsTimer) {
        match timer {
            TabsTimer::LazyDebounce(tab) => {
                self.lazy.on_debounce_elapsed(&tab);
            }
            TabsTimer::LazySettle(tab) => {
                if self.lazy.on_settle_elapsed(&tab) {
                    self.align_mounted(&tab);
                }
            }
            TabsTimer::DragEndGrace(id) => {
                if id == self.sync.gesture_id() && self.sync.settle_release() {
                    self.snap();
                }
            }
            TabsTimer::SnapTimeout(id) => {
                if id == self.sync.gesture_id() {
                    debug!("snap timed out waiting for the pane");
                    self.finish_snap();
                }
            }
        }
    }

    /// One corrective scroll for a pane that just mounted
    fn align_mounted(&mut self, tab: &TabName) {
        let inset = self.geometry.content_inset();
        let target = self
            .store
            .offset(tab)
            .unwrap_or_else(|| self.store.current_offset());
        let target = self
            .store
            .clamp_to_content(tab, target, self.geometry.container_height(), inset);

        if self.focus.is_focused(tab) {
            self.store.align_focused(tab, target);
        } else {
            self.store.set_offset(tab, target);
        }
        self.registry.scroll_to(tab, target - inset, false);
        self.lazy.start_fade(tab, &mut self.scheduler);
        debug!(%tab, target, "mounted pane aligned");

        self.reconcile();
    }

    // -------------------------------------------------------------------------
    // Render props
    // -------------------------------------------------------------------------

    pub fn translate_y(&self) -> f32 {
        self.header.translate_y(
            self.store.current_offset(),
            self.geometry.header_scroll_distance(),
            self.geometry.is_header_measured(),
        )
    }

    pub fn header_opacity(&self) -> f32 {
        self.header.opacity(&self.scheduler)
    }

    pub fn header_props(&self) -> HeaderProps {
        HeaderProps {
            translate_y: self.translate_y(),
            opacity: self.header_opacity(),
            height: self.geometry.header_height(),
            focused_tab: self.focus.focused_tab().clone(),
            index_decimal: self.focus.index_decimal(),
        }
    }

    pub fn tab_bar_props(&self) -> TabBarProps {
        TabBarProps {
            tab_names: self.focus.tabs().to_vec(),
            focused_tab: self.focus.focused_tab().clone(),
            index_decimal: self.focus.index_decimal(),
            height: self.geometry.tab_bar_height(),
        }
    }

    /// Properties for one pane, `None` for unknown tabs
    pub fn scene_props(&self, tab: &str) -> Option<SceneProps> {
        let index = self.focus.position(tab)?;
        let tab = self.focus.tab_at(index)?.clone();
        Some(SceneProps {
            scroll_enabled: self.lazy.is_mounted(&tab),
            should_render: self.lazy.should_render(&tab),
            content_opacity: self.lazy.content_opacity(&tab, &self.scheduler),
            padding_top: self.geometry.padding_top(),
            min_height: self.geometry.min_content_height(),
            content_inset: self.geometry.content_inset(),
            scroll_event_throttle: self.config.timing.scroll_throttle(),
            tab,
        })
    }

    pub fn header_measurements(&self) -> HeaderMeasurements {
        HeaderMeasurements {
            top: self.translate_y(),
            height: self.geometry.header_height(),
        }
    }

    /// Focused pane's content offset
    pub fn current_tab_scroll_y(&self) -> f32 {
        self.store.offset_or_top(self.focus.focused_tab())
    }
}

impl std::fmt::Debug for TabsContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabsContainer")
            .field("tabs", &self.focus.tabs())
            .field("index", &self.focus.index())
            .field("mode", &self.config.motion_mode)
            .field("shared", &self.store.current_offset())
            .finish_non_exhaustive()
    }
}
