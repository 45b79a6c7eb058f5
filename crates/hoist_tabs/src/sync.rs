//! Cross-pane scroll synchronization
//!
//! Every unfocused pane is kept at an offset from which switching to it
//! leaves the header where it is. The target for a pane depends only on the
//! focused offset, the accumulator and the collapsible distance, so one pass
//! reaches a fixed point and the order panes are visited in is irrelevant.
//!
//! The engine also tracks the focused pane's gesture so snap animations and
//! header drags can suspend synchronization while they run.

use hoist_core::events::event_types::{DRAG_BEGIN, DRAG_END, MOMENTUM_BEGIN, MOMENTUM_END, SETTLED, SNAP_START};
use hoist_core::{approx_eq, within_collapsible, EventType, StateMachine, StateTransitions, TabName, OFFSET_EPSILON};
use tracing::{debug, trace};

use crate::config::MotionMode;
use crate::registry::PaneRegistry;
use crate::store::ScrollPositionStore;

/// Focused pane gesture lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    /// Finger lifted; waiting one frame for momentum
    Released,
    Gliding,
    /// Header settling toward its snap target
    Snapping,
}

impl StateTransitions for GestureState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use GestureState::*;

        match (self, event) {
            (Idle | Released | Gliding | Snapping, DRAG_BEGIN) => Some(Dragging),
            (Dragging, DRAG_END) => Some(Released),
            (Idle | Dragging | Released, MOMENTUM_BEGIN) => Some(Gliding),
            (Gliding, MOMENTUM_END) => Some(Idle),
            (Released, SETTLED) => Some(Idle),
            (Idle, SNAP_START) => Some(Snapping),
            (Snapping, SETTLED) => Some(Idle),
            _ => None,
        }
    }
}

/// Shared state one reconciliation pass reads
#[derive(Clone, Copy, Debug)]
pub struct ReconcileContext<'a> {
    pub tabs: &'a [TabName],
    pub focused: &'a TabName,
    pub header_scroll_distance: f32,
    pub content_inset: f32,
    pub accumulator: f32,
    pub container_height: Option<f32>,
}

pub struct SyncEngine {
    mode: MotionMode,
    gesture: StateMachine<GestureState>,
    /// Bumped on every drag so stale gesture timers can be recognized
    gesture_id: u64,
    last_snap_target: f32,
    snap_target: Option<f32>,
    header_dragging: bool,
}

impl SyncEngine {
    pub fn new(mode: MotionMode) -> Self {
        Self {
            mode,
            gesture: StateMachine::new(GestureState::Idle),
            gesture_id: 0,
            last_snap_target: 0.0,
            snap_target: None,
            header_dragging: false,
        }
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.current_state()
    }

    pub fn gesture_id(&self) -> u64 {
        self.gesture_id
    }

    pub fn last_snap_target(&self) -> f32 {
        self.last_snap_target
    }

    /// Target of the snap in flight
    pub fn snap_target(&self) -> Option<f32> {
        self.snap_target
    }

    pub fn is_header_dragging(&self) -> bool {
        self.header_dragging
    }

    /// Synchronization is suspended while a snap runs or the header is dragged
    pub fn is_suppressed(&self) -> bool {
        self.gesture.is_in(GestureState::Snapping) || self.header_dragging
    }

    /// Target offset for an unfocused pane at `pane`, or `None` to leave it
    pub fn next_position(
        &self,
        pane: f32,
        focused: f32,
        header_scroll_distance: f32,
        accumulator: f32,
    ) -> Option<f32> {
        let hsd = header_scroll_distance;
        let pane_on_top = within_collapsible(pane, hsd);
        let focused_on_top = within_collapsible(focused, hsd);

        match self.mode {
            MotionMode::RevealOnScroll | MotionMode::DiffClampSnap => {
                let gap = accumulator - pane > OFFSET_EPSILON;
                (gap || pane_on_top).then_some(accumulator)
            }
            MotionMode::Snap => {
                if focused_on_top {
                    Some(self.last_snap_target)
                } else if pane_on_top {
                    Some(hsd)
                } else {
                    None
                }
            }
            MotionMode::Collapse => (pane_on_top || focused_on_top).then_some(focused.min(hsd)),
        }
    }

    /// Bring every registered unfocused pane to its target
    ///
    /// Returns the number of panes that were scrolled.
    pub fn reconcile(
        &self,
        ctx: &ReconcileContext<'_>,
        store: &mut ScrollPositionStore,
        registry: &mut PaneRegistry,
    ) -> usize {
        // A focused tab with nothing recorded yet sits at the shared position
        let focused_offset = store
            .offset(ctx.focused)
            .unwrap_or_else(|| store.current_offset());
        let mut corrected = 0;

        for tab in ctx.tabs {
            if tab == ctx.focused || !registry.contains(tab) {
                continue;
            }

            let recorded = store.offset(tab);
            let stored = recorded.unwrap_or(0.0);
            let Some(next) = self.next_position(
                stored,
                focused_offset,
                ctx.header_scroll_distance,
                ctx.accumulator,
            ) else {
                continue;
            };
            let next = store.clamp_to_content(tab, next, ctx.container_height, ctx.content_inset);

            if approx_eq(stored, next) {
                if recorded.is_none() {
                    store.set_offset(tab, stored);
                }
                continue;
            }

            trace!(%tab, from = stored, to = next, "reconciling pane");
            store.set_offset(tab, next);
            registry.scroll_to(tab, next - ctx.content_inset, false);
            corrected += 1;
        }

        corrected
    }

    /// Apply the switch correction for a focus move onto `to`
    pub fn apply_switch(&mut self, store: &mut ScrollPositionStore, from_offset: f32, to: &TabName) {
        store.switch_to(from_offset, to);
        debug!(%to, shared = store.current_offset(), "focus switched");
    }

    /// A new drag on the focused pane; cancels any snap in flight
    pub fn begin_drag(&mut self) -> u64 {
        self.gesture_id += 1;
        self.snap_target = None;
        self.gesture.send(DRAG_BEGIN);
        self.gesture_id
    }

    /// Focus moved away from the pane that owned the gesture
    pub fn reset_gesture(&mut self) {
        self.gesture_id += 1;
        self.snap_target = None;
        self.gesture.reset(GestureState::Idle);
    }

    pub fn end_drag(&mut self) {
        self.gesture.send(DRAG_END);
    }

    pub fn begin_momentum(&mut self) {
        self.gesture.send(MOMENTUM_BEGIN);
    }

    pub fn end_momentum(&mut self) -> bool {
        self.gesture.send(MOMENTUM_END).is_some()
    }

    /// Drag ended without momentum
    pub fn settle_release(&mut self) -> bool {
        self.gesture.is_in(GestureState::Released) && self.gesture.send(SETTLED).is_some()
    }

    /// Start settling toward `target`; synchronization pauses until it finishes
    pub fn start_snap(&mut self, target: f32) -> bool {
        if self.gesture.send(SNAP_START).is_none() {
            return false;
        }
        debug!(target, "snap started");
        self.last_snap_target = target;
        self.snap_target = Some(target);
        true
    }

    /// Record a snap that needs no animation
    pub fn record_snap(&mut self, target: f32) {
        self.last_snap_target = target;
    }

    pub fn finish_snap(&mut self) -> bool {
        if !self.gesture.is_in(GestureState::Snapping) {
            return false;
        }
        self.snap_target = None;
        self.gesture.send(SETTLED);
        debug!(target = self.last_snap_target, "snap finished");
        true
    }

    pub fn begin_header_drag(&mut self) {
        self.header_dragging = true;
    }

    pub fn end_header_drag(&mut self) {
        self.header_dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn names(list: &[&str]) -> Vec<TabName> {
        list.iter().map(|n| TabName::from(*n)).collect()
    }

    type Log = Arc<Mutex<Vec<(String, f32)>>>;

    fn registry_for(tabs: &[TabName]) -> (PaneRegistry, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = PaneRegistry::new();
        for tab in tabs {
            let sink = Arc::clone(&log);
            let name = tab.to_string();
            registry.register(
                tab.clone(),
                Box::new(move |_x: f32, y: f32, _animated: bool| {
                    sink.lock().unwrap().push((name.clone(), y))
                }),
            );
        }
        (registry, log)
    }

    fn ctx<'a>(tabs: &'a [TabName], accumulator: f32) -> ReconcileContext<'a> {
        ReconcileContext {
            tabs,
            focused: &tabs[0],
            header_scroll_distance: 200.0,
            content_inset: 0.0,
            accumulator,
            container_height: None,
        }
    }

    #[test]
    fn test_collapse_policy() {
        let engine = SyncEngine::new(MotionMode::Collapse);
        // Focused past the header: panes on top follow to the collapsed edge
        assert_eq!(engine.next_position(0.0, 500.0, 200.0, 0.0), Some(200.0));
        // Focused on top: every pane mirrors it
        assert_eq!(engine.next_position(800.0, 120.0, 200.0, 0.0), Some(120.0));
        // Both scrolled past: untouched
        assert_eq!(engine.next_position(800.0, 500.0, 200.0, 0.0), None);
    }

    #[test]
    fn test_snap_policy() {
        let mut engine = SyncEngine::new(MotionMode::Snap);
        engine.record_snap(200.0);
        assert_eq!(engine.next_position(0.0, 200.0, 200.0, 0.0), Some(200.0));
        assert_eq!(engine.next_position(50.0, 600.0, 200.0, 0.0), Some(200.0));
        assert_eq!(engine.next_position(900.0, 600.0, 200.0, 0.0), None);
    }

    #[test]
    fn test_diff_clamp_policy() {
        let engine = SyncEngine::new(MotionMode::DiffClampSnap);
        // Pane on top follows the accumulator
        assert_eq!(engine.next_position(50.0, 900.0, 200.0, 150.0), Some(150.0));
        // Gap: pane sits above where the header edge is
        assert_eq!(engine.next_position(100.0, 900.0, 400.0, 150.0), Some(150.0));
        // Far down the list and no gap: untouched
        assert_eq!(engine.next_position(700.0, 900.0, 200.0, 150.0), None);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let tabs = names(&["a", "b", "c"]);
        let engine = SyncEngine::new(MotionMode::Collapse);
        let (mut registry, log) = registry_for(&tabs);
        let mut store = ScrollPositionStore::new();
        store.record_offset(&tabs[0], "a", 150.0);
        store.set_offset(&tabs[2], 900.0);

        assert_eq!(engine.reconcile(&ctx(&tabs, 0.0), &mut store, &mut registry), 2);
        assert_eq!(store.offset("b"), Some(150.0));
        assert_eq!(store.offset("c"), Some(150.0));

        assert_eq!(engine.reconcile(&ctx(&tabs, 0.0), &mut store, &mut registry), 0);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unregistered_panes_skipped() {
        let tabs = names(&["a", "b"]);
        let engine = SyncEngine::new(MotionMode::Collapse);
        let mut registry = PaneRegistry::new();
        let mut store = ScrollPositionStore::new();
        store.record_offset(&tabs[0], "a", 150.0);

        assert_eq!(engine.reconcile(&ctx(&tabs, 0.0), &mut store, &mut registry), 0);
        assert_eq!(store.offset("b"), None);
    }

    #[test]
    fn test_content_inset_applied_to_commands() {
        let tabs = names(&["a", "b"]);
        let engine = SyncEngine::new(MotionMode::Collapse);
        let (mut registry, log) = registry_for(&tabs);
        let mut store = ScrollPositionStore::new();
        store.record_offset(&tabs[0], "a", 400.0);

        let ctx = ReconcileContext {
            content_inset: 248.0,
            ..ctx(&tabs, 0.0)
        };
        engine.reconcile(&ctx, &mut store, &mut registry);
        assert_eq!(*log.lock().unwrap(), vec![("b".to_string(), -48.0)]);
    }

    #[test]
    fn test_gesture_lifecycle() {
        let mut engine = SyncEngine::new(MotionMode::Snap);
        let first = engine.begin_drag();
        assert_eq!(engine.gesture_state(), GestureState::Dragging);

        engine.end_drag();
        assert!(engine.settle_release());
        assert!(engine.start_snap(200.0));
        assert!(engine.is_suppressed());

        // A new drag interrupts the snap
        let second = engine.begin_drag();
        assert_ne!(first, second);
        assert_eq!(engine.snap_target(), None);
        assert!(!engine.is_suppressed());
        assert!(!engine.finish_snap());
    }

    #[test]
    fn test_header_drag_suppresses() {
        let mut engine = SyncEngine::new(MotionMode::Collapse);
        engine.begin_header_drag();
        assert!(engine.is_suppressed());
        engine.end_header_drag();
        assert!(!engine.is_suppressed());
    }
}
