//! Deferred pane mounting
//!
//! In a lazy container a pane's content is only built once the pane has held
//! focus for a short debounce window, and it only counts as mounted a settle
//! delay after its first layout. Until then its scroll events are ignored, so
//! the list's initial offset cannot leak into the shared position.

use std::time::Duration;

use hoist_animation::{AnimationScheduler, KeyframeAnimation, KeyframeId, TimerId, TimerQueue};
use hoist_core::events::event_types::{FOCUS_SETTLED, LAYOUT_SETTLED};
use hoist_core::{EventType, StateMachine, StateTransitions, TabName};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::config::TabsConfig;
use crate::container::TabsTimer;

/// Mount lifecycle of a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    /// Content is being built; not yet aligned
    PendingMount,
    Mounted,
}

impl StateTransitions for MountState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (MountState::Unmounted, FOCUS_SETTLED) => Some(MountState::PendingMount),
            (MountState::PendingMount, LAYOUT_SETTLED) => Some(MountState::Mounted),
            _ => None,
        }
    }
}

struct LazyPane {
    state: StateMachine<MountState>,
    debounce: Option<TimerId>,
    settle: Option<TimerId>,
    fade: Option<KeyframeId>,
}

impl LazyPane {
    fn new(state: MountState) -> Self {
        Self {
            state: StateMachine::new(state),
            debounce: None,
            settle: None,
            fade: None,
        }
    }
}

pub struct LazyMountController {
    lazy: bool,
    fade_in: bool,
    start_mounted: FxHashSet<TabName>,
    debounce: Duration,
    settle: Duration,
    fade_ms: u32,
    panes: FxHashMap<TabName, LazyPane>,
}

impl LazyMountController {
    pub fn new(config: &TabsConfig, tabs: &[TabName], initial: &TabName) -> Self {
        let mut controller = Self {
            lazy: config.lazy,
            fade_in: !config.cancel_lazy_fade_in,
            start_mounted: config.start_mounted.iter().cloned().collect(),
            debounce: config.timing.lazy_debounce(),
            settle: config.timing.lazy_settle(),
            fade_ms: config.timing.fade_in_ms,
            panes: FxHashMap::default(),
        };

        for tab in tabs {
            let state = if controller.starts_mounted(tab) || tab == initial {
                MountState::Mounted
            } else {
                MountState::Unmounted
            };
            controller.panes.insert(tab.clone(), LazyPane::new(state));
        }
        controller
    }

    fn starts_mounted(&self, tab: &TabName) -> bool {
        !self.lazy || self.start_mounted.contains(tab)
    }

    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    pub fn state(&self, tab: &str) -> MountState {
        self.panes
            .get(tab)
            .map_or(MountState::Unmounted, |pane| pane.state.current_state())
    }

    pub fn is_mounted(&self, tab: &str) -> bool {
        self.state(tab) == MountState::Mounted
    }

    /// Whether the pane's content should exist in the tree
    pub fn should_render(&self, tab: &str) -> bool {
        self.state(tab) != MountState::Unmounted
    }

    /// Reconcile with a new tab list
    ///
    /// Removed tabs lose their timers and fades; added tabs start unmounted
    /// unless the container is eager or they are listed in `start_mounted`.
    pub(crate) fn sync_tabs(
        &mut self,
        tabs: &[TabName],
        timers: &mut TimerQueue<TabsTimer>,
        scheduler: &mut AnimationScheduler,
    ) {
        let keep: FxHashSet<&TabName> = tabs.iter().collect();
        let removed: SmallVec<[TabName; 4]> = self
            .panes
            .keys()
            .filter(|tab| !keep.contains(tab))
            .cloned()
            .collect();

        for tab in removed {
            if let Some(pane) = self.panes.remove(&tab) {
                pane.debounce.into_iter().chain(pane.settle).for_each(|id| {
                    timers.cancel(id);
                });
                if let Some(fade) = pane.fade {
                    scheduler.remove_keyframe(fade);
                }
                debug!(%tab, "lazy pane dropped");
            }
        }

        for tab in tabs {
            if !self.panes.contains_key(tab) {
                let state = if self.starts_mounted(tab) {
                    MountState::Mounted
                } else {
                    MountState::Unmounted
                };
                self.panes.insert(tab.clone(), LazyPane::new(state));
            }
        }
    }

    /// Focus moved to `focused`: blur everything else, start the debounce
    pub(crate) fn on_focus(&mut self, focused: &TabName, timers: &mut TimerQueue<TabsTimer>) {
        for (tab, pane) in self.panes.iter_mut() {
            if tab == focused {
                continue;
            }
            if let Some(id) = pane.debounce.take() {
                timers.cancel(id);
                debug!(%tab, "lazy mount debounce cancelled on blur");
            }
        }

        let debounce = self.debounce;
        if let Some(pane) = self.panes.get_mut(focused) {
            if pane.state.is_in(MountState::Unmounted) && pane.debounce.is_none() {
                pane.debounce = Some(timers.schedule(debounce, TabsTimer::LazyDebounce(focused.clone())));
            }
        }
    }

    /// Debounce window passed with focus held
    pub fn on_debounce_elapsed(&mut self, tab: &str) -> bool {
        let Some(pane) = self.panes.get_mut(tab) else {
            return false;
        };
        pane.debounce = None;
        let entered = pane.state.send(FOCUS_SETTLED).is_some();
        if entered {
            debug!(tab, "pane pending mount");
        }
        entered
    }

    /// First layout of a pending pane starts the settle delay
    pub(crate) fn on_layout(&mut self, tab: &TabName, timers: &mut TimerQueue<TabsTimer>) -> bool {
        let settle = self.settle;
        let Some(pane) = self.panes.get_mut(tab) else {
            return false;
        };
        if !pane.state.is_in(MountState::PendingMount) || pane.settle.is_some() {
            return false;
        }
        pane.settle = Some(timers.schedule(settle, TabsTimer::LazySettle(tab.clone())));
        true
    }

    /// Settle delay passed; returns `true` when the pane became mounted
    pub fn on_settle_elapsed(&mut self, tab: &str) -> bool {
        let Some(pane) = self.panes.get_mut(tab) else {
            return false;
        };
        pane.settle = None;
        let mounted = pane.state.send(LAYOUT_SETTLED).is_some();
        if mounted {
            debug!(tab, "pane mounted");
        }
        mounted
    }

    /// Start the content fade of a freshly mounted pane
    pub fn start_fade(&mut self, tab: &str, scheduler: &mut AnimationScheduler) {
        if !self.fade_in {
            return;
        }
        let fade_ms = self.fade_ms;
        if let Some(pane) = self.panes.get_mut(tab) {
            if let Some(old) = pane.fade.take() {
                scheduler.remove_keyframe(old);
            }
            pane.fade = Some(scheduler.add_keyframe(KeyframeAnimation::fade_in(fade_ms)));
        }
    }

    pub fn content_opacity(&self, tab: &str, scheduler: &AnimationScheduler) -> f32 {
        let Some(pane) = self.panes.get(tab) else {
            return 0.0;
        };
        match pane.state.current_state() {
            MountState::Unmounted => 0.0,
            MountState::PendingMount if self.fade_in => 0.0,
            MountState::PendingMount => 1.0,
            MountState::Mounted => pane
                .fade
                .and_then(|id| scheduler.get_keyframe(id))
                .map_or(1.0, KeyframeAnimation::value),
        }
    }
}
