//! Pane scroll handles
//!
//! Panes hand the container a capability to scroll their list. The registry
//! owns those capabilities; everything else looks them up by tab name, and a
//! missing handle is never an error.

use hoist_core::TabName;
use rustc_hash::FxHashMap;
use tracing::{trace, warn};

/// Imperative scroll capability of one pane's list
pub trait PaneHandle: Send {
    fn scroll_to(&mut self, x: f32, y: f32, animated: bool);
}

impl<F> PaneHandle for F
where
    F: FnMut(f32, f32, bool) + Send,
{
    fn scroll_to(&mut self, x: f32, y: f32, animated: bool) {
        self(x, y, animated)
    }
}

/// Outcome of a scroll request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollCommand {
    Issued,
    /// No handle registered; nothing to do
    MissingHandle,
    /// Coordinates were NaN or infinite and never reached the pane
    RejectedNonFinite,
}

/// Name -> handle map
#[derive(Default)]
pub struct PaneRegistry {
    handles: FxHashMap<TabName, Box<dyn PaneHandle>>,
}

impl PaneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle, returning the one it replaces
    pub fn register(
        &mut self,
        tab: TabName,
        handle: Box<dyn PaneHandle>,
    ) -> Option<Box<dyn PaneHandle>> {
        self.handles.insert(tab, handle)
    }

    pub fn unregister(&mut self, tab: &str) -> bool {
        self.handles.remove(tab).is_some()
    }

    pub fn get(&mut self, tab: &str) -> Option<&mut (dyn PaneHandle + 'static)> {
        self.handles.get_mut(tab).map(|handle| handle.as_mut())
    }

    pub fn contains(&self, tab: &str) -> bool {
        self.handles.contains_key(tab)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Drop handles whose tab no longer exists
    pub fn retain(&mut self, mut keep: impl FnMut(&TabName) -> bool) {
        self.handles.retain(|tab, _| keep(tab));
    }

    /// Scroll a pane's list to `y` in list coordinates
    pub fn scroll_to(&mut self, tab: &str, y: f32, animated: bool) -> ScrollCommand {
        if !y.is_finite() {
            warn!(tab, y, "dropping non-finite scroll command");
            return ScrollCommand::RejectedNonFinite;
        }

        match self.handles.get_mut(tab) {
            Some(handle) => {
                trace!(tab, y, animated, "scroll_to");
                handle.scroll_to(0.0, y, animated);
                ScrollCommand::Issued
            }
            None => ScrollCommand::MissingHandle,
        }
    }
}

impl std::fmt::Debug for PaneRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaneRegistry")
            .field("tabs", &self.handles.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<(f32, f32, bool)>>>, Box<dyn PaneHandle>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let handle = move |x: f32, y: f32, animated: bool| sink.lock().unwrap().push((x, y, animated));
        (log, Box::new(handle))
    }

    #[test]
    fn test_scroll_reaches_handle() {
        let mut registry = PaneRegistry::new();
        let (log, handle) = recorder();
        registry.register(TabName::from("a"), handle);

        assert_eq!(registry.scroll_to("a", 120.0, false), ScrollCommand::Issued);
        assert_eq!(*log.lock().unwrap(), vec![(0.0, 120.0, false)]);
    }

    #[test]
    fn test_missing_handle_is_noop() {
        let mut registry = PaneRegistry::new();
        assert_eq!(registry.scroll_to("ghost", 10.0, true), ScrollCommand::MissingHandle);
    }

    #[test]
    fn test_non_finite_never_reaches_handle() {
        let mut registry = PaneRegistry::new();
        let (log, handle) = recorder();
        registry.register(TabName::from("a"), handle);

        assert_eq!(
            registry.scroll_to("a", f32::NAN, false),
            ScrollCommand::RejectedNonFinite
        );
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_register_replaces_and_unregister_removes() {
        let mut registry = PaneRegistry::new();
        let (_, first) = recorder();
        let (_, second) = recorder();

        assert!(registry.register(TabName::from("a"), first).is_none());
        assert!(registry.register(TabName::from("a"), second).is_some());
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister("a"));
        assert!(!registry.unregister("a"));
        assert!(registry.is_empty());
    }
}
