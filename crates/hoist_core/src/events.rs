//! Event dispatch system
//!
//! Event-type constants shared by the state machines, and a small listener
//! registry used to fan notifications out to collaborators.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// User put a finger on a pane's list
    pub const DRAG_BEGIN: EventType = 31;
    /// User lifted the finger from a pane's list
    pub const DRAG_END: EventType = 32;
    /// List started gliding after a drag
    pub const MOMENTUM_BEGIN: EventType = 33;
    /// List finished gliding
    pub const MOMENTUM_END: EventType = 34;
    /// Post-gesture snap animation started
    pub const SNAP_START: EventType = 35;
    /// An animation or gesture came to rest
    pub const SETTLED: EventType = 36;

    /// Focus was held long enough to start mounting
    pub const FOCUS_SETTLED: EventType = 52;
    /// First layout plus settle delay elapsed
    pub const LAYOUT_SETTLED: EventType = 53;

    // Container notifications
    pub const TAB_CHANGE: EventType = 70;
    pub const INDEX_CHANGE: EventType = 71;
}

/// Handle returned from [`Listeners::register`], used to unregister
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listener function type
pub type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Dispatches events of payload `E` to listeners registered per event type
pub struct Listeners<E> {
    handlers: FxHashMap<EventType, Vec<(ListenerId, Listener<E>)>>,
    next_id: u64,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Register a listener for an event type
    pub fn register<F>(&mut self, event_type: EventType, listener: F) -> ListenerId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(event_type)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener
    pub fn remove(&mut self, id: ListenerId) -> bool {
        for list in self.handlers.values_mut() {
            if let Some(pos) = list.iter().position(|(lid, _)| *lid == id) {
                let _ = list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Dispatch an event to every listener of its type, in registration order
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&mut self, event_type: EventType, event: &E) -> usize {
        let Some(list) = self.handlers.get_mut(&event_type) else {
            return 0;
        };
        for (_, listener) in list.iter_mut() {
            listener(event);
        }
        list.len()
    }

    /// Number of listeners registered for an event type
    pub fn len(&self, event_type: EventType) -> usize {
        self.handlers.get(&event_type).map_or(0, Vec::len)
    }

    /// Check if no listener is registered at all
    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}
