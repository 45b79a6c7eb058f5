//! State Machine Runtime
//!
//! Flat, typed state machines for gesture and mount lifecycles.
//! States are user enums implementing [`StateTransitions`]; events are the
//! `u32` constants from [`crate::events::event_types`].
//!
//! Supports:
//! - Event-driven transitions resolved by the state type itself
//! - Guarded sends (`can_send`)
//! - Bounded transition history for debugging

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::events::EventType;

/// Maximum number of transitions retained in a machine's history
const HISTORY_LIMIT: usize = 32;

/// Trait for state types that can handle event transitions
///
/// Implement this on a state enum to define how events move it.
///
/// # Example
///
/// ```ignore
/// impl StateTransitions for MountState {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (MountState::Unmounted, FOCUS_SETTLED) => Some(MountState::PendingMount),
///             (MountState::PendingMount, LAYOUT_SETTLED) => Some(MountState::Mounted),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// A state machine instance over a typed state
#[derive(Clone, Debug)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// History of state transitions (for debugging)
    history: SmallVec<[(S, EventType, S); 8]>,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine in the given initial state
    pub fn new(initial_state: S) -> Self {
        Self {
            current_state: initial_state,
            history: SmallVec::new(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> &[(S, EventType, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event would trigger a transition from the current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.current_state.on_event(event).is_some()
    }

    /// Send an event, returning the new state if a transition happened
    pub fn send(&mut self, event: EventType) -> Option<S> {
        let from = self.current_state;
        let to = from.on_event(event)?;

        self.current_state = to;
        self.record(from, event, to);

        tracing::trace!("fsm {:?} --{}--> {:?}", from, event, to);
        Some(to)
    }

    /// Move to a state without an event (lifecycle resets)
    pub fn reset(&mut self, state: S) {
        self.current_state = state;
        self.history.clear();
    }

    fn record(&mut self, from: S, event: EventType, to: S) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    enum Gesture {
        #[default]
        Idle,
        Dragging,
        Gliding,
    }

    impl StateTransitions for Gesture {
        fn on_event(&self, event: EventType) -> Option<Self> {
            match (self, event) {
                (Gesture::Idle, DRAG_BEGIN) => Some(Gesture::Dragging),
                (Gesture::Gliding, DRAG_BEGIN) => Some(Gesture::Dragging),
                (Gesture::Dragging, MOMENTUM_BEGIN) => Some(Gesture::Gliding),
                (Gesture::Dragging, DRAG_END) => Some(Gesture::Idle),
                (Gesture::Gliding, MOMENTUM_END) => Some(Gesture::Idle),
                _ => None,
            }
        }
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = StateMachine::new(Gesture::Idle);

        assert_eq!(fsm.send(DRAG_BEGIN), Some(Gesture::Dragging));
        assert_eq!(fsm.send(MOMENTUM_BEGIN), Some(Gesture::Gliding));
        assert_eq!(fsm.send(MOMENTUM_END), Some(Gesture::Idle));
        assert!(fsm.is_in(Gesture::Idle));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = StateMachine::new(Gesture::Idle);

        // MOMENTUM_END is not valid while idle
        assert_eq!(fsm.send(MOMENTUM_END), None);
        assert_eq!(fsm.current_state(), Gesture::Idle);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_can_send() {
        let fsm = StateMachine::<Gesture>::default();

        assert!(fsm.can_send(DRAG_BEGIN));
        assert!(!fsm.can_send(DRAG_END));
    }

    #[test]
    fn test_history() {
        let mut fsm = StateMachine::new(Gesture::Idle);
        fsm.send(DRAG_BEGIN);
        fsm.send(DRAG_END);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (Gesture::Idle, DRAG_BEGIN, Gesture::Dragging));
        assert_eq!(history[1], (Gesture::Dragging, DRAG_END, Gesture::Idle));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut fsm = StateMachine::new(Gesture::Idle);
        for _ in 0..HISTORY_LIMIT {
            fsm.send(DRAG_BEGIN);
            fsm.send(DRAG_END);
        }

        assert_eq!(fsm.history().len(), HISTORY_LIMIT);
        assert_eq!(
            fsm.history().last(),
            Some(&(Gesture::Dragging, DRAG_END, Gesture::Idle))
        );
    }

    #[test]
    fn test_reset_clears_history() {
        let mut fsm = StateMachine::new(Gesture::Idle);
        fsm.send(DRAG_BEGIN);
        fsm.reset(Gesture::Gliding);

        assert!(fsm.is_in(Gesture::Gliding));
        assert!(fsm.history().is_empty());
    }
}
