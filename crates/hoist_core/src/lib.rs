//! Hoist Core
//!
//! Foundational primitives shared by the Hoist crates:
//!
//! - **State Machines**: typed states with event-driven transitions and history
//! - **Event Dispatch**: event-type constants and listener fan-out
//! - **Tab Identity**: cheap-to-clone tab names used as keys for every per-tab map
//! - **Numeric Policy**: epsilons and finite guards for scroll offsets
//!
//! # Example
//!
//! ```rust
//! use hoist_core::fsm::{StateMachine, StateTransitions};
//! use hoist_core::events::event_types::{DRAG_BEGIN, DRAG_END};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Grip {
//!     Released,
//!     Held,
//! }
//!
//! impl StateTransitions for Grip {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Grip::Released, DRAG_BEGIN) => Some(Grip::Held),
//!             (Grip::Held, DRAG_END) => Some(Grip::Released),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut grip = StateMachine::new(Grip::Released);
//! grip.send(DRAG_BEGIN);
//! assert!(grip.is_in(Grip::Held));
//! ```

pub mod events;
pub mod fsm;
pub mod numeric;
pub mod tab;

pub use events::{EventType, Listeners, ListenerId};
pub use fsm::{StateMachine, StateTransitions};
pub use numeric::{approx_eq, finite, within_collapsible, LAYOUT_EPSILON, OFFSET_EPSILON};
pub use tab::{Tab, TabName};
