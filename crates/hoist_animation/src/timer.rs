//! Frame-driven timers
//!
//! Delayed continuations as data: a timer carries a payload that is handed
//! back when the frame clock passes its due time. Timers are cancellable by
//! id, which is how a stale mount or an interrupted snap is prevented from
//! firing.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::trace;

new_key_type! {
    pub struct TimerId;
}

struct Timer<T> {
    due: Duration,
    /// Insertion order, breaks ties between timers due on the same frame
    seq: u64,
    payload: T,
}

/// Queue of pending timers on a monotonic frame clock
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, Timer<T>>,
    now: Duration,
    seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now: Duration::ZERO,
            seq: 0,
        }
    }

    /// Current clock value (sum of all advances)
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` after the current clock
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerId {
        let seq = self.seq;
        self.seq += 1;
        self.timers.insert(Timer {
            due: self.now + delay,
            seq,
            payload,
        })
    }

    /// Cancel a pending timer, returning its payload if it had not fired
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|t| t.payload)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Drop every pending timer whose payload fails the predicate
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.timers.retain(|_, t| keep(&t.payload));
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.due).min()
    }

    /// Advance the clock and return the payloads that came due, in due order
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[T; 4]> {
        self.now += dt;

        let now = self.now;
        let mut due: SmallVec<[(Duration, u64, TimerId); 4]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= now)
            .map(|(id, t)| (t.due, t.seq, id))
            .collect();
        due.sort_unstable_by_key(|&(at, seq, _)| (at, seq));
        if !due.is_empty() {
            trace!(count = due.len(), now = ?now, "timers due");
        }

        due.into_iter()
            .filter_map(|(_, _, id)| self.timers.remove(id).map(|t| t.payload))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
