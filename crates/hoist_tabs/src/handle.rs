//! Shared ownership and the weak remote handle
//!
//! Hosts that drive the container from more than one thread put it behind
//! [`SharedTabs`]. Collaborators that should not keep it alive (tab bar
//! buttons, header widgets, host code holding a "ref") get a [`TabsRef`].

use std::sync::{Arc, Mutex, Weak};

use hoist_core::TabName;
use tracing::warn;

use crate::container::TabsContainer;

/// Shared, serialized container
pub type SharedTabs = Arc<Mutex<TabsContainer>>;

impl TabsContainer {
    pub fn into_shared(self) -> SharedTabs {
        Arc::new(Mutex::new(self))
    }
}

/// Weak handle to a shared container
///
/// Every method reports failure (`false` / `None`) once the container is gone.
#[derive(Clone, Debug, Default)]
pub struct TabsRef {
    inner: Weak<Mutex<TabsContainer>>,
}

impl TabsRef {
    pub fn new(shared: &SharedTabs) -> Self {
        Self {
            inner: Arc::downgrade(shared),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Run `f` against the container if it is still alive
    pub fn with<R>(&self, f: impl FnOnce(&mut TabsContainer) -> R) -> Option<R> {
        let shared = self.inner.upgrade()?;
        let mut tabs = match shared.lock() {
            Ok(guard) => guard,
            Err(_) => {
                warn!("tabs container lock poisoned");
                return None;
            }
        };
        Some(f(&mut tabs))
    }

    pub fn set_index(&self, index: usize) -> bool {
        self.with(|tabs| tabs.set_index(index)).unwrap_or(false)
    }

    pub fn jump_to_tab(&self, name: &str) -> bool {
        self.with(|tabs| tabs.jump_to_tab(name)).unwrap_or(false)
    }

    pub fn focused_tab(&self) -> Option<TabName> {
        self.with(|tabs| tabs.focused_tab().clone())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.with(|tabs| tabs.current_index())
    }
}
