//! Scoped access for collaborator helpers
//!
//! Header, tab bar and pane helpers run inside a scope provided by the host:
//!
//! ```rust
//! use hoist_tabs::prelude::*;
//!
//! let shared = TabsContainer::new(["feed", "photos"], TabsConfig::default())
//!     .unwrap()
//!     .into_shared();
//! let tabs = TabsRef::new(&shared);
//!
//! provide_tabs(&tabs, || {
//!     provide_tab_name("photos", || {
//!         let name = use_tab_name();
//!         assert!(use_tabs().jump_to_tab(&name));
//!     })
//! });
//! assert_eq!(tabs.current_index(), Some(1));
//! ```
//!
//! Scopes nest; the innermost provided value wins. Calling a `use_*` helper
//! outside any scope is a wiring bug and panics.

use std::cell::RefCell;
use std::thread::LocalKey;

use hoist_core::TabName;

use crate::error::ContextError;
use crate::handle::TabsRef;

thread_local! {
    static TABS_SCOPE: RefCell<Vec<TabsRef>> = const { RefCell::new(Vec::new()) };
    static TAB_NAME_SCOPE: RefCell<Vec<TabName>> = const { RefCell::new(Vec::new()) };
}

/// Pops the scope on exit, including unwinding
struct ScopeGuard<T: 'static> {
    stack: &'static LocalKey<RefCell<Vec<T>>>,
}

impl<T: 'static> Drop for ScopeGuard<T> {
    fn drop(&mut self) {
        self.stack.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

fn enter<T: 'static, R>(
    stack: &'static LocalKey<RefCell<Vec<T>>>,
    value: T,
    f: impl FnOnce() -> R,
) -> R {
    stack.with(|s| s.borrow_mut().push(value));
    let _guard = ScopeGuard { stack };
    f()
}

/// Run `f` with `tabs` available to [`use_tabs`]
pub fn provide_tabs<R>(tabs: &TabsRef, f: impl FnOnce() -> R) -> R {
    enter(&TABS_SCOPE, tabs.clone(), f)
}

/// Run `f` with `name` available to [`use_tab_name`]
pub fn provide_tab_name<R>(name: impl Into<TabName>, f: impl FnOnce() -> R) -> R {
    enter(&TAB_NAME_SCOPE, name.into(), f)
}

pub fn try_use_tabs() -> Result<TabsRef, ContextError> {
    TABS_SCOPE
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(ContextError::MissingTabs("use_tabs"))
}

/// The innermost provided container
///
/// # Panics
///
/// Panics when called outside [`provide_tabs`].
pub fn use_tabs() -> TabsRef {
    match try_use_tabs() {
        Ok(tabs) => tabs,
        Err(err) => panic!("{err}"),
    }
}

pub fn try_use_tab_name() -> Result<TabName, ContextError> {
    TAB_NAME_SCOPE
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(ContextError::MissingTabName("use_tab_name"))
}

/// Name of the pane the caller belongs to
///
/// # Panics
///
/// Panics when called outside [`provide_tab_name`].
pub fn use_tab_name() -> TabName {
    match try_use_tab_name() {
        Ok(name) => name,
        Err(err) => panic!("{err}"),
    }
}
