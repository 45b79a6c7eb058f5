//! Hoist Tabs
//!
//! Scroll synchronization and header-collapse engine for collapsible tab views:
//! a set of horizontally paged panes, each with its own vertical list, under
//! one shared header that scrolls away with whichever pane is focused.
//!
//! # Features
//!
//! - **Header Motion**: collapse, reveal-on-scroll, snap, and diff-clamp snap
//! - **Cross-Pane Sync**: unfocused lists follow so a switch never jumps
//! - **Switch Continuity**: a running correction keeps the scroll delta stream continuous
//! - **Lazy Mounting**: panes mount after focus settles and align before they show
//! - **Dynamic Tabs**: add, remove and reorder tabs at runtime
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use hoist_tabs::prelude::*;
//!
//! let mut tabs = TabsContainer::new(["feed", "photos"], TabsConfig::default()).unwrap();
//! tabs.report_header_height(200.0);
//!
//! let photos_log = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&photos_log);
//! tabs.register_pane("feed", |_x: f32, _y: f32, _animated: bool| {});
//! tabs.register_pane("photos", move |_x: f32, y: f32, _animated: bool| {
//!     sink.lock().unwrap().push(y)
//! });
//!
//! // Scrolling the feed past the header pulls the photos list to the collapsed edge
//! tabs.on_pane_scroll("feed", 500.0);
//! assert_eq!(tabs.translate_y(), -200.0);
//! assert_eq!(*photos_log.lock().unwrap(), vec![200.0]);
//! ```

pub mod config;
pub mod container;
pub mod context;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod handle;
pub mod header;
pub mod lazy;
pub mod props;
pub mod registry;
pub mod store;
pub mod sync;

pub use config::{MotionMode, TabsConfig, TimingConfig};
pub use container::{Pager, TabsContainer};
pub use context::{provide_tab_name, provide_tabs, try_use_tab_name, try_use_tabs, use_tab_name, use_tabs};
pub use error::{ConfigError, ContextError, Result, TabsError};
pub use focus::FocusTracker;
pub use geometry::{Geometry, GeometryChange, GeometryTracker};
pub use handle::{SharedTabs, TabsRef};
pub use header::HeaderMotionController;
pub use lazy::{LazyMountController, MountState};
pub use props::{HeaderMeasurements, HeaderProps, SceneProps, TabBarProps, TabChange};
pub use registry::{PaneHandle, PaneRegistry, ScrollCommand};
pub use store::ScrollPositionStore;
pub use sync::{GestureState, SyncEngine};

pub use hoist_core::{Tab, TabName};

/// Commonly used items
pub mod prelude {
    pub use crate::config::{MotionMode, TabsConfig};
    pub use crate::container::{Pager, TabsContainer};
    pub use crate::context::{provide_tab_name, provide_tabs, use_tab_name, use_tabs};
    pub use crate::handle::{SharedTabs, TabsRef};
    pub use crate::props::{HeaderProps, SceneProps, TabBarProps, TabChange};
    pub use crate::registry::PaneHandle;
    pub use hoist_core::TabName;
}
