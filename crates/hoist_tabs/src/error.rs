//! Tabs error types

use hoist_core::TabName;
use thiserror::Error;

/// Errors from constructing a container or driving its imperative surface
#[derive(Error, Debug)]
pub enum TabsError {
    /// A container needs at least one tab
    #[error("Tab list must not be empty")]
    EmptyTabs,

    /// Tab names are the key of every per-tab map and must be unique
    #[error("Duplicate tab name: {0}")]
    DuplicateTab(TabName),

    /// The named tab is not part of the current tab list
    #[error("Unknown tab: {0}")]
    UnknownTab(TabName),

    /// Programmatic jump outside the tab range
    #[error("Tab index {index} out of range for {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },

    /// Rejected configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Snap threshold must be a fraction of the collapsible distance
    #[error("snap_threshold must be within [0, 1], got {0}")]
    SnapThreshold(f32),

    /// Heights must be finite and non-negative
    #[error("{field} must be a finite non-negative height, got {value}")]
    Height { field: &'static str, value: f32 },
}

/// Collaborator helpers used outside the scope that provides them
///
/// This is a wiring mistake, not a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("{0} called outside of a tabs container scope; wrap the call in provide_tabs()")]
    MissingTabs(&'static str),

    #[error("{0} called outside of a pane scope; wrap the call in provide_tab_name()")]
    MissingTabName(&'static str),
}

/// Result type for tabs operations
pub type Result<T> = std::result::Result<T, TabsError>;
