//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use hoist_tabs::{TabsConfig, TabsContainer};

/// One `scroll_to` call received by a pane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCall {
    pub y: f32,
    pub animated: bool,
}

/// Pane double recording every scroll command
#[derive(Clone, Default)]
pub struct RecordingPane {
    calls: Arc<Mutex<Vec<ScrollCall>>>,
}

impl RecordingPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ScrollCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<ScrollCall> {
        self.calls.lock().unwrap().last().copied()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl hoist_tabs::PaneHandle for RecordingPane {
    fn scroll_to(&mut self, _x: f32, y: f32, animated: bool) {
        self.calls.lock().unwrap().push(ScrollCall { y, animated });
    }
}

/// Pager double recording every jump
#[derive(Clone, Default)]
pub struct RecordingPager {
    jumps: Arc<Mutex<Vec<(usize, bool)>>>,
}

impl RecordingPager {
    pub fn jumps(&self) -> Vec<(usize, bool)> {
        self.jumps.lock().unwrap().clone()
    }
}

impl hoist_tabs::Pager for RecordingPager {
    fn jump_to_page(&mut self, index: usize, animated: bool) {
        self.jumps.lock().unwrap().push((index, animated));
    }
}

/// Install a subscriber once per test binary; `RUST_LOG=hoist_tabs=trace` to see events
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Container with a measured header, every pane registered to a recorder
pub fn setup(
    names: &[&str],
    config: TabsConfig,
) -> (TabsContainer, Vec<RecordingPane>, RecordingPager) {
    init_tracing();

    let pager = RecordingPager::default();
    let mut tabs = TabsContainer::new(names.iter().copied(), config)
        .unwrap()
        .with_pager(pager.clone());
    tabs.report_header_height(200.0);
    tabs.report_container_height(600.0);

    let panes: Vec<RecordingPane> = names
        .iter()
        .map(|name| {
            let pane = RecordingPane::new();
            tabs.register_pane(name, pane.clone());
            pane
        })
        .collect();

    (tabs, panes, pager)
}

/// Step the frame clock in 16ms frames
pub fn run_frames(tabs: &mut TabsContainer, total: Duration) {
    let frame = Duration::from_millis(16);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        tabs.on_frame(frame);
        elapsed += frame;
    }
}
