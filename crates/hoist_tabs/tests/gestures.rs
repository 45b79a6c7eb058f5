//! Snap, diff-clamp and drag interplay

mod common;

use std::time::Duration;

use common::{run_frames, setup};
use hoist_tabs::{GestureState, TabsConfig};

#[test]
fn momentum_end_triggers_snap() {
    let (mut tabs, panes, _) = setup(&["a", "b"], TabsConfig::snap());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 90.0);
    tabs.on_pane_drag_end("a");
    tabs.on_pane_momentum_begin("a");
    // Grace frame passes while gliding: no snap yet
    tabs.on_frame(Duration::from_millis(20));
    assert_eq!(tabs.gesture_state(), GestureState::Gliding);
    assert!(panes[0].calls().is_empty());

    tabs.on_pane_scroll("a", 150.0);
    tabs.on_pane_momentum_end("a");

    assert_eq!(tabs.gesture_state(), GestureState::Snapping);
    let call = panes[0].last().unwrap();
    assert_eq!((call.y, call.animated), (200.0, true));
}

#[test]
fn release_past_header_does_not_snap() {
    let (mut tabs, panes, _) = setup(&["a", "b"], TabsConfig::snap());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 700.0);
    tabs.on_pane_drag_end("a");
    tabs.on_frame(Duration::from_millis(20));

    assert_eq!(tabs.gesture_state(), GestureState::Idle);
    assert!(panes[0].calls().is_empty());
}

#[test]
fn sync_is_suspended_while_snapping() {
    let (mut tabs, panes, _) = setup(&["a", "b"], TabsConfig::snap());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 140.0);
    tabs.on_pane_drag_end("a");
    tabs.on_frame(Duration::from_millis(20));
    panes[1].clear();

    // Intermediate echoes of the animated snap
    tabs.on_pane_scroll("a", 170.0);
    tabs.on_pane_scroll("a", 190.0);
    assert!(panes[1].calls().is_empty());

    tabs.on_pane_scroll("a", 200.0);
    assert_eq!(tabs.gesture_state(), GestureState::Idle);
    assert_eq!(panes[1].last().map(|c| c.y), Some(200.0));
}

#[test]
fn snap_times_out_without_echo() {
    let (mut tabs, _panes, _) = setup(&["a", "b"], TabsConfig::snap());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 140.0);
    tabs.on_pane_drag_end("a");
    tabs.on_frame(Duration::from_millis(20));
    assert_eq!(tabs.gesture_state(), GestureState::Snapping);

    run_frames(&mut tabs, Duration::from_millis(500));
    assert_eq!(tabs.gesture_state(), GestureState::Idle);
    assert_eq!(tabs.last_snap_target(), 200.0);
}

#[test]
fn new_drag_interrupts_snap() {
    let (mut tabs, _panes, _) = setup(&["a", "b"], TabsConfig::snap());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 140.0);
    tabs.on_pane_drag_end("a");
    tabs.on_frame(Duration::from_millis(20));
    assert_eq!(tabs.gesture_state(), GestureState::Snapping);

    tabs.on_pane_drag_begin("a");
    assert_eq!(tabs.gesture_state(), GestureState::Dragging);

    // The old timeout must not end the new gesture
    run_frames(&mut tabs, Duration::from_millis(500));
    assert_eq!(tabs.gesture_state(), GestureState::Dragging);
}

#[test]
fn diff_clamp_snap_hides_header_and_list() {
    let (mut tabs, panes, _) = setup(&["a", "b"], TabsConfig::diff_clamp_snap());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 130.0);
    tabs.on_pane_drag_end("a");
    tabs.on_frame(Duration::from_millis(20));

    assert_eq!(tabs.gesture_state(), GestureState::Snapping);
    // List is still inside the collapsible region, so it follows the header up
    let call = panes[0].last().unwrap();
    assert_eq!((call.y, call.animated), (200.0, true));

    run_frames(&mut tabs, Duration::from_secs(2));
    assert_eq!(tabs.accumulator(), 200.0);
    assert_eq!(tabs.translate_y(), -200.0);
    assert_eq!(tabs.gesture_state(), GestureState::Idle);
    assert!(!tabs.needs_frame());
}

#[test]
fn diff_clamp_snap_reveals_header() {
    let (mut tabs, panes, _) = setup(&["a", "b"], TabsConfig::diff_clamp_snap());

    tabs.on_pane_scroll("a", 1000.0);
    assert_eq!(tabs.accumulator(), 200.0);

    // Scroll back up a little: header partially revealed
    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 880.0);
    assert_eq!(tabs.accumulator(), 80.0);
    tabs.on_pane_drag_end("a");
    panes[0].clear();
    tabs.on_frame(Duration::from_millis(20));

    run_frames(&mut tabs, Duration::from_secs(2));
    assert_eq!(tabs.accumulator(), 0.0);
    assert_eq!(tabs.translate_y(), 0.0);
    // Revealing never moves the list
    assert!(panes[0].calls().is_empty());
}

#[test]
fn reveal_on_scroll_never_snaps() {
    let (mut tabs, _panes, _) = setup(&["a", "b"], TabsConfig::reveal_on_scroll());

    tabs.on_pane_drag_begin("a");
    tabs.on_pane_scroll("a", 130.0);
    tabs.on_pane_drag_end("a");
    run_frames(&mut tabs, Duration::from_millis(200));

    assert_eq!(tabs.gesture_state(), GestureState::Idle);
    assert_eq!(tabs.accumulator(), 130.0);
}

#[test]
fn header_drag_suspends_sync() {
    let (mut tabs, panes, _) = setup(&["a", "b"], TabsConfig::collapse());

    tabs.on_header_drag_begin();
    tabs.on_pane_scroll("a", 150.0);
    assert!(panes[1].calls().is_empty());
    assert_eq!(tabs.offset("b"), Some(0.0));

    tabs.on_header_drag_end();
    assert_eq!(tabs.offset("b"), Some(150.0));
    assert_eq!(panes[1].last().map(|c| c.y), Some(150.0));
}

#[test]
fn unfocused_pane_gestures_are_ignored() {
    let (mut tabs, _panes, _) = setup(&["a", "b"], TabsConfig::snap());

    tabs.on_pane_drag_begin("b");
    assert_eq!(tabs.gesture_state(), GestureState::Idle);
    tabs.on_pane_scroll("b", 300.0);
    assert_eq!(tabs.shared_scroll_position(), 0.0);
}
