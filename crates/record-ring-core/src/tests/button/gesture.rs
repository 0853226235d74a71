use crate::{
    RecordEvent,
    tests::button::{INSIDE, OUTSIDE, probe_button, terminal_count},
};

/// WHAT: A tap while idle emits exactly Click with no state change
/// WHY: Taps are instantaneous actions, fully separate from press cycles
#[test]
fn given_idle_control_when_tapped_then_click_only() {
    // Given: An idle control
    let mut button = probe_button(15.0);

    // When: A tap completes
    button.tap();

    // Then: One Click, no recording, no progress, no redraw
    assert_eq!(button.observer().events, vec![RecordEvent::Click]);
    assert!(!button.is_recording());
    assert_eq!(button.progress(), 0.0);
    assert_eq!(button.observer().redraws, 0);
}

/// WHAT: A begin phase starts recording and emits LongPressBegin
/// WHY: The begin phase is the single entry into a press cycle
#[test]
fn given_idle_control_when_press_begins_then_recording() {
    // Given: An idle control
    let mut button = probe_button(15.0);

    // When: A long press is recognized
    button.press_began();

    // Then: Recording is active, clock ticking, Begin emitted
    assert!(button.is_recording());
    assert!(button.is_ticking());
    assert_eq!(button.observer().events, vec![RecordEvent::LongPressBegin]);
}

/// WHAT: Movement inside the hit region is informational only
/// WHY: Moving must never alter elapsed time or recording state
#[test]
fn given_active_press_when_moving_inside_then_moving_event_only() {
    // Given: An active press with accumulated progress
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..6 {
        button.tick();
    }
    let progress = button.progress();

    // When: The pointer moves within bounds
    button.press_moved(INSIDE);

    // Then: A Moving event, nothing else changes
    assert!(button.is_recording());
    assert_eq!(button.progress(), progress);
    assert_eq!(
        button.observer().events,
        vec![RecordEvent::LongPressBegin, RecordEvent::LongPressMoving]
    );
}

/// WHAT: Movement outside the hit region cancels the press immediately
/// WHY: Dragging off the control is the cancel gesture
#[test]
fn given_active_press_when_moving_outside_then_cancelled() {
    // Given: An active press
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..6 {
        button.tick();
    }

    // When: The pointer leaves the hit region
    button.press_moved(OUTSIDE);

    // Then: Cancelled, progress reset, cancel flag set
    assert!(!button.is_recording());
    assert!(button.state().is_cancelled());
    assert_eq!(button.progress(), 0.0);
    assert_eq!(
        button.observer().events.last(),
        Some(&RecordEvent::LongPressCancel)
    );
}

/// WHAT: Phases after a cancel are no-ops for that press
/// WHY: A press cycle reaches its terminal event exactly once
#[test]
fn given_cancelled_press_when_more_phases_arrive_then_ignored() {
    // Given: A press cancelled by dragging outside
    let mut button = probe_button(1.0);
    button.press_began();
    button.press_moved(OUTSIDE);
    let events = button.observer().events.len();

    // When: Late moving and ended phases for the same press arrive
    button.press_moved(INSIDE);
    button.press_moved(OUTSIDE);
    button.press_ended();

    // Then: Nothing further was emitted
    assert_eq!(button.observer().events.len(), events);
    assert_eq!(terminal_count(button.observer()), 1);
}

/// WHAT: A stray cancelled phase after ended emits no second terminal
/// WHY: Host gesture recognizers can deliver late phases; stop must be idempotent
#[test]
fn given_ended_press_when_late_cancel_then_single_terminal() {
    // Given: A press completed by release
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..6 {
        button.tick();
    }
    button.press_ended();

    // When: A late host-level cancellation arrives
    button.press_cancelled();

    // Then: Exactly one terminal event, and it is Done
    assert_eq!(terminal_count(button.observer()), 1);
    assert_eq!(
        button.observer().events.last(),
        Some(&RecordEvent::LongPressDone)
    );
    assert!(!button.state().is_cancelled());
}

/// WHAT: A full press cycle emits Begin, then Moving, then one terminal
/// WHY: Consumers rely on this ordering to bracket a recording session
#[test]
fn given_full_cycle_when_replayed_then_events_ordered() {
    // Given: An idle control
    let mut button = probe_button(1.0);

    // When: A begin, two in-bounds moves and a release are delivered
    button.press_began();
    button.tick();
    button.press_moved(INSIDE);
    button.tick();
    button.press_moved(INSIDE);
    button.press_ended();

    // Then: Begin precedes Moving precedes exactly one terminal event
    assert_eq!(
        button.observer().events,
        vec![
            RecordEvent::LongPressBegin,
            RecordEvent::LongPressMoving,
            RecordEvent::LongPressMoving,
            RecordEvent::LongPressDone,
        ]
    );
}

/// WHAT: Host-level cancellation stops the press with a Cancel event
/// WHY: System interruptions must tear the cycle down like a drag-out does
#[test]
fn given_active_press_when_host_cancels_then_cancelled() {
    // Given: An active press
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..3 {
        button.tick();
    }

    // When: The host cancels the gesture
    button.press_cancelled();

    // Then: Cancelled terminal event, state reset
    assert_eq!(
        button.observer().events.last(),
        Some(&RecordEvent::LongPressCancel)
    );
    assert!(button.state().is_cancelled());
    assert_eq!(button.progress(), 0.0);
}
