use crate::{
    RecordEvent, TICK_PERIOD,
    tests::button::{probe_button, terminal_count},
};

/// WHAT: A one-unit limit completes on tick 60 with a single LongPressDone
/// WHY: Completion must fire when elapsed meets the limit, not drift past it
#[test]
#[allow(clippy::unwrap_used)]
fn given_one_unit_limit_when_ticking_then_done_on_tick_sixty() {
    // Given: An active press with a 1.0 time-unit limit
    let mut button = probe_button(1.0);
    button.press_began();

    // When: Ticks are delivered until the cycle ends
    let mut done_at = None;
    for i in 1..=120 {
        button.tick();
        if !button.is_recording() {
            done_at = Some(i);
            break;
        }
    }

    // Then: Completion lands exactly on tick 60 and emits Done once
    assert_eq!(done_at.unwrap(), 60);
    assert_eq!(terminal_count(button.observer()), 1);
    assert_eq!(
        button
            .observer()
            .events
            .iter()
            .filter(|e| **e == RecordEvent::LongPressDone)
            .count(),
        1
    );
    assert_eq!(button.progress(), 0.0);
}

/// WHAT: Progress rises monotonically and never exceeds 1.0
/// WHY: The visual ring fill must grow smoothly and stay clamped
#[test]
fn given_active_press_when_ticking_then_progress_monotonic_and_clamped() {
    // Given: An active press with a half-unit limit (30 ticks)
    let mut button = probe_button(0.5);
    button.press_began();

    // When: Ticking well past the limit
    let mut previous = 0.0f32;
    for _ in 0..90 {
        button.tick();
        if button.is_recording() {
            let progress = button.progress();
            assert!(progress >= previous, "progress regressed mid-press");
            previous = progress;
        }
        assert!(button.progress() <= 1.0);
    }

    // Then: The cycle completed once and every published value was in range
    assert!(!button.is_recording());
    assert_eq!(terminal_count(button.observer()), 1);
    assert!(button.observer().progress_log.iter().all(|p| (0.0..=1.0).contains(p)));
}

/// WHAT: start() during an active press is ignored
/// WHY: A duplicate begin phase must not reset elapsed time or double-start the clock
#[test]
fn given_active_press_when_start_again_then_ignored() {
    // Given: A press that has accumulated some progress
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..10 {
        button.tick();
    }
    let progress = button.progress();
    assert!(progress > 0.0);

    // When: A second begin phase arrives mid-press
    button.press_began();

    // Then: Progress is untouched and only one Begin was emitted
    assert_eq!(button.progress(), progress);
    assert!(button.is_recording());
    assert_eq!(
        button
            .observer()
            .events
            .iter()
            .filter(|e| **e == RecordEvent::LongPressBegin)
            .count(),
        1
    );

    // And: The original cycle still completes on schedule
    for _ in 0..60 {
        button.tick();
    }
    assert_eq!(terminal_count(button.observer()), 1);
}

/// WHAT: Ticks after stop change nothing
/// WHY: The clock pauses as the first effect of stop, so a late tick cannot re-enter
#[test]
fn given_stopped_press_when_ticking_then_no_state_change() {
    // Given: A press that was stopped mid-flight
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..5 {
        button.tick();
    }
    button.press_ended();
    let redraws = button.observer().redraws;
    let events = button.observer().events.len();

    // When: Stray ticks arrive after the stop
    for _ in 0..10 {
        button.tick();
    }

    // Then: No progress, no redraws, no events
    assert_eq!(button.progress(), 0.0);
    assert!(!button.is_ticking());
    assert_eq!(button.observer().redraws, redraws);
    assert_eq!(button.observer().events.len(), events);
}

/// WHAT: A cancel mid-flight resets state and a fresh start begins from zero
/// WHY: Every press cycle is independent; cancelled time must not leak forward
#[test]
fn given_cancelled_press_when_restarted_then_fresh_cycle() {
    // Given: A press cancelled partway toward the limit
    let mut button = probe_button(1.0);
    button.press_began();
    for _ in 0..20 {
        button.tick();
    }
    button.press_cancelled();
    assert!(button.state().is_cancelled());
    assert_eq!(button.progress(), 0.0);
    assert_eq!(button.state().elapsed(), 0.0);

    // When: A new press begins
    button.press_began();

    // Then: The cancelled flag clears and progress restarts from zero
    assert!(!button.state().is_cancelled());
    assert_eq!(button.progress(), 0.0);
    button.tick();
    assert!((button.progress() - TICK_PERIOD).abs() < f32::EPSILON * 4.0);
}

/// WHAT: A release after auto-completion emits no second terminal event
/// WHY: The finger may still be down when the limit fires; the late ended phase is stale
#[test]
fn given_auto_completed_press_when_released_then_no_second_terminal() {
    // Given: A press driven to auto-completion by the clock
    let mut button = probe_button(0.5);
    button.press_began();
    for _ in 0..60 {
        button.tick();
    }
    assert!(!button.is_recording());
    assert_eq!(terminal_count(button.observer()), 1);

    // When: The user finally lifts the finger
    button.press_ended();

    // Then: Still exactly one terminal event
    assert_eq!(terminal_count(button.observer()), 1);
}
