use crate::button::{ClockPhase, TickClock};

/// WHAT: A fresh clock is paused, not running
/// WHY: Ticks must only count once start has resumed the clock
#[test]
fn given_new_clock_then_paused() {
    // Given / When: A freshly created clock
    let clock = TickClock::new();

    // Then: Neither running nor invalidated
    assert!(!clock.is_running());
    assert!(!clock.is_invalidated());
}

/// WHAT: Pause and resume are idempotent
/// WHY: stop() pauses unconditionally; duplicate transitions must be harmless
#[test]
fn given_running_clock_when_paused_twice_then_still_paused() {
    // Given: A running clock
    let clock = TickClock::new();
    clock.resume();
    assert!(clock.is_running());

    // When: Paused twice and resumed twice
    clock.pause();
    clock.pause();
    assert!(!clock.is_running());
    clock.resume();
    clock.resume();

    // Then: Exactly the expected phase after each transition
    assert!(clock.is_running());
}

/// WHAT: Invalidation is terminal
/// WHY: A dismissed clock may never tick again, whatever is called on it
#[test]
fn given_invalidated_clock_when_resumed_then_still_dead() {
    // Given: An invalidated clock
    let clock = TickClock::new();
    clock.resume();
    clock.invalidate();

    // When: Pause and resume are attempted afterwards
    clock.resume();
    clock.pause();
    clock.resume();

    // Then: The clock stays invalidated and never runs
    assert!(clock.is_invalidated());
    assert!(!clock.is_running());
}

/// WHAT: The shared phase cell mirrors the clock it came from
/// WHY: Outstanding acks observe and mutate the same resource, not a copy
#[test]
fn given_shared_phase_cell_when_written_then_clock_observes() {
    // Given: A running clock and a shared view of its phase
    let clock = TickClock::new();
    clock.resume();
    let cell = clock.phase_cell();

    // When: The shared cell is marked invalidated
    cell.set(ClockPhase::Invalidated);

    // Then: The owning handle sees the dead clock
    assert!(clock.is_invalidated());
}
