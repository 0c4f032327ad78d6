//! LockController scenarios against scripted sensor edges.

use levelnode::app::commands::HostCommand;
use levelnode::app::events::NodeMessage;
use levelnode::app::service::{LockController, LockPhase};
use levelnode::drivers::debounced_input::Edge;
use levelnode::sensors::InputEdges;

use crate::mock_hw::{MockHardware, RecordingSink};

fn door(edge: Edge) -> InputEdges {
    InputEdges {
        door: Some(edge),
        ..InputEdges::default()
    }
}

fn call(edge: Edge) -> InputEdges {
    InputEdges {
        call_button: Some(edge),
        ..InputEdges::default()
    }
}

fn started(door_closed: bool, lift_present: bool) -> (LockController, MockHardware, RecordingSink) {
    let mut hw = MockHardware::new(door_closed, lift_present, false);
    let mut sink = RecordingSink::new();
    let mut ctl = LockController::new();
    ctl.start(&mut hw, &mut sink);
    (ctl, hw, sink)
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn startup_reports_each_input() {
    let (_, _, sink) = started(false, true);
    assert_eq!(
        sink.bodies(),
        vec![
            "initial door_sensor (2) : DOOR OPEN",
            "initial lift_sensor (3) : LIFT HERE",
            "initial call_button (4) : CALL BUTTON IDLE",
        ]
    );
}

#[test]
fn startup_door_closed_lift_away_locks() {
    let (ctl, hw, sink) = started(true, false);
    assert_eq!(sink.messages.last(), Some(&NodeMessage::DoorLocked));
    assert!(!sink.messages.contains(&NodeMessage::DoorLockRequested));
    assert_eq!(ctl.phase(), LockPhase::Locked);
    assert!(hw.lock_engaged());
}

#[test]
fn startup_with_lift_present_does_not_lock() {
    let (ctl, hw, sink) = started(true, true);
    assert_eq!(sink.messages.len(), 3, "only the initial reports");
    assert_eq!(ctl.phase(), LockPhase::Unlocked);
    assert!(hw.lock_calls.is_empty());
}

#[test]
fn startup_lock_is_not_rearmed_later() {
    let (mut ctl, mut hw, mut sink) = started(true, false);
    ctl.handle_command(HostCommand::UnlockDoor, &mut hw, &mut sink);

    // Cab leaves and door cycles: no automatic re-lock.
    hw.push_edges(InputEdges {
        lift: Some(Edge::Inactive),
        ..InputEdges::default()
    });
    hw.push_edges(door(Edge::Inactive));
    hw.push_edges(door(Edge::Active));
    for t in 0..3 {
        ctl.tick(t, &mut hw, &mut sink);
    }
    assert_eq!(ctl.phase(), LockPhase::Unlocked);
}

// ── Safety alert ──────────────────────────────────────────────

#[test]
fn door_opening_while_locked_alerts_and_unlocks() {
    let (mut ctl, mut hw, mut sink) = started(true, false);
    sink.clear();

    hw.push_edges(door(Edge::Inactive));
    ctl.tick(100, &mut hw, &mut sink);

    assert_eq!(
        sink.bodies(),
        vec!["DOOR OPEN", "ALERT: DOOR OPEN WHILE LOCKED", "DOOR UNLOCKED"]
    );
    assert!(!ctl.state().door_locked);
    assert!(!hw.lock_engaged());
}

#[test]
fn door_opening_while_unlocked_is_plain() {
    let (mut ctl, mut hw, mut sink) = started(true, true);
    sink.clear();
    hw.push_edges(door(Edge::Inactive));
    ctl.tick(0, &mut hw, &mut sink);
    assert_eq!(sink.bodies(), vec!["DOOR OPEN"]);
}

// ── Call button ───────────────────────────────────────────────

#[test]
fn call_with_locked_door_and_cab_away_is_accepted() {
    let (mut ctl, mut hw, mut sink) = started(true, false);
    sink.clear();
    hw.push_edges(call(Edge::Active));
    ctl.tick(0, &mut hw, &mut sink);
    assert_eq!(sink.messages, vec![NodeMessage::ComeToMe]);
    assert!(ctl.state().call_button_pressed);
}

#[test]
fn call_with_unlocked_door_is_forbidden() {
    let (mut ctl, mut hw, mut sink) = started(true, true);
    ctl.handle_command(HostCommand::UnlockDoor, &mut hw, &mut sink);
    sink.clear();

    hw.push_edges(call(Edge::Active));
    hw.push_edges(call(Edge::Inactive));
    ctl.tick(0, &mut hw, &mut sink);
    ctl.tick(1, &mut hw, &mut sink);
    assert_eq!(sink.bodies(), vec!["FORBIDDEN CALL"]);
    assert!(!ctl.state().call_button_pressed);
}

// ── Pending lock request ──────────────────────────────────────

#[test]
fn lock_request_with_open_door_waits_for_close() {
    let (mut ctl, mut hw, mut sink) = started(false, false);
    sink.clear();

    ctl.handle_command(HostCommand::LockDoorRequest, &mut hw, &mut sink);
    assert_eq!(sink.messages, vec![NodeMessage::DoorLockRequested]);
    assert_eq!(ctl.phase(), LockPhase::LockRequested);
    assert!(hw.lock_calls.is_empty(), "nothing energised while open");

    // Unrelated edges keep the request pending.
    hw.push_edges(call(Edge::Active));
    ctl.tick(10, &mut hw, &mut sink);
    assert!(ctl.state().lock_requested);

    sink.clear();
    hw.push_edges(door(Edge::Active));
    ctl.tick(20, &mut hw, &mut sink);
    assert_eq!(sink.bodies(), vec!["DOOR CLOSED", "DOOR LOCKED"]);
    assert_eq!(ctl.phase(), LockPhase::Locked);
    assert!(!ctl.state().lock_requested);
    assert!(hw.lock_engaged());
}

#[test]
fn same_tick_edges_apply_door_first() {
    let (mut ctl, mut hw, mut sink) = started(false, false);
    ctl.handle_command(HostCommand::LockDoorRequest, &mut hw, &mut sink);
    sink.clear();

    // Door closes and call is pressed in the same tick: the call sees
    // the freshly locked door.
    hw.push_edges(InputEdges {
        door: Some(Edge::Active),
        lift: None,
        call_button: Some(Edge::Active),
    });
    ctl.tick(0, &mut hw, &mut sink);
    assert_eq!(sink.bodies(), vec!["DOOR CLOSED", "DOOR LOCKED", "COME TO ME"]);
}

#[test]
fn lift_edges_only_report() {
    let (mut ctl, mut hw, mut sink) = started(true, false);
    sink.clear();
    let locks_before = hw.lock_calls.len();

    hw.push_edges(InputEdges {
        lift: Some(Edge::Active),
        ..InputEdges::default()
    });
    ctl.tick(0, &mut hw, &mut sink);
    assert_eq!(sink.bodies(), vec!["LIFT HERE"]);
    assert!(ctl.state().lift_present);
    assert_eq!(ctl.phase(), LockPhase::Locked);
    assert_eq!(hw.lock_calls.len(), locks_before);
}
