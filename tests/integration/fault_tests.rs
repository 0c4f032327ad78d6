//! Hardware fault paths: failed GPIO reads and failed actuator writes.

use core::cell::Cell;
use std::rc::Rc;

use levelnode::adapters::hardware::HardwareAdapter;
use levelnode::app::ports::{LockActuatorPort, SensorPort};
use levelnode::app::service::{LockController, LockPhase};
use levelnode::config::NodeConfig;
use levelnode::drivers::debounced_input::{DebouncedInput, Edge};
use levelnode::drivers::lock::LockDriver;
use levelnode::error::ActuatorError;
use levelnode::sensors::{InputBank, InputEdges};

use crate::mock_hw::{FlakyOutput, FlakyPin, MockOutput, RecordingSink};

/// Inputs on one shared failure switch.  Electrical HIGH is inactive for
/// the default (inverted) wiring.
fn flaky_bank(fail: &Rc<Cell<bool>>) -> (InputBank<FlakyPin>, [FlakyPin; 3]) {
    let config = NodeConfig::default();
    let pins: [FlakyPin; 3] = core::array::from_fn(|_| FlakyPin {
        level: Rc::new(Cell::new(true)),
        fail: fail.clone(),
    });
    let bank = InputBank::new(
        DebouncedInput::new(pins[0].clone(), config.door, config.debounce_ms),
        DebouncedInput::new(pins[1].clone(), config.lift, config.debounce_ms),
        DebouncedInput::new(pins[2].clone(), config.call_button, config.debounce_ms),
    );
    (bank, pins)
}

#[test]
fn failed_startup_read_counts_as_inactive() {
    let fail = Rc::new(Cell::new(false));
    let (mut bank, pins) = flaky_bank(&fail);
    // Electrically active on every input.
    for p in &pins {
        p.level.set(false);
    }
    fail.set(true);
    bank.init();

    let initial = bank.read_initial();
    assert!(!initial.door.active);
    assert!(!initial.lift.active);
    assert!(!initial.call_button.active);
    assert_eq!(initial.door.gpio, 2);
}

#[test]
fn failed_poll_yields_no_edge() {
    let fail = Rc::new(Cell::new(false));
    let (mut bank, pins) = flaky_bank(&fail);
    bank.init();

    // Door closes, but every read fails from here on.
    pins[0].level.set(false);
    fail.set(true);
    for now in 0..200 {
        assert_eq!(bank.poll_edges(now), InputEdges::default());
    }

    // Reads recover: the change is seen fresh and still needs the window.
    fail.set(false);
    assert!(bank.poll_edges(200).is_empty());
    assert!(bank.poll_edges(250).is_empty());
    assert_eq!(bank.poll_edges(251).door, Some(Edge::Active));
}

#[test]
fn indicator_still_written_when_lock_write_fails() {
    let lock = FlakyOutput::default();
    let led = MockOutput::default();
    let mut driver = LockDriver::new(lock.clone(), led.clone());

    lock.fail.set(true);
    assert_eq!(driver.set(true), Err(ActuatorError::LockWriteFailed));
    assert!(led.level(), "indicator follows the commanded state");
    assert!(driver.is_engaged());
    assert_eq!(lock.out.writes(), 1, "only the construction write landed");
}

#[test]
fn indicator_failure_is_reported() {
    let led = FlakyOutput::default();
    let lock = MockOutput::default();
    let mut driver = LockDriver::new(lock.clone(), led.clone());

    led.fail.set(true);
    assert_eq!(driver.set(true), Err(ActuatorError::IndicatorWriteFailed));
    assert!(lock.level());
}

#[test]
fn controller_state_follows_state_machine_despite_actuator_faults() {
    let config = NodeConfig::default();
    let door = Rc::new(Cell::new(false)); // closed
    let lift = Rc::new(Cell::new(true)); // away
    let call = Rc::new(Cell::new(true)); // idle
    let no_fail = Rc::new(Cell::new(false));
    let pin = |level: &Rc<Cell<bool>>| FlakyPin {
        level: level.clone(),
        fail: no_fail.clone(),
    };
    let lock = FlakyOutput::default();
    let led = FlakyOutput::default();
    lock.fail.set(true);
    led.fail.set(true);

    let inputs = InputBank::new(
        DebouncedInput::new(pin(&door), config.door, config.debounce_ms),
        DebouncedInput::new(pin(&lift), config.lift, config.debounce_ms),
        DebouncedInput::new(pin(&call), config.call_button, config.debounce_ms),
    );
    let mut hw = HardwareAdapter::new(inputs, LockDriver::new(lock.clone(), led.clone()));
    hw.init_inputs();

    let mut sink = RecordingSink::new();
    let mut ctl = LockController::new();
    ctl.start(&mut hw, &mut sink);
    assert_eq!(ctl.phase(), LockPhase::Locked);
    assert!(hw.lock_engaged());
    assert_eq!(lock.out.writes(), 0);

    // Door opens: the alert path still runs and the state unlocks.
    door.set(true);
    sink.clear();
    for now in 0..100 {
        ctl.tick(now, &mut hw, &mut sink);
    }
    assert_eq!(
        sink.bodies(),
        vec!["DOOR OPEN", "ALERT: DOOR OPEN WHILE LOCKED", "DOOR UNLOCKED"]
    );
    assert!(!ctl.state().door_locked);
    assert!(!hw.lock_engaged());

    // Outputs recover on the next command.
    lock.fail.set(false);
    led.fail.set(false);
    hw.set_locked(false);
    assert!(!lock.out.level());
    assert_eq!(led.out.writes(), 1);
}
