//! Full stack on mock pins: real debouncers, real lock driver, host link.

use levelnode::app::service::{LockController, LockPhase};
use levelnode::config::NodeConfig;
use levelnode::link::HostLink;

use crate::mock_hw::{Bench, MemTransport};

struct Node {
    bench: Bench,
    hw: levelnode::adapters::hardware::HardwareAdapter<
        crate::mock_hw::MockPin,
        crate::mock_hw::MockOutput,
        crate::mock_hw::MockOutput,
    >,
    link: HostLink<MemTransport>,
    ctl: LockController,
}

impl Node {
    fn boot(door_closed: bool, lift_present: bool) -> Self {
        let config = NodeConfig::default();
        let (bench, mut hw) = Bench::build(&config, door_closed, lift_present, false);
        let mut link = HostLink::new(MemTransport::new(), config.client_id.clone());
        let mut ctl = LockController::new();
        hw.init_inputs();
        ctl.start(&mut hw, &mut link);
        link.transport_mut().tx.clear();
        Self { bench, hw, link, ctl }
    }

    /// Run one tick per millisecond over `[from, to)`.
    fn run(&mut self, from: u32, to: u32) {
        for now in from..to {
            if let Some(cmd) = self.link.poll_command() {
                self.ctl.handle_command(cmd, &mut self.hw, &mut self.link);
            }
            self.ctl.tick(now, &mut self.hw, &mut self.link);
        }
    }

    fn lines(&self) -> Vec<String> {
        self.link.transport().lines()
    }
}

#[test]
fn lock_outputs_start_low() {
    let config = NodeConfig::default();
    let (bench, hw) = Bench::build(&config, false, true, false);
    assert!(!bench.lock.level());
    assert!(!bench.led.level());
    assert!(!hw.lock_engaged());
}

#[test]
fn boot_into_locked_drives_lock_and_indicator() {
    let node = Node::boot(true, false);
    assert_eq!(node.ctl.phase(), LockPhase::Locked);
    assert!(node.bench.lock.level());
    assert!(node.bench.led.level());
}

#[test]
fn stable_inputs_emit_nothing() {
    let mut node = Node::boot(true, false);
    node.run(0, 500);
    assert!(node.lines().is_empty());
}

#[test]
fn door_edge_needs_more_than_the_window() {
    let mut node = Node::boot(true, true);
    node.run(0, 10);

    node.bench.set_door_closed(false);
    // Transition seen at t=10; 10 + 50 is still inside the window.
    node.run(10, 61);
    assert!(node.lines().is_empty());
    node.run(61, 62);
    assert_eq!(node.lines(), vec!["2 : DOOR OPEN"]);
}

#[test]
fn bouncing_contact_is_filtered() {
    let mut node = Node::boot(true, true);
    for t in 0..40 {
        node.bench.set_door_closed(t % 2 == 0);
        node.run(t, t + 1);
    }
    // Settles back closed: no edge ever reported.
    node.bench.set_door_closed(true);
    node.run(40, 200);
    assert!(node.lines().is_empty());
}

#[test]
fn opening_a_locked_door_releases_the_lock() {
    let mut node = Node::boot(true, false);
    node.bench.set_door_closed(false);
    node.run(0, 100);

    assert_eq!(
        node.lines(),
        vec![
            "2 : DOOR OPEN",
            "2 : ALERT: DOOR OPEN WHILE LOCKED",
            "2 : DOOR UNLOCKED",
        ]
    );
    assert!(!node.bench.lock.level());
    assert!(!node.bench.led.level());
}

#[test]
fn host_request_then_close_locks() {
    let mut node = Node::boot(false, false);
    node.link.transport_mut().inject(b"LOCK_DOOR_REQUEST\r\n");
    node.run(0, 5);
    assert!(!node.bench.lock.level());

    node.bench.set_door_closed(true);
    node.run(5, 100);
    assert_eq!(
        node.lines(),
        vec!["2 : DOOR LOCK REQUESTED", "2 : DOOR CLOSED", "2 : DOOR LOCKED"]
    );
    assert!(node.bench.lock.level());

    node.bench.set_call_pressed(true);
    node.run(100, 200);
    assert_eq!(node.lines().last().map(String::as_str), Some("2 : COME TO ME"));
}
