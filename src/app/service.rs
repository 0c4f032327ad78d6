//! Lock controller: the hexagonal core.
//!
//! [`LockController`] owns the door/lift/call state and the door-lock
//! state machine.  All I/O flows through port traits injected at call
//! sites, so the whole controller is testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ MessageSink
//!  HostCommand ──▶│     LockController     │
//! LockActuator ◀──│  Unlocked·Requested·Locked
//!                 └────────────────────────┘
//! ```
//!
//! ## Lock state machine
//!
//! | From          | Trigger                      | To            | Messages                         |
//! |---------------|------------------------------|---------------|----------------------------------|
//! | any           | lock request, door closed    | Locked        | DOOR LOCKED                      |
//! | any           | lock request, door open      | LockRequested | DOOR LOCK REQUESTED              |
//! | LockRequested | door closes                  | Locked        | DOOR CLOSED, DOOR LOCKED         |
//! | Locked        | door opens                   | Unlocked      | DOOR OPEN, ALERT, DOOR UNLOCKED  |
//! | any           | unlock                       | Unlocked      | DOOR UNLOCKED                    |
//!
//! Invariant: the lock is only ever engaged while the door is closed.

use log::{debug, info, warn};

use crate::sensors::{InitialReadings, InputEdges, SensorId};

use super::commands::HostCommand;
use super::events::NodeMessage;
use super::ports::{LockActuatorPort, MessageSink, SensorPort};

/// Snapshot of everything the controller knows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockState {
    pub door_closed: bool,
    pub door_locked: bool,
    pub lock_requested: bool,
    pub lift_present: bool,
    pub call_button_pressed: bool,
    /// Host calibration report.  Advisory only.
    pub calibration_ok: bool,
}

/// The lock state machine folded out of `(lock_requested, door_locked)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPhase {
    Unlocked,
    LockRequested,
    Locked,
}

impl LockState {
    pub fn phase(&self) -> LockPhase {
        if self.door_locked {
            LockPhase::Locked
        } else if self.lock_requested {
            LockPhase::LockRequested
        } else {
            LockPhase::Unlocked
        }
    }

    /// A call is only served when the cab is elsewhere and the shaft is
    /// sealed at this level.
    pub fn call_allowed(&self) -> bool {
        !self.lift_present && self.door_closed && self.door_locked
    }
}

pub struct LockController {
    state: LockState,
}

impl Default for LockController {
    fn default() -> Self {
        Self::new()
    }
}

impl LockController {
    pub fn new() -> Self {
        Self {
            state: LockState::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// One-time startup sequencing.
    ///
    /// Seeds the state from raw (undebounced) reads, reports each input,
    /// and requests the lock straight away when the cab is away and the
    /// door is closed.  This is not re-armed later.
    pub fn start(
        &mut self,
        hw: &mut (impl SensorPort + LockActuatorPort),
        sink: &mut impl MessageSink,
    ) -> InitialReadings {
        let readings = hw.read_initial();

        self.state = LockState {
            door_closed: readings.door.active,
            lift_present: readings.lift.active,
            call_button_pressed: readings.call_button.active,
            ..LockState::default()
        };

        for (sensor, reading) in [
            (SensorId::Door, readings.door),
            (SensorId::Lift, readings.lift),
            (SensorId::CallButton, readings.call_button),
        ] {
            info!(
                "Initial {} (GPIO {}): {}",
                sensor.name(),
                reading.gpio,
                sensor.state_text(reading.active)
            );
            sink.send(&NodeMessage::Initial {
                sensor,
                gpio: reading.gpio,
                active: reading.active,
            });
        }

        if !self.state.lift_present && self.state.door_closed {
            self.request_lock(hw, sink);
        }
        readings
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Poll the inputs once and apply any confirmed edges.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + LockActuatorPort),
        sink: &mut impl MessageSink,
    ) {
        let edges = hw.poll_edges(now_ms);
        if edges.is_empty() {
            return;
        }
        self.apply_edges(edges, hw, sink);
    }

    /// Apply one tick's edges in fixed order: door, lift, call button.
    pub fn apply_edges(
        &mut self,
        edges: InputEdges,
        act: &mut impl LockActuatorPort,
        sink: &mut impl MessageSink,
    ) {
        if let Some(edge) = edges.door {
            self.on_door_edge(edge.is_active(), act, sink);
        }
        if let Some(edge) = edges.lift {
            self.on_lift_edge(edge.is_active(), sink);
        }
        if let Some(edge) = edges.call_button {
            self.on_call_button_edge(edge.is_active(), sink);
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one host command.
    pub fn handle_command(
        &mut self,
        cmd: HostCommand,
        act: &mut impl LockActuatorPort,
        sink: &mut impl MessageSink,
    ) {
        match cmd {
            HostCommand::UnlockDoor => self.unlock(act, sink),
            HostCommand::LockDoorRequest => self.request_lock(act, sink),
            HostCommand::CalibrationSucceeded => self.on_calibration_report(true),
            HostCommand::CalibrationLost => self.on_calibration_report(false),
            HostCommand::Unknown => debug!("Host command ignored"),
        }
    }

    // ── Transitions ───────────────────────────────────────────

    /// Lock now if the door is closed, otherwise hold the request until
    /// it closes.
    pub fn request_lock(&mut self, act: &mut impl LockActuatorPort, sink: &mut impl MessageSink) {
        if self.state.door_closed {
            self.engage(act, sink);
        } else {
            let prev = self.state.phase();
            self.state.lock_requested = true;
            sink.send(&NodeMessage::DoorLockRequested);
            self.log_phase(prev);
        }
    }

    /// Unconditionally release the lock and drop any pending request.
    pub fn unlock(&mut self, act: &mut impl LockActuatorPort, sink: &mut impl MessageSink) {
        let prev = self.state.phase();
        self.state.lock_requested = false;
        self.state.door_locked = false;
        act.set_locked(false);
        sink.send(&NodeMessage::DoorUnlocked);
        self.log_phase(prev);
    }

    pub fn on_door_edge(
        &mut self,
        closed: bool,
        act: &mut impl LockActuatorPort,
        sink: &mut impl MessageSink,
    ) {
        self.state.door_closed = closed;
        sink.send(&NodeMessage::door(closed));

        if closed && self.state.lock_requested {
            self.engage(act, sink);
        }
        if !closed && self.state.door_locked {
            warn!("SAFETY | door opened while locked, forcing unlock");
            sink.send(&NodeMessage::DoorOpenWhileLocked);
            self.unlock(act, sink);
        }
    }

    pub fn on_lift_edge(&mut self, present: bool, sink: &mut impl MessageSink) {
        self.state.lift_present = present;
        sink.send(&NodeMessage::lift(present));
    }

    /// Only a press is answered; releases just update the state.
    pub fn on_call_button_edge(&mut self, pressed: bool, sink: &mut impl MessageSink) {
        self.state.call_button_pressed = pressed;
        if !pressed {
            return;
        }
        if self.state.call_allowed() {
            sink.send(&NodeMessage::ComeToMe);
        } else {
            info!("Call refused: {:?}", self.state);
            sink.send(&NodeMessage::ForbiddenCall);
        }
    }

    pub fn on_calibration_report(&mut self, ok: bool) {
        if self.state.calibration_ok != ok {
            info!("Host calibration {}", if ok { "valid" } else { "lost" });
        }
        self.state.calibration_ok = ok;
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn phase(&self) -> LockPhase {
        self.state.phase()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Caller guarantees the door is closed.
    fn engage(&mut self, act: &mut impl LockActuatorPort, sink: &mut impl MessageSink) {
        debug_assert!(self.state.door_closed);
        let prev = self.state.phase();
        act.set_locked(true);
        self.state.door_locked = true;
        self.state.lock_requested = false;
        sink.send(&NodeMessage::DoorLocked);
        self.log_phase(prev);
    }

    fn log_phase(&self, prev: LockPhase) {
        let now = self.state.phase();
        if now != prev {
            info!("LOCK | {:?} -> {:?}", prev, now);
        }
    }
}
