//! Landing sensors: door end switch, cab presence IR sensor, call button.
//!
//! [`InputBank`] owns one [`DebouncedInput`] per physical signal and is
//! polled once per control tick.  Read failures are logged and treated as
//! "no edge" for that tick; a disconnected sensor simply reads a fixed
//! level and is handled as ordinary sensor data.

use embedded_hal::digital::InputPin;
use log::{debug, warn};

use crate::app::ports::SensorPort;
use crate::drivers::debounced_input::{DebouncedInput, Edge};
use crate::error::{Error, InputError};

/// Identifies one of the three landing inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorId {
    Door,
    Lift,
    CallButton,
}

impl SensorId {
    /// Name used in the startup report.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Door => "door_sensor",
            Self::Lift => "lift_sensor",
            Self::CallButton => "call_button",
        }
    }

    /// State text for a logical level.
    pub const fn state_text(self, active: bool) -> &'static str {
        match (self, active) {
            (Self::Door, true) => "DOOR CLOSED",
            (Self::Door, false) => "DOOR OPEN",
            (Self::Lift, true) => "LIFT HERE",
            (Self::Lift, false) => "LIFT AWAY",
            (Self::CallButton, true) => "CALL BUTTON PRESSED",
            (Self::CallButton, false) => "CALL BUTTON IDLE",
        }
    }
}

/// Undebounced level of one input, read once at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub gpio: i32,
    pub active: bool,
}

/// Raw startup readings of all three inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialReadings {
    pub door: Reading,
    pub lift: Reading,
    pub call_button: Reading,
}

/// Confirmed edges from a single control tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub door: Option<Edge>,
    pub lift: Option<Edge>,
    pub call_button: Option<Edge>,
}

impl InputEdges {
    pub fn is_empty(&self) -> bool {
        self.door.is_none() && self.lift.is_none() && self.call_button.is_none()
    }
}

/// The three debounced landing inputs.
pub struct InputBank<P> {
    door: DebouncedInput<P>,
    lift: DebouncedInput<P>,
    call_button: DebouncedInput<P>,
}

impl<P: InputPin> InputBank<P> {
    pub fn new(
        door: DebouncedInput<P>,
        lift: DebouncedInput<P>,
        call_button: DebouncedInput<P>,
    ) -> Self {
        Self {
            door,
            lift,
            call_button,
        }
    }

    /// Seed every input's debounce state from its current level.
    pub fn init(&mut self) {
        for (id, input) in [
            (SensorId::Door, &mut self.door),
            (SensorId::Lift, &mut self.lift),
            (SensorId::CallButton, &mut self.call_button),
        ] {
            if let Err(e) = input.init() {
                warn!("{}: init read failed ({:?})", id.name(), e);
            }
        }
    }

    fn poll_one(id: SensorId, input: &mut DebouncedInput<P>, now_ms: u32) -> Option<Edge> {
        match input.poll(now_ms) {
            Ok(Some(edge)) => {
                debug!("{}: confirmed {:?}", id.name(), edge);
                Some(edge)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("{} ({:?})", Error::from(InputError::GpioReadFailed(input.gpio())), e);
                None
            }
        }
    }

    fn read_one(input: &mut DebouncedInput<P>) -> Reading {
        let gpio = input.gpio();
        let active = input.read_raw().unwrap_or_else(|e| {
            warn!("{} ({:?})", Error::from(InputError::GpioReadFailed(gpio)), e);
            false
        });
        Reading { gpio, active }
    }
}

impl<P: InputPin> SensorPort for InputBank<P> {
    fn read_initial(&mut self) -> InitialReadings {
        InitialReadings {
            door: Self::read_one(&mut self.door),
            lift: Self::read_one(&mut self.lift),
            call_button: Self::read_one(&mut self.call_button),
        }
    }

    fn poll_edges(&mut self, now_ms: u32) -> InputEdges {
        InputEdges {
            door: Self::poll_one(SensorId::Door, &mut self.door, now_ms),
            lift: Self::poll_one(SensorId::Lift, &mut self.lift, now_ms),
            call_button: Self::poll_one(SensorId::CallButton, &mut self.call_button, now_ms),
        }
    }
}
