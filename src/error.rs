//! Unified error types for the LevelNode firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the
//! control loop and adapters log failures the same way.  All variants are
//! `Copy`; none of them is fatal at runtime.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digital input could not be read.
    Input(InputError),
    /// The lock driver or status indicator could not be written.
    Actuator(ActuatorError),
    /// The host serial link failed.
    Link(LinkError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Link(e) => write!(f, "link: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// GPIO level read failed on the given pin.
    GpioReadFailed(i32),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed(pin) => write!(f, "GPIO {pin} read failed"),
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// Lock driver (SSR) write failed.
    LockWriteFailed,
    /// Status indicator write failed.
    IndicatorWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockWriteFailed => write!(f, "lock driver write failed"),
            Self::IndicatorWriteFailed => write!(f, "status indicator write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Host link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The transport reported a read failure.
    ReadFailed,
    /// The transport reported a write failure (message dropped).
    WriteFailed,
    /// An inbound line exceeded the line buffer and was discarded.
    LineTooLong,
    /// An outbound message did not fit the frame buffer.
    MessageTooLong,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "read failed"),
            Self::WriteFailed => write!(f, "write failed"),
            Self::LineTooLong => write!(f, "inbound line too long"),
            Self::MessageTooLong => write!(f, "outbound message too long"),
        }
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Self::Link(e)
    }
}
