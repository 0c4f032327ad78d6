//! Outbound node messages.
//!
//! The [`LockController`](super::service::LockController) emits these
//! through the [`MessageSink`](super::ports::MessageSink) port.  `Display`
//! renders the exact message body the host expects; the host link adds
//! the `"<client_id> : "` prefix.

use core::fmt;

use crate::sensors::SensorId;

/// Messages sent from the node to the supervising host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMessage {
    /// Startup report of one input's raw level.
    Initial {
        sensor: SensorId,
        gpio: i32,
        active: bool,
    },
    DoorClosed,
    DoorOpen,
    LiftHere,
    LiftAway,
    DoorLockRequested,
    DoorLocked,
    DoorUnlocked,
    /// Safety alert: the door opened while the lock was engaged.
    DoorOpenWhileLocked,
    /// Call accepted: cab away, door closed and locked.
    ComeToMe,
    ForbiddenCall,
}

impl NodeMessage {
    pub const fn door(closed: bool) -> Self {
        if closed { Self::DoorClosed } else { Self::DoorOpen }
    }

    pub const fn lift(present: bool) -> Self {
        if present { Self::LiftHere } else { Self::LiftAway }
    }

    /// True for the safety alert.
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::DoorOpenWhileLocked)
    }
}

impl fmt::Display for NodeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial {
                sensor,
                gpio,
                active,
            } => write!(
                f,
                "initial {} ({}) : {}",
                sensor.name(),
                gpio,
                sensor.state_text(*active)
            ),
            Self::DoorClosed => f.write_str("DOOR CLOSED"),
            Self::DoorOpen => f.write_str("DOOR OPEN"),
            Self::LiftHere => f.write_str("LIFT HERE"),
            Self::LiftAway => f.write_str("LIFT AWAY"),
            Self::DoorLockRequested => f.write_str("DOOR LOCK REQUESTED"),
            Self::DoorLocked => f.write_str("DOOR LOCKED"),
            Self::DoorUnlocked => f.write_str("DOOR UNLOCKED"),
            Self::DoorOpenWhileLocked => f.write_str("ALERT: DOOR OPEN WHILE LOCKED"),
            Self::ComeToMe => f.write_str("COME TO ME"),
            Self::ForbiddenCall => f.write_str("FORBIDDEN CALL"),
        }
    }
}
