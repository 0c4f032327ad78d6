//! Inbound host commands.
//!
//! The supervising host sends one command per line.  Tokens are exact and
//! case-sensitive; anything else parses to [`HostCommand::Unknown`] so the
//! "ignore it" path is explicit.

/// Commands the host can send to a landing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// `UNLOCK_DOOR`: release the lock and drop any pending request.
    UnlockDoor,
    /// `LOCK_DOOR_REQUEST`: lock now if closed, otherwise once the door closes.
    LockDoorRequest,
    /// `SUCCESSFULL_CALIBRATION`: the host's position calibration is valid.
    CalibrationSucceeded,
    /// `LOST_CALIBRATION`: the host lost its position calibration.
    CalibrationLost,
    /// Any other line. Ignored.
    Unknown,
}

impl HostCommand {
    /// Parse one line (without its line terminator).
    pub fn parse(line: &str) -> Self {
        match line {
            "UNLOCK_DOOR" => Self::UnlockDoor,
            "LOCK_DOOR_REQUEST" => Self::LockDoorRequest,
            // Spelling is part of the host protocol.
            "SUCCESSFULL_CALIBRATION" => Self::CalibrationSucceeded,
            "LOST_CALIBRATION" => Self::CalibrationLost,
            _ => Self::Unknown,
        }
    }

    /// Parse raw line bytes; invalid UTF-8 is an unknown command.
    pub fn parse_bytes(line: &[u8]) -> Self {
        core::str::from_utf8(line).map_or(Self::Unknown, Self::parse)
    }
}
