//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LockController (domain)
//! ```
//!
//! Driven adapters (inputs, lock actuator, host link) implement these
//! traits.  The [`LockController`](super::service::LockController) consumes
//! them via generics, so the domain core never touches hardware directly.

use crate::sensors::{InitialReadings, InputEdges};

use super::events::NodeMessage;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain input data.
pub trait SensorPort {
    /// Immediate, undebounced read of every input.  Used once at startup.
    fn read_initial(&mut self) -> InitialReadings;

    /// Poll every debounced input once and return confirmed edges.
    fn poll_edges(&mut self, now_ms: u32) -> InputEdges;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the door lock and its status indicator.
pub trait LockActuatorPort {
    /// Energise (`true`) or release (`false`) the lock; the status
    /// indicator follows.  Failures are handled by the adapter.
    fn set_locked(&mut self, locked: bool);
}

// ───────────────────────────────────────────────────────────────
// Message sink port (driven adapter: domain → host link)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`NodeMessage`]s through this port.  The serial host
/// link is the production implementation.
pub trait MessageSink {
    fn send(&mut self, msg: &NodeMessage);
}
