//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules of a landing node: the door-lock state
//! machine, call-button gating and the host command set.  All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
