//! Input and actuator drivers, generic over embedded-hal pins.

pub mod debounced_input;
pub mod lock;
