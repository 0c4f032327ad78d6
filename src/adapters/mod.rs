//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to                 |
//! |------------|--------------------|-----------------------------|
//! | `hardware` | SensorPort         | door / lift / call GPIOs    |
//! |            | LockActuatorPort   | lock SSR + status LED GPIOs |
//! | `serial`   | Transport          | ESP-IDF UART1 (host link)   |
//! | `time`     | (none)             | ESP32 system timer          |
//!
//! The [`MessageSink`](crate::app::ports::MessageSink) port is implemented
//! by [`HostLink`](crate::link::HostLink) on top of any transport.

pub mod hardware;
pub mod serial;
pub mod time;
