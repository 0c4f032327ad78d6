//! GPIO / peripheral pin assignments for the landing node board.
//!
//! Single source of truth: the default [`NodeConfig`](crate::config::NodeConfig)
//! and the hardware adapter reference this module rather than hard-coding
//! pin numbers.

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Landing door end switch.  Closed door pulls the line LOW.
pub const DOOR_SENSOR_GPIO: i32 = 2;
/// Digital IR sensor facing the cab.  Active LOW when the cab is at this level.
pub const LIFT_SENSOR_GPIO: i32 = 3;
/// Landing call push-button (end switch).  Pressed pulls the line LOW.
pub const CALL_BUTTON_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Solid-state relay driving the 12 V magnetic door lock (active HIGH).
pub const LOCK_DRIVER_GPIO: i32 = 6;
/// On-board status LED, mirrors the lock state.
pub const STATUS_LED_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Host serial link (UART1)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

/// Host link baud rate.
pub const HOST_BAUD: u32 = 57_600;
