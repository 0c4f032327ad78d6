//! Node configuration parameters
//!
//! All tunable parameters for a landing node.  There is no persistent
//! storage: the compiled-in defaults are validated once at boot.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::pins;

/// Separator placed between the client id and the message body on the wire.
pub const FIELD_SEPARATOR: &str = " : ";

/// Capacity of the client identifier.
pub const CLIENT_ID_CAP: usize = 8;

/// Input pull resistor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pull {
    /// No internal pull resistor (sensor drives the line).
    Floating,
    /// Internal pull-up enabled.
    Up,
}

/// Configuration of one digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// GPIO number, also reported in the startup messages.
    pub gpio: i32,
    /// Pull resistor applied when the pin is set up.
    pub pull: Pull,
    /// Logical level is the inverse of the electrical level.
    pub inverted: bool,
}

impl InputConfig {
    pub const fn new(gpio: i32, pull: Pull, inverted: bool) -> Self {
        Self { gpio, pull, inverted }
    }
}

/// Core node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    // --- Identity ---
    /// Level identifier prefixed to every outbound message ("B", "G", "1", "2").
    pub client_id: String<CLIENT_ID_CAP>,

    // --- Timing ---
    /// Stability window before an input change is confirmed (milliseconds)
    pub debounce_ms: u32,
    /// Control loop delay per iteration (milliseconds)
    pub loop_interval_ms: u32,

    // --- Host link ---
    pub serial_baud: u32,
    pub uart_tx_gpio: i32,
    pub uart_rx_gpio: i32,

    // --- Inputs ---
    pub door: InputConfig,
    pub lift: InputConfig,
    pub call_button: InputConfig,

    // --- Outputs ---
    pub lock_gpio: i32,
    pub status_led_gpio: i32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            client_id: String::try_from("2").unwrap_or_default(),

            // Timing
            debounce_ms: 50,
            loop_interval_ms: 1,

            serial_baud: pins::HOST_BAUD,
            uart_tx_gpio: pins::UART_TX_GPIO,
            uart_rx_gpio: pins::UART_RX_GPIO,

            // Inputs: end switches use the internal pull-up, the IR
            // sensor drives its own line.  All three are active LOW.
            door: InputConfig::new(pins::DOOR_SENSOR_GPIO, Pull::Up, true),
            lift: InputConfig::new(pins::LIFT_SENSOR_GPIO, Pull::Floating, true),
            call_button: InputConfig::new(pins::CALL_BUTTON_GPIO, Pull::Up, true),

            lock_gpio: pins::LOCK_DRIVER_GPIO,
            status_led_gpio: pins::STATUS_LED_GPIO,
        }
    }
}

impl NodeConfig {
    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let id = self.client_id.as_str();
        if id.is_empty() {
            return Err(ConfigError::ValidationFailed("client_id is empty"));
        }
        if !id.is_ascii() || id.contains(FIELD_SEPARATOR) || id.contains(['\r', '\n']) {
            return Err(ConfigError::ValidationFailed(
                "client_id must be ASCII without separator or line breaks",
            ));
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ValidationFailed("debounce_ms must be > 0"));
        }
        if self.loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("loop_interval_ms must be > 0"));
        }
        if self.loop_interval_ms >= self.debounce_ms {
            return Err(ConfigError::ValidationFailed(
                "loop_interval_ms must be below debounce_ms",
            ));
        }
        if self.serial_baud == 0 {
            return Err(ConfigError::ValidationFailed("serial_baud must be > 0"));
        }

        let gpios = [
            self.door.gpio,
            self.lift.gpio,
            self.call_button.gpio,
            self.lock_gpio,
            self.status_led_gpio,
            self.uart_tx_gpio,
            self.uart_rx_gpio,
        ];
        for (i, a) in gpios.iter().enumerate() {
            if gpios[i + 1..].contains(a) {
                return Err(ConfigError::ValidationFailed("GPIO assigned twice"));
            }
        }
        Ok(())
    }
}

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
        }
    }
}
