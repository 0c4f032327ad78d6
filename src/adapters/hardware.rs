//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the [`InputBank`] and the [`LockDriver`], exposing them through
//! [`SensorPort`] and [`LockActuatorPort`].  The adapter itself is generic
//! over embedded-hal pins; the ESP-IDF constructor lives in [`esp`].

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{LockActuatorPort, SensorPort};
use crate::drivers::lock::LockDriver;
use crate::error::Error;
use crate::sensors::{InitialReadings, InputBank, InputEdges};

/// Concrete adapter that combines all landing hardware behind port traits.
pub struct HardwareAdapter<P, L, S> {
    inputs: InputBank<P>,
    lock: LockDriver<L, S>,
}

impl<P: InputPin, L: OutputPin, S: OutputPin> HardwareAdapter<P, L, S> {
    pub fn new(inputs: InputBank<P>, lock: LockDriver<L, S>) -> Self {
        Self { inputs, lock }
    }

    /// Seed the debouncers from the current input levels.
    pub fn init_inputs(&mut self) {
        self.inputs.init();
    }

    /// Last commanded lock output.
    pub fn lock_engaged(&self) -> bool {
        self.lock.is_engaged()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P: InputPin, L: OutputPin, S: OutputPin> SensorPort for HardwareAdapter<P, L, S> {
    fn read_initial(&mut self) -> InitialReadings {
        self.inputs.read_initial()
    }

    fn poll_edges(&mut self, now_ms: u32) -> InputEdges {
        self.inputs.poll_edges(now_ms)
    }
}

// ── LockActuatorPort implementation ───────────────────────────

impl<P: InputPin, L: OutputPin, S: OutputPin> LockActuatorPort for HardwareAdapter<P, L, S> {
    fn set_locked(&mut self, locked: bool) {
        if let Err(e) = self.lock.set(locked) {
            warn!("Lock output (locked={}): {}", locked, Error::from(e));
        }
    }
}

// ── ESP-IDF construction ──────────────────────────────────────

#[cfg(target_os = "espidf")]
pub mod esp {
    use esp_idf_hal::gpio::{self, AnyIOPin, AnyOutputPin, Input, Output, PinDriver};
    use esp_idf_hal::sys::EspError;
    use log::info;

    use super::HardwareAdapter;
    use crate::config::{InputConfig, NodeConfig, Pull};
    use crate::drivers::debounced_input::DebouncedInput;
    use crate::drivers::lock::LockDriver;
    use crate::sensors::InputBank;

    pub type EspInput = PinDriver<'static, AnyIOPin, Input>;
    pub type EspOutput = PinDriver<'static, AnyOutputPin, Output>;
    pub type EspHardware = HardwareAdapter<EspInput, EspOutput, EspOutput>;

    /// Claim the GPIO as an input and apply its pull mode.  This is the
    /// only place `InputConfig::pull` takes effect.
    fn input_pin(cfg: &InputConfig) -> Result<EspInput, EspError> {
        // SAFETY: `main` refuses to start unless NodeConfig::validate
        // passed, which rejects any GPIO (inputs, outputs, UART) assigned
        // twice; each input and output pin is claimed only here.
        let pin = unsafe { AnyIOPin::new(cfg.gpio) };
        let mut driver = PinDriver::input(pin)?;
        driver.set_pull(match cfg.pull {
            Pull::Up => gpio::Pull::Up,
            Pull::Floating => gpio::Pull::Floating,
        })?;
        Ok(driver)
    }

    fn output_pin(gpio: i32) -> Result<EspOutput, EspError> {
        // SAFETY: see `input_pin`.
        let pin = unsafe { AnyOutputPin::new(gpio) };
        PinDriver::output(pin)
    }

    /// Configure every landing GPIO from `config`.
    pub fn build(config: &NodeConfig) -> Result<EspHardware, EspError> {
        let debounced = |cfg: &InputConfig| -> Result<DebouncedInput<EspInput>, EspError> {
            Ok(DebouncedInput::new(input_pin(cfg)?, *cfg, config.debounce_ms))
        };

        let inputs = InputBank::new(
            debounced(&config.door)?,
            debounced(&config.lift)?,
            debounced(&config.call_button)?,
        );
        let lock = LockDriver::new(
            output_pin(config.lock_gpio)?,
            output_pin(config.status_led_gpio)?,
        );

        info!(
            "hw: inputs door={} lift={} call={}, lock={} led={}",
            config.door.gpio,
            config.lift.gpio,
            config.call_button.gpio,
            config.lock_gpio,
            config.status_led_gpio
        );
        Ok(HardwareAdapter::new(inputs, lock))
    }
}
