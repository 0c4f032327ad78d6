//! Magnetic door lock driver.
//!
//! An SSR switches the 12 V magnetic lock; a status LED mirrors the lock
//! state.  Both outputs are always written together so the indicator can
//! never disagree with the relay.
//!
//! ## Dual-target design
//!
//! Generic over [`OutputPin`]: on ESP-IDF the hardware adapter passes
//! `PinDriver`s, tests pass in-memory pins.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::error::ActuatorError;

pub struct LockDriver<L, S> {
    lock: L,
    indicator: S,
    engaged: bool,
}

impl<L: OutputPin, S: OutputPin> LockDriver<L, S> {
    /// Take ownership of the outputs and drive both LOW (released).
    pub fn new(lock: L, indicator: S) -> Self {
        let mut driver = Self {
            lock,
            indicator,
            engaged: false,
        };
        if let Err(e) = driver.set(false) {
            warn!("Lock: initial release failed: {}", e);
        }
        driver
    }

    /// Energise (`true`) or release (`false`) the lock.
    ///
    /// The indicator is written even when the relay write fails; the
    /// first failure is reported.
    pub fn set(&mut self, engaged: bool) -> Result<(), ActuatorError> {
        let lock_res = if engaged {
            self.lock.set_high()
        } else {
            self.lock.set_low()
        };
        let led_res = if engaged {
            self.indicator.set_high()
        } else {
            self.indicator.set_low()
        };
        self.engaged = engaged;

        lock_res.map_err(|_| ActuatorError::LockWriteFailed)?;
        led_res.map_err(|_| ActuatorError::IndicatorWriteFailed)?;
        Ok(())
    }

    /// Last commanded state.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}
