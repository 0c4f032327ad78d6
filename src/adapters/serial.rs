//! UART transport for the host link.
//!
//! The host protocol runs on UART1 so that the console (UART0 / USB-CDC)
//! stays free for the logger.  Reads are non-blocking: `available()`
//! queries the driver's RX ring buffer before any byte is consumed.

#[cfg(target_os = "espidf")]
mod esp {
    use esp_idf_hal::delay::NON_BLOCK;
    use esp_idf_hal::gpio::AnyIOPin;
    use esp_idf_hal::peripheral::Peripheral;
    use esp_idf_hal::sys::EspError;
    use esp_idf_hal::uart::{self, Uart, UartDriver};
    use esp_idf_hal::units::Hertz;
    use log::info;

    use crate::link::Transport;

    pub struct UartTransport {
        uart: UartDriver<'static>,
    }

    impl UartTransport {
        pub fn new(
            uart: impl Peripheral<P = impl Uart> + 'static,
            tx_gpio: i32,
            rx_gpio: i32,
            baud: u32,
        ) -> Result<Self, EspError> {
            let config = uart::config::Config::new().baudrate(Hertz(baud));
            // SAFETY: the UART GPIOs come from a validated NodeConfig, so
            // they are distinct from every other claimed pin.
            let (tx, rx) = unsafe { (AnyIOPin::new(tx_gpio), AnyIOPin::new(rx_gpio)) };
            let uart = UartDriver::new(
                uart,
                tx,
                rx,
                Option::<AnyIOPin>::None,
                Option::<AnyIOPin>::None,
                &config,
            )?;
            info!("Host link: UART tx={} rx={} @ {} baud", tx_gpio, rx_gpio, baud);
            Ok(Self { uart })
        }
    }

    impl Transport for UartTransport {
        type Error = EspError;

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, EspError> {
            self.uart.read(buf, NON_BLOCK)
        }

        fn write(&mut self, data: &[u8]) -> Result<usize, EspError> {
            self.uart.write(data)
        }

        fn flush(&mut self) -> Result<(), EspError> {
            // Bytes sit in the driver's TX ring buffer; nothing to push.
            Ok(())
        }

        fn available(&self) -> bool {
            self.uart.remaining_read().is_ok_and(|n| n > 0)
        }
    }
}

#[cfg(target_os = "espidf")]
pub use esp::UartTransport;
