//! LevelNode Firmware: Main Entry Point
//!
//! One landing node of the lift: three debounced inputs, a magnetic door
//! lock and a line protocol to the supervising host.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          HostLink<UartTransport>  Monotonic   │
//! │  (Sensor + LockActuator)  (MessageSink + commands) Clock       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              LockController (pure logic)               │    │
//! │  │  Unlocked · LockRequested · Locked · call gating       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info};

use levelnode::adapters::hardware;
use levelnode::adapters::serial::UartTransport;
use levelnode::adapters::time::MonotonicClock;
use levelnode::app::service::LockController;
use levelnode::config::NodeConfig;
use levelnode::error::Error;
use levelnode::link::HostLink;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  LevelNode v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = NodeConfig::default();
    if let Err(e) = config.validate().map_err(Error::from) {
        // Pin ownership below relies on every GPIO being distinct.
        error!("{}", e);
        anyhow::bail!("refusing to start: {}", e);
    }
    info!(
        "Config: client_id={} debounce={}ms loop={}ms baud={}",
        config.client_id, config.debounce_ms, config.loop_interval_ms, config.serial_baud
    );

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let transport = UartTransport::new(
        peripherals.uart1,
        config.uart_tx_gpio,
        config.uart_rx_gpio,
        config.serial_baud,
    )?;
    let mut hw = hardware::esp::build(&config)?;
    let mut link = HostLink::new(transport, config.client_id.clone());
    let clock = MonotonicClock::new();

    // ── 4. Startup sequencing ─────────────────────────────────
    hw.init_inputs();
    let mut controller = LockController::new();
    controller.start(&mut hw, &mut link);

    info!("Node ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        FreeRtos::delay_ms(config.loop_interval_ms);

        if let Some(cmd) = link.poll_command() {
            info!("RX | {:?}", cmd);
            controller.handle_command(cmd, &mut hw, &mut link);
        }

        controller.tick(clock.now_ms(), &mut hw, &mut link);
    }
}
