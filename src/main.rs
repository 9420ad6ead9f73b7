//! Centristub Firmware — Main Entry Point
//!
//! Minimal protocol stand-in for the centrifuge controller. One
//! cooperative loop drives the whole system:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  loop:                                                   │
//! │    drain UART ──▶ LineAccumulator ──▶ Controller          │
//! │                     (dispatch to full response)          │
//! │    monotonic clock ──▶ 200 ms status reporter             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! No interrupts, no tasks beyond the main one, no locking — every
//! command completes in one dispatch step before the next is read.
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use centristub::adapters::hardware::HardwareAdapter;
use centristub::adapters::time::MonotonicClock;
use centristub::adapters::uart::UartLink;
use centristub::app::service::Controller;
use centristub::config::StubConfig;
use centristub::drivers::hw_init;
use centristub::drivers::motor::MotorDriver;

/// Scratch buffer for one UART drain. The driver buffers the rest;
/// anything beyond this is picked up next iteration.
const RX_CHUNK: usize = 64;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!(
        "centristub v{} (protocol stub, no closed loop)",
        env!("CARGO_PKG_VERSION")
    );

    let config = StubConfig::default();

    // ── 2. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // PWM init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let mut uart = match UartLink::init(config.uart_baud) {
        Ok(u) => u,
        Err(e) => {
            log::error!("UART init failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Controller + adapters ──────────────────────────────
    let mut hw = HardwareAdapter::new(MotorDriver::new());
    let clock = MonotonicClock::new();
    let mut controller = Controller::new(config);

    controller.start(clock.now_ms(), &mut hw, &mut uart);
    info!("System ready. Entering control loop.");

    // ── 4. Control loop ───────────────────────────────────────
    let mut rx_buf = [0u8; RX_CHUNK];

    loop {
        // Drain everything currently buffered, one chunk at a time,
        // dispatching each completed line before reading on.
        loop {
            let n = uart.read_available(&mut rx_buf);
            if n == 0 {
                break;
            }
            controller.feed(&rx_buf[..n], &mut hw, &mut uart);
        }

        controller.poll_status(clock.now_ms(), &mut uart);

        // Yield to the scheduler between iterations; the UART driver
        // keeps buffering while we sleep.
        #[cfg(target_os = "espidf")]
        // SAFETY: vTaskDelay from the main task is always valid.
        unsafe {
            esp_idf_svc::sys::vTaskDelay(1);
        }
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}
