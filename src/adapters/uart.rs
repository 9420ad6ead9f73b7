//! Control UART adapter.
//!
//! Owns the line-delimited serial link to the desktop UI: non-blocking
//! drain of received bytes on the read side, [`ResponseSink`] on the
//! write side (one protocol line per call, `\n` appended).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real UART driver via raw sys calls.
//! On host/test: reads nothing, writes to the log.

use crate::app::ports::ResponseSink;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during UART driver bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    ParamConfigFailed(i32),
    PinConfigFailed(i32),
    DriverInstallFailed(i32),
}

impl core::fmt::Display for UartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ParamConfigFailed(rc) => write!(f, "UART param config failed (rc={})", rc),
            Self::PinConfigFailed(rc) => write!(f, "UART pin config failed (rc={})", rc),
            Self::DriverInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
        }
    }
}

// ── UartLink ──────────────────────────────────────────────────

/// Driver-side receive buffer size handed to the ESP-IDF UART driver.
#[cfg(target_os = "espidf")]
const RX_DRIVER_BUF: i32 = 256;

pub struct UartLink {
    #[cfg(target_os = "espidf")]
    port: i32,
}

#[cfg(target_os = "espidf")]
impl UartLink {
    /// Install the UART driver at the given baud rate (8N1, no flow
    /// control) on the control-link pins.
    pub fn init(baud: u32) -> Result<Self, UartError> {
        let port = pins::CONTROL_UART_NUM;
        let cfg = uart_config_t {
            baud_rate: baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: Called once from main() before the control loop;
        // single-threaded, and the driver owns its buffers afterwards.
        unsafe {
            let ret = uart_param_config(port, &cfg);
            if ret != ESP_OK as i32 {
                return Err(UartError::ParamConfigFailed(ret));
            }
            let ret = uart_set_pin(port, pins::UART_TX_GPIO, pins::UART_RX_GPIO, -1, -1);
            if ret != ESP_OK as i32 {
                return Err(UartError::PinConfigFailed(ret));
            }
            let ret =
                uart_driver_install(port, RX_DRIVER_BUF, 0, 0, core::ptr::null_mut(), 0);
            if ret != ESP_OK as i32 {
                return Err(UartError::DriverInstallFailed(ret));
            }
        }

        Ok(Self { port })
    }

    /// Non-blocking drain: copy whatever bytes the driver has buffered
    /// into `buf` and return the count. Returns 0 immediately when the
    /// link is quiet.
    pub fn read_available(&mut self, buf: &mut [u8]) -> usize {
        // SAFETY: buf outlives the call; zero tick timeout makes this
        // a pure check-and-read, never a wait.
        let n = unsafe {
            uart_read_bytes(
                self.port,
                buf.as_mut_ptr().cast(),
                buf.len() as u32,
                0,
            )
        };
        if n > 0 { n as usize } else { 0 }
    }
}

#[cfg(not(target_os = "espidf"))]
impl UartLink {
    pub fn init(_baud: u32) -> Result<Self, UartError> {
        log::info!("uart(sim): driver install skipped");
        Ok(Self {})
    }

    pub fn read_available(&mut self, _buf: &mut [u8]) -> usize {
        0
    }
}

impl ResponseSink for UartLink {
    #[cfg(target_os = "espidf")]
    fn send_line(&mut self, line: &str) {
        // SAFETY: uart_write_bytes copies out of the slices before
        // returning; main-loop only.
        unsafe {
            uart_write_bytes(self.port, line.as_ptr().cast(), line.len());
            uart_write_bytes(self.port, b"\n".as_ptr().cast(), 1);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn send_line(&mut self, line: &str) {
        log::info!("uart(sim) ▶ {}", line);
    }
}
