//! Host link over an ESP-IDF UART.
//!
//! Implements [`Transport`] on top of `esp_idf_hal::uart::UartDriver`.
//! Reads use a zero timeout so the polling loop never waits on the host.

use esp_idf_hal::delay::NON_BLOCK;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::uart::{self, Uart, UartDriver};
use esp_idf_hal::units::Hertz;
use esp_idf_svc::sys::EspError;
use log::info;

use crate::error::LinkError;
use crate::protocol::Transport;

pub struct UartLink<'d> {
    driver: UartDriver<'d>,
}

impl<'d> UartLink<'d> {
    /// Open the UART at `baud`, 8N1, no flow control.
    pub fn open<U: Uart>(
        uart: impl Peripheral<P = U> + 'd,
        tx: AnyIOPin,
        rx: AnyIOPin,
        baud: u32,
    ) -> Result<Self, LinkError> {
        let config = uart::config::Config::default().baudrate(Hertz(baud));
        let driver = UartDriver::new(
            uart,
            tx,
            rx,
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &config,
        )
        .map_err(|_| LinkError::OpenFailed)?;
        info!("uart_link: host link open at {} baud", baud);
        Ok(Self { driver })
    }
}

impl Transport for UartLink<'_> {
    type Error = EspError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, EspError> {
        self.driver.read(buf, NON_BLOCK)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, EspError> {
        self.driver.write(data)
    }
}
