//! MCP3201 12-bit SPI ADC.
//!
//! One conversion is a two-byte read with chip select held low.  The
//! result straddles the bytes (datasheet figure 6-1):
//!
//! ```text
//!  msb: ? ? 0 B11 B10 B9 B8 B7    lsb: B6 B5 B4 B3 B2 B1 B0 B1'
//! ```
//!
//! so the sample is `((msb & 0x1F) << 8 | lsb) >> 1`.

use embedded_hal::spi::SpiDevice;
use log::debug;

use crate::app::ports::AdcPort;

/// Extract the 12-bit sample from a two-byte conversion frame.
pub const fn decode_frame(msb: u8, lsb: u8) -> u16 {
    ((((msb & 0x1F) as u16) << 8) | lsb as u16) >> 1
}

pub struct Mcp3201<SPI: SpiDevice> {
    spi: SPI,
    last: u16,
}

impl<SPI: SpiDevice> Mcp3201<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi, last: 0 }
    }

    /// Run one conversion.
    pub fn convert(&mut self) -> Result<u16, SPI::Error> {
        let mut frame = [0u8; 2];
        self.spi.read(&mut frame)?;
        Ok(decode_frame(frame[0], frame[1]))
    }
}

impl<SPI: SpiDevice> AdcPort for Mcp3201<SPI> {
    /// A failed transfer repeats the previous sample.
    fn read_sample(&mut self) -> u16 {
        match self.convert() {
            Ok(sample) => self.last = sample,
            Err(e) => debug!("mcp3201: transfer failed ({:?}), reusing last sample", e),
        }
        self.last
    }
}
