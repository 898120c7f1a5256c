//! Transport abstraction: the host byte stream.
//!
//! Concrete implementations:
//! - UART to the host PC (ESP-IDF, [`crate::adapters::uart_link`])
//! - in-memory loopback for tests
//!
//! The polling loop is generic over `Transport`; reads must not block and
//! writes are best effort.

/// Byte-oriented transport channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes actually read.
    /// Returns 0 if no data is available (non-blocking).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write `data` to the transport.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;
}

/// A null transport that discards all writes and never reads.
/// Useful while the host link is not wired up.
pub struct NullTransport;

impl Transport for NullTransport {
    type Error = ();

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ()> {
        Ok(0)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        Ok(data.len())
    }
}
