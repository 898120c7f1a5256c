//! Telemetry line sent to the host twice per second.
//!
//! ```text
//! +04.52,3,1e,20,00\r\n
//! │      │ │  │  └─ open ticks remaining (hex)
//! │      │ │  └──── close ticks remaining (hex)
//! │      │ └─────── heartbeat ticks remaining (hex)
//! │      └───────── RoofStatus code
//! └──────────────── calibrated voltage, sign always present
//! ```
//!
//! The calibrated range of the 12-bit front end is roughly -33.9 V to
//! +36.2 V, so the line is always 19 bytes.

use core::fmt::Write;

use heapless::String;

use crate::control::RoofStatus;

/// Length of a formatted line, CRLF included.
pub const LINE_LEN: usize = 19;

/// Capacity of the line buffer.  Leaves room for a voltage outside the
/// calibrated range rather than truncating the terminator.
pub const LINE_CAP: usize = 24;

pub type TelemetryLine = String<LINE_CAP>;

/// A point-in-time snapshot of everything the host is told.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusFrame {
    pub voltage: f32,
    pub status: RoofStatus,
    pub heartbeat_remaining: u8,
    pub close_remaining: u8,
    pub open_remaining: u8,
}

/// Why a telemetry line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    MissingTerminator,
    FieldCount,
    Voltage,
    Status,
    Counter,
}

impl StatusFrame {
    /// Format the frame as a wire line.
    pub fn format(&self) -> TelemetryLine {
        let mut line = TelemetryLine::new();
        // Capacity covers any f32 in the front end's range; an
        // out-of-range value is truncated rather than panicking.
        let _ = write!(
            line,
            "{:+06.2},{},{:02x},{:02x},{:02x}\r\n",
            self.voltage,
            self.status.code(),
            self.heartbeat_remaining,
            self.close_remaining,
            self.open_remaining,
        );
        line
    }

    /// Parse a line produced by [`StatusFrame::format`].
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let body = line
            .strip_suffix("\r\n")
            .ok_or(ParseError::MissingTerminator)?;

        let mut fields = body.split(',');
        let mut next = || fields.next().ok_or(ParseError::FieldCount);

        let voltage = next()?.parse::<f32>().map_err(|_| ParseError::Voltage)?;
        let status = next()?
            .parse::<u8>()
            .ok()
            .and_then(RoofStatus::from_code)
            .ok_or(ParseError::Status)?;
        let heartbeat_remaining = parse_hex(next()?)?;
        let close_remaining = parse_hex(next()?)?;
        let open_remaining = parse_hex(next()?)?;

        if fields.next().is_some() {
            return Err(ParseError::FieldCount);
        }

        Ok(Self {
            voltage,
            status,
            heartbeat_remaining,
            close_remaining,
            open_remaining,
        })
    }
}

fn parse_hex(field: &str) -> Result<u8, ParseError> {
    if field.len() != 2 {
        return Err(ParseError::Counter);
    }
    u8::from_str_radix(field, 16).map_err(|_| ParseError::Counter)
}
