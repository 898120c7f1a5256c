//! Single-byte host command set.
//!
//! | Byte          | Command                                          |
//! |---------------|--------------------------------------------------|
//! | `0x00`        | disable watchdog, clear fail-safe, abort close   |
//! | `0x01..=0xF0` | heartbeat timeout in ticks (ignored if triggered)|
//! | `0xF1`        | open roof                                        |
//! | `0xF2`        | close roof                                       |
//! | `0xF3`        | stop motion (one grace tick)                     |
//! | `0xF4..=0xFF` | reserved, no effect                              |
//!
//! Every command is exactly one byte, so there is no framing state.

use core::fmt;

use crate::config::HEARTBEAT_LIMIT;

pub const CMD_DISABLE: u8 = 0x00;
pub const CMD_OPEN: u8 = 0xF1;
pub const CMD_CLOSE: u8 = 0xF2;
pub const CMD_STOP: u8 = 0xF3;

/// Longest heartbeat expressible in whole seconds (two ticks per second).
pub const MAX_HEARTBEAT_SECS: u8 = HEARTBEAT_LIMIT / 2;

/// A decoded host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Disable the heartbeat and clear the fail-safe latch.
    DisableWatchdog,
    /// Arm or refresh the heartbeat with this many ticks (`1..=240`).
    Heartbeat(u8),
    Open,
    Close,
    Stop,
    /// A reserved byte; carried for logging only.
    Reserved(u8),
}

impl HostCommand {
    /// Decode one inbound byte.  Total: every byte maps to a command.
    pub const fn decode(byte: u8) -> Self {
        match byte {
            CMD_DISABLE => Self::DisableWatchdog,
            CMD_OPEN => Self::Open,
            CMD_CLOSE => Self::Close,
            CMD_STOP => Self::Stop,
            1..=HEARTBEAT_LIMIT => Self::Heartbeat(byte),
            _ => Self::Reserved(byte),
        }
    }

    /// The wire byte for this command.
    pub const fn encode(self) -> u8 {
        match self {
            Self::DisableWatchdog => CMD_DISABLE,
            Self::Heartbeat(ticks) => ticks,
            Self::Open => CMD_OPEN,
            Self::Close => CMD_CLOSE,
            Self::Stop => CMD_STOP,
            Self::Reserved(byte) => byte,
        }
    }

    /// Heartbeat command for a timeout given in seconds.
    ///
    /// `0` disables the watchdog; `1..=120` arms it for twice as many
    /// ticks.  Longer timeouts cannot be expressed and return `None`.
    pub const fn heartbeat_secs(secs: u8) -> Option<Self> {
        match secs {
            0 => Some(Self::DisableWatchdog),
            1..=MAX_HEARTBEAT_SECS => Some(Self::Heartbeat(secs * 2)),
            _ => None,
        }
    }

    /// True for the three motion commands.
    pub const fn is_motion(self) -> bool {
        matches!(self, Self::Open | Self::Close | Self::Stop)
    }
}

impl From<u8> for HostCommand {
    fn from(byte: u8) -> Self {
        Self::decode(byte)
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisableWatchdog => write!(f, "disable-watchdog"),
            Self::Heartbeat(ticks) => write!(f, "heartbeat({} ticks)", ticks),
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
            Self::Stop => write!(f, "stop"),
            Self::Reserved(byte) => write!(f, "reserved(0x{:02x})", byte),
        }
    }
}
