//! Roof motion state machine.
//!
//! Each tick arbitrates the limit switches against the commanded motion
//! countdowns and produces the drive outputs plus a reported
//! [`RoofStatus`].  The status is derived every tick; nothing here reads
//! the previous status back.
//!
//! ```text
//!  Unknown ──open──▶ Opening ──open limit──▶ Open
//!  Unknown ──close─▶ Closing ──closed limit─▶ Closed
//!  any ──heartbeat expiry──▶ ForceClosing ──closed limit──▶ ForceClosed
//! ```
//!
//! Evaluation order inside a tick:
//!
//! 1. Limit sensing, closed limit first.  An asserted limit zeroes the
//!    counter that drives towards it.
//! 2. Motion drive, close before open.  A counter that runs out without
//!    its limit firing still reports `Closing`/`Opening` for that tick;
//!    there is no separate stall status.

use core::fmt;

/// Reported roof state.  The discriminant is the telemetry status digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RoofStatus {
    #[default]
    Unknown = 0,
    Closed = 1,
    Open = 2,
    Closing = 3,
    Opening = 4,
    ForceClosing = 5,
    ForceClosed = 6,
}

impl RoofStatus {
    /// Single-digit code used on the wire.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Closed),
            2 => Some(Self::Open),
            3 => Some(Self::Closing),
            4 => Some(Self::Opening),
            5 => Some(Self::ForceClosing),
            6 => Some(Self::ForceClosed),
            _ => None,
        }
    }

    /// True for the end states of a trajectory.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Open | Self::ForceClosed)
    }

    /// True while a motor is being driven.
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::Closing | Self::Opening | Self::ForceClosing)
    }
}

impl fmt::Display for RoofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Closing => "closing",
            Self::Opening => "opening",
            Self::ForceClosing => "force-closing",
            Self::ForceClosed => "force-closed",
        };
        f.write_str(name)
    }
}

/// Limit switch levels sampled at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimitState {
    /// Roof is at its open end-stop.
    pub open: bool,
    /// Roof is at its closed end-stop.
    pub closed: bool,
}

/// Drive outputs after a tick.  Never both `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotorDrive {
    pub open: bool,
    pub close: bool,
}

impl MotorDrive {
    pub const OFF: Self = Self {
        open: false,
        close: false,
    };
}

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoofStep {
    pub status: RoofStatus,
    pub drive: MotorDrive,
}

/// Remaining motion in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionCounters {
    pub open_remaining: u8,
    pub close_remaining: u8,
}

/// Roof motion controller.
#[derive(Debug, Clone, Copy)]
pub struct RoofController {
    counters: MotionCounters,
    status: RoofStatus,
    max_open: u8,
    max_close: u8,
}

impl RoofController {
    pub const fn new(max_open: u8, max_close: u8) -> Self {
        Self {
            counters: MotionCounters {
                open_remaining: 0,
                close_remaining: 0,
            },
            status: RoofStatus::Unknown,
            max_open,
            max_close,
        }
    }

    // ── Requests (polling context) ────────────────────────────

    /// Start a full open run, cancelling any close.
    pub fn request_open(&mut self) {
        self.counters.close_remaining = 0;
        self.counters.open_remaining = self.max_open;
    }

    /// Start a full close run, cancelling any open.
    pub fn request_close(&mut self) {
        self.counters.open_remaining = 0;
        self.counters.close_remaining = self.max_close;
    }

    /// Let the current run finish after at most one more tick.
    pub fn request_stop(&mut self) {
        self.counters.open_remaining = self.counters.open_remaining.min(1);
        self.counters.close_remaining = self.counters.close_remaining.min(1);
    }

    /// Drop a pending or running close (used when the watchdog is disabled).
    pub fn abort_close(&mut self) {
        self.counters.close_remaining = 0;
    }

    /// Heartbeat expiry: abandon any open and run a full close.
    pub fn force_close(&mut self) {
        self.request_close();
    }

    // ── Tick ──────────────────────────────────────────────────

    /// Advance by one tick.  `forced` is the watchdog latch and only
    /// changes the labels of close states.
    pub fn step(&mut self, limits: LimitState, forced: bool) -> RoofStep {
        let c = &mut self.counters;

        let mut status = if limits.closed {
            c.close_remaining = 0;
            if forced {
                RoofStatus::ForceClosed
            } else {
                RoofStatus::Closed
            }
        } else if limits.open {
            c.open_remaining = 0;
            RoofStatus::Open
        } else {
            RoofStatus::Unknown
        };

        let mut drive = MotorDrive::OFF;
        if c.close_remaining > 0 {
            status = if forced {
                RoofStatus::ForceClosing
            } else {
                RoofStatus::Closing
            };
            c.close_remaining -= 1;
            drive.close = c.close_remaining > 0;
        } else if c.open_remaining > 0 {
            status = RoofStatus::Opening;
            c.open_remaining -= 1;
            drive.open = c.open_remaining > 0;
        }

        self.status = status;
        RoofStep { status, drive }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> RoofStatus {
        self.status
    }

    pub fn counters(&self) -> MotionCounters {
        self.counters
    }
}
