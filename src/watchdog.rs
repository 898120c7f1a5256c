//! Heartbeat watchdog.
//!
//! The host refreshes a countdown (in ticks) by sending a byte in
//! `1..=240`.  If the countdown runs out the watchdog latches into
//! [`Heartbeat::Triggered`] and the roof controller is told to run a full
//! close.  The latch is sticky:
//!
//! 1. While triggered, every refresh is ignored.
//! 2. Only an explicit disable (byte `0x00`) clears it.
//! 3. Once cleared the watchdog is [`Heartbeat::Disabled`] until the host
//!    arms it again.
//!
//! This prevents a reconnecting host from re-opening the roof without
//! first acknowledging the fail-safe.

use crate::config::HEARTBEAT_LIMIT;

/// Heartbeat countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heartbeat {
    /// No countdown running.
    Disabled,
    /// Ticks remaining until expiry (always `1..=240`).
    Counting(u8),
    /// Expired; sticky until disabled.
    Triggered,
}

/// What a tick did to the watchdog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogTick {
    /// Nothing changed (disabled or already triggered).
    Idle,
    /// The countdown moved but has not expired.
    Counting,
    /// The countdown reached zero on this tick.
    Expired,
}

/// Heartbeat watchdog with a sticky fail-safe latch.
#[derive(Debug, Clone, Copy)]
pub struct Watchdog {
    state: Heartbeat,
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl Watchdog {
    pub const fn new() -> Self {
        Self {
            state: Heartbeat::Disabled,
        }
    }

    /// Advance the countdown by one tick.
    ///
    /// Must not log: it runs inside the tick critical section.
    pub fn tick(&mut self) -> WatchdogTick {
        match self.state {
            Heartbeat::Counting(n) if n <= 1 => {
                self.state = Heartbeat::Triggered;
                WatchdogTick::Expired
            }
            Heartbeat::Counting(n) => {
                self.state = Heartbeat::Counting(n - 1);
                WatchdogTick::Counting
            }
            Heartbeat::Disabled | Heartbeat::Triggered => WatchdogTick::Idle,
        }
    }

    /// Arm or refresh the countdown with `ticks` (`1..=240`).
    ///
    /// Returns `false` if the refresh was ignored: the watchdog is
    /// triggered, or `ticks` is outside the heartbeat range.
    pub fn refresh(&mut self, ticks: u8) -> bool {
        if ticks == 0 || ticks > HEARTBEAT_LIMIT {
            return false;
        }
        if self.is_triggered() {
            return false;
        }
        self.state = Heartbeat::Counting(ticks);
        true
    }

    /// Clear the latch and stop the countdown.
    pub fn disable(&mut self) {
        self.state = Heartbeat::Disabled;
    }

    pub fn state(&self) -> Heartbeat {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state == Heartbeat::Triggered
    }

    /// Ticks left before expiry, as reported in telemetry.
    /// Zero when disabled or triggered.
    pub fn remaining(&self) -> u8 {
        match self.state {
            Heartbeat::Counting(n) => n,
            Heartbeat::Disabled | Heartbeat::Triggered => 0,
        }
    }
}

/// Edge detector for latch changes, polled from the polling context.
#[derive(Debug, Default)]
pub struct LatchMonitor {
    last: bool,
}

impl LatchMonitor {
    /// Feed the current latch state; returns `Some(new)` on a change.
    pub fn observe(&mut self, triggered: bool) -> Option<bool> {
        if triggered == self.last {
            return None;
        }
        self.last = triggered;
        Some(triggered)
    }
}
