//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SharedRoof / RoofService (domain)
//! ```
//!
//! Driven adapters (ADC, limit switches, motor relays, event sinks)
//! implement these traits.  The domain consumes them via generics, so it
//! never touches hardware directly and every path can be exercised with
//! mocks on the host.  The host byte link has its own trait,
//! [`Transport`](crate::protocol::Transport).

use crate::control::{LimitState, MotorDrive};

// ───────────────────────────────────────────────────────────────
// Analog front end (polling context)
// ───────────────────────────────────────────────────────────────

/// One raw sample from the voltage front end.
pub trait AdcPort {
    /// Acquire a single 12-bit unsigned sample.  Acquisition is assumed
    /// to succeed; the caller masks the result to 12 bits.
    fn read_sample(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Limit switches (tick context)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the two end-stop switches.
pub trait LimitSwitchPort {
    /// Sample both switches.  `true` = the roof is at that end-stop.
    fn read_limits(&mut self) -> LimitState;
}

// ───────────────────────────────────────────────────────────────
// Motor drive (tick context)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the open/close motor enables.
pub trait MotorPort {
    /// Apply the drive outputs computed by a tick.
    fn apply(&mut self, drive: MotorDrive);

    /// De-energise both outputs.
    fn all_off(&mut self) {
        self.apply(MotorDrive::OFF);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink (polling context → logging)
// ───────────────────────────────────────────────────────────────

/// The polling loop emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
