//! Critical-section wrapper around [`RoofState`].
//!
//! The tick callback and the polling loop run in different contexts and
//! touch the same counters.  Every access goes through one
//! `embassy_sync` blocking mutex over a critical section, so a command
//! byte is never half-applied when the tick reads the counters, and a
//! telemetry snapshot is taken together with the flag reset.
//!
//! Nothing here logs or allocates; closures passed to the lock stay short.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::config::RoofConfig;
use crate::control::RoofStep;
use crate::protocol::{HostCommand, StatusFrame};

use super::ports::{LimitSwitchPort, MotorPort};
use super::state::RoofState;

pub struct SharedRoof {
    inner: Mutex<CriticalSectionRawMutex, RefCell<RoofState>>,
}

impl SharedRoof {
    /// `const` so the firmware can declare the state as a `static`.
    pub const fn new(config: RoofConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(RoofState::new(config))),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut RoofState) -> R) -> R {
        self.inner.lock(|cell| f(&mut *cell.borrow_mut()))
    }

    /// Tick context: sample the limits, advance the state machine and
    /// drive the motor, all inside one critical section.
    pub fn tick(&self, hw: &mut (impl LimitSwitchPort + MotorPort)) -> RoofStep {
        self.with(|state| {
            let limits = hw.read_limits();
            let step = state.tick(limits);
            hw.apply(step.drive);
            step
        })
    }

    pub fn handle_byte(&self, byte: u8) -> (HostCommand, bool) {
        self.with(|state| state.handle_byte(byte))
    }

    pub fn publish_voltage(&self, raw: i16) {
        self.with(|state| state.set_voltage(raw));
    }

    pub fn take_frame(&self) -> Option<StatusFrame> {
        self.with(RoofState::take_frame)
    }

    /// Copy of the whole state, for diagnostics and tests.
    pub fn snapshot(&self) -> RoofState {
        self.with(|state| *state)
    }

    pub fn is_triggered(&self) -> bool {
        self.with(|state| state.watchdog().is_triggered())
    }

    pub fn tick_count(&self) -> u32 {
        self.with(|state| state.tick_count())
    }
}
