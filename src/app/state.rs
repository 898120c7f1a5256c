//! Roof state shared between the tick and the polling loop.
//!
//! [`RoofState`] is plain data with no interior locking; the
//! [`SharedRoof`](super::shared::SharedRoof) wrapper puts it behind a
//! critical section.  Everything here is pure so it can be driven
//! directly from unit and property tests.

use crate::config::RoofConfig;
use crate::control::{LimitState, RoofController, RoofStatus, RoofStep};
use crate::protocol::{HostCommand, StatusFrame};
use crate::sensors::voltage::calibrate;
use crate::watchdog::{Watchdog, WatchdogTick};

#[derive(Debug, Clone, Copy)]
pub struct RoofState {
    watchdog: Watchdog,
    roof: RoofController,
    /// Offset-corrected ADC reading; `None` until the first sample.
    voltage_raw: Option<i16>,
    volts_per_count: f32,
    status_ready: bool,
    ticks: u32,
}

impl RoofState {
    pub const fn new(config: RoofConfig) -> Self {
        Self {
            watchdog: Watchdog::new(),
            roof: RoofController::new(config.max_open_ticks, config.max_close_ticks),
            voltage_raw: None,
            volts_per_count: config.volts_per_count,
            status_ready: false,
            ticks: 0,
        }
    }

    /// One period of the real-time tick.
    ///
    /// Runs the watchdog first so an expiry on this tick already drives
    /// the close, then the roof step.  Arms the status-ready flag.
    pub fn tick(&mut self, limits: LimitState) -> RoofStep {
        if self.watchdog.tick() == WatchdogTick::Expired {
            self.roof.force_close();
        }
        let step = self.roof.step(limits, self.watchdog.is_triggered());
        self.ticks = self.ticks.wrapping_add(1);
        self.status_ready = true;
        step
    }

    /// Apply a decoded host command.  Returns `false` if it had no effect.
    pub fn apply(&mut self, cmd: HostCommand) -> bool {
        match cmd {
            HostCommand::DisableWatchdog => {
                self.watchdog.disable();
                self.roof.abort_close();
                true
            }
            HostCommand::Heartbeat(ticks) => self.watchdog.refresh(ticks),
            HostCommand::Open => {
                self.roof.request_open();
                true
            }
            HostCommand::Close => {
                self.roof.request_close();
                true
            }
            HostCommand::Stop => {
                self.roof.request_stop();
                true
            }
            HostCommand::Reserved(_) => false,
        }
    }

    /// Decode and apply one inbound byte.
    pub fn handle_byte(&mut self, byte: u8) -> (HostCommand, bool) {
        let cmd = HostCommand::decode(byte);
        (cmd, self.apply(cmd))
    }

    pub fn set_voltage(&mut self, raw: i16) {
        self.voltage_raw = Some(raw);
    }

    pub fn voltage_raw(&self) -> Option<i16> {
        self.voltage_raw
    }

    /// Snapshot for telemetry.  An unsampled voltage reports as 0 V.
    pub fn frame(&self) -> StatusFrame {
        let counters = self.roof.counters();
        StatusFrame {
            voltage: calibrate(self.voltage_raw.unwrap_or(0), self.volts_per_count),
            status: self.roof.status(),
            heartbeat_remaining: self.watchdog.remaining(),
            close_remaining: counters.close_remaining,
            open_remaining: counters.open_remaining,
        }
    }

    /// Snapshot and disarm the flag, if a tick has run since the last call.
    pub fn take_frame(&mut self) -> Option<StatusFrame> {
        if !self.status_ready {
            return None;
        }
        self.status_ready = false;
        Some(self.frame())
    }

    pub fn status(&self) -> RoofStatus {
        self.roof.status()
    }

    pub fn watchdog(&self) -> &Watchdog {
        &self.watchdog
    }

    pub fn roof(&self) -> &RoofController {
        &self.roof
    }

    pub fn tick_count(&self) -> u32 {
        self.ticks
    }
}
