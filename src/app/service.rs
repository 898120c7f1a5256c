//! Polling loop service.
//!
//! [`RoofService`] is the non-real-time half of the firmware.  Each
//! [`poll`](RoofService::poll) pass:
//!
//! 1. averages a voltage reading and publishes it,
//! 2. drains every byte waiting on the host link into the command decoder,
//! 3. reports watchdog latch edges,
//! 4. writes one telemetry line if a tick has run since the last pass.
//!
//! ```text
//!  AdcPort ───▶ ┌──────────────┐ ──▶ Transport (telemetry)
//!  Transport ─▶ │ RoofService  │ ──▶ EventSink
//!               └──────┬───────┘
//!                      ▼
//!                 SharedRoof  ◀── tick
//! ```
//!
//! The service holds no roof state of its own besides what it needs to
//! detect edges for logging; every decision lives in
//! [`SharedRoof`](super::shared::SharedRoof).

use crate::config::RoofConfig;
use crate::control::RoofStatus;
use crate::protocol::{HostCommand, Transport};
use crate::sensors::VoltageSampler;
use crate::watchdog::LatchMonitor;

use super::events::AppEvent;
use super::ports::{AdcPort, EventSink};
use super::shared::SharedRoof;

/// Bytes read from the link per `read` call.
const RX_CHUNK: usize = 16;

/// What one poll pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Inbound bytes decoded on this pass.
    pub bytes: usize,
    /// Whether a telemetry line was written in full.
    pub telemetry_sent: bool,
}

pub struct RoofService<'a> {
    shared: &'a SharedRoof,
    sampler: VoltageSampler,
    last_status: Option<RoofStatus>,
    latch: LatchMonitor,
}

impl<'a> RoofService<'a> {
    pub fn new(shared: &'a SharedRoof, config: &RoofConfig) -> Self {
        Self {
            shared,
            sampler: VoltageSampler::new(config),
            last_status: None,
            latch: LatchMonitor::default(),
        }
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
    }

    /// Run one pass of the polling loop.  Never blocks and never fails:
    /// link errors end the drain early or drop the line.
    pub fn poll(
        &mut self,
        adc: &mut impl AdcPort,
        link: &mut impl Transport,
        sink: &mut impl EventSink,
    ) -> PollReport {
        let mut report = PollReport::default();

        let raw = self.sampler.sample(adc);
        self.shared.publish_voltage(raw);

        let mut buf = [0u8; RX_CHUNK];
        loop {
            let n = match link.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => n.min(RX_CHUNK),
            };
            for &byte in &buf[..n] {
                self.handle_byte(byte, sink);
            }
            report.bytes += n;
        }

        if let Some(triggered) = self.latch.observe(self.shared.is_triggered()) {
            sink.emit(if triggered {
                &AppEvent::WatchdogTriggered
            } else {
                &AppEvent::WatchdogCleared
            });
        }

        if let Some(frame) = self.shared.take_frame() {
            match self.last_status {
                Some(from) if from != frame.status => sink.emit(&AppEvent::StatusChanged {
                    from,
                    to: frame.status,
                }),
                _ => {}
            }
            self.last_status = Some(frame.status);

            let line = frame.format();
            match link.write(line.as_bytes()) {
                Ok(n) if n == line.len() => report.telemetry_sent = true,
                _ => sink.emit(&AppEvent::TelemetryDropped),
            }
        }

        report
    }

    fn handle_byte(&mut self, byte: u8, sink: &mut impl EventSink) {
        let (cmd, applied) = self.shared.handle_byte(byte);
        match cmd {
            HostCommand::Heartbeat(ticks) if !applied => {
                sink.emit(&AppEvent::HeartbeatIgnored(ticks));
            }
            HostCommand::Reserved(_) => {}
            _ => sink.emit(&AppEvent::Command(cmd)),
        }
    }

    /// Status reported on the most recent telemetry line.
    pub fn last_status(&self) -> Option<RoofStatus> {
        self.last_status
    }
}
