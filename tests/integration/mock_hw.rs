//! Mock hardware for integration tests.
//!
//! Records every motor drive so tests can assert on the full output
//! history without touching real GPIO registers, and lets the test body
//! move the roof onto or off its end-stops.

use roofcontrol::app::events::AppEvent;
use roofcontrol::app::ports::{AdcPort, EventSink, LimitSwitchPort, MotorPort};
use roofcontrol::control::{LimitState, MotorDrive};
use roofcontrol::protocol::Transport;

// ── MockHardware ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockHardware {
    pub limits: LimitState,
    pub drives: Vec<MotorDrive>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_open_stop(mut self) -> Self {
        self.limits = LimitState { open: true, closed: false };
        self
    }

    pub fn at_closed_stop(mut self) -> Self {
        self.limits = LimitState { open: false, closed: true };
        self
    }

    pub fn last_drive(&self) -> MotorDrive {
        self.drives.last().copied().unwrap_or(MotorDrive::OFF)
    }
}

impl LimitSwitchPort for MockHardware {
    fn read_limits(&mut self) -> LimitState {
        self.limits
    }
}

impl MotorPort for MockHardware {
    fn apply(&mut self, drive: MotorDrive) {
        self.drives.push(drive);
    }
}

// ── MockAdc ───────────────────────────────────────────────────

/// Returns the same raw sample every time.
pub struct MockAdc(pub u16);

impl AdcPort for MockAdc {
    fn read_sample(&mut self) -> u16 {
        self.0
    }
}

// ── MockLink ──────────────────────────────────────────────────

/// In-memory host link: the test queues inbound bytes and reads back
/// the telemetry lines the service wrote.
#[derive(Default)]
pub struct MockLink {
    pub rx: Vec<u8>,
    pub tx: Vec<u8>,
}

#[allow(dead_code)]
impl MockLink {
    pub fn send(&mut self, bytes: &[u8]) {
        self.rx.extend_from_slice(bytes);
    }

    /// Drain the written lines.
    pub fn lines(&mut self) -> Vec<String> {
        let text = String::from_utf8(std::mem::take(&mut self.tx)).unwrap();
        text.split_inclusive("\r\n").map(str::to_owned).collect()
    }
}

impl Transport for MockLink {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let n = buf.len().min(self.rx.len());
        buf[..n].copy_from_slice(&self.rx[..n]);
        self.rx.drain(..n);
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }
}

// ── LogSink ───────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
