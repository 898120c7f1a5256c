//! Integration tests for the host link → shared state → motor pipeline.
//!
//! Each test wires a [`SharedRoof`] to a [`RoofService`] and drives the
//! two contexts by hand: `roof.tick(..)` stands in for the timer and
//! `svc.poll(..)` for one pass of the main loop.

use super::mock_hw::{LogSink, MockAdc, MockHardware, MockLink};

use roofcontrol::app::events::AppEvent;
use roofcontrol::app::{RoofService, SharedRoof};
use roofcontrol::config::RoofConfig;
use roofcontrol::control::{MotorDrive, RoofStatus};
use roofcontrol::protocol::HostCommand;

const GROUNDED: u16 = 1979;

struct Bench {
    hw: MockHardware,
    adc: MockAdc,
    link: MockLink,
    sink: LogSink,
}

impl Bench {
    fn new() -> Self {
        Self {
            hw: MockHardware::new(),
            adc: MockAdc(GROUNDED),
            link: MockLink::default(),
            sink: LogSink::new(),
        }
    }

    fn poll(&mut self, svc: &mut RoofService<'_>) {
        svc.poll(&mut self.adc, &mut self.link, &mut self.sink);
    }

    /// One timer period followed by one main-loop pass.
    fn cycle(&mut self, roof: &SharedRoof, svc: &mut RoofService<'_>) {
        roof.tick(&mut self.hw);
        self.poll(svc);
    }
}

fn config() -> RoofConfig {
    RoofConfig::standard()
}

// ── Open run ──────────────────────────────────────────────────

#[test]
fn open_run_reports_every_tick() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF1]);
    b.poll(&mut svc);
    assert!(b.link.lines().is_empty(), "no line before the first tick");

    b.cycle(&roof, &mut svc);
    b.cycle(&roof, &mut svc);
    assert_eq!(
        b.link.lines(),
        vec!["+00.00,4,00,00,2c\r\n", "+00.00,4,00,00,2b\r\n"]
    );
    assert_eq!(b.hw.last_drive(), MotorDrive { open: true, close: false });
    assert!(b.sink.events.contains(&AppEvent::Command(HostCommand::Open)));
}

#[test]
fn open_limit_ends_run() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF1]);
    for _ in 0..5 {
        b.cycle(&roof, &mut svc);
    }
    b.hw = b.hw.at_open_stop();
    b.cycle(&roof, &mut svc);

    let lines = b.link.lines();
    assert_eq!(lines.last().unwrap(), "+00.00,2,00,00,00\r\n");
    assert_eq!(b.hw.last_drive(), MotorDrive::OFF);
    assert!(b.sink.events.contains(&AppEvent::StatusChanged {
        from: RoofStatus::Opening,
        to: RoofStatus::Open,
    }));
}

#[test]
fn unattended_open_times_out() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF1]);
    b.poll(&mut svc);
    for _ in 0..45 {
        b.cycle(&roof, &mut svc);
    }
    let lines = b.link.lines();
    assert_eq!(lines.len(), 45);
    // The final tick still reports Opening with the counter spent.
    assert_eq!(lines[44], "+00.00,4,00,00,00\r\n");
    assert_eq!(b.hw.last_drive(), MotorDrive::OFF);

    b.cycle(&roof, &mut svc);
    assert_eq!(b.link.lines(), vec!["+00.00,0,00,00,00\r\n"]);
}

// ── Close / stop ──────────────────────────────────────────────

#[test]
fn close_cancels_open() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF1]);
    b.poll(&mut svc);
    b.cycle(&roof, &mut svc);
    assert_eq!(b.hw.last_drive(), MotorDrive { open: true, close: false });

    b.link.send(&[0xF2]);
    b.poll(&mut svc);
    roof.tick(&mut b.hw);

    let counters = roof.snapshot().roof().counters();
    assert_eq!(counters.open_remaining, 0);
    assert_eq!(counters.close_remaining, 109);
    assert_eq!(b.hw.last_drive(), MotorDrive { open: false, close: true });
}

#[test]
fn stop_allows_one_more_tick() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF2]);
    b.poll(&mut svc);
    for _ in 0..60 {
        roof.tick(&mut b.hw);
    }
    assert_eq!(roof.snapshot().roof().counters().close_remaining, 50);

    b.link.send(&[0xF3]);
    b.poll(&mut svc);
    b.link.lines();

    b.cycle(&roof, &mut svc);
    assert_eq!(b.link.lines(), vec!["+00.00,3,00,00,00\r\n"]);
    assert_eq!(b.hw.last_drive(), MotorDrive::OFF);

    b.cycle(&roof, &mut svc);
    assert_eq!(b.link.lines(), vec!["+00.00,0,00,00,00\r\n"]);
}

#[test]
fn closed_limit_beats_running_counter() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF2]);
    for _ in 0..10 {
        b.cycle(&roof, &mut svc);
    }
    b.hw = b.hw.at_closed_stop();
    b.cycle(&roof, &mut svc);

    assert_eq!(b.link.lines().last().unwrap(), "+00.00,1,00,00,00\r\n");
    assert_eq!(b.hw.last_drive(), MotorDrive::OFF);
}

// ── Telemetry ─────────────────────────────────────────────────

#[test]
fn telemetry_reference_line() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();
    b.adc = MockAdc(2243);

    b.link.send(&[0xF2]);
    b.poll(&mut svc);
    for _ in 0..78 {
        roof.tick(&mut b.hw);
    }
    b.link.send(&[30]);
    b.poll(&mut svc);

    assert_eq!(b.link.lines(), vec!["+04.52,3,1e,20,00\r\n"]);
}

#[test]
fn one_line_per_tick_however_often_polled() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    for _ in 0..3 {
        roof.tick(&mut b.hw);
        for _ in 0..10 {
            b.poll(&mut svc);
        }
    }
    assert_eq!(b.link.lines().len(), 3);
}

#[test]
fn reserved_bytes_are_silent() {
    let roof = SharedRoof::new(config());
    let mut svc = RoofService::new(&roof, &config());
    let mut b = Bench::new();

    b.link.send(&[0xF4, 0xFA, 0xFF]);
    b.poll(&mut svc);
    assert!(b.sink.events.is_empty());
    assert_eq!(roof.snapshot().roof().counters(), Default::default());
}
