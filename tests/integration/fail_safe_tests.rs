//! Heartbeat watchdog fail-safe, end to end.
//!
//! A host that stops sending heartbeats must get the roof closed, and
//! must not be able to re-arm the watchdog until it clears the latch.

use super::mock_hw::{LogSink, MockAdc, MockHardware, MockLink};

use roofcontrol::app::events::AppEvent;
use roofcontrol::app::{RoofService, SharedRoof};
use roofcontrol::config::RoofConfig;
use roofcontrol::control::{MotorDrive, RoofStatus};
use roofcontrol::protocol::HostCommand;
use roofcontrol::watchdog::Heartbeat;

fn cycle(
    roof: &SharedRoof,
    svc: &mut RoofService<'_>,
    hw: &mut MockHardware,
    link: &mut MockLink,
    sink: &mut LogSink,
) {
    roof.tick(hw);
    svc.poll(&mut MockAdc(1979), link, sink);
}

/// Open the roof under a 4-tick heartbeat and let it lapse.
fn lapse(roof: &SharedRoof, svc: &mut RoofService<'_>) -> (MockHardware, MockLink, LogSink) {
    let mut hw = MockHardware::new();
    let mut link = MockLink::default();
    let mut sink = LogSink::new();

    link.send(&[0xF1, 4]);
    svc.poll(&mut MockAdc(1979), &mut link, &mut sink);
    for _ in 0..4 {
        cycle(roof, svc, &mut hw, &mut link, &mut sink);
    }
    (hw, link, sink)
}

#[test]
fn lapsed_heartbeat_forces_close() {
    let roof = SharedRoof::new(RoofConfig::standard());
    let mut svc = RoofService::new(&roof, &RoofConfig::standard());
    let (hw, mut link, sink) = lapse(&roof, &mut svc);

    let lines = link.lines();
    assert_eq!(lines[2], "+00.00,4,01,00,2a\r\n");
    assert_eq!(lines[3], "+00.00,5,00,6d,00\r\n");
    assert_eq!(hw.last_drive(), MotorDrive { open: false, close: true });
    assert!(sink.events.contains(&AppEvent::WatchdogTriggered));
    assert!(sink.events.contains(&AppEvent::StatusChanged {
        from: RoofStatus::Opening,
        to: RoofStatus::ForceClosing,
    }));
}

#[test]
fn refresh_ignored_while_latched() {
    let roof = SharedRoof::new(RoofConfig::standard());
    let mut svc = RoofService::new(&roof, &RoofConfig::standard());
    let (mut hw, mut link, mut sink) = lapse(&roof, &mut svc);

    link.send(&[100, 1, 240]);
    cycle(&roof, &mut svc, &mut hw, &mut link, &mut sink);

    assert!(sink.events.contains(&AppEvent::HeartbeatIgnored(100)));
    assert!(sink.events.contains(&AppEvent::HeartbeatIgnored(240)));
    assert_eq!(roof.snapshot().watchdog().state(), Heartbeat::Triggered);
    assert_eq!(roof.snapshot().status(), RoofStatus::ForceClosing);
}

#[test]
fn motion_commands_still_act_while_latched() {
    let roof = SharedRoof::new(RoofConfig::standard());
    let mut svc = RoofService::new(&roof, &RoofConfig::standard());
    let (mut hw, mut link, mut sink) = lapse(&roof, &mut svc);

    // The latch gates heartbeats only; an explicit open replaces the
    // forced close run.
    link.send(&[0xF1]);
    svc.poll(&mut MockAdc(1979), &mut link, &mut sink);
    roof.tick(&mut hw);
    assert_eq!(roof.snapshot().status(), RoofStatus::Opening);
    assert_eq!(hw.last_drive(), MotorDrive { open: true, close: false });
    assert!(roof.is_triggered());

    // A close issued while latched is labelled as forced.
    link.send(&[0xF2]);
    svc.poll(&mut MockAdc(1979), &mut link, &mut sink);
    roof.tick(&mut hw);
    assert_eq!(roof.snapshot().status(), RoofStatus::ForceClosing);
}

#[test]
fn closed_limit_reports_force_closed_until_cleared() {
    let roof = SharedRoof::new(RoofConfig::standard());
    let mut svc = RoofService::new(&roof, &RoofConfig::standard());
    let (hw, mut link, mut sink) = lapse(&roof, &mut svc);
    let mut hw = hw.at_closed_stop();

    cycle(&roof, &mut svc, &mut hw, &mut link, &mut sink);
    assert_eq!(link.lines().last().unwrap(), "+00.00,6,00,00,00\r\n");
    assert_eq!(hw.last_drive(), MotorDrive::OFF);

    link.send(&[0x00]);
    cycle(&roof, &mut svc, &mut hw, &mut link, &mut sink);
    assert!(sink.events.contains(&AppEvent::WatchdogCleared));
    assert!(sink.events.contains(&AppEvent::Command(HostCommand::DisableWatchdog)));

    cycle(&roof, &mut svc, &mut hw, &mut link, &mut sink);
    assert_eq!(link.lines().last().unwrap(), "+00.00,1,00,00,00\r\n");
}

#[test]
fn clearing_stops_the_forced_close() {
    let roof = SharedRoof::new(RoofConfig::standard());
    let mut svc = RoofService::new(&roof, &RoofConfig::standard());
    let (mut hw, mut link, mut sink) = lapse(&roof, &mut svc);

    link.send(&[0x00]);
    svc.poll(&mut MockAdc(1979), &mut link, &mut sink);
    let counters = roof.snapshot().roof().counters();
    assert_eq!(counters.close_remaining, 0);

    roof.tick(&mut hw);
    assert_eq!(hw.last_drive(), MotorDrive::OFF);

    // Re-arming works again once cleared.
    link.send(&[20]);
    svc.poll(&mut MockAdc(1979), &mut link, &mut sink);
    assert_eq!(roof.snapshot().watchdog().state(), Heartbeat::Counting(20));
}

#[test]
fn steady_heartbeat_never_trips() {
    let roof = SharedRoof::new(RoofConfig::standard());
    let mut svc = RoofService::new(&roof, &RoofConfig::standard());
    let mut hw = MockHardware::new();
    let mut link = MockLink::default();
    let mut sink = LogSink::new();

    link.send(&[0xF1]);
    for _ in 0..200 {
        link.send(&[4]);
        cycle(&roof, &mut svc, &mut hw, &mut link, &mut sink);
    }
    assert!(!roof.is_triggered());
    assert!(!sink.events.contains(&AppEvent::WatchdogTriggered));
}
