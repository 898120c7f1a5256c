//! Fuzz target: `StatusFrame::parse`
//!
//! Feeds arbitrary text to the telemetry parser.  It must never panic,
//! and anything it accepts must format back to a line that parses to
//! the same status and counters.
//!
//! cargo fuzz run fuzz_telemetry_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use roofcontrol::protocol::StatusFrame;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(frame) = StatusFrame::parse(text) {
        if !frame.voltage.is_finite() || frame.voltage.abs() >= 99.995 {
            return;
        }
        let line = frame.format();
        let again = StatusFrame::parse(&line).expect("formatted line must parse");
        assert_eq!(again.status, frame.status);
        assert_eq!(again.heartbeat_remaining, frame.heartbeat_remaining);
        assert_eq!(again.close_remaining, frame.close_remaining);
        assert_eq!(again.open_remaining, frame.open_remaining);
    }
});
