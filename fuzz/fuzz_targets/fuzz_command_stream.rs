//! Fuzz target: host byte stream interleaved with ticks.
//!
//! Each input byte is either a command byte or, when the next byte is
//! the 0xA5 marker, a tick with the limit switches taken from the low
//! two bits of the byte after it.  Asserts that no sequence ever drives
//! both motor outputs or pushes a counter past its cap, and that every
//! telemetry line stays fixed-width.
//!
//! cargo fuzz run fuzz_command_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use roofcontrol::app::RoofState;
use roofcontrol::config::RoofConfig;
use roofcontrol::control::LimitState;
use roofcontrol::protocol::telemetry::LINE_LEN;

const TICK_MARKER: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    let mut state = RoofState::new(RoofConfig::standard());
    let mut bytes = data.iter().copied();

    while let Some(b) = bytes.next() {
        if b == TICK_MARKER {
            let sw = bytes.next().unwrap_or(0);
            let step = state.tick(LimitState {
                open: sw & 1 != 0,
                closed: sw & 2 != 0,
            });
            assert!(!(step.drive.open && step.drive.close), "both outputs energised");
            if let Some(frame) = state.take_frame() {
                assert_eq!(frame.format().len(), LINE_LEN);
            }
        } else {
            state.handle_byte(b);
        }

        let c = state.roof().counters();
        assert!(c.open_remaining <= 45 && c.close_remaining <= 110);
        assert!(c.open_remaining == 0 || c.close_remaining == 0);
    }
});
