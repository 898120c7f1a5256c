//! Activity indicator LED.
//!
//! Toggled once per tick so a glance at the board shows the tick timer is
//! alive.  Purely cosmetic; write errors are ignored.

use embedded_hal::digital::OutputPin;

pub struct ActivityLed<O: OutputPin> {
    pin: O,
    lit: bool,
}

impl<O: OutputPin> ActivityLed<O> {
    pub fn new(mut pin: O) -> Self {
        pin.set_low().ok();
        Self { pin, lit: false }
    }

    pub fn toggle(&mut self) {
        self.lit = !self.lit;
        if self.lit {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
