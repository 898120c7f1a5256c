//! Roof end-stop limit switches.
//!
//! Both switches pull their input low when the roof reaches the end-stop
//! (inputs use pull-ups, so an open circuit reads "not at limit").
//!
//! A pin read error is reported as "at limit": the controller then
//! stops driving towards that end rather than running blind.

use embedded_hal::digital::InputPin;

use crate::app::ports::LimitSwitchPort;
use crate::control::LimitState;

pub struct LimitSwitches<I: InputPin> {
    open: I,
    closed: I,
}

impl<I: InputPin> LimitSwitches<I> {
    pub fn new(open: I, closed: I) -> Self {
        Self { open, closed }
    }

    pub fn open_reached(&mut self) -> bool {
        self.open.is_low().unwrap_or(true)
    }

    pub fn closed_reached(&mut self) -> bool {
        self.closed.is_low().unwrap_or(true)
    }
}

impl<I: InputPin> LimitSwitchPort for LimitSwitches<I> {
    fn read_limits(&mut self) -> LimitState {
        LimitState {
            open: self.open_reached(),
            closed: self.closed_reached(),
        }
    }
}
