//! Hardware adapter: bridges the tick-context peripherals to port traits.
//!
//! Owns the motor relays, the end-stop switches and the activity LED,
//! exposing them through [`LimitSwitchPort`] and [`MotorPort`].  The tick
//! callback holds this adapter exclusively; the voltage ADC and the host
//! link belong to the polling loop and are passed to it separately.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{LimitSwitchPort, MotorPort};
use crate::control::{LimitState, MotorDrive};
use crate::drivers::motor::RoofMotor;
use crate::drivers::status_led::ActivityLed;
use crate::sensors::LimitSwitches;

/// Concrete adapter combining the tick-context hardware.
pub struct HardwareAdapter<O: OutputPin, I: InputPin> {
    motor: RoofMotor<O>,
    limits: LimitSwitches<I>,
    led: ActivityLed<O>,
}

impl<O: OutputPin, I: InputPin> HardwareAdapter<O, I> {
    pub fn new(motor: RoofMotor<O>, limits: LimitSwitches<I>, led: ActivityLed<O>) -> Self {
        Self { motor, limits, led }
    }

    /// Toggle the activity LED.  Called once per tick, after the lock
    /// on the shared state is released.
    pub fn blink(&mut self) {
        self.led.toggle();
    }

    pub fn motor(&self) -> &RoofMotor<O> {
        &self.motor
    }
}

// ── LimitSwitchPort implementation ────────────────────────────

impl<O: OutputPin, I: InputPin> LimitSwitchPort for HardwareAdapter<O, I> {
    fn read_limits(&mut self) -> LimitState {
        self.limits.read_limits()
    }
}

// ── MotorPort implementation ──────────────────────────────────

impl<O: OutputPin, I: InputPin> MotorPort for HardwareAdapter<O, I> {
    fn apply(&mut self, drive: MotorDrive) {
        self.motor.apply(drive);
    }
}
