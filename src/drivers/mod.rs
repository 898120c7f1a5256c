//! Actuator drivers and the tick timer.

pub mod hw_timer;
pub mod motor;
pub mod status_led;
