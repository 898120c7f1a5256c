//! Roof motor relay driver.
//!
//! Two active-low enable lines: pulling OPEN low runs the roof towards
//! its open end-stop, pulling CLOSE low runs it towards closed.
//!
//! ## Safety contract
//!
//! Both lines must never be low together.  [`RoofMotor::apply`] releases
//! the line being switched off before pulling the other one low, and
//! rejects a drive request with both outputs set.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::MotorPort;
use crate::control::MotorDrive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Stopped,
    Opening,
    Closing,
}

pub struct RoofMotor<O: OutputPin> {
    open_en: O,
    close_en: O,
    state: MotorState,
}

impl<O: OutputPin> RoofMotor<O> {
    /// Take the two enable lines and drive both inactive.
    pub fn new(open_en: O, close_en: O) -> Self {
        let mut motor = Self {
            open_en,
            close_en,
            state: MotorState::Stopped,
        };
        motor.release_open();
        motor.release_close();
        motor
    }

    pub fn state(&self) -> MotorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != MotorState::Stopped
    }

    fn release_open(&mut self) {
        self.open_en.set_high().ok();
    }

    fn release_close(&mut self) {
        self.close_en.set_high().ok();
    }
}

impl<O: OutputPin> MotorPort for RoofMotor<O> {
    fn apply(&mut self, drive: MotorDrive) {
        if drive.open && drive.close {
            warn!("motor: conflicting drive request, stopping both");
            self.release_open();
            self.release_close();
            self.state = MotorState::Stopped;
            return;
        }

        // Break before make.
        if !drive.open {
            self.release_open();
        }
        if !drive.close {
            self.release_close();
        }
        if drive.open {
            self.open_en.set_low().ok();
        }
        if drive.close {
            self.close_en.set_low().ok();
        }

        self.state = match (drive.open, drive.close) {
            (true, _) => MotorState::Opening,
            (_, true) => MotorState::Closing,
            _ => MotorState::Stopped,
        };
    }
}
