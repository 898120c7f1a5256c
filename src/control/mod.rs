//! Roof motion control.

pub mod roof;

pub use roof::{LimitState, MotionCounters, MotorDrive, RoofController, RoofStatus, RoofStep};
