//! Sensor subsystem: supply voltage and roof end-stops.
//!
//! - [`voltage`] runs in the polling context and feeds the shared state.
//! - [`limits`] is sampled by the tick, inside its critical section.
//! - [`mcp3201`] is the SPI front end behind the voltage sampler.

pub mod limits;
pub mod mcp3201;
pub mod voltage;

pub use limits::LimitSwitches;
pub use mcp3201::Mcp3201;
pub use voltage::VoltageSampler;
