//! System configuration parameters
//!
//! Fixed timing and calibration constants for the roof controller.
//! There is no runtime reconfiguration: the values are baked in at build
//! time through [`RoofConfig::standard`], which is `const` so the shared
//! controller state can be placed in a `static`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Highest heartbeat timeout the host may set, in ticks.  Bytes above
/// this value are reserved for motion commands.
pub const HEARTBEAT_LIMIT: u8 = 0xF0;

/// Core system configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofConfig {
    // --- Timing ---
    /// Period of the real-time tick (milliseconds)
    pub tick_interval_ms: u32,

    // --- Motion ---
    /// Maximum length of an open run, in ticks (45 = 22.5 s)
    pub max_open_ticks: u8,
    /// Maximum length of a close run, in ticks (110 = 55 s)
    pub max_close_ticks: u8,

    // --- Voltage calibration ---
    /// Averaged ADC reading measured with the input grounded
    pub ground_offset: i16,
    /// Volts per ADC count after offset subtraction
    pub volts_per_count: f32,

    // --- Host link ---
    /// Serial baud rate of the host byte stream
    pub link_baud: u32,
}

impl RoofConfig {
    /// The constants the firmware ships with.
    pub const fn standard() -> Self {
        Self {
            tick_interval_ms: 500,
            max_open_ticks: 45,
            max_close_ticks: 110,
            ground_offset: 1979,
            volts_per_count: 0.017_12,
            link_baud: 9600,
        }
    }

    /// Reject combinations the control loop cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be non-zero"));
        }
        if self.max_open_ticks == 0 || self.max_close_ticks == 0 {
            return Err(ConfigError::Invalid("motion caps must be non-zero"));
        }
        if u32::from(HEARTBEAT_LIMIT) * self.tick_interval_ms > 300_000 {
            return Err(ConfigError::Invalid(
                "longest heartbeat must not exceed five minutes",
            ));
        }
        if !(self.volts_per_count.is_finite() && self.volts_per_count > 0.0) {
            return Err(ConfigError::Invalid("volts_per_count must be positive"));
        }
        if self.link_baud == 0 {
            return Err(ConfigError::Invalid("link_baud must be non-zero"));
        }
        Ok(())
    }

    /// Ticks per second, derived from the tick interval.
    pub fn ticks_per_sec(&self) -> f32 {
        1000.0 / self.tick_interval_ms as f32
    }
}

impl Default for RoofConfig {
    fn default() -> Self {
        Self::standard()
    }
}
