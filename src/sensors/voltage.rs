//! Supply voltage sampler.
//!
//! Averages 16 raw 12-bit readings, subtracts the grounded-input offset,
//! and converts to volts with a fixed linear gain.
//!
//! The 16-sample sum of 12-bit values tops out at 65 520, so it fits the
//! `u32` accumulator with room to spare; dividing by 16 is a shift by 4.

use crate::app::ports::AdcPort;
use crate::config::RoofConfig;

/// Readings averaged per published value.
pub const SAMPLES_PER_READING: usize = 16;
const AVERAGE_SHIFT: u32 = SAMPLES_PER_READING.trailing_zeros();
const SAMPLE_MASK: u16 = 0x0FFF;

/// Voltage sampler with fixed calibration.
#[derive(Debug, Clone, Copy)]
pub struct VoltageSampler {
    ground_offset: i16,
    volts_per_count: f32,
}

impl VoltageSampler {
    pub fn new(config: &RoofConfig) -> Self {
        Self {
            ground_offset: config.ground_offset,
            volts_per_count: config.volts_per_count,
        }
    }

    /// Acquire one averaged reading, offset-corrected, in ADC counts.
    pub fn sample(&self, adc: &mut impl AdcPort) -> i16 {
        let sum: u32 = (0..SAMPLES_PER_READING)
            .map(|_| u32::from(adc.read_sample() & SAMPLE_MASK))
            .sum();
        self.offset_corrected(sum >> AVERAGE_SHIFT)
    }

    /// Calibrated volts for a value returned by [`VoltageSampler::sample`].
    pub fn calibrated(&self, raw: i16) -> f32 {
        calibrate(raw, self.volts_per_count)
    }

    fn offset_corrected(&self, average: u32) -> i16 {
        average as i16 - self.ground_offset
    }
}

/// Volts for an offset-corrected reading.
pub fn calibrate(raw: i16, volts_per_count: f32) -> f32 {
    f32::from(raw) * volts_per_count
}
