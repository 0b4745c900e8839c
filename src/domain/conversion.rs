//! Unit conversions for analog and temperature sensors
//!
//! This module holds the arithmetic shared by sensor drivers: turning raw ADC
//! counts into millivolts and converting between temperature scales.

/// Convert a temperature from degrees Celsius to degrees Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert a temperature from degrees Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(celsius: f32) -> f32 {
    celsius + 273.15
}

/// ADC reference used to convert raw counts to millivolts:
/// `millivolts = raw * v_ref_mv / 2^resolution_bits`
///
/// The driver never configures the ADC itself; these values only have to
/// match how the ADC was set up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogReference {
    /// Reference voltage in millivolts
    pub v_ref_mv: f32,
    /// ADC resolution in bits
    pub resolution_bits: u8,
}

impl AnalogReference {
    /// Widest resolution a raw `u16` reading can carry
    pub const MAX_RESOLUTION_BITS: u8 = 16;

    /// 5 V reference, 12-bit conversion
    pub const DEFAULT: Self = Self {
        v_ref_mv: 5000.0,
        resolution_bits: 12,
    };

    /// Classic AVR boards (Uno, Mega): 5 V reference, 10-bit ADC
    pub const AVR: Self = Self {
        v_ref_mv: 5000.0,
        resolution_bits: 10,
    };

    /// ESP32: 3.3 V reference, 12-bit ADC
    pub const ESP32: Self = Self {
        v_ref_mv: 3300.0,
        resolution_bits: 12,
    };

    /// RP2040/RP2350: 3.3 V reference, 12-bit ADC
    pub const RP2350: Self = Self {
        v_ref_mv: 3300.0,
        resolution_bits: 12,
    };

    pub const fn new(v_ref_mv: f32, resolution_bits: u8) -> Self {
        Self {
            v_ref_mv,
            resolution_bits,
        }
    }

    /// Whether `bits` is a resolution a `u16` reading can represent
    pub const fn is_valid_resolution(bits: u8) -> bool {
        bits >= 1 && bits <= Self::MAX_RESOLUTION_BITS
    }

    /// Number of distinct ADC codes (`2^resolution_bits`)
    #[inline]
    pub fn full_scale(&self) -> u32 {
        1u32 << self.resolution_bits.min(Self::MAX_RESOLUTION_BITS)
    }

    /// Convert a raw ADC reading to millivolts
    #[inline]
    pub fn raw_to_millivolts(&self, raw: u16) -> f32 {
        raw as f32 * self.v_ref_mv / self.full_scale() as f32
    }
}

impl Default for AnalogReference {
    fn default() -> Self {
        Self::DEFAULT
    }
}
