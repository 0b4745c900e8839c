//! Static description of a sensor

use heapless::String;

use crate::domain::{SensorId, SensorType};

/// Maximum length of a sensor name in bytes
pub const SENSOR_NAME_LEN: usize = 16;

/// Detailed sensor information, modelled after the Android HAL `sensor_t`.
///
/// Ranges and resolution are in the unit of the sensor type
/// (see [`SensorType::unit`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorDetails {
    /// Sensor name, truncated to 16 bytes
    pub name: String<SENSOR_NAME_LEN>,
    /// Combined hardware and driver version
    pub version: u32,
    pub sensor_id: SensorId,
    pub sensor_type: SensorType,
    /// Smallest value the sensor can report
    pub min_value: f32,
    /// Largest value the sensor can report
    pub max_value: f32,
    /// Smallest difference between two reported values
    pub resolution: f32,
    /// Rough supply current estimate in mA
    pub power_ma: f32,
    /// Minimum delay between two samples in microseconds (0 = on demand)
    pub min_delay_us: u32,
}

impl SensorDetails {
    /// Details with the given name and type, every other field zeroed
    pub fn new(name: &str, sensor_type: SensorType) -> Self {
        Self {
            name: truncated_name(name),
            version: 0,
            sensor_id: SensorId::UNASSIGNED,
            sensor_type,
            min_value: 0.0,
            max_value: 0.0,
            resolution: 0.0,
            power_ma: 0.0,
            min_delay_us: 0,
        }
    }

    pub fn with_range(mut self, min_value: f32, max_value: f32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_power_ma(mut self, power_ma: f32) -> Self {
        self.power_ma = power_ma;
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_sensor_id(mut self, sensor_id: SensorId) -> Self {
        self.sensor_id = sensor_id;
        self
    }

    /// Whether `value` lies inside `[min_value, max_value]`
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

/// Copy `name` into a fixed buffer, cutting at a character boundary
fn truncated_name(name: &str) -> String<SENSOR_NAME_LEN> {
    let mut end = name.len().min(SENSOR_NAME_LEN);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::new();
    // Cannot fail: `end` bytes fit by construction
    let _ = out.push_str(&name[..end]);
    out
}
