//! Domain layer - pure types and algorithms independent of hardware
//!
//! Nothing in here touches a peripheral: sensor records, unit conversions and
//! the majority vote used by the redundant store.

pub mod conversion;
pub mod details;
pub mod sample;
pub mod vote;

pub use conversion::{celsius_to_fahrenheit, celsius_to_kelvin, AnalogReference};
pub use details::{SensorDetails, SENSOR_NAME_LEN};
pub use sample::{SampleValue, SensorId, SensorSample, SensorType};
pub use vote::{majority, Vote, COPIES};
