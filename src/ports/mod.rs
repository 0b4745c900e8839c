//! Ports (interfaces) defining the boundaries of the library
//!
//! Ports are traits that define how drivers and the redundant store reach
//! hardware, and how applications reach sensors:
//!
//! - **Sensor ports**: what a sensor driver offers (samples, temperature, ...)
//! - **Input ports**: where drivers get raw readings and timestamps
//! - **Storage port**: the byte medium under the redundant store

pub mod input;
pub mod sensor;
pub mod storage;

pub use input::{AnalogInput, Clock};
pub use sensor::{
    AnalogSensor, OnOffSensor, RelativeHumiditySensor, Sensor, SensorError, TemperatureSensor,
};
pub use storage::{ByteMedium, MediumError};
