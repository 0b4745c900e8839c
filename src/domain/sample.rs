//! Sensor sample domain entity
//!
//! A sample is one timestamped measurement from one sensor. The payload is a
//! tagged value so a temperature can never be read back as an on/off state.

/// Physical magnitude a sensor measures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorType {
    /// Temperature in degrees Celsius
    Temperature,
    /// Relative humidity in percent
    RelativeHumidity,
    /// Current in milliamperes
    Current,
    /// Voltage in millivolts
    Voltage,
    /// Binary on/off state
    OnOff,
}

impl SensorType {
    /// Human readable label
    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "Temperature",
            SensorType::RelativeHumidity => "Relative humidity",
            SensorType::Current => "Current",
            SensorType::Voltage => "Voltage",
            SensorType::OnOff => "On/Off",
        }
    }

    /// Unit of the sample payload for this type
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorType::Temperature => "°C",
            SensorType::RelativeHumidity => "%",
            SensorType::Current => "mA",
            SensorType::Voltage => "mV",
            SensorType::OnOff => "",
        }
    }

    /// Whether samples of this type carry a boolean payload
    pub const fn is_binary(&self) -> bool {
        matches!(self, SensorType::OnOff)
    }
}

/// Unique sensor identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorId(pub u64);

impl SensorId {
    /// Identifier used by drivers that were not given one
    pub const UNASSIGNED: SensorId = SensorId(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// Sample payload
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleValue {
    Float(f32),
    Bool(bool),
}

/// A single timestamped measurement.
///
/// Built only through the per-type constructors, which keeps the payload
/// variant consistent with `sensor_type`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSample {
    sensor_id: SensorId,
    sensor_type: SensorType,
    /// Milliseconds since boot
    timestamp_ms: u64,
    value: SampleValue,
}

impl SensorSample {
    const fn float(sensor_id: SensorId, sensor_type: SensorType, timestamp_ms: u64, value: f32) -> Self {
        Self {
            sensor_id,
            sensor_type,
            timestamp_ms,
            value: SampleValue::Float(value),
        }
    }

    /// Temperature sample in °C
    pub const fn temperature(sensor_id: SensorId, timestamp_ms: u64, celsius: f32) -> Self {
        Self::float(sensor_id, SensorType::Temperature, timestamp_ms, celsius)
    }

    /// Relative humidity sample in %
    pub const fn relative_humidity(sensor_id: SensorId, timestamp_ms: u64, percent: f32) -> Self {
        Self::float(sensor_id, SensorType::RelativeHumidity, timestamp_ms, percent)
    }

    /// Current sample in mA
    pub const fn current(sensor_id: SensorId, timestamp_ms: u64, milliamps: f32) -> Self {
        Self::float(sensor_id, SensorType::Current, timestamp_ms, milliamps)
    }

    /// Voltage sample in mV
    pub const fn voltage(sensor_id: SensorId, timestamp_ms: u64, millivolts: f32) -> Self {
        Self::float(sensor_id, SensorType::Voltage, timestamp_ms, millivolts)
    }

    /// On/off sample
    pub const fn on_off(sensor_id: SensorId, timestamp_ms: u64, on: bool) -> Self {
        Self {
            sensor_id,
            sensor_type: SensorType::OnOff,
            timestamp_ms,
            value: SampleValue::Bool(on),
        }
    }

    pub const fn sensor_id(&self) -> SensorId {
        self.sensor_id
    }

    pub const fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub const fn value(&self) -> SampleValue {
        self.value
    }

    /// Float payload, `None` for on/off samples
    pub const fn as_f32(&self) -> Option<f32> {
        match self.value {
            SampleValue::Float(v) => Some(v),
            SampleValue::Bool(_) => None,
        }
    }

    /// Boolean payload, `None` for analog samples
    pub const fn as_bool(&self) -> Option<bool> {
        match self.value {
            SampleValue::Bool(v) => Some(v),
            SampleValue::Float(_) => None,
        }
    }

    /// True when the measured magnitude or the measured value changed.
    ///
    /// Sensor id and timestamp are not compared, so two consecutive samples
    /// of an unchanged input do not differ.
    pub fn differs_from(&self, other: &SensorSample) -> bool {
        self.sensor_type != other.sensor_type || self.value != other.value
    }
}
