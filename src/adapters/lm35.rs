//! LM35 analog temperature sensor adapter
//!
//! The LM35 outputs 10 mV per degree Celsius. This adapter reads the output
//! through an [`AnalogInput`] and converts it with the configured
//! [`AnalogReference`]. Datasheet: <https://www.ti.com/lit/ds/symlink/lm35.pdf>

use crate::domain::{AnalogReference, SensorDetails, SensorId, SensorSample, SensorType};
use crate::ports::input::{AnalogInput, Clock};
use crate::ports::sensor::{AnalogSensor, Sensor, SensorError, TemperatureSensor};

/// Driver version reported in the sensor details
pub const DRIVER_VERSION_MAJOR: u32 = 0;

/// LM35 output scale
pub const MILLIVOLTS_PER_DEGREE: f32 = 10.0;

/// Quiescent supply current from the datasheet
const SUPPLY_CURRENT_MA: f32 = 0.060;

/// Models of the LM35 family; they differ in rated range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lm35Series {
    #[default]
    Lm35,
    Lm35A,
    Lm35C,
    Lm35CA,
    Lm35D,
}

impl Lm35Series {
    pub const fn name(self) -> &'static str {
        match self {
            Lm35Series::Lm35 => "LM35",
            Lm35Series::Lm35A => "LM35A",
            Lm35Series::Lm35C => "LM35C",
            Lm35Series::Lm35CA => "LM35CA",
            Lm35Series::Lm35D => "LM35D",
        }
    }

    /// Rated range in °C as `(min, max)`
    pub const fn range_c(self) -> (f32, f32) {
        match self {
            Lm35Series::Lm35 | Lm35Series::Lm35A => (-55.0, 150.0),
            Lm35Series::Lm35C | Lm35Series::Lm35CA => (-40.0, 110.0),
            Lm35Series::Lm35D => (0.0, 100.0),
        }
    }
}

/// LM35 driver configuration
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lm35Config {
    pub series: Lm35Series,
    /// ADC reference used for the conversion
    pub reference: AnalogReference,
    pub sensor_id: SensorId,
}

impl Lm35Config {
    pub const fn new(series: Lm35Series) -> Self {
        Self {
            series,
            reference: AnalogReference::DEFAULT,
            sensor_id: SensorId::UNASSIGNED,
        }
    }

    pub const fn with_reference(mut self, reference: AnalogReference) -> Self {
        self.reference = reference;
        self
    }

    pub const fn with_sensor_id(mut self, sensor_id: SensorId) -> Self {
        self.sensor_id = sensor_id;
        self
    }
}

impl Default for Lm35Config {
    fn default() -> Self {
        Self::new(Lm35Series::Lm35)
    }
}

/// LM35 temperature sensor
pub struct Lm35<A, C> {
    /// ADC channel wired to the sensor's Vout
    input: A,
    /// Sample timestamp source
    clock: C,
    config: Lm35Config,
    /// Last raw ADC value (for diagnostics)
    last_raw: Option<u16>,
}

impl<A: AnalogInput, C: Clock> Lm35<A, C> {
    /// LM35 with the default configuration (5 V, 12-bit reference)
    pub fn new(input: A, clock: C) -> Self {
        Self::with_config(input, clock, Lm35Config::default())
    }

    pub fn with_config(input: A, clock: C, config: Lm35Config) -> Self {
        Self {
            input,
            clock,
            config,
            last_raw: None,
        }
    }

    pub fn config(&self) -> Lm35Config {
        self.config
    }

    pub fn set_series(&mut self, series: Lm35Series) {
        self.config.series = series;
    }

    /// Last raw ADC value read, if any
    pub fn last_raw_value(&self) -> Option<u16> {
        self.last_raw
    }

    /// Give back the input and clock
    pub fn release(self) -> (A, C) {
        (self.input, self.clock)
    }
}

impl<A: AnalogInput, C: Clock> AnalogSensor for Lm35<A, C> {
    fn reference(&self) -> AnalogReference {
        self.config.reference
    }

    fn set_reference(&mut self, reference: AnalogReference) {
        self.config.reference = reference;
    }

    fn raw(&mut self) -> Result<u16, SensorError> {
        let raw = self.input.read_raw()?;
        self.last_raw = Some(raw);
        Ok(raw)
    }
}

impl<A: AnalogInput, C: Clock> Sensor for Lm35<A, C> {
    fn sample(&mut self) -> Result<SensorSample, SensorError> {
        let celsius = self.temperature()?;
        Ok(SensorSample::temperature(
            self.config.sensor_id,
            self.clock.now_ms(),
            celsius,
        ))
    }

    fn details(&self) -> SensorDetails {
        let (min, max) = self.config.series.range_c();
        SensorDetails::new(self.config.series.name(), SensorType::Temperature)
            .with_range(min, max)
            .with_resolution(1.0)
            .with_power_ma(SUPPLY_CURRENT_MA)
            .with_version(DRIVER_VERSION_MAJOR)
            .with_sensor_id(self.config.sensor_id)
    }

    fn sensor_id(&self) -> SensorId {
        self.config.sensor_id
    }
}

impl<A: AnalogInput, C: Clock> TemperatureSensor for Lm35<A, C> {
    fn temperature(&mut self) -> Result<f32, SensorError> {
        let celsius = self.millivolts()? / MILLIVOLTS_PER_DEGREE;
        let (min, max) = self.config.series.range_c();
        if celsius < min || celsius > max {
            log_warn!(
                "lm35: {} C outside the {} rated range",
                celsius,
                self.config.series.name()
            );
        }
        Ok(celsius)
    }
}
