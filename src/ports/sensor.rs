//! Sensor ports - capability traits implemented by sensor drivers
//!
//! A driver implements [`Sensor`] plus whichever capabilities it has. An LM35
//! is a `Sensor + AnalogSensor + TemperatureSensor`; a reed switch is a
//! `Sensor + OnOffSensor`. Capabilities that measure something extend
//! `Sensor`, so the generic view is always reachable through the same value.

use core::fmt;

use crate::domain::{
    celsius_to_fahrenheit, celsius_to_kelvin, AnalogReference, SensorDetails, SensorId,
    SensorSample,
};

/// Error type for sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Failed to read from sensor
    ReadFailed,
    /// Sensor not initialized
    NotInitialized,
    /// Sensor returned invalid data
    InvalidData,
    /// Hardware error
    HardwareError,
    /// Configuration value rejected
    InvalidConfig,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::ReadFailed => write!(f, "sensor read failed"),
            SensorError::NotInitialized => write!(f, "sensor not initialized"),
            SensorError::InvalidData => write!(f, "sensor returned invalid data"),
            SensorError::HardwareError => write!(f, "sensor hardware error"),
            SensorError::InvalidConfig => write!(f, "invalid sensor configuration"),
        }
    }
}

/// Generic sensor interface
///
/// # Example Implementation
///
/// ```ignore
/// impl<A: AnalogInput, C: Clock> Sensor for Lm35<A, C> {
///     fn sample(&mut self) -> Result<SensorSample, SensorError> {
///         let celsius = self.temperature()?;
///         Ok(SensorSample::temperature(self.sensor_id(), self.clock.now_ms(), celsius))
///     }
///
///     fn details(&self) -> SensorDetails {
///         SensorDetails::new("LM35", SensorType::Temperature).with_range(-55.0, 150.0)
///     }
/// }
/// ```
pub trait Sensor {
    /// Take the most recent sample of the measured magnitude
    fn sample(&mut self) -> Result<SensorSample, SensorError>;

    /// Static information about the sensor
    fn details(&self) -> SensorDetails;

    /// Sensor identifier
    fn sensor_id(&self) -> SensorId {
        self.details().sensor_id
    }
}

/// Sensors whose output is read through an ADC
pub trait AnalogSensor {
    /// Reference used to convert raw counts
    fn reference(&self) -> AnalogReference;

    /// Replace the conversion reference
    fn set_reference(&mut self, reference: AnalogReference);

    /// Raw ADC reading, without conversion
    fn raw(&mut self) -> Result<u16, SensorError>;

    /// Reference voltage in millivolts
    fn v_ref_mv(&self) -> f32 {
        self.reference().v_ref_mv
    }

    /// Set the reference voltage in millivolts.
    ///
    /// A negative (or NaN) value selects the default reference. Returns the
    /// reference voltage now in effect.
    fn set_v_ref_mv(&mut self, v_ref_mv: f32) -> f32 {
        let v_ref_mv = if v_ref_mv.is_nan() || v_ref_mv < 0.0 {
            AnalogReference::DEFAULT.v_ref_mv
        } else {
            v_ref_mv
        };
        let mut reference = self.reference();
        reference.v_ref_mv = v_ref_mv;
        self.set_reference(reference);
        v_ref_mv
    }

    /// ADC resolution in bits used for conversions
    fn analog_resolution(&self) -> u8 {
        self.reference().resolution_bits
    }

    /// Set the ADC resolution used for conversions.
    ///
    /// This only affects the arithmetic; the ADC itself is not reconfigured.
    fn set_analog_resolution(&mut self, bits: u8) -> Result<(), SensorError> {
        if !AnalogReference::is_valid_resolution(bits) {
            return Err(SensorError::InvalidConfig);
        }
        let mut reference = self.reference();
        reference.resolution_bits = bits;
        self.set_reference(reference);
        Ok(())
    }

    /// Input voltage in millivolts
    fn millivolts(&mut self) -> Result<f32, SensorError> {
        let raw = self.raw()?;
        Ok(self.reference().raw_to_millivolts(raw))
    }
}

/// Temperature sensors
pub trait TemperatureSensor: Sensor {
    /// Temperature in degrees Celsius
    fn temperature(&mut self) -> Result<f32, SensorError>;

    /// Temperature in degrees Fahrenheit
    fn temperature_fahrenheit(&mut self) -> Result<f32, SensorError> {
        self.temperature().map(celsius_to_fahrenheit)
    }

    /// Temperature in Kelvin
    fn temperature_kelvin(&mut self) -> Result<f32, SensorError> {
        self.temperature().map(celsius_to_kelvin)
    }
}

/// Relative humidity sensors
pub trait RelativeHumiditySensor: Sensor {
    /// Relative humidity in percent
    fn relative_humidity(&mut self) -> Result<f32, SensorError>;
}

/// Binary on/off sensors (switches, contacts, presence detectors)
pub trait OnOffSensor: Sensor {
    /// Raw input state, before applying the logic inversion
    fn state(&mut self) -> Result<bool, SensorError>;

    /// Whether a low raw state means "on"
    fn inverted(&self) -> bool;

    fn is_on(&mut self) -> Result<bool, SensorError> {
        Ok(self.state()? != self.inverted())
    }

    fn is_off(&mut self) -> Result<bool, SensorError> {
        self.is_on().map(|on| !on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SensorType;

    /// Humidity sensor returning a fixed value
    struct FixedHygrometer {
        percent: f32,
    }

    impl Sensor for FixedHygrometer {
        fn sample(&mut self) -> Result<SensorSample, SensorError> {
            let percent = self.relative_humidity()?;
            Ok(SensorSample::relative_humidity(self.sensor_id(), 0, percent))
        }

        fn details(&self) -> SensorDetails {
            SensorDetails::new("fixed-rh", SensorType::RelativeHumidity)
                .with_range(0.0, 100.0)
                .with_sensor_id(SensorId(42))
        }
    }

    impl RelativeHumiditySensor for FixedHygrometer {
        fn relative_humidity(&mut self) -> Result<f32, SensorError> {
            if self.details().contains(self.percent) {
                Ok(self.percent)
            } else {
                Err(SensorError::InvalidData)
            }
        }
    }

    struct FixedThermometer(f32);

    impl Sensor for FixedThermometer {
        fn sample(&mut self) -> Result<SensorSample, SensorError> {
            Ok(SensorSample::temperature(SensorId(1), 0, self.0))
        }

        fn details(&self) -> SensorDetails {
            SensorDetails::new("fixed-t", SensorType::Temperature)
        }
    }

    impl TemperatureSensor for FixedThermometer {
        fn temperature(&mut self) -> Result<f32, SensorError> {
            Ok(self.0)
        }
    }

    struct Contact {
        level: bool,
        inverted: bool,
    }

    impl Sensor for Contact {
        fn sample(&mut self) -> Result<SensorSample, SensorError> {
            let on = self.is_on()?;
            Ok(SensorSample::on_off(SensorId(5), 0, on))
        }

        fn details(&self) -> SensorDetails {
            SensorDetails::new("contact", SensorType::OnOff)
        }
    }

    impl OnOffSensor for Contact {
        fn state(&mut self) -> Result<bool, SensorError> {
            Ok(self.level)
        }

        fn inverted(&self) -> bool {
            self.inverted
        }
    }

    struct Divider {
        raw: u16,
        reference: AnalogReference,
    }

    impl AnalogSensor for Divider {
        fn reference(&self) -> AnalogReference {
            self.reference
        }

        fn set_reference(&mut self, reference: AnalogReference) {
            self.reference = reference;
        }

        fn raw(&mut self) -> Result<u16, SensorError> {
            Ok(self.raw)
        }
    }

    #[test]
    fn temperature_scales_are_derived() {
        let mut t = FixedThermometer(37.0);
        assert!((t.temperature_fahrenheit().unwrap() - 98.6).abs() < 0.01);
        assert!((t.temperature_kelvin().unwrap() - 310.15).abs() < 0.01);
    }

    #[test]
    fn humidity_sample_carries_sensor_id() {
        let mut h = FixedHygrometer { percent: 55.0 };
        let sample = h.sample().unwrap();
        assert_eq!(sample.sensor_id(), SensorId(42));
        assert_eq!(sample.sensor_type(), SensorType::RelativeHumidity);
        assert_eq!(sample.as_f32(), Some(55.0));
    }

    #[test]
    fn humidity_out_of_range_is_rejected() {
        let mut h = FixedHygrometer { percent: 120.0 };
        assert_eq!(h.sample(), Err(SensorError::InvalidData));
    }

    #[test]
    fn on_off_inversion() {
        let mut normal = Contact { level: true, inverted: false };
        assert_eq!(normal.is_on(), Ok(true));
        assert_eq!(normal.is_off(), Ok(false));

        let mut inverted = Contact { level: true, inverted: true };
        assert_eq!(inverted.is_on(), Ok(false));
        assert_eq!(inverted.is_off(), Ok(true));
        assert_eq!(inverted.sample().unwrap().as_bool(), Some(false));
    }

    #[test]
    fn negative_vref_selects_default() {
        let mut d = Divider {
            raw: 0,
            reference: AnalogReference::ESP32,
        };
        assert_eq!(d.set_v_ref_mv(-1.0), 5000.0);
        assert_eq!(d.v_ref_mv(), 5000.0);
        assert_eq!(d.set_v_ref_mv(1100.0), 1100.0);
        assert_eq!(d.v_ref_mv(), 1100.0);
    }

    #[test]
    fn resolution_is_validated() {
        let mut d = Divider {
            raw: 0,
            reference: AnalogReference::DEFAULT,
        };
        assert_eq!(d.set_analog_resolution(0), Err(SensorError::InvalidConfig));
        assert_eq!(d.set_analog_resolution(17), Err(SensorError::InvalidConfig));
        assert_eq!(d.analog_resolution(), 12);
        assert_eq!(d.set_analog_resolution(10), Ok(()));
        assert_eq!(d.analog_resolution(), 10);
    }

    #[test]
    fn millivolts_use_reference() {
        let mut d = Divider {
            raw: 1024,
            reference: AnalogReference::new(3300.0, 12),
        };
        assert!((d.millivolts().unwrap() - 825.0).abs() < 0.01);
    }
}
