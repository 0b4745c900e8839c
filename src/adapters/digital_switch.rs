//! Digital on/off input adapter
//!
//! Any `embedded-hal` input pin (switch, reed contact, PIR output) exposed
//! as an [`OnOffSensor`], with optional inverted logic for active-low wiring.

use embedded_hal::digital::InputPin;

use crate::domain::{SensorDetails, SensorId, SensorSample, SensorType};
use crate::ports::input::Clock;
use crate::ports::sensor::{OnOffSensor, Sensor, SensorError};

/// On/off sensor backed by a GPIO input
pub struct DigitalSwitch<P, C> {
    pin: P,
    clock: C,
    inverted: bool,
    sensor_id: SensorId,
    /// Logical state seen by the last `poll_change`
    last_on: Option<bool>,
}

impl<P: InputPin, C: Clock> DigitalSwitch<P, C> {
    /// Active-high switch
    pub fn new(pin: P, clock: C) -> Self {
        Self {
            pin,
            clock,
            inverted: false,
            sensor_id: SensorId::UNASSIGNED,
            last_on: None,
        }
    }

    /// Treat a low pin as "on"
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_sensor_id(mut self, sensor_id: SensorId) -> Self {
        self.sensor_id = sensor_id;
        self
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Sample the input and report a change of the logical state.
    ///
    /// The first call records the baseline and returns `None`. Later calls
    /// return `Some(on)` when the state differs from the previous poll.
    pub fn poll_change(&mut self) -> Result<Option<bool>, SensorError> {
        let on = self.is_on()?;
        let previous = self.last_on.replace(on);
        match previous {
            Some(was_on) if was_on != on => {
                log_debug!("switch {}: now {}", self.sensor_id.value(), on);
                Ok(Some(on))
            }
            _ => Ok(None),
        }
    }

    /// Give back the pin and clock
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }
}

impl<P: InputPin, C: Clock> Sensor for DigitalSwitch<P, C> {
    fn sample(&mut self) -> Result<SensorSample, SensorError> {
        let on = self.is_on()?;
        Ok(SensorSample::on_off(self.sensor_id, self.clock.now_ms(), on))
    }

    fn details(&self) -> SensorDetails {
        SensorDetails::new("digital-switch", SensorType::OnOff)
            .with_range(0.0, 1.0)
            .with_resolution(1.0)
            .with_sensor_id(self.sensor_id)
    }

    fn sensor_id(&self) -> SensorId {
        self.sensor_id
    }
}

impl<P: InputPin, C: Clock> OnOffSensor for DigitalSwitch<P, C> {
    fn state(&mut self) -> Result<bool, SensorError> {
        self.pin.is_high().map_err(|_| SensorError::HardwareError)
    }

    fn inverted(&self) -> bool {
        self.inverted
    }
}
