//! Input ports - raw hardware readings and time
//!
//! Drivers read the ADC and the clock through these traits so the same
//! driver runs on any board and under host tests.

use crate::ports::sensor::SensorError;

/// Port for a single analog input channel
pub trait AnalogInput {
    /// Take one raw ADC conversion
    fn read_raw(&mut self) -> Result<u16, SensorError>;
}

/// Port for a monotonic millisecond clock used to timestamp samples
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        (**self).read_raw()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
