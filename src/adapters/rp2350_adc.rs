//! RP2350 ADC and timer adapters
//!
//! Connects sensor drivers to the RP2350's 12-bit ADC and the embassy time
//! driver. Pair with [`AnalogReference::RP2350`](crate::domain::AnalogReference::RP2350).

use embassy_rp::adc::{Adc, Blocking, Channel as AdcChannel};

use crate::ports::input::{AnalogInput, Clock};
use crate::ports::sensor::SensorError;

/// One ADC channel of the RP2350
pub struct Rp2350AdcInput<'a> {
    /// ADC peripheral (blocking mode to avoid DMA conflicts with flash)
    adc: Adc<'a, Blocking>,
    channel: AdcChannel<'a>,
}

impl<'a> Rp2350AdcInput<'a> {
    pub fn new(adc: Adc<'a, Blocking>, channel: AdcChannel<'a>) -> Self {
        Self { adc, channel }
    }

    /// Give back the peripheral and channel
    pub fn release(self) -> (Adc<'a, Blocking>, AdcChannel<'a>) {
        (self.adc, self.channel)
    }
}

impl AnalogInput for Rp2350AdcInput<'_> {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| {
            log_warn!("rp2350 adc: conversion failed");
            SensorError::ReadFailed
        })
    }
}

/// Milliseconds since boot from the embassy time driver
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}
