//! Energesis sensor library
//!
//! Uniform capability interfaces for environmental sensors, a few drivers,
//! and a triple-redundant byte store for keeping settings on EEPROM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                │
//! │  - SensorSample / SensorDetails records                         │
//! │  - AnalogReference and unit conversions                         │
//! │  - Majority vote over three copies                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                              │
//! │  - Sensor, TemperatureSensor, OnOffSensor, ...                  │
//! │  - AnalogInput / Clock: raw readings and timestamps             │
//! │  - ByteMedium: byte-addressable non-volatile memory             │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────────────────────┐ ┌────────────────────────────────┐
//! │  Store                       │ │  Adapters                      │
//! │  - RedundantStore<M>         │ │  - Lm35, DigitalSwitch         │
//! │  - StoreConfig               │ │  - At24Eeprom, MemoryMedium    │
//! │                              │ │  - Rp2350AdcInput (rp2350)     │
//! └──────────────────────────────┘ └────────────────────────────────┘
//! ```
//!
//! # Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format` on public types
//! - `serde`: derive `Serialize`/`Deserialize` on samples and details
//! - `rp2350`: RP2350 ADC and clock adapters on `embassy-rp`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod logging;

/// Domain layer - pure types and algorithms
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Triple-redundant byte store
pub mod store;

/// Adapters - concrete implementations
pub mod adapters;

// Re-export key domain types
pub use domain::{AnalogReference, SampleValue, SensorDetails, SensorId, SensorSample, SensorType};

// Re-export key port traits
pub use ports::{
    AnalogInput, AnalogSensor, ByteMedium, Clock, MediumError, OnOffSensor,
    RelativeHumiditySensor, Sensor, SensorError, TemperatureSensor,
};

// Re-export the store
pub use store::{RedundantStore, RepairReport, StoreConfig, StoreError, WriteOutcome};

// Re-export adapters
pub use adapters::{At24Config, At24Eeprom, DigitalSwitch, Lm35, Lm35Config, MemoryMedium};
