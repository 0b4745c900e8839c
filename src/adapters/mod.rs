//! Adapters - concrete implementations of ports
//!
//! Adapters connect drivers and the redundant store to real hardware by
//! implementing the port traits, or implement sensor traits on top of them.
//!
//! # Available Adapters
//!
//! - **memory**: RAM-backed byte medium for tests and simulation
//! - **at24**: AT24-series I2C EEPROM byte medium
//! - **lm35**: LM35 analog temperature sensor
//! - **digital_switch**: GPIO input as an on/off sensor
//! - **rp2350_adc**: RP2350 ADC channel and embassy clock (`rp2350` feature)

pub mod at24;
pub mod digital_switch;
pub mod lm35;
pub mod memory;
#[cfg(feature = "rp2350")]
pub mod rp2350_adc;

pub use at24::{AddressWidth, At24Config, At24Eeprom};
pub use digital_switch::DigitalSwitch;
pub use lm35::{Lm35, Lm35Config, Lm35Series};
pub use memory::MemoryMedium;
#[cfg(feature = "rp2350")]
pub use rp2350_adc::{EmbassyClock, Rp2350AdcInput};
