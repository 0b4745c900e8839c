//! AT24-series I2C EEPROM adapter
//!
//! This adapter implements the ByteMedium port for 24Cxx serial EEPROMs
//! using single-byte random reads and byte writes over `embedded-hal` I2C.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::ports::storage::{ByteMedium, MediumError};

/// Size of the word address sent before each access
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressWidth {
    /// One address byte (24C01/24C02, up to 256 bytes)
    OneByte,
    /// Two address bytes, high byte first (24C32 and larger)
    TwoBytes,
}

impl AddressWidth {
    const fn len(self) -> usize {
        match self {
            AddressWidth::OneByte => 1,
            AddressWidth::TwoBytes => 2,
        }
    }
}

/// Device parameters for an AT24 EEPROM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct At24Config {
    /// 7-bit I2C address (0x50..=0x57 depending on A0-A2)
    pub address: u8,
    /// Device size in bytes
    pub capacity: u32,
    pub addressing: AddressWidth,
    /// Time to wait after a byte write for the internal write cycle
    pub write_cycle_us: u32,
}

impl At24Config {
    /// Base address with A0-A2 tied low
    pub const DEFAULT_ADDRESS: u8 = 0x50;

    /// Maximum write cycle time from the datasheet (5 ms)
    pub const WRITE_CYCLE_US: u32 = 5_000;

    /// 24C02: 256 bytes
    pub const AT24C02: Self = Self {
        address: Self::DEFAULT_ADDRESS,
        capacity: 256,
        addressing: AddressWidth::OneByte,
        write_cycle_us: Self::WRITE_CYCLE_US,
    };

    /// 24C32: 4 KiB
    pub const AT24C32: Self = Self {
        address: Self::DEFAULT_ADDRESS,
        capacity: 4 * 1024,
        addressing: AddressWidth::TwoBytes,
        write_cycle_us: Self::WRITE_CYCLE_US,
    };

    /// 24C256: 32 KiB
    pub const AT24C256: Self = Self {
        address: Self::DEFAULT_ADDRESS,
        capacity: 32 * 1024,
        addressing: AddressWidth::TwoBytes,
        write_cycle_us: Self::WRITE_CYCLE_US,
    };

    /// Same device on another bus address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

impl Default for At24Config {
    fn default() -> Self {
        Self::AT24C256
    }
}

/// AT24 EEPROM on an I2C bus
pub struct At24Eeprom<I, D> {
    i2c: I,
    delay: D,
    config: At24Config,
}

impl<I: I2c, D: DelayNs> At24Eeprom<I, D> {
    pub fn new(i2c: I, delay: D, config: At24Config) -> Self {
        Self { i2c, delay, config }
    }

    pub fn config(&self) -> At24Config {
        self.config
    }

    /// Release the bus and delay
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    /// Encode `address` into the start of `buf`; returns the number of bytes
    fn encode_address(&self, address: u32, buf: &mut [u8; 3]) -> Result<usize, MediumError> {
        if address >= self.config.capacity {
            return Err(MediumError::OutOfBounds);
        }
        match self.config.addressing {
            AddressWidth::OneByte => buf[0] = address as u8,
            AddressWidth::TwoBytes => {
                buf[0] = (address >> 8) as u8;
                buf[1] = address as u8;
            }
        }
        Ok(self.config.addressing.len())
    }
}

impl<I: I2c, D: DelayNs> ByteMedium for At24Eeprom<I, D> {
    fn read(&mut self, address: u32) -> Result<u8, MediumError> {
        let mut frame = [0u8; 3];
        let len = self.encode_address(address, &mut frame)?;
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &frame[..len], &mut value)
            .map_err(|_| {
                log_warn!("at24: read at {} failed", address);
                MediumError::Bus
            })?;
        Ok(value[0])
    }

    fn write(&mut self, address: u32, value: u8) -> Result<(), MediumError> {
        let mut frame = [0u8; 3];
        let len = self.encode_address(address, &mut frame)?;
        frame[len] = value;
        self.i2c
            .write(self.config.address, &frame[..=len])
            .map_err(|_| {
                log_warn!("at24: write at {} failed", address);
                MediumError::Bus
            })?;
        self.delay.delay_us(self.config.write_cycle_us);
        Ok(())
    }

    fn capacity(&self) -> u32 {
        self.config.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RedundantStore, StoreConfig};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x50;

    #[test]
    fn two_byte_read() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![0x01, 0x02],
            vec![0x5A],
        )];
        let mut i2c = I2cMock::new(&expectations);
        let mut eeprom = At24Eeprom::new(i2c.clone(), NoopDelay::new(), At24Config::AT24C256);

        assert_eq!(eeprom.read(0x0102), Ok(0x5A));
        i2c.done();
    }

    #[test]
    fn one_byte_write() {
        let expectations = [I2cTransaction::write(0x51, vec![0x10, 0x77])];
        let mut i2c = I2cMock::new(&expectations);
        let config = At24Config::AT24C02.with_address(0x51);
        let mut eeprom = At24Eeprom::new(i2c.clone(), NoopDelay::new(), config);

        assert_eq!(eeprom.write(0x10, 0x77), Ok(()));
        i2c.done();
    }

    #[test]
    fn out_of_bounds_never_reaches_the_bus() {
        let expectations: [I2cTransaction; 0] = [];
        let mut i2c = I2cMock::new(&expectations);
        let mut eeprom = At24Eeprom::new(i2c.clone(), NoopDelay::new(), At24Config::AT24C02);

        assert_eq!(eeprom.read(256), Err(MediumError::OutOfBounds));
        assert_eq!(eeprom.write(300, 1), Err(MediumError::OutOfBounds));
        i2c.done();
    }

    #[test]
    fn redundant_write_hits_three_addresses() {
        // Logical byte 1 -> physical 3, 4, 5. Cells start erased.
        let expectations = [
            I2cTransaction::write_read(ADDR, vec![0x00, 0x03], vec![0xFF]),
            I2cTransaction::write_read(ADDR, vec![0x00, 0x04], vec![0xFF]),
            I2cTransaction::write_read(ADDR, vec![0x00, 0x05], vec![0xFF]),
            I2cTransaction::write(ADDR, vec![0x00, 0x03, 0x42]),
            I2cTransaction::write(ADDR, vec![0x00, 0x04, 0x42]),
            I2cTransaction::write(ADDR, vec![0x00, 0x05, 0x42]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let eeprom = At24Eeprom::new(i2c.clone(), NoopDelay::new(), At24Config::AT24C32);
        let mut store = RedundantStore::open(eeprom, StoreConfig::new(64));

        assert!(store.write_byte(1, 0x42));
        i2c.done();
    }
}
