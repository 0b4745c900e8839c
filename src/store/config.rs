//! Redundant store configuration

use crate::domain::COPIES;
use crate::store::SIZE_GRANULARITY;

/// How a [`RedundantStore`](crate::store::RedundantStore) is opened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreConfig {
    /// Requested logical size in bytes (rounded down to a multiple of 32)
    pub size: u16,
    /// Run a full repair scan right after opening
    pub repair_on_open: bool,
}

impl StoreConfig {
    /// ATmega328 (Uno, Nano): 1 KiB EEPROM
    pub const ATMEGA328: Self = Self::filling(1024);

    /// ATmega2560 (Mega): 4 KiB EEPROM
    pub const ATMEGA2560: Self = Self::filling(4096);

    /// 24C256 I2C EEPROM: 32 KiB
    pub const AT24C256: Self = Self::filling(32 * 1024);

    pub const fn new(size: u16) -> Self {
        Self {
            size,
            repair_on_open: false,
        }
    }

    /// Largest store whose three copies fit in `physical_bytes`
    pub const fn filling(physical_bytes: u32) -> Self {
        let mut logical = physical_bytes / COPIES as u32;
        if logical > u16::MAX as u32 {
            logical = u16::MAX as u32;
        }
        let logical = logical as u16;
        Self::new(logical - logical % SIZE_GRANULARITY)
    }

    pub const fn with_repair_on_open(mut self, repair_on_open: bool) -> Self {
        self.repair_on_open = repair_on_open;
        self
    }
}

impl Default for StoreConfig {
    /// Unsized store; every access fails until a size is set
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filling_rounds_down_to_granularity() {
        // 1024 / 3 = 341 -> 320
        assert_eq!(StoreConfig::ATMEGA328.size, 320);
        // 4096 / 3 = 1365 -> 1344
        assert_eq!(StoreConfig::ATMEGA2560.size, 1344);
        assert_eq!(StoreConfig::filling(95).size, 0);
        assert_eq!(StoreConfig::filling(96).size, 32);
    }

    #[test]
    fn filling_clamps_large_media() {
        let cfg = StoreConfig::filling(u32::MAX);
        assert_eq!(cfg.size, u16::MAX - u16::MAX % 32);
        assert_eq!(cfg.size % 32, 0);
    }

    #[test]
    fn repair_flag() {
        assert!(!StoreConfig::new(64).repair_on_open);
        assert!(StoreConfig::new(64).with_repair_on_open(true).repair_on_open);
    }
}
