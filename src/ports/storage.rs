//! Storage port - byte-addressable persistent medium
//!
//! The redundant store only needs to read and write single bytes. This trait
//! lets it run against a real EEPROM or an in-memory array alike.

use core::fmt;

/// Error type for medium operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MediumError {
    /// Address beyond the end of the medium
    OutOfBounds,
    /// Failed to read from the medium
    ReadFailed,
    /// Failed to write to the medium
    WriteFailed,
    /// Bus transaction failed (NACK, arbitration, ...)
    Bus,
}

impl fmt::Display for MediumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediumError::OutOfBounds => write!(f, "address out of bounds"),
            MediumError::ReadFailed => write!(f, "read failed"),
            MediumError::WriteFailed => write!(f, "write failed"),
            MediumError::Bus => write!(f, "bus error"),
        }
    }
}

/// Port for a persistent byte-addressable medium
///
/// Every call goes straight to the medium; implementations must not buffer
/// writes. Callers serialise access through `&mut self`.
///
/// # Example Implementation
///
/// ```ignore
/// struct ArrayMedium([u8; 1024]);
///
/// impl ByteMedium for ArrayMedium {
///     fn read(&mut self, address: u32) -> Result<u8, MediumError> {
///         self.0.get(address as usize).copied().ok_or(MediumError::OutOfBounds)
///     }
///
///     fn write(&mut self, address: u32, value: u8) -> Result<(), MediumError> {
///         let cell = self.0.get_mut(address as usize).ok_or(MediumError::OutOfBounds)?;
///         *cell = value;
///         Ok(())
///     }
///
///     fn capacity(&self) -> u32 { 1024 }
/// }
/// ```
pub trait ByteMedium {
    /// Read the byte at `address`
    fn read(&mut self, address: u32) -> Result<u8, MediumError>;

    /// Write `value` at `address`
    fn write(&mut self, address: u32, value: u8) -> Result<(), MediumError>;

    /// Physical size of the medium in bytes
    fn capacity(&self) -> u32;
}

impl<T: ByteMedium + ?Sized> ByteMedium for &mut T {
    fn read(&mut self, address: u32) -> Result<u8, MediumError> {
        (**self).read(address)
    }

    fn write(&mut self, address: u32, value: u8) -> Result<(), MediumError> {
        (**self).write(address, value)
    }

    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}
