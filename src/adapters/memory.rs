//! In-memory byte medium
//!
//! A fixed array standing in for an EEPROM. Used for host tests, simulation
//! and as a RAM-backed store when persistence is not needed.

use crate::ports::storage::{ByteMedium, MediumError};

/// Value of an erased EEPROM cell
pub const ERASED: u8 = 0xFF;

/// Array-backed medium of `N` bytes
///
/// Besides the [`ByteMedium`] operations it can inject corruption without
/// going through the write path, and counts writes so tests can assert that
/// a store spared the medium.
///
/// # Example
///
/// ```
/// use energesis::adapters::MemoryMedium;
/// use energesis::ports::ByteMedium;
///
/// let mut medium = MemoryMedium::<96>::new();
/// medium.write(4, 0x2A).unwrap();
/// assert_eq!(medium.read(4), Ok(0x2A));
/// assert_eq!(medium.write_count(), 1);
///
/// medium.corrupt(4, 0x00);
/// assert_eq!(medium.read(4), Ok(0x00));
/// assert_eq!(medium.write_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryMedium<const N: usize> {
    cells: [u8; N],
    writes: u32,
}

impl<const N: usize> MemoryMedium<N> {
    /// Medium in the erased state (every cell `0xFF`)
    pub const fn new() -> Self {
        Self::filled(ERASED)
    }

    /// Medium with every cell set to `value`
    pub const fn filled(value: u8) -> Self {
        Self {
            cells: [value; N],
            writes: 0,
        }
    }

    /// Raw contents
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Raw contents, mutable; changes are not counted as writes
    pub fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Overwrite one cell behind the store's back, simulating bit rot.
    ///
    /// Addresses past the end are ignored.
    pub fn corrupt(&mut self, address: u32, value: u8) {
        if let Some(cell) = self.cells.get_mut(address as usize) {
            *cell = value;
        }
    }

    /// Number of successful writes since creation or the last reset
    pub const fn write_count(&self) -> u32 {
        self.writes
    }

    pub fn reset_write_count(&mut self) {
        self.writes = 0;
    }
}

impl<const N: usize> Default for MemoryMedium<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteMedium for MemoryMedium<N> {
    fn read(&mut self, address: u32) -> Result<u8, MediumError> {
        self.cells
            .get(address as usize)
            .copied()
            .ok_or(MediumError::OutOfBounds)
    }

    fn write(&mut self, address: u32, value: u8) -> Result<(), MediumError> {
        let cell = self
            .cells
            .get_mut(address as usize)
            .ok_or(MediumError::OutOfBounds)?;
        *cell = value;
        self.writes += 1;
        Ok(())
    }

    fn capacity(&self) -> u32 {
        N as u32
    }
}
