//! Triple-redundant byte store
//!
//! Every logical byte is kept in three physical copies on a [`ByteMedium`]:
//! logical byte `i` lives at physical addresses `3i`, `3i+1` and `3i+2`.
//! Reads return the value shared by at least two copies. Writes make all
//! three copies equal. [`RedundantStore::fix`] scans the whole store and
//! repairs copies that drifted apart.
//!
//! # Layout
//!
//! ```text
//! logical   |    0    |    1    |    2    | ...
//! physical  | 0  1  2 | 3  4  5 | 6  7  8 | ...
//! ```
//!
//! There is no header, checksum or version on the medium.
//!
//! # Error reporting
//!
//! Each operation exists twice. The `try_` form returns a [`StoreError`];
//! the plain form maps any failure to a sentinel: [`CORRUPT_BYTE`] for reads,
//! `false` for writes and an empty string for string reads. A stored value of
//! 255 is indistinguishable from a failure on the sentinel API; use
//! [`RedundantStore::try_read_byte`] when that matters.

pub mod config;
mod text;

use core::fmt;

use crate::domain::{majority, Vote, COPIES};
use crate::ports::storage::{ByteMedium, MediumError};

pub use config::StoreConfig;
pub use text::{StoredBytes, StoredStr, STR_WINDOW};

/// Logical sizes are truncated to a multiple of this
pub const SIZE_GRANULARITY: u16 = 32;

/// Sentinel returned by [`RedundantStore::read_byte`] for out-of-range or
/// corrupt bytes
pub const CORRUPT_BYTE: u8 = 0xFF;

/// Error type for store operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Index at or beyond the configured size
    OutOfRange { index: u16, size: u16 },
    /// The three copies of the byte all differ
    Ambiguous { index: u16 },
    /// Stored bytes are not valid UTF-8
    InvalidUtf8,
    /// The underlying medium failed
    Medium(MediumError),
}

impl From<MediumError> for StoreError {
    fn from(err: MediumError) -> Self {
        StoreError::Medium(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutOfRange { index, size } => {
                write!(f, "index {} out of range (size {})", index, size)
            }
            StoreError::Ambiguous { index } => {
                write!(f, "byte {} has three different copies", index)
            }
            StoreError::InvalidUtf8 => write!(f, "stored text is not valid UTF-8"),
            StoreError::Medium(err) => write!(f, "medium error: {}", err),
        }
    }
}

/// What a successful write did to the medium
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    /// All copies already held the value; nothing was written
    Unchanged,
    /// Two copies held the value; only the odd copy was rewritten
    Repaired,
    /// All three copies were written
    Written,
}

/// Result of a [`RedundantStore::fix`] scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepairReport {
    /// Logical bytes examined
    pub scanned: u16,
    /// Bytes with one odd copy, restored to the majority value
    pub repaired: u16,
    /// Bytes with three different copies, reset to 0
    pub reset: u16,
    /// Bytes skipped because the medium failed
    pub failed: u16,
}

impl RepairReport {
    /// No byte needed attention
    pub const fn is_clean(&self) -> bool {
        self.repaired == 0 && self.reset == 0 && self.failed == 0
    }
}

/// Fixed-size logical byte store over a medium three times larger
///
/// The store starts unsized; call [`set_size`](Self::set_size) (or use
/// [`open`](Self::open)) before reading or writing.
pub struct RedundantStore<M: ByteMedium> {
    medium: M,
    /// Logical size in bytes, always a multiple of `SIZE_GRANULARITY`
    size: u16,
}

/// Physical address of copy `slot` of logical byte `index`
#[inline]
fn slot_address(index: u16, slot: usize) -> u32 {
    index as u32 * COPIES as u32 + slot as u32
}

impl<M: ByteMedium> RedundantStore<M> {
    /// Wrap a medium; the store is unsized until `set_size` is called
    pub const fn new(medium: M) -> Self {
        Self { medium, size: 0 }
    }

    /// Wrap a medium and apply `config`
    pub fn open(medium: M, config: StoreConfig) -> Self {
        let mut store = Self::new(medium);
        store.set_size(config.size);
        if config.repair_on_open {
            store.fix();
        }
        store
    }

    /// Set the logical size, truncated down to a multiple of 32.
    ///
    /// Returns the size in effect. The medium is expected to hold three times
    /// that many bytes; a smaller medium is not rejected, but accesses past
    /// its end will fail.
    pub fn set_size(&mut self, requested: u16) -> u16 {
        let size = requested - requested % SIZE_GRANULARITY;
        let physical = size as u32 * COPIES as u32;
        let available = self.medium.capacity();
        if physical > available {
            log_warn!(
                "store: size {} needs {} physical bytes, medium has {}",
                size,
                physical,
                available
            );
        }
        self.size = size;
        size
    }

    /// Logical size in bytes
    pub const fn size(&self) -> u16 {
        self.size
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    /// Give the medium back
    pub fn release(self) -> M {
        self.medium
    }

    fn check_index(&self, index: u16) -> Result<(), StoreError> {
        if index >= self.size {
            return Err(StoreError::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    fn load_copies(&mut self, index: u16) -> Result<[u8; COPIES], MediumError> {
        let mut copies = [0u8; COPIES];
        for (slot, copy) in copies.iter_mut().enumerate() {
            *copy = self.medium.read(slot_address(index, slot))?;
        }
        Ok(copies)
    }

    fn store_copies(&mut self, index: u16, value: u8) -> Result<(), MediumError> {
        for slot in 0..COPIES {
            self.medium.write(slot_address(index, slot), value)?;
        }
        Ok(())
    }

    /// Majority-voted value of logical byte `index`
    pub fn try_read_byte(&mut self, index: u16) -> Result<u8, StoreError> {
        self.check_index(index)?;
        let copies = self.load_copies(index)?;
        majority(copies)
            .value()
            .ok_or(StoreError::Ambiguous { index })
    }

    /// Majority-voted value of logical byte `index`, or [`CORRUPT_BYTE`] when
    /// the index is out of range, the copies all differ or the medium fails
    pub fn read_byte(&mut self, index: u16) -> u8 {
        self.try_read_byte(index).unwrap_or(CORRUPT_BYTE)
    }

    /// Store `value` in all three copies of logical byte `index`.
    ///
    /// Copies that already hold `value` are not rewritten, to spare the
    /// medium's write endurance.
    pub fn try_write_byte(&mut self, index: u16, value: u8) -> Result<WriteOutcome, StoreError> {
        self.check_index(index)?;
        match majority(self.load_copies(index)?) {
            Vote::Unanimous(current) if current == value => Ok(WriteOutcome::Unchanged),
            Vote::Majority {
                value: current,
                odd_slot,
            } if current == value => {
                self.medium.write(slot_address(index, odd_slot), value)?;
                Ok(WriteOutcome::Repaired)
            }
            _ => {
                self.store_copies(index, value)?;
                Ok(WriteOutcome::Written)
            }
        }
    }

    /// Store `value` at `index`; `false` if the index is out of range or the
    /// medium fails
    pub fn write_byte(&mut self, index: u16, value: u8) -> bool {
        match self.try_write_byte(index, value) {
            Ok(_) => true,
            Err(StoreError::Medium(err)) => {
                log_error!("store: write of byte {} failed: {}", index, err);
                false
            }
            Err(_) => false,
        }
    }

    /// Repair one logical byte from its raw copies; returns the vote found
    fn fix_byte(&mut self, index: u16) -> Result<Vote, MediumError> {
        let vote = majority(self.load_copies(index)?);
        match vote {
            Vote::Unanimous(_) => {}
            Vote::Majority { value, odd_slot } => {
                self.medium.write(slot_address(index, odd_slot), value)?;
            }
            Vote::Ambiguous => {
                log_warn!("store: byte {} has three different copies, reset to 0", index);
                self.store_copies(index, 0)?;
            }
        }
        Ok(vote)
    }

    /// Scan every logical byte and repair its copies:
    ///
    /// 1. all three equal: left alone
    /// 2. two equal: the odd copy is overwritten with the majority value
    /// 3. all different: all three are reset to 0
    ///
    /// A medium failure on one byte is counted and the scan continues.
    pub fn fix(&mut self) -> RepairReport {
        let mut report = RepairReport::default();
        for index in 0..self.size {
            report.scanned += 1;
            match self.fix_byte(index) {
                Ok(Vote::Unanimous(_)) => {}
                Ok(Vote::Majority { .. }) => report.repaired += 1,
                Ok(Vote::Ambiguous) => report.reset += 1,
                Err(err) => {
                    log_error!("store: repair of byte {} failed: {}", index, err);
                    report.failed += 1;
                }
            }
        }

        if report.is_clean() {
            log_debug!("store: {} bytes scanned, all copies agree", report.scanned);
        } else {
            log_info!(
                "store: {} bytes scanned, {} repaired, {} reset, {} failed",
                report.scanned,
                report.repaired,
                report.reset,
                report.failed
            );
        }
        report
    }

    /// Write 0 to `count` bytes starting at `start`, clamped to the end of
    /// the store. Returns the number of bytes cleared.
    pub fn try_clear_block(&mut self, start: u16, count: u16) -> Result<u16, StoreError> {
        self.check_index(start)?;
        let end = (start as u32 + count as u32).min(self.size as u32) as u16;
        for index in start..end {
            self.try_write_byte(index, 0)?;
        }
        Ok(end - start)
    }

    /// Write 0 to `count` bytes starting at `start`; `false` if `start` is
    /// out of range or the medium fails
    pub fn clear_block(&mut self, start: u16, count: u16) -> bool {
        self.try_clear_block(start, count).is_ok()
    }
}
