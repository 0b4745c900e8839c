//! Zero-terminated strings of up to 32 bytes

use core::ops::Range;

use heapless::{String, Vec};

use crate::ports::storage::ByteMedium;
use crate::store::{RedundantStore, StoreError};

/// Longest string, in bytes, read or written in one call
pub const STR_WINDOW: usize = 32;

pub type StoredBytes = Vec<u8, STR_WINDOW>;
pub type StoredStr = String<STR_WINDOW>;

/// Longest prefix of `text` that fits in `room` bytes without splitting a
/// character
fn fitting_prefix(text: &str, room: usize) -> &str {
    let mut end = text.len().min(room);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl<M: ByteMedium> RedundantStore<M> {
    /// Logical indices a string starting at `start` may occupy
    fn window(&self, start: u16) -> Range<u16> {
        let end = (start as u32 + STR_WINDOW as u32).min(self.size as u32) as u16;
        start..end
    }

    /// Read bytes from `start` up to the first zero, the end of the store,
    /// or 32 bytes, whichever comes first. The terminator is not included.
    pub fn try_read_bytes32(&mut self, start: u16) -> Result<StoredBytes, StoreError> {
        self.check_index(start)?;
        let mut bytes = StoredBytes::new();
        for index in self.window(start) {
            let byte = self.try_read_byte(index)?;
            if byte == 0 {
                break;
            }
            // The window is never longer than the buffer
            let _ = bytes.push(byte);
        }
        Ok(bytes)
    }

    /// Read a zero-terminated UTF-8 string starting at `start`
    pub fn try_read_str32(&mut self, start: u16) -> Result<StoredStr, StoreError> {
        let bytes = self.try_read_bytes32(start)?;
        let text = core::str::from_utf8(&bytes).map_err(|_| StoreError::InvalidUtf8)?;
        StoredStr::try_from(text).map_err(|_| StoreError::InvalidUtf8)
    }

    /// Read a string starting at `start`; empty on any failure
    pub fn read_str32(&mut self, start: u16) -> StoredStr {
        self.try_read_str32(start).unwrap_or_default()
    }

    /// Write up to 32 bytes from `start`, followed by a zero terminator when
    /// the bytes run out inside the 32-byte window and the store.
    ///
    /// Bytes that do not fit are dropped silently. Returns how many payload
    /// bytes were stored.
    pub fn try_write_bytes32(&mut self, start: u16, bytes: &[u8]) -> Result<usize, StoreError> {
        self.check_index(start)?;
        let mut stored = 0;
        for (offset, index) in self.window(start).enumerate() {
            match bytes.get(offset) {
                Some(&byte) => {
                    self.try_write_byte(index, byte)?;
                    stored += 1;
                }
                None => {
                    self.try_write_byte(index, 0)?;
                    break;
                }
            }
        }
        Ok(stored)
    }

    /// Write `text` from `start`, cut at the last character that fits in the
    /// window, so the stored text always reads back as valid UTF-8
    pub fn try_write_str32(&mut self, start: u16, text: &str) -> Result<usize, StoreError> {
        self.check_index(start)?;
        let room = self.window(start).len();
        self.try_write_bytes32(start, fitting_prefix(text, room).as_bytes())
    }

    /// Write `text` from `start`; `false` if `start` is out of range or the
    /// medium fails
    pub fn write_str32(&mut self, start: u16, text: &str) -> bool {
        self.try_write_str32(start, text).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryMedium;

    fn store() -> RedundantStore<MemoryMedium<192>> {
        let mut store = RedundantStore::new(MemoryMedium::filled(0));
        store.set_size(64);
        store
    }

    #[test]
    fn hello_round_trip() {
        let mut s = store();
        assert!(s.write_str32(0, "hello"));
        assert_eq!(s.read_str32(0).as_str(), "hello");
    }

    #[test]
    fn empty_string_writes_only_terminator() {
        let mut s = store();
        s.write_str32(0, "abc");
        assert_eq!(s.try_write_str32(0, ""), Ok(0));
        assert_eq!(s.read_str32(0).as_str(), "");
        // Old tail stays behind the terminator
        assert_eq!(s.read_byte(1), b'b');
    }

    #[test]
    fn non_zero_start_reads_its_own_bytes() {
        let mut s = store();
        s.write_str32(0, "first");
        s.write_str32(10, "second");
        assert_eq!(s.read_str32(10).as_str(), "second");
        assert_eq!(s.read_str32(0).as_str(), "first");
    }

    #[test]
    fn long_string_is_cut_at_window() {
        let mut s = store();
        let long = "0123456789abcdefghijklmnopqrstuvwxyz";
        assert_eq!(s.try_write_str32(0, long), Ok(STR_WINDOW));
        assert_eq!(s.read_str32(0).as_str(), &long[..STR_WINDOW]);
        // No terminator is written past the window
        assert_eq!(s.read_byte(32), 0);
    }

    #[test]
    fn full_window_without_terminator() {
        let mut s = store();
        s.write_str32(32, "ZZZZ");
        let exact = "abcdefghijklmnopqrstuvwxyz012345";
        assert_eq!(exact.len(), STR_WINDOW);
        assert_eq!(s.try_write_str32(0, exact), Ok(STR_WINDOW));
        assert_eq!(s.read_byte(32), b'Z');
        assert_eq!(s.read_str32(0).as_str(), exact);
    }

    #[test]
    fn string_is_cut_at_end_of_store() {
        let mut s = store();
        assert_eq!(s.try_write_str32(60, "abcdefgh"), Ok(4));
        assert_eq!(s.read_str32(60).as_str(), "abcd");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundary() {
        let mut s = store();
        // 31 ASCII bytes then a two-byte character that does not fit
        let text = "0123456789012345678901234567890é";
        assert_eq!(s.try_write_str32(0, text), Ok(31));
        assert_eq!(s.read_str32(0).as_str(), &text[..31]);
    }

    #[test]
    fn out_of_range_start() {
        let mut s = store();
        assert!(!s.write_str32(64, "x"));
        assert_eq!(s.read_str32(64).as_str(), "");
        assert_eq!(
            s.try_read_str32(64),
            Err(StoreError::OutOfRange { index: 64, size: 64 })
        );
    }

    #[test]
    fn invalid_utf8_reads_empty() {
        let mut s = store();
        s.try_write_bytes32(0, &[0xC3, 0x28]).unwrap();
        assert_eq!(s.try_read_str32(0), Err(StoreError::InvalidUtf8));
        assert_eq!(s.read_str32(0).as_str(), "");
        assert_eq!(s.try_read_bytes32(0).unwrap().as_slice(), &[0xC3, 0x28]);
    }

    #[test]
    fn ambiguous_byte_fails_the_read() {
        let mut s = store();
        s.write_str32(0, "abc");
        s.medium_mut().corrupt(3, 1);
        s.medium_mut().corrupt(4, 2);
        s.medium_mut().corrupt(5, 3);
        assert_eq!(s.try_read_str32(0), Err(StoreError::Ambiguous { index: 1 }));
    }
}
