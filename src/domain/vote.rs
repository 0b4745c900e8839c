//! Majority vote over three redundant copies of a byte

/// Number of physical copies kept for every logical byte
pub const COPIES: usize = 3;

/// Outcome of comparing the three copies of one byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vote {
    /// All three copies agree
    Unanimous(u8),
    /// Two copies agree; `odd_slot` holds a different value
    Majority { value: u8, odd_slot: usize },
    /// All three copies differ, no value can be trusted
    Ambiguous,
}

impl Vote {
    /// Value agreed by at least two copies
    pub const fn value(self) -> Option<u8> {
        match self {
            Vote::Unanimous(value) | Vote::Majority { value, .. } => Some(value),
            Vote::Ambiguous => None,
        }
    }
}

/// Vote on the three copies of a byte
pub const fn majority(copies: [u8; COPIES]) -> Vote {
    let [a, b, c] = copies;
    if a == b && b == c {
        Vote::Unanimous(a)
    } else if a == b {
        Vote::Majority { value: a, odd_slot: 2 }
    } else if a == c {
        Vote::Majority { value: a, odd_slot: 1 }
    } else if b == c {
        Vote::Majority { value: b, odd_slot: 0 }
    } else {
        Vote::Ambiguous
    }
}
