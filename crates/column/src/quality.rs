//! Per-spectrum quality bitmask.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Quality flags of one processed spectrum.
///
/// Bit numbering follows the radar processing convention of counting from
/// one at the least significant bit. Bits 3 to 6 are reserved.
///
/// | Bit | Value | Meaning |
/// |-----|-------|---------|
/// | 1 | `0x01` | a reported peak is folded across the Nyquist velocity |
/// | 2 | `0x02` | more peaks were found than could be reported |
/// | 7 | `0x40` | no peak found |
/// | 8 | `0x80` | principal peak isolated from all other peaks |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct QualityFlags(u8);

impl QualityFlags {
    /// A reported peak wraps the Nyquist boundary.
    pub const ALIASED: Self = Self(1 << 0);
    /// More candidate peaks existed than `max_peaks`.
    pub const MORE_PEAKS: Self = Self(1 << 1);
    /// No peak found.
    pub const NO_PEAK: Self = Self(1 << 6);
    /// The strongest peak does not share its hump with another peak.
    pub const PRINCIPAL_ISOLATED: Self = Self(1 << 7);

    const DEFINED: u8 = 0b1100_0011;

    /// Returns a value with no flag set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the raw bits.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Builds flags from raw bits, dropping reserved bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::DEFINED)
    }

    /// Returns `true` if no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is set.
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Sets or clears the flags in `other`.
    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl BitOr for QualityFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for QualityFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for QualityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}
