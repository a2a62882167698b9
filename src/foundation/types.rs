//! Core types for the numeral system converter.

use core::fmt;

use crate::foundation::config::*;
use crate::foundation::error::ArgumentError;

/// A validated radix. Only the three supported numeral systems exist, so
/// holding a `Radix` means the radix check has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// All supported radixes, ascending by base.
    pub const ALL: [Radix; 3] = [Radix::Octal, Radix::Decimal, Radix::Hexadecimal];

    /// Numeric base as used by the digit-extraction loop.
    pub const fn base(self) -> u32 {
        match self {
            Radix::Octal => RADIX_OCTAL as u32,
            Radix::Decimal => RADIX_DECIMAL as u32,
            Radix::Hexadecimal => RADIX_HEXADECIMAL as u32,
        }
    }
}

impl TryFrom<i32> for Radix {
    type Error = ArgumentError;

    fn try_from(radix: i32) -> Result<Self, Self::Error> {
        match radix {
            RADIX_OCTAL => Ok(Radix::Octal),
            RADIX_DECIMAL => Ok(Radix::Decimal),
            RADIX_HEXADECIMAL => Ok(Radix::Hexadecimal),
            _ => Err(ArgumentError::InvalidRadix { radix }),
        }
    }
}

impl From<Radix> for i32 {
    fn from(radix: Radix) -> Self {
        radix.base() as i32
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}
