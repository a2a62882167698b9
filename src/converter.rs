//! Signed integer to radix string conversion.
//!
//! `get_radix` converts any `i32`, reading negative values through their
//! two's-complement bit pattern. The `get_positive_*` entry points reject
//! negative input instead.
//!
//! A zero input converts to the empty string in every radix. Callers that
//! need `"0"` must special-case it themselves.

use tracing::{debug, trace};

use crate::foundation::config::*;
use crate::foundation::digits::{digit_count, magnitude, write_digits};
use crate::foundation::error::ArgumentError;
use crate::foundation::types::Radix;

/// Convert `number` into `radix` once the radix is known to be valid.
pub fn format_radix(number: i32, radix: Radix) -> String {
    let value = magnitude(number);
    let len = digit_count(value, radix);
    // A u32 never needs more than MAX_DIGITS digits.
    let mut buf = [0u8; MAX_DIGITS];
    let digits = &mut buf[..len];
    write_digits(value, radix, digits);
    trace!(number, %radix, digits = len, "converted number");
    String::from_utf8_lossy(digits).into_owned()
}

/// Core conversion of a signed integer.
///
/// Negative numbers are converted as `number + 2^32`, so `-1` in radix 16 is
/// `"FFFFFFFF"`. Zero yields `""`.
///
/// Fails with [`ArgumentError::InvalidRadix`] unless `radix` is 8, 10 or 16.
pub fn to_radix(number: i32, radix: i32) -> Result<String, ArgumentError> {
    let radix = Radix::try_from(radix).inspect_err(|_| debug!(radix, "rejected radix"))?;
    Ok(format_radix(number, radix))
}

/// Conversion restricted to non-negative numbers.
///
/// The sign is checked first, so a negative number with an unsupported
/// radix reports [`ArgumentError::NegativeNumber`].
pub fn to_positive_radix(number: i32, radix: i32) -> Result<String, ArgumentError> {
    if number < 0 {
        debug!(number, "rejected negative number");
        return Err(ArgumentError::NegativeNumber { number });
    }
    to_radix(number, radix)
}

// ═══════════════════════════════════════════════════════════════════════
// Public Entry Points
// ═══════════════════════════════════════════════════════════════════════

/// Octal representation of a non-negative integer.
pub fn get_positive_octal(number: i32) -> Result<String, ArgumentError> {
    to_positive_radix(number, RADIX_OCTAL)
}

/// Decimal representation of a non-negative integer.
pub fn get_positive_decimal(number: i32) -> Result<String, ArgumentError> {
    to_positive_radix(number, RADIX_DECIMAL)
}

/// Hexadecimal representation of a non-negative integer, uppercase digits.
pub fn get_positive_hex(number: i32) -> Result<String, ArgumentError> {
    to_positive_radix(number, RADIX_HEXADECIMAL)
}

/// Representation of a non-negative integer in `radix` (8, 10 or 16).
pub fn get_positive_radix(number: i32, radix: i32) -> Result<String, ArgumentError> {
    to_positive_radix(number, radix)
}

/// Representation of any integer in `radix` (8, 10 or 16). See [`to_radix`].
pub fn get_radix(number: i32, radix: i32) -> Result<String, ArgumentError> {
    to_radix(number, radix)
}
