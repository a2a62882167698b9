//! Digit extraction for the supported radixes.
//!
//! Operates on caller-provided byte buffers without heap allocation.

use crate::foundation::config::*;
use crate::foundation::types::Radix;

/// Two's-complement reinterpretation: non-negative values keep their value,
/// negative values become `number + 2^32`.
#[inline]
pub const fn magnitude(number: i32) -> u32 {
    number as u32
}

/// Map a digit value (0-15) to its ASCII byte.
/// 0-9 become `b'0'`-`b'9'`, 10-15 become `b'A'`-`b'F'`.
#[inline]
pub const fn digit_to_ascii(digit: u8) -> u8 {
    if digit <= MAX_NUMERAL_DIGIT {
        NUMERAL_OFFSET + digit
    } else {
        LETTER_OFFSET + digit
    }
}

#[inline]
pub fn digit_to_char(digit: u8) -> char {
    digit_to_ascii(digit) as char
}

/// Number of digits `value` takes in `radix`. Zero takes none.
pub fn digit_count(mut value: u32, radix: Radix) -> usize {
    let base = radix.base();
    let mut count = 0;
    while value != 0 {
        value /= base;
        count += 1;
    }
    count
}

/// Fill `out` with the last `out.len()` digits of `value`, most significant first.
pub(crate) fn write_digits(mut value: u32, radix: Radix, out: &mut [u8]) {
    let base = radix.base();
    for slot in out.iter_mut().rev() {
        *slot = digit_to_ascii((value % base) as u8);
        value /= base;
    }
}

/// Format `value` in `radix` into `out`, most significant digit first.
/// Returns the number of bytes written.
///
/// Zero writes nothing and returns `Some(0)`. Returns None if `out` is too
/// small to hold every digit; `out` is left untouched in that case.
/// A buffer of `MAX_DIGITS` bytes fits every `u32`.
pub fn format_magnitude(value: u32, radix: Radix, out: &mut [u8]) -> Option<usize> {
    let len = digit_count(value, radix);
    let dest = out.get_mut(..len)?;
    write_digits(value, radix, dest);
    Some(len)
}
