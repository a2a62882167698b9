//! Constants and error codes for the numeral system converter.
//!
//! ## Radix Mapping
//!
//! | Numeral system | Radix | Digits       |
//! |----------------|-------|--------------|
//! | Octal          | 8     | `0-7`        |
//! | Decimal        | 10    | `0-9`        |
//! | Hexadecimal    | 16    | `0-9`, `A-F` |

// ═══════════════════════════════════════════════════════════════════════
// SUPPORTED RADIXES
// ═══════════════════════════════════════════════════════════════════════

/// Base of the octal numeral system
pub const RADIX_OCTAL: i32 = 8;

/// Base of the decimal numeral system
pub const RADIX_DECIMAL: i32 = 10;

/// Base of the hexadecimal numeral system
pub const RADIX_HEXADECIMAL: i32 = 16;

// ═══════════════════════════════════════════════════════════════════════
// DIGIT ALPHABET
// ═══════════════════════════════════════════════════════════════════════

/// Largest digit value rendered as an ASCII numeral.
pub const MAX_NUMERAL_DIGIT: u8 = 9;

/// Added to digits 0-9 to reach `'0'`-`'9'`.
pub const NUMERAL_OFFSET: u8 = b'0';

/// Added to digits 10-15 to reach `'A'`-`'F'` (55, i.e. `'A' - 10`).
pub const LETTER_OFFSET: u8 = b'A' - 10;

/// Longest possible output: `u32::MAX` in octal is `37777777777`.
pub const MAX_DIGITS: usize = 11;

// ═══════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════

pub const ERR_INVALID_RADIX: i32 = -1;
pub const ERR_NEGATIVE_NUMBER: i32 = -2;
