//! Numeral Systems — signed 32-bit integers as octal, decimal and hex text
//!
//! # Architecture
//!
//! | Concern                    | Module                  |
//! |----------------------------|-------------------------|
//! | Radix constants, codes     | foundation::config      |
//! | Argument errors            | foundation::error       |
//! | Validated radix            | foundation::types       |
//! | Digit extraction           | foundation::digits      |
//! | Public entry points        | converter               |
//! | Method-call syntax on i32  | ext                     |
//!
//! # Entry Points
//!
//! - `get_positive_octal`   — non-negative number in base 8
//! - `get_positive_decimal` — non-negative number in base 10
//! - `get_positive_hex`     — non-negative number in base 16
//! - `get_positive_radix`   — non-negative number in base 8, 10 or 16
//! - `get_radix`            — any number in base 8, 10 or 16, negatives
//!   through their two's-complement bit pattern
//!
//! # Example
//!
//! ```
//! use numeral_systems::{get_positive_hex, get_radix};
//!
//! assert_eq!(get_positive_hex(255).unwrap(), "FF");
//! assert_eq!(get_radix(-1, 16).unwrap(), "FFFFFFFF");
//! assert_eq!(get_radix(0, 10).unwrap(), "");
//! ```

pub mod converter;
pub mod ext;
pub mod foundation;


pub use converter::{
    format_radix, get_positive_decimal, get_positive_hex, get_positive_octal, get_positive_radix,
    get_radix, to_positive_radix, to_radix,
};
pub use ext::NumeralSystems;
pub use foundation::error::ArgumentError;
pub use foundation::types::Radix;
