//! Method-call syntax for the converter: `255_i32.to_positive_hex()`.

use crate::converter;
use crate::foundation::error::ArgumentError;

pub trait NumeralSystems {
    fn to_radix(self, radix: i32) -> Result<String, ArgumentError>;
    fn to_positive_radix(self, radix: i32) -> Result<String, ArgumentError>;
    fn to_positive_octal(self) -> Result<String, ArgumentError>;
    fn to_positive_decimal(self) -> Result<String, ArgumentError>;
    fn to_positive_hex(self) -> Result<String, ArgumentError>;
}

impl NumeralSystems for i32 {
    fn to_radix(self, radix: i32) -> Result<String, ArgumentError> {
        converter::get_radix(self, radix)
    }

    fn to_positive_radix(self, radix: i32) -> Result<String, ArgumentError> {
        converter::get_positive_radix(self, radix)
    }

    fn to_positive_octal(self) -> Result<String, ArgumentError> {
        converter::get_positive_octal(self)
    }

    fn to_positive_decimal(self) -> Result<String, ArgumentError> {
        converter::get_positive_decimal(self)
    }

    fn to_positive_hex(self) -> Result<String, ArgumentError> {
        converter::get_positive_hex(self)
    }
}
