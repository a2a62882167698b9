use crate::foundation::error::ArgumentError;
use crate::foundation::types::Radix;
use crate::tests::INVALID_RADIXES;

#[test]
fn test_try_from_supported() {
    assert_eq!(Radix::try_from(8), Ok(Radix::Octal));
    assert_eq!(Radix::try_from(10), Ok(Radix::Decimal));
    assert_eq!(Radix::try_from(16), Ok(Radix::Hexadecimal));
}

#[test]
fn test_try_from_unsupported() {
    for radix in INVALID_RADIXES {
        assert_eq!(Radix::try_from(radix), Err(ArgumentError::InvalidRadix { radix }));
    }
}

#[test]
fn test_base_round_trips_through_i32() {
    for radix in Radix::ALL {
        let raw: i32 = radix.into();
        assert_eq!(raw as u32, radix.base());
        assert_eq!(Radix::try_from(raw), Ok(radix));
    }
}

#[test]
fn test_all_is_ascending() {
    let bases: Vec<u32> = Radix::ALL.iter().map(|r| r.base()).collect();
    assert_eq!(bases, vec![8, 10, 16]);
}

#[test]
fn test_display_names() {
    assert_eq!(Radix::Octal.to_string(), "octal");
    assert_eq!(Radix::Decimal.to_string(), "decimal");
    assert_eq!(Radix::Hexadecimal.to_string(), "hexadecimal");
}
