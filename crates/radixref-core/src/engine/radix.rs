//! Low-level numeral parsing and formatting.
//!
//! All conversions operate on the 32-bit signed integer range; text that
//! parses outside that range is rejected with the same error as malformed
//! digits. Hexadecimal output is uppercase with no padding and no base
//! prefix.

use crate::error::{Error, Result};

/// Decode text as an integer in the given base.
///
/// Accepts exactly what `i32::from_str_radix` accepts: an optional sign
/// followed by digits of the base, no surrounding whitespace.
pub fn parse_int(text: &str, radix: u32) -> Result<i32> {
    i32::from_str_radix(text, radix).map_err(|e| Error::radix_parse(text, radix, e))
}

/// Render an integer as uppercase hexadecimal digits.
///
/// Negative values format as their two's complement bit pattern.
pub fn format_hex(value: i32) -> String {
    format!("{value:X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse_int("1010", 2).unwrap(), 10);
        assert_eq!(parse_int("0", 2).unwrap(), 0);
        assert_eq!(parse_int("11111111", 2).unwrap(), 255);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_int("1A", 16).unwrap(), 26);
        assert_eq!(parse_int("ff", 16).unwrap(), 255);
        assert_eq!(parse_int("7FFFFFFF", 16).unwrap(), i32::MAX);
    }

    #[test]
    fn test_parse_rejects_malformed_digits() {
        assert!(parse_int("102", 2).is_err());
        assert!(parse_int("xyz", 16).is_err());
        assert!(parse_int("", 16).is_err());
        assert!(parse_int(" 1A", 16).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // One past i32::MAX
        assert!(parse_int("80000000", 16).is_err());
        assert!(parse_int("2147483648", 10).is_err());
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(10), "A");
        assert_eq!(format_hex(26), "1A");
        assert_eq!(format_hex(0), "0");
        assert_eq!(format_hex(255), "FF");
        // No leading zero padding
        assert_eq!(format_hex(1), "1");
    }

    #[test]
    fn test_format_hex_negative_is_twos_complement() {
        assert_eq!(format_hex(-1), "FFFFFFFF");
    }
}
