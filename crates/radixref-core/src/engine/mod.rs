//! Conversion-mode dispatch.
//!
//! This module maps a conversion-type selector (an integer from 1 to 6) onto
//! a numeral transformation and applies it to a raw input value. The selector
//! names describe the conversion pairs as they are presented to configuring
//! users; [`convert`] documents the transformation each selector actually
//! performs today.

mod radix;

use crate::error::{Error, Result};
use tracing::{debug, trace};

pub use radix::{format_hex, parse_int};

/// Closed enumeration of conversion-type selectors.
///
/// Selectors 3, 4 and 6 are accepted but currently produce no
/// transformation; evaluation keeps its placeholder value on those paths.
// TODO: confirm the intended transformations for selectors 3, 4 and 6 with
// the product owner before wiring them up; they have always been accepted
// as valid selectors without producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Selector 1: decode the input as base-2 digits, render as uppercase hex
    HexToBin = 1,
    /// Selector 2: decode the input as base-16 digits, render as uppercase hex
    HexToDec = 2,
    /// Selector 3: accepted, no transformation
    BinToHex = 3,
    /// Selector 4: accepted, no transformation
    BinToDec = 4,
    /// Selector 5: rejects its input; raw text cannot be hex-formatted
    /// without numeric parsing
    DecToHex = 5,
    /// Selector 6: accepted, no transformation
    DecToBin = 6,
}

impl TryFrom<i32> for ConversionMode {
    type Error = Error;

    fn try_from(selector: i32) -> Result<Self> {
        match selector {
            1 => Ok(ConversionMode::HexToBin),
            2 => Ok(ConversionMode::HexToDec),
            3 => Ok(ConversionMode::BinToHex),
            4 => Ok(ConversionMode::BinToDec),
            5 => Ok(ConversionMode::DecToHex),
            6 => Ok(ConversionMode::DecToBin),
            _ => Err(Error::InvalidConversionType),
        }
    }
}

impl ConversionMode {
    /// Parses the conversion-type field of a directive.
    ///
    /// Surrounding whitespace is tolerated; an empty field, a non-integer
    /// field, and a selector outside 1..=6 all report the same
    /// [`Error::InvalidConversionType`].
    pub fn parse(field: &str) -> Result<Self> {
        let selector: i32 = field
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConversionType)?;
        Self::try_from(selector)
    }

    /// Returns the numeric selector for this mode
    pub fn selector(self) -> i32 {
        self as i32
    }

    /// Returns true if this selector is accepted without transforming
    pub fn is_pass_through(self) -> bool {
        matches!(
            self,
            ConversionMode::BinToHex | ConversionMode::BinToDec | ConversionMode::DecToBin
        )
    }
}

/// Apply a conversion mode to a raw input value.
///
/// Returns `Ok(Some(text))` with the transformed value, or `Ok(None)` for
/// the pass-through selectors, which leave the evaluation at its placeholder
/// value.
///
/// # Errors
///
/// - [`Error::RadixParse`] when the input is not valid digits of the
///   selector's base, or falls outside the 32-bit signed range
/// - [`Error::TextualHexFormat`] for selector 5, which attempts to
///   hex-format the raw text without parsing it
pub fn convert(mode: ConversionMode, raw: &str) -> Result<Option<String>> {
    trace!("applying selector {} to '{}'", mode.selector(), raw);

    let converted = match mode {
        ConversionMode::HexToBin => Some(format_hex(parse_int(raw, 2)?)),
        ConversionMode::HexToDec => Some(format_hex(parse_int(raw, 16)?)),
        ConversionMode::BinToHex | ConversionMode::BinToDec | ConversionMode::DecToBin => None,
        ConversionMode::DecToHex => return Err(Error::textual_hex_format(raw)),
    };

    if let Some(ref text) = converted {
        debug!("selector {} produced '{}'", mode.selector(), text);
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_selector() {
        assert_eq!(ConversionMode::try_from(1).unwrap(), ConversionMode::HexToBin);
        assert_eq!(ConversionMode::try_from(6).unwrap(), ConversionMode::DecToBin);
        assert!(ConversionMode::try_from(0).is_err());
        assert!(ConversionMode::try_from(7).is_err());
        assert!(ConversionMode::try_from(-1).is_err());
    }

    #[test]
    fn test_mode_parse_tolerates_whitespace() {
        assert_eq!(ConversionMode::parse(" 2 ").unwrap(), ConversionMode::HexToDec);
    }

    #[test]
    fn test_mode_parse_rejects_empty_and_garbage() {
        assert!(matches!(
            ConversionMode::parse(""),
            Err(Error::InvalidConversionType)
        ));
        assert!(matches!(
            ConversionMode::parse("two"),
            Err(Error::InvalidConversionType)
        ));
        assert!(matches!(
            ConversionMode::parse("9"),
            Err(Error::InvalidConversionType)
        ));
    }

    #[test]
    fn test_selector_round_trip() {
        for selector in 1..=6 {
            let mode = ConversionMode::try_from(selector).unwrap();
            assert_eq!(mode.selector(), selector);
        }
    }

    #[test]
    fn test_convert_selector_one_renders_uppercase_hex() {
        let result = convert(ConversionMode::HexToBin, "1010").unwrap();
        assert_eq!(result.as_deref(), Some("A"));
    }

    #[test]
    fn test_convert_selector_two_renders_uppercase_hex() {
        let result = convert(ConversionMode::HexToDec, "1A").unwrap();
        assert_eq!(result.as_deref(), Some("1A"));
    }

    #[test]
    fn test_convert_pass_through_selectors() {
        for mode in [
            ConversionMode::BinToHex,
            ConversionMode::BinToDec,
            ConversionMode::DecToBin,
        ] {
            assert!(mode.is_pass_through());
            assert_eq!(convert(mode, "1010").unwrap(), None);
        }
    }

    #[test]
    fn test_convert_selector_five_rejects_input() {
        assert!(matches!(
            convert(ConversionMode::DecToHex, "42"),
            Err(Error::TextualHexFormat { .. })
        ));
    }

    #[test]
    fn test_convert_malformed_digits() {
        assert!(matches!(
            convert(ConversionMode::HexToBin, "1021"),
            Err(Error::RadixParse { .. })
        ));
        assert!(matches!(
            convert(ConversionMode::HexToDec, "GG"),
            Err(Error::RadixParse { .. })
        ));
    }
}
