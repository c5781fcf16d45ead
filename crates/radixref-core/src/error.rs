//! Error types for the radixref-core library.
//!
//! This module provides error handling using the `thiserror` crate. Errors
//! fall into two tiers: a single fatal variant raised while gathering inputs
//! ([`Error::UnknownAttribute`]), and recoverable variants that the evaluator
//! converts into Bad-status results instead of propagating.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for radixref operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all radixref operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reference could not be resolved to a live attribute while gathering inputs
    #[error("unknown attribute '{reference}'")]
    UnknownAttribute {
        /// The reference token that failed to resolve
        reference: String,
    },

    /// Configuration string contains more than two semicolon-delimited fields
    #[error("Too many arguments in the config string")]
    TooManyArguments,

    /// First configuration field is a quoted literal instead of a reference
    #[error("First argument must be a valid attribute reference")]
    QuotedReference,

    /// No resolved input value was supplied to the evaluator
    #[error("Invalid data supplied to evaluate")]
    NoInputValue,

    /// Conversion-type selector is absent, non-numeric, or outside 1..=6
    #[error("Missing or invalid conversion type argument (expected an integer from 1 to 6)")]
    InvalidConversionType,

    /// Input text could not be parsed as digits of the stated base
    #[error("invalid base-{radix} digits in '{text}': {source}")]
    RadixParse {
        /// The text that failed to parse
        text: String,
        /// The numeric base the text was parsed against
        radix: u32,
        /// Underlying integer parse error
        #[source]
        source: ParseIntError,
    },

    /// Raw text was handed to the hexadecimal formatter without numeric parsing
    #[error("cannot format non-numeric text '{text}' as hexadecimal")]
    TextualHexFormat {
        /// The text that was rejected
        text: String,
    },
}

impl Error {
    /// Creates a new unknown attribute error
    pub fn unknown_attribute(reference: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            reference: reference.into(),
        }
    }

    /// Creates a new radix parse error
    pub fn radix_parse(text: impl Into<String>, radix: u32, source: ParseIntError) -> Self {
        Self::RadixParse {
            text: text.into(),
            radix,
            source,
        }
    }

    /// Creates a new textual hex format error
    pub fn textual_hex_format(text: impl Into<String>) -> Self {
        Self::TextualHexFormat { text: text.into() }
    }

    /// Returns true if this error must propagate to the caller instead of
    /// being folded into a Bad-status result.
    ///
    /// Only resolution failures during input gathering are fatal; every
    /// error raised during evaluation itself is reported through the
    /// result's status.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnknownAttribute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_attribute("Meter1.Raw");
        assert!(err.to_string().contains("unknown attribute"));
        assert!(err.to_string().contains("Meter1.Raw"));
    }

    #[test]
    fn test_is_fatal() {
        assert!(Error::unknown_attribute("x").is_fatal());
        assert!(!Error::TooManyArguments.is_fatal());
        assert!(!Error::InvalidConversionType.is_fatal());
        assert!(!Error::textual_hex_format("abc").is_fatal());
    }

    #[test]
    fn test_radix_parse_display() {
        let source = "zz".parse::<i32>().unwrap_err();
        let err = Error::radix_parse("zz", 2, source);
        assert!(err.to_string().contains("base-2"));
        assert!(err.to_string().contains("'zz'"));
    }
}
