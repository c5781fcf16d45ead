//! # radixref-core
//!
//! A library for reinterpreting attribute values between hexadecimal,
//! decimal, and binary numeral encodings.
//!
//! This crate provides the core functionality for:
//! - Parsing semicolon-delimited configuration directives
//! - Dispatching conversion-type selectors onto base conversions
//! - Producing timestamped, quality-flagged evaluation results
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`directive`]: Configuration-directive parsing
//! - [`engine`]: Conversion-mode dispatch and numeral primitives
//! - [`host`]: Host-boundary traits and the data reference
//! - [`value`]: Evaluation result types
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use radixref_core::{DataReference, RadixConverter};
//!
//! let mut converter = RadixConverter::new();
//! converter.set_config_string("Meter1.Raw;2", None);
//!
//! // The host resolves "Meter1.Raw" and supplies its current value.
//! let result = converter.evaluate(None, Some("1A"));
//! assert!(result.is_good());
//! assert_eq!(result.value, "1A");
//! ```
//!
//! ## Extensibility
//!
//! The library provides several traits for host integration:
//!
//! - [`DataReference`]: The capability interface a host drives
//! - [`AttributeResolver`]: Reference resolution against the host data model
//! - [`HostAttribute`]: Change notification and type coercion
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod directive;
pub mod engine;
pub mod error;
pub mod host;
pub mod value;

// Re-export primary types for convenience
pub use directive::Directive;
pub use engine::ConversionMode;
pub use error::{Error, Result};
pub use host::{
    AttributeResolver, DataReference, HostAttribute, HostCapabilities, PluginDescriptor,
    RadixConverter, ResolvedAttribute, SupportedContexts, TimeAnchor, ValueType,
};
pub use value::{Evaluation, Timestamp, ValueStatus, NO_DATA};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delimiter separating fields of the configuration string
pub const CONFIG_DELIMITER: char = ';';

/// Maximum number of fields a configuration string may carry
pub const MAX_CONFIG_FIELDS: usize = 2;
