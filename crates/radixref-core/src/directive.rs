//! Configuration-directive parsing.
//!
//! A directive is derived from the configuration string on every evaluation:
//! a reference token naming the input attribute, optionally followed by a
//! conversion-type selector, delimited by `;`.
//!
//! ```text
//! <referenceToken>[;<modeSelector>]
//! ```
//!
//! Only the first field is trimmed. The first field must not be a quoted
//! string literal; an empty first field is accepted and drives the
//! no-input placeholder path rather than an error.

use crate::error::{Error, Result};
use crate::{CONFIG_DELIMITER, MAX_CONFIG_FIELDS};

/// The parsed (reference, mode) pair derived from the configuration string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Trimmed first field; resolves externally to a readable data source
    reference: String,
    /// Second field, verbatim; parsed as the conversion-type selector
    mode_field: Option<String>,
}

impl Directive {
    /// Parses a configuration string into a directive.
    ///
    /// # Errors
    ///
    /// - [`Error::TooManyArguments`] if a third field is present
    /// - [`Error::QuotedReference`] if the first field starts with `"`
    pub fn parse(config: &str) -> Result<Self> {
        let fields: Vec<&str> = config.split(CONFIG_DELIMITER).collect();

        if fields.len() > MAX_CONFIG_FIELDS {
            return Err(Error::TooManyArguments);
        }

        let reference = fields[0].trim();
        if reference.starts_with('"') {
            return Err(Error::QuotedReference);
        }

        Ok(Self {
            reference: reference.to_string(),
            mode_field: fields.get(1).map(|s| (*s).to_string()),
        })
    }

    /// Returns the reference token (trimmed first field)
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the raw conversion-type field, if present
    pub fn mode_field(&self) -> Option<&str> {
        self.mode_field.as_deref()
    }

    /// Returns true if a reference token is present
    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }

    /// Serializes the directive back into configuration-string form.
    ///
    /// Re-parsing the returned string reconstructs an identical directive.
    pub fn to_config_string(&self) -> String {
        match &self.mode_field {
            Some(mode) => format!("{}{}{}", self.reference, CONFIG_DELIMITER, mode),
            None => self.reference.clone(),
        }
    }
}
