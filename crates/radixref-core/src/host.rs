//! Host-boundary seams and the radix data reference.
//!
//! The core logic is exposed to a host process through the [`DataReference`]
//! capability trait; everything the host must provide is abstracted behind
//! two small traits:
//!
//! - [`AttributeResolver`]: turns a reference token into a live attribute
//!   handle (and performs any host placeholder substitution first)
//! - [`HostAttribute`]: the attribute this reference is attached to —
//!   receives change notifications and the type-coercion check
//!
//! [`RadixConverter`] owns the configuration string and implements the
//! capability trait. It holds no other state; every evaluation derives a
//! fresh [`Directive`](crate::Directive) from the configuration string.

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::directive::Directive;
use crate::engine::{self, ConversionMode};
use crate::error::{Error, Result};
use crate::value::{Evaluation, Timestamp};
use crate::CONFIG_DELIMITER;

bitflags! {
    /// Host contexts in which a data reference can be evaluated
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SupportedContexts: u8 {
        /// Table-driven lookups
        const TABLE = 0b01;
        /// Time-series retrieval
        const TIME_SERIES = 0b10;
        /// Every context the host offers
        const ALL = Self::TABLE.bits() | Self::TIME_SERIES.bits();
    }
}

/// Stable identifier under which the converter registers with a host
pub const PLUGIN_ID: &str = "7c2f9b1e-4d3a-4b8e-9f61-2a0c5d8e7f43";

/// Registration metadata a host uses to list and load the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Stable registration identifier
    pub id: &'static str,
    /// Short display name
    pub name: &'static str,
    /// Human-readable description shown in configuration tooling
    pub description: &'static str,
    /// Contexts the converter supports
    pub supported_contexts: SupportedContexts,
}

/// Value types an attribute can carry in the host data model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Free-form text
    Text,
    /// Whole numbers
    Integer,
    /// Floating-point numbers
    Float,
    /// True/false
    Boolean,
}

/// Host features resolved once when the reference is constructed.
///
/// Older hosts do not expose an initializing flag on their attributes; the
/// capability is recorded here instead of being probed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether [`HostAttribute::is_initializing`] is meaningful on this host
    pub reports_initializing: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            reports_initializing: true,
        }
    }
}

/// Time source attached to the entity that owns this reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAnchor {
    /// The owning entity is versioned; results carry its effective time
    Versioned {
        /// Effective time of the current version
        effective: Timestamp,
    },
    /// The owning entity is event-scoped; results carry its start time
    EventFrame {
        /// Start time of the event frame
        start: Timestamp,
    },
}

impl TimeAnchor {
    /// Returns the instant this anchor contributes to results
    pub fn time(&self) -> Timestamp {
        match self {
            TimeAnchor::Versioned { effective } => *effective,
            TimeAnchor::EventFrame { start } => *start,
        }
    }
}

/// Handle to an attribute resolved in the host data model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    /// Fully resolved attribute name
    pub name: String,
    /// True if the attribute has been deleted from the model
    pub deleted: bool,
}

/// Resolves reference tokens against the host data model.
///
/// Substitution of host-recognized placeholder tokens happens here, before
/// resolution; the default implementation substitutes nothing.
pub trait AttributeResolver {
    /// Expand host placeholder tokens in a raw reference
    fn substitute(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Resolve a (substituted) reference to an attribute handle
    fn resolve(&self, reference: &str) -> Option<ResolvedAttribute>;
}

/// Host-side view of the attribute a data reference is attached to
pub trait HostAttribute {
    /// Called after the configuration string changes so the host persists it
    fn notify_config_changed(&mut self);

    /// True while the attribute is still being constructed by the host
    fn is_initializing(&self) -> bool {
        false
    }

    /// True when the owning element has uncommitted changes
    fn is_dirty(&self) -> bool;

    /// True when the attribute's type is managed by a template
    fn has_template(&self) -> bool {
        false
    }

    /// Current value type of the attribute
    fn value_type(&self) -> ValueType;

    /// Change the attribute's value type
    fn set_value_type(&mut self, value_type: ValueType);
}

/// Capability interface a host uses to drive a data reference
pub trait DataReference {
    /// Contexts this reference can be evaluated in
    fn supported_contexts(&self) -> SupportedContexts;

    /// Gather the input attributes named by the configuration string.
    ///
    /// Returns `Ok(None)` when the configuration names no reference.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAttribute`] when the reference does not resolve or
    /// resolves to a deleted attribute. This is the one fatal error in the
    /// engine; it is never folded into a Bad-status result.
    fn get_inputs(&self, resolver: &dyn AttributeResolver)
        -> Result<Option<Vec<ResolvedAttribute>>>;

    /// Evaluate the reference against a resolved input value.
    ///
    /// Never fails: every error condition is reported as a Bad-status
    /// [`Evaluation`] with a descriptive message.
    fn evaluate(&self, time_context: Option<Timestamp>, input: Option<&str>) -> Evaluation;
}

/// Data reference that reinterprets its input's numeral representation
#[derive(Debug, Clone, Default)]
pub struct RadixConverter {
    /// Immutable between reconfigurations; never cached in parsed form
    config_string: String,
    capabilities: HostCapabilities,
    anchor: Option<TimeAnchor>,
}

impl RadixConverter {
    /// Creates a converter with default host capabilities and no anchor
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter for a host with the given capabilities
    pub fn with_capabilities(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            ..Self::default()
        }
    }

    /// Registration metadata for this converter
    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PLUGIN_ID,
            name: "Radix Convertor",
            description: "Can convert attribute from Hex, Dec or Bin to Hex, Dec or Bin",
            supported_contexts: SupportedContexts::ALL,
        }
    }

    /// Returns the current configuration string
    pub fn config_string(&self) -> &str {
        &self.config_string
    }

    /// Sets the configuration string.
    ///
    /// No-op when the trimmed value matches the current configuration.
    /// Otherwise the new value is stored, the host is notified so the change
    /// is persisted, and the type-coercion check runs against the attached
    /// attribute. Shape problems in the new value are logged here but only
    /// surface as Bad results at evaluation time.
    pub fn set_config_string(&mut self, value: &str, attribute: Option<&mut dyn HostAttribute>) {
        let trimmed = value.trim();
        if trimmed == self.config_string {
            return;
        }

        if let Err(e) = Directive::parse(trimmed) {
            debug!("stored config string does not validate: {e}");
        }

        trace!("config string set to '{trimmed}'");
        self.config_string = trimmed.to_string();

        if let Some(attribute) = attribute {
            attribute.notify_config_changed();
            self.check_data_type(attribute);
        }
    }

    /// Attaches the time source of the owning entity
    pub fn set_anchor(&mut self, anchor: Option<TimeAnchor>) {
        self.anchor = anchor;
    }

    /// Returns the attached time source, if any
    pub fn anchor(&self) -> Option<TimeAnchor> {
        self.anchor
    }

    /// Widen the attached attribute to a textual type.
    ///
    /// Conversion results are text, so an attribute still typed numeric
    /// would reject them. The check is skipped while the host is still
    /// constructing the attribute, when a template manages the type, and
    /// unless the owning element already has uncommitted changes.
    fn check_data_type(&self, attribute: &mut dyn HostAttribute) {
        if self.capabilities.reports_initializing && attribute.is_initializing() {
            return;
        }
        if attribute.has_template() {
            return;
        }
        if !attribute.is_dirty() {
            return;
        }

        if attribute.value_type() != ValueType::Text {
            trace!("widening attribute value type to text");
            attribute.set_value_type(ValueType::Text);
        }
    }

    /// Timestamp preference order: anchor, then caller context, then sentinel
    fn resolve_timestamp(&self, time_context: Option<Timestamp>) -> Timestamp {
        if let Some(anchor) = &self.anchor {
            return anchor.time();
        }
        time_context.unwrap_or(Timestamp::EMPTY)
    }
}

impl DataReference for RadixConverter {
    fn supported_contexts(&self) -> SupportedContexts {
        SupportedContexts::ALL
    }

    fn get_inputs(
        &self,
        resolver: &dyn AttributeResolver,
    ) -> Result<Option<Vec<ResolvedAttribute>>> {
        let first = self
            .config_string
            .split(CONFIG_DELIMITER)
            .next()
            .unwrap_or("")
            .trim();

        let substituted = resolver.substitute(first);
        if substituted.is_empty() {
            return Ok(None);
        }

        match resolver.resolve(&substituted) {
            Some(attribute) if !attribute.deleted => {
                trace!("resolved input attribute '{}'", attribute.name);
                Ok(Some(vec![attribute]))
            }
            // The error names the raw field, not the substituted form.
            _ => Err(Error::unknown_attribute(first)),
        }
    }

    fn evaluate(&self, time_context: Option<Timestamp>, input: Option<&str>) -> Evaluation {
        let directive = match Directive::parse(&self.config_string) {
            Ok(directive) => directive,
            Err(e) => return Evaluation::bad(e.to_string(), Timestamp::EMPTY),
        };

        let mut value = None;

        if directive.has_reference() {
            let Some(raw) = input else {
                return Evaluation::bad(Error::NoInputValue.to_string(), Timestamp::EMPTY);
            };

            let mode = match ConversionMode::parse(directive.mode_field().unwrap_or("")) {
                Ok(mode) => mode,
                Err(e) => return Evaluation::bad(e.to_string(), Timestamp::EMPTY),
            };

            match engine::convert(mode, raw) {
                Ok(converted) => value = converted,
                // Conversion failures never propagate; they surface as a
                // caught generic error on the result.
                Err(e) => {
                    return Evaluation::bad(format!("An error occurred: {e}"), Timestamp::EMPTY)
                }
            }
        }

        let timestamp = self.resolve_timestamp(time_context);
        match value {
            Some(text) => Evaluation::good(text, timestamp),
            None => Evaluation::no_data(timestamp),
        }
    }
}
