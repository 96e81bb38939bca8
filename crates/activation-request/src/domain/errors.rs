//! # Domain Errors
//!
//! Error types for activation request construction and sealing.
//!
//! Validation errors come from the variant constructors and always name the
//! offending field. State errors come from the seal transition.

use thiserror::Error;

/// Input rejected by the identity attribute validator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace only.
    #[error("Field `{field}` must not be empty")]
    Empty {
        /// Offending field
        field: String,
    },

    /// Field contains a control character.
    #[error("Field `{field}` contains control characters")]
    ControlCharacter {
        /// Offending field
        field: String,
    },

    /// Field value is longer than the configured limit.
    #[error("Field `{field}` is too long: {len} bytes, max {max}")]
    TooLong {
        /// Offending field
        field: String,
        /// Actual length in bytes
        len: usize,
        /// Configured limit
        max: usize,
    },

    /// Custom attributes repeat a key.
    #[error("Duplicate identity attribute `{key}`")]
    DuplicateKey {
        /// Repeated key
        key: String,
    },

    /// Custom activation without any attribute.
    #[error("Custom activation requires at least one identity attribute")]
    NoAttributes,

    /// Custom activation with more attributes than allowed.
    #[error("Too many identity attributes: {count}, max {max}")]
    TooManyAttributes {
        /// Number of attributes supplied
        count: usize,
        /// Configured limit
        max: usize,
    },
}

impl ValidationError {
    /// Attribute map field name used when the map as a whole is rejected.
    pub const ATTRIBUTES_FIELD: &'static str = "attributes";

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::Empty { field } | Self::ControlCharacter { field } | Self::TooLong { field, .. } => {
                field
            }
            Self::DuplicateKey { key } => key,
            Self::NoAttributes | Self::TooManyAttributes { .. } => Self::ATTRIBUTES_FIELD,
        }
    }
}

/// Operation not allowed in the request's current lifecycle state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StateError {
    /// `attach_payload` on a request that already carries activation data.
    #[error("Request is already sealed")]
    AlreadySealed,

    /// `serialize` on a request without activation data.
    #[error("Request is not sealed: activation data is missing")]
    PayloadMissing,
}

/// Errors surfaced by the activation request API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivationError {
    /// Constructor input rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid lifecycle transition.
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// The encryption engine failed to produce an envelope.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Plaintext or wire encoding failed.
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// Configuration rejected by `ActivationConfig::validate`.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ActivationError {
    /// Returns true for constructor validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for lifecycle state failures.
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => Some(err.field()),
            _ => None,
        }
    }
}
