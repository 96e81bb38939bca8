//! Activation request configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use activation_request::domain::ActivationConfig;
//!
//! let config = ActivationConfig::default()
//!     .with_max_value_len(256)
//!     .with_max_custom_attributes(16);
//! config.validate().expect("Valid config");
//! ```

use super::errors::ActivationError;
use serde::{Deserialize, Serialize};

/// Default maximum attribute value length in bytes.
pub const DEFAULT_MAX_VALUE_LEN: usize = 1024;

/// Default maximum number of custom identity attributes.
pub const DEFAULT_MAX_CUSTOM_ATTRIBUTES: usize = 64;

/// Limits applied by the identity attribute validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// Maximum attribute value length in bytes
    pub max_value_len: usize,
    /// Maximum number of attributes in a custom activation
    pub max_custom_attributes: usize,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            max_custom_attributes: DEFAULT_MAX_CUSTOM_ATTRIBUTES,
        }
    }
}

impl ActivationConfig {
    /// Validate limits.
    pub fn validate(&self) -> Result<(), ActivationError> {
        if self.max_value_len == 0 {
            return Err(ActivationError::InvalidConfig(
                "max_value_len cannot be 0".to_string(),
            ));
        }

        if self.max_custom_attributes == 0 {
            return Err(ActivationError::InvalidConfig(
                "max_custom_attributes cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set the value length limit
    pub fn with_max_value_len(mut self, max: usize) -> Self {
        self.max_value_len = max;
        self
    }

    /// Builder-style method to set the custom attribute limit
    pub fn with_max_custom_attributes(mut self, max: usize) -> Self {
        self.max_custom_attributes = max;
        self
    }
}
