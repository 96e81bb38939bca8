//! # Identity Attribute Validator
//!
//! Leaf validator shared by all variant constructors. It turns raw caller
//! input into an owned `IdentityAttributes` map or rejects it with the name
//! of the offending field.

use super::attributes::{IdentityAttributes, CODE_KEY, PUK_KEY, RECOVERY_CODE_KEY};
use super::config::ActivationConfig;
use super::errors::{ActivationError, ValidationError};

/// Validates identity attributes against an `ActivationConfig`.
#[derive(Clone, Debug, Default)]
pub struct IdentityValidator {
    config: ActivationConfig,
}

impl IdentityValidator {
    /// Create a validator with a checked configuration.
    pub fn new(config: ActivationConfig) -> Result<Self, ActivationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &ActivationConfig {
        &self.config
    }

    /// Check a single attribute value.
    ///
    /// Whitespace-only counts as empty.
    pub fn check_value(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: field.to_string(),
            });
        }
        if value.chars().any(char::is_control) {
            return Err(ValidationError::ControlCharacter {
                field: field.to_string(),
            });
        }
        if value.len() > self.config.max_value_len {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        Ok(())
    }

    /// Attributes for a standard activation.
    pub fn standard_attributes(&self, code: &str) -> Result<IdentityAttributes, ValidationError> {
        self.check_value(CODE_KEY, code)?;

        let mut attributes = IdentityAttributes::new();
        attributes.insert(CODE_KEY, code)?;
        Ok(attributes)
    }

    /// Attributes for a custom activation, copied out of caller-owned input.
    pub fn custom_attributes<I, K, V>(
        &self,
        attributes: I,
    ) -> Result<IdentityAttributes, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(K, V)> = attributes.into_iter().collect();
        if pairs.is_empty() {
            return Err(ValidationError::NoAttributes);
        }
        if pairs.len() > self.config.max_custom_attributes {
            return Err(ValidationError::TooManyAttributes {
                count: pairs.len(),
                max: self.config.max_custom_attributes,
            });
        }

        let mut copy = IdentityAttributes::new();
        for (key, value) in &pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            // Keys are reported under the map's own field name
            self.check_value(ValidationError::ATTRIBUTES_FIELD, key)?;
            self.check_value(key, value)?;
            copy.insert(key, value)?;
        }
        Ok(copy)
    }

    /// Attributes for a recovery activation.
    pub fn recovery_attributes(
        &self,
        recovery_code: &str,
        puk: &str,
    ) -> Result<IdentityAttributes, ValidationError> {
        self.check_value(RECOVERY_CODE_KEY, recovery_code)?;
        self.check_value(PUK_KEY, puk)?;

        let mut attributes = IdentityAttributes::new();
        attributes.insert(RECOVERY_CODE_KEY, recovery_code)?;
        attributes.insert(PUK_KEY, puk)?;
        Ok(attributes)
    }
}
