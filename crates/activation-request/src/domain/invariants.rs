//! # Domain Invariants
//!
//! Business rules every activation request satisfies.

use super::attributes::IdentityAttributes;
use super::errors::{StateError, ValidationError};
use super::validation::IdentityValidator;
use super::value_objects::{ActivationVariant, EncryptedEnvelope, RequestState};

/// Invariant: attributes are well formed and have exactly the keys the
/// variant mandates.
///
/// Values, and custom keys, pass the same checks the constructors apply, so
/// a decoded body holds nothing a constructor would refuse. Custom
/// activations need between one and `max_custom_attributes` attributes.
pub fn invariant_variant_shape(
    validator: &IdentityValidator,
    variant: ActivationVariant,
    attributes: &IdentityAttributes,
) -> Result<(), ValidationError> {
    let required = variant.required_keys();
    for (key, value) in attributes.iter() {
        if required.is_none() {
            validator.check_value(ValidationError::ATTRIBUTES_FIELD, key)?;
        }
        validator.check_value(key, value)?;
    }

    let Some(required) = required else {
        if attributes.is_empty() {
            return Err(ValidationError::NoAttributes);
        }
        let max = validator.config().max_custom_attributes;
        if attributes.len() > max {
            return Err(ValidationError::TooManyAttributes {
                count: attributes.len(),
                max,
            });
        }
        return Ok(());
    };

    if let Some(missing) = required.iter().find(|k| !attributes.contains_key(k)) {
        return Err(ValidationError::Empty {
            field: missing.to_string(),
        });
    }
    if attributes.len() != required.len() {
        return Err(ValidationError::TooManyAttributes {
            count: attributes.len(),
            max: required.len(),
        });
    }
    Ok(())
}

/// Invariant: a request is sendable only once sealed with activation data.
pub fn invariant_sendable(
    state: RequestState,
    activation_data: Option<&EncryptedEnvelope>,
) -> Result<&EncryptedEnvelope, StateError> {
    match (state, activation_data) {
        (RequestState::Sealed, Some(envelope)) => Ok(envelope),
        _ => Err(StateError::PayloadMissing),
    }
}
