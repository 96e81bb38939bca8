//! # Domain Entities
//!
//! The activation request aggregate and its wire body.

use super::attributes::IdentityAttributes;
use super::errors::{ActivationError, StateError, ValidationError};
use super::invariants::{invariant_sendable, invariant_variant_shape};
use super::validation::IdentityValidator;
use super::value_objects::{ActivationVariant, EncryptedEnvelope, Endpoint, RequestState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Request for the activation create endpoint.
///
/// Built by one of the variant constructors in the `Unsealed` state. The
/// encrypted activation data is attached exactly once, after which the
/// request can be serialized for the encoder.
#[derive(Clone, Debug)]
pub struct ActivationRequest {
    variant: ActivationVariant,
    identity_attributes: IdentityAttributes,
    state: RequestState,
    activation_data: Option<EncryptedEnvelope>,
}

impl ActivationRequest {
    /// Endpoint this request is posted to.
    pub const ENDPOINT: Endpoint = Endpoint {
        path: "/pa/v3/activation/create",
        synchronized: true,
    };

    /// Standard activation with an activation code.
    pub fn standard(activation_code: &str) -> Result<Self, ActivationError> {
        Self::standard_with(&IdentityValidator::default(), activation_code)
    }

    /// Custom activation with application specific identity attributes.
    ///
    /// The attributes are copied; later changes to the caller's map do not
    /// affect the request.
    pub fn custom<I, K, V>(attributes: I) -> Result<Self, ActivationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::custom_with(&IdentityValidator::default(), attributes)
    }

    /// Recovery activation with a recovery code and PUK.
    pub fn recovery(recovery_code: &str, puk: &str) -> Result<Self, ActivationError> {
        Self::recovery_with(&IdentityValidator::default(), recovery_code, puk)
    }

    /// Standard activation checked by `validator`.
    pub fn standard_with(
        validator: &IdentityValidator,
        activation_code: &str,
    ) -> Result<Self, ActivationError> {
        let attributes = validator.standard_attributes(activation_code)?;
        Ok(Self::unsealed(ActivationVariant::Standard, attributes))
    }

    /// Custom activation checked by `validator`.
    pub fn custom_with<I, K, V>(
        validator: &IdentityValidator,
        attributes: I,
    ) -> Result<Self, ActivationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let attributes = validator.custom_attributes(attributes)?;
        Ok(Self::unsealed(ActivationVariant::Custom, attributes))
    }

    /// Recovery activation checked by `validator`.
    pub fn recovery_with(
        validator: &IdentityValidator,
        recovery_code: &str,
        puk: &str,
    ) -> Result<Self, ActivationError> {
        let attributes = validator.recovery_attributes(recovery_code, puk)?;
        Ok(Self::unsealed(ActivationVariant::Recovery, attributes))
    }

    fn unsealed(variant: ActivationVariant, identity_attributes: IdentityAttributes) -> Self {
        debug!(
            variant = %variant,
            attributes = identity_attributes.len(),
            "[activation] Request built"
        );
        Self {
            variant,
            identity_attributes,
            state: RequestState::Unsealed,
            activation_data: None,
        }
    }

    /// Activation variant.
    pub fn variant(&self) -> ActivationVariant {
        self.variant
    }

    /// Identity attributes fixed at construction.
    pub fn identity_attributes(&self) -> &IdentityAttributes {
        &self.identity_attributes
    }

    /// Attached activation data, if sealed.
    pub fn activation_data(&self) -> Option<&EncryptedEnvelope> {
        self.activation_data.as_ref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Whether activation data is attached.
    pub fn is_sealed(&self) -> bool {
        self.state.is_terminal()
    }

    /// Attach the encrypted activation data and seal the request.
    ///
    /// # Errors
    /// * `StateError::AlreadySealed` - data was attached before; the stored
    ///   envelope is left untouched
    pub fn attach_payload(&mut self, envelope: EncryptedEnvelope) -> Result<(), ActivationError> {
        if !self.state.can_transition_to(RequestState::Sealed) {
            warn!(variant = %self.variant, "[activation] Rejected second seal");
            return Err(StateError::AlreadySealed.into());
        }
        self.activation_data = Some(envelope);
        self.state = RequestState::Sealed;

        info!(variant = %self.variant, "[activation] Request sealed");
        Ok(())
    }

    /// Structural value handed to the encoder.
    ///
    /// # Errors
    /// * `StateError::PayloadMissing` - the request is not sealed
    pub fn serialize(&self) -> Result<ActivationRequestBody, ActivationError> {
        let envelope = invariant_sendable(self.state, self.activation_data.as_ref())
            .inspect_err(|_| {
                warn!(variant = %self.variant, "[activation] Serialize before seal");
            })?;

        Ok(ActivationRequestBody {
            activation_type: self.variant,
            identity_attributes: self.identity_attributes.clone(),
            activation_data: envelope.clone(),
        })
    }
}

/// Wire body of a sealed activation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequestBody {
    /// Activation variant wire name.
    #[serde(rename = "type")]
    pub activation_type: ActivationVariant,
    /// Identity attributes as stored in the request.
    pub identity_attributes: IdentityAttributes,
    /// Encrypted activation data, verbatim.
    pub activation_data: EncryptedEnvelope,
}

impl ActivationRequestBody {
    /// Check a decoded body with the default limits.
    pub fn validate_shape(&self) -> Result<(), ValidationError> {
        self.validate_shape_with(&IdentityValidator::default())
    }

    /// Check a decoded body against `validator`: the variant's key set and
    /// the same key and value rules the constructors apply.
    pub fn validate_shape_with(&self, validator: &IdentityValidator) -> Result<(), ValidationError> {
        invariant_variant_shape(validator, self.activation_type, &self.identity_attributes)
    }
}

/// Caller's choice of activation variant with its raw inputs.
#[derive(Clone, PartialEq, Eq)]
pub enum ActivationKind {
    /// Standard activation.
    Standard {
        /// Activation code
        code: String,
    },
    /// Custom activation.
    Custom {
        /// Attribute pairs in the order they should be sent
        attributes: Vec<(String, String)>,
    },
    /// Recovery activation.
    Recovery {
        /// Recovery code
        recovery_code: String,
        /// Personal Unlock Key
        puk: String,
    },
}

impl ActivationKind {
    /// Variant this kind builds.
    pub fn variant(&self) -> ActivationVariant {
        match self {
            Self::Standard { .. } => ActivationVariant::Standard,
            Self::Custom { .. } => ActivationVariant::Custom,
            Self::Recovery { .. } => ActivationVariant::Recovery,
        }
    }

    /// Build an unsealed request checked by `validator`.
    pub fn build_with(
        &self,
        validator: &IdentityValidator,
    ) -> Result<ActivationRequest, ActivationError> {
        match self {
            Self::Standard { code } => ActivationRequest::standard_with(validator, code),
            Self::Custom { attributes } => ActivationRequest::custom_with(
                validator,
                attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            ),
            Self::Recovery { recovery_code, puk } => {
                ActivationRequest::recovery_with(validator, recovery_code, puk)
            }
        }
    }
}

impl std::fmt::Debug for ActivationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Inputs are secrets; only the variant is printed
        write!(f, "ActivationKind::{:?}(***)", self.variant())
    }
}
