//! # Activation Request Service
//!
//! Application service layer that implements the `ActivationRequestApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`ActivationRequestApi`)
//! - Uses the outbound ports (`EnvelopeEncryptor`, `RequestEncoder`) for
//!   ciphertext and wire bytes
//! - Delegates construction and the seal transition to the domain layer

use crate::domain::{
    ActivationConfig, ActivationData, ActivationError, ActivationKind, ActivationRequest,
    IdentityValidator, StateError,
};
use crate::ports::inbound::ActivationRequestApi;
use crate::ports::outbound::{EnvelopeEncryptor, RequestEncoder};
use tracing::{debug, warn};

/// Activation Request Service.
///
/// Builds requests with a configured validator, seals them through the
/// encryption engine and hands sealed bodies to the encoder.
pub struct ActivationRequestService<E: EnvelopeEncryptor, C: RequestEncoder> {
    validator: IdentityValidator,
    encryptor: E,
    encoder: C,
}

impl<E: EnvelopeEncryptor, C: RequestEncoder> ActivationRequestService<E, C> {
    /// Create a new activation request service.
    ///
    /// # Arguments
    /// * `config` - Validation limits
    /// * `encryptor` - Encryption engine producing the activation data envelope
    /// * `encoder` - Encoder turning sealed bodies into wire bytes
    ///
    /// # Errors
    /// * `ActivationError::InvalidConfig` - the configuration is rejected
    pub fn new(config: ActivationConfig, encryptor: E, encoder: C) -> Result<Self, ActivationError> {
        Ok(Self {
            validator: IdentityValidator::new(config)?,
            encryptor,
            encoder,
        })
    }
}

impl<E: EnvelopeEncryptor, C: RequestEncoder> ActivationRequestApi
    for ActivationRequestService<E, C>
{
    fn create_standard(&self, code: &str) -> Result<ActivationRequest, ActivationError> {
        ActivationRequest::standard_with(&self.validator, code)
    }

    fn create_custom(
        &self,
        attributes: &[(&str, &str)],
    ) -> Result<ActivationRequest, ActivationError> {
        ActivationRequest::custom_with(&self.validator, attributes.iter().copied())
    }

    fn create_recovery(
        &self,
        recovery_code: &str,
        puk: &str,
    ) -> Result<ActivationRequest, ActivationError> {
        ActivationRequest::recovery_with(&self.validator, recovery_code, puk)
    }

    fn seal(
        &self,
        request: &mut ActivationRequest,
        data: &ActivationData,
    ) -> Result<(), ActivationError> {
        // Fail before spending an encryption on a request that cannot take it
        if request.is_sealed() {
            warn!(variant = %request.variant(), "[activation] Seal on sealed request");
            return Err(StateError::AlreadySealed.into());
        }

        let plaintext = data
            .to_plaintext()
            .map_err(|e| ActivationError::Encoding(e.to_string()))?;

        let envelope = self
            .encryptor
            .encrypt(&plaintext)
            .map_err(|e| ActivationError::Encryption(e.to_string()))?;

        debug!(
            variant = %request.variant(),
            plaintext_len = plaintext.len(),
            "[activation] Activation data encrypted"
        );

        request.attach_payload(envelope)
    }

    fn encode(&self, request: &ActivationRequest) -> Result<Vec<u8>, ActivationError> {
        let body = request.serialize()?;
        self.encoder
            .encode(&body)
            .map_err(|e| ActivationError::Encoding(e.to_string()))
    }

    fn prepare(
        &self,
        kind: &ActivationKind,
        data: &ActivationData,
    ) -> Result<Vec<u8>, ActivationError> {
        let mut request = kind.build_with(&self.validator)?;
        self.seal(&mut request, data)?;
        self.encode(&request)
    }
}
