//! JSON Request Encoder Adapter
//!
//! Implements `RequestEncoder` with `serde_json`. Keys keep the order of
//! the body struct and identity attributes keep insertion order, so the
//! output is deterministic.

use crate::domain::{ActivationRequestBody, IdentityValidator};
use crate::ports::outbound::{EncoderError, RequestEncoder};
use tracing::debug;

/// JSON encoder for activation request bodies.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRequestEncoder;

impl JsonRequestEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Decode wire bytes and check them with the default limits.
    pub fn decode(&self, bytes: &[u8]) -> Result<ActivationRequestBody, EncoderError> {
        self.decode_with(bytes, &IdentityValidator::default())
    }

    /// Decode wire bytes and reject any body a constructor checked by
    /// `validator` could not have produced.
    pub fn decode_with(
        &self,
        bytes: &[u8],
        validator: &IdentityValidator,
    ) -> Result<ActivationRequestBody, EncoderError> {
        let body: ActivationRequestBody =
            serde_json::from_slice(bytes).map_err(|e| EncoderError::Decode(e.to_string()))?;
        body.validate_shape_with(validator)
            .map_err(|e| EncoderError::Decode(e.to_string()))?;
        Ok(body)
    }
}

impl RequestEncoder for JsonRequestEncoder {
    fn encode(&self, body: &ActivationRequestBody) -> Result<Vec<u8>, EncoderError> {
        let bytes = serde_json::to_vec(body).map_err(|e| EncoderError::Encode(e.to_string()))?;
        debug!(
            variant = %body.activation_type,
            bytes = bytes.len(),
            "[activation] Encoded request body"
        );
        Ok(bytes)
    }
}
