//! # Outbound Ports
//!
//! Traits for the external collaborators: the encryption engine that
//! produces the activation data envelope and the encoder that turns a
//! sealed request into wire bytes.

use crate::domain::{ActivationRequestBody, EncryptedEnvelope};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Error from the encryption engine.
#[derive(Debug, Error)]
pub enum EncryptorError {
    /// Encryption failed.
    #[error("Encryption failed: {0}")]
    Failed(String),
}

/// Error from the structural encoder.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// Body could not be encoded.
    #[error("Encode failed: {0}")]
    Encode(String),

    /// Bytes could not be decoded into a body.
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Encryption engine - outbound port.
///
/// Turns the activation application data into an opaque envelope.
/// Implementations own key agreement and key management.
pub trait EnvelopeEncryptor: Send + Sync {
    /// Encrypt activation data plaintext.
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedEnvelope, EncryptorError>;
}

/// Structural encoder - outbound port.
///
/// Free to pick key order and escaping as long as decoding yields the
/// same `type`, `identityAttributes` and `activationData`.
pub trait RequestEncoder: Send + Sync {
    /// Encode a sealed request body.
    fn encode(&self, body: &ActivationRequestBody) -> Result<Vec<u8>, EncoderError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock encryption engine for testing.
///
/// Produces a deterministic envelope that embeds the plaintext length and a
/// call counter, so tests can tell envelopes apart.
#[derive(Debug, Default)]
pub struct MockEnvelopeEncryptor {
    /// Should fail?
    pub should_fail: bool,
    calls: AtomicUsize,
}

impl MockEnvelopeEncryptor {
    /// Mock that always fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Number of `encrypt` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EnvelopeEncryptor for MockEnvelopeEncryptor {
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedEnvelope, EncryptorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(EncryptorError::Failed("Mock failure".to_string()));
        }

        Ok(EncryptedEnvelope {
            ephemeral_public_key: format!("mock-key-{call}"),
            encrypted_data: format!("mock-data-{}", plaintext.len()),
            mac: format!("mock-mac-{call}"),
            nonce: None,
            timestamp: None,
        })
    }
}
