//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Invalid nonce length
    #[error("Invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Expected nonce length in bytes
        expected: usize,
        /// Actual nonce length in bytes
        actual: usize,
    },

    /// Invalid authentication tag length
    #[error("Invalid MAC length: expected {expected}, got {actual}")]
    InvalidMacLength {
        /// Expected tag length in bytes
        expected: usize,
        /// Actual tag length in bytes
        actual: usize,
    },

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Envelope field is not valid base64
    #[error("Invalid encoding of `{field}`: {reason}")]
    InvalidEncoding {
        /// Envelope field
        field: &'static str,
        /// Decoder message
        reason: String,
    },

    /// Envelope field required by this scheme is absent
    #[error("Missing envelope field `{0}`")]
    MissingField(&'static str),
}
