//! # ECIES Envelope
//!
//! Encrypts activation data to the server's secp256k1 public key.
//!
//! ## Scheme
//!
//! 1. Fresh ephemeral key pair per envelope
//! 2. ECDH(ephemeral, server) -> shared secret
//! 3. key = SHA-256(shared secret || compressed ephemeral key || shared info)
//! 4. XChaCha20-Poly1305 with shared info as associated data
//!
//! The Poly1305 tag travels as `mac`, separate from `encryptedData`.
//! Every binary field is standard base64.

use crate::symmetric::{self, Nonce, SymmetricKey, TAG_LEN};
use crate::CryptoError;
use activation_request::{
    ActivationRequest, EncryptedEnvelope, EncryptorError, EnvelopeEncryptor,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use k256::ecdh::diffie_hellman;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Compressed SEC1 point length.
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Derive the envelope key from an agreed secret.
fn derive_key(shared_secret: &[u8], ephemeral_key: &[u8], shared_info: &[u8]) -> SymmetricKey {
    let mut hasher = Sha256::new();
    hasher.update(shared_secret);
    hasher.update(ephemeral_key);
    hasher.update(shared_info);
    SymmetricKey::from_bytes(hasher.finalize().into())
}

fn compressed(public: &PublicKey) -> Vec<u8> {
    public.to_encoded_point(true).as_bytes().to_vec()
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD
        .decode(value)
        .map_err(|e| CryptoError::InvalidEncoding {
            field,
            reason: e.to_string(),
        })
}

fn now_millis() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as u64)
}

/// Client side: seals plaintext for one server key.
#[derive(Clone, Debug)]
pub struct EciesEncryptor {
    server_public_key: PublicKey,
    shared_info: Vec<u8>,
}

impl EciesEncryptor {
    /// Create from a SEC1-encoded server public key (compressed or not).
    pub fn new(server_public_key: &[u8], shared_info: &[u8]) -> Result<Self, CryptoError> {
        let server_public_key =
            PublicKey::from_sec1_bytes(server_public_key).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self {
            server_public_key,
            shared_info: shared_info.to_vec(),
        })
    }

    /// Encryptor bound to the activation create endpoint.
    pub fn for_activation(server_public_key: &[u8]) -> Result<Self, CryptoError> {
        Self::new(server_public_key, ActivationRequest::ENDPOINT.path.as_bytes())
    }

    /// Seal plaintext into a fresh envelope.
    pub fn seal(&self, plaintext: &[u8]) -> Result<EncryptedEnvelope, CryptoError> {
        let ephemeral = SecretKey::random(&mut rand::thread_rng());
        let ephemeral_key = compressed(&ephemeral.public_key());

        let shared = diffie_hellman(
            ephemeral.to_nonzero_scalar(),
            self.server_public_key.as_affine(),
        );
        let key = derive_key(
            shared.raw_secret_bytes().as_slice(),
            &ephemeral_key,
            &self.shared_info,
        );

        let (mut ciphertext, nonce) = symmetric::encrypt(&key, plaintext, &self.shared_info)?;
        let tag_at = ciphertext.len().saturating_sub(TAG_LEN);
        let mac = ciphertext.split_off(tag_at);

        debug!(
            plaintext_len = plaintext.len(),
            "[activation] ECIES envelope sealed"
        );

        Ok(EncryptedEnvelope {
            ephemeral_public_key: STANDARD.encode(&ephemeral_key),
            encrypted_data: STANDARD.encode(&ciphertext),
            mac: STANDARD.encode(&mac),
            nonce: Some(STANDARD.encode(nonce.as_bytes())),
            timestamp: now_millis(),
        })
    }
}

impl EnvelopeEncryptor for EciesEncryptor {
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedEnvelope, EncryptorError> {
        self.seal(plaintext)
            .map_err(|e| EncryptorError::Failed(e.to_string()))
    }
}

/// Server side: opens envelopes sealed to its public key.
pub struct EciesDecryptor {
    secret: SecretKey,
    shared_info: Vec<u8>,
}

impl EciesDecryptor {
    /// Fresh random server key pair.
    pub fn generate(shared_info: &[u8]) -> Self {
        Self {
            secret: SecretKey::random(&mut rand::thread_rng()),
            shared_info: shared_info.to_vec(),
        }
    }

    /// Decryptor bound to the activation create endpoint.
    pub fn generate_for_activation() -> Self {
        Self::generate(ActivationRequest::ENDPOINT.path.as_bytes())
    }

    /// Load a 32-byte private scalar.
    pub fn from_bytes(secret: &[u8], shared_info: &[u8]) -> Result<Self, CryptoError> {
        let secret = SecretKey::from_slice(secret).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self {
            secret,
            shared_info: shared_info.to_vec(),
        })
    }

    /// Compressed SEC1 public key to hand to clients.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        compressed(&self.secret.public_key())
    }

    /// Encryptor for this decryptor's public key and shared info.
    pub fn encryptor(&self) -> EciesEncryptor {
        EciesEncryptor {
            server_public_key: self.secret.public_key(),
            shared_info: self.shared_info.clone(),
        }
    }

    /// Open an envelope and return the plaintext.
    pub fn open(&self, envelope: &EncryptedEnvelope) -> Result<Vec<u8>, CryptoError> {
        let ephemeral_key = decode_field("ephemeralPublicKey", &envelope.ephemeral_public_key)?;
        let mut ciphertext = decode_field("encryptedData", &envelope.encrypted_data)?;
        let mac = decode_field("mac", &envelope.mac)?;
        let nonce = envelope
            .nonce
            .as_deref()
            .ok_or(CryptoError::MissingField("nonce"))?;
        let nonce = Nonce::from_slice(&decode_field("nonce", nonce)?)?;

        if mac.len() != TAG_LEN {
            return Err(CryptoError::InvalidMacLength {
                expected: TAG_LEN,
                actual: mac.len(),
            });
        }

        let ephemeral =
            PublicKey::from_sec1_bytes(&ephemeral_key).map_err(|_| CryptoError::InvalidPublicKey)?;
        let shared = diffie_hellman(self.secret.to_nonzero_scalar(), ephemeral.as_affine());
        let key = derive_key(
            shared.raw_secret_bytes().as_slice(),
            &ephemeral_key,
            &self.shared_info,
        );

        ciphertext.extend_from_slice(&mac);
        symmetric::decrypt(&key, &ciphertext, &nonce, &self.shared_info)
            .inspect_err(|_| warn!("[activation] ECIES envelope failed authentication"))
    }
}

impl std::fmt::Debug for EciesDecryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EciesDecryptor")
            .field("secret", &"***")
            .field("shared_info", &self.shared_info)
            .finish()
    }
}
