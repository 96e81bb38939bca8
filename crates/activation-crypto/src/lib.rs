//! # Activation Crypto - Payload Encryption Engine
//!
//! Reference `EnvelopeEncryptor` for activation requests plus the matching
//! server-side decryptor.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecies` | secp256k1 ECDH + SHA-256 KDF | Activation data envelope |
//! | `symmetric` | XChaCha20-Poly1305 | Authenticated encryption with AAD |
//!
//! ## Security Properties
//!
//! - **Ephemeral keys**: a fresh secp256k1 key pair per envelope
//! - **Shared info**: mixed into the KDF and authenticated as AAD
//! - **XChaCha20**: 192-bit random nonce, no nonce bookkeeping
//! - Derived keys and private scalars are zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecies;
pub mod errors;
pub mod symmetric;

// Re-exports
pub use ecies::{EciesDecryptor, EciesEncryptor};
pub use errors::CryptoError;
pub use symmetric::{decrypt, encrypt, Nonce, SymmetricKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
