//! # Activation Request
//!
//! Construction of device activation requests for the pairing protocol.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Build the request posted to the activation create endpoint:
//! - Pick a variant (standard code, custom attributes, recovery code + PUK)
//! - Validate and copy the identity attributes for that variant
//! - Seal the request with the encrypted activation data, exactly once
//! - Serialize only sealed requests for the encoder
//!
//! This crate never encrypts anything itself. Ciphertext comes from an
//! `EnvelopeEncryptor`, wire bytes from a `RequestEncoder`.
//!
//! ## Lifecycle
//!
//! | State | `attach_payload` | `serialize` |
//! |-------|------------------|-------------|
//! | Unsealed | stores envelope, moves to Sealed | `StateError::PayloadMissing` |
//! | Sealed | `StateError::AlreadySealed` | body with `type`, `identityAttributes`, `activationData` |
//!
//! ## Module Structure
//!
//! ```text
//! activation-request/
//! ├── domain/          # ActivationRequest, IdentityAttributes, validator, errors
//! ├── ports/           # ActivationRequestApi, EnvelopeEncryptor, RequestEncoder
//! ├── adapters/        # JsonRequestEncoder
//! └── service.rs       # ActivationRequestService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::JsonRequestEncoder;
pub use domain::{
    invariant_sendable, invariant_variant_shape, ActivationConfig, ActivationData,
    ActivationError, ActivationKind, ActivationRequest, ActivationRequestBody, ActivationVariant,
    EncryptedEnvelope, Endpoint, IdentityAttributes, IdentityValidator, RequestState,
    StateError, ValidationError, CODE_KEY, PUK_KEY, RECOVERY_CODE_KEY,
};
pub use ports::{
    ActivationRequestApi, EncoderError, EncryptorError, EnvelopeEncryptor, MockEnvelopeEncryptor,
    RequestEncoder,
};
pub use service::ActivationRequestService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
