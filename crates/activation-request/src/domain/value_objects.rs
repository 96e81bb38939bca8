//! # Domain Value Objects
//!
//! Immutable value types for activation requests.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Activation variant, fixed at construction.
///
/// Serialized with the wire names the activation server expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationVariant {
    /// Activation with an activation code.
    #[serde(rename = "CODE")]
    Standard,
    /// Activation with application specific identity attributes.
    #[serde(rename = "CUSTOM")]
    Custom,
    /// Activation with a recovery code and PUK.
    #[serde(rename = "RECOVERY")]
    Recovery,
}

impl ActivationVariant {
    /// Wire name used in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationVariant::Standard => "CODE",
            ActivationVariant::Custom => "CUSTOM",
            ActivationVariant::Recovery => "RECOVERY",
        }
    }

    /// Keys this variant requires, or `None` when caller-defined.
    pub fn required_keys(&self) -> Option<&'static [&'static str]> {
        use super::attributes::{CODE_KEY, PUK_KEY, RECOVERY_CODE_KEY};
        match self {
            ActivationVariant::Standard => Some(&[CODE_KEY]),
            ActivationVariant::Custom => None,
            ActivationVariant::Recovery => Some(&[RECOVERY_CODE_KEY, PUK_KEY]),
        }
    }
}

impl fmt::Display for ActivationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request lifecycle state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    /// Built, activation data not attached yet.
    #[default]
    Unsealed,
    /// Activation data attached, ready for the encoder.
    Sealed,
}

impl RequestState {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: RequestState) -> bool {
        matches!((self, next), (Self::Unsealed, Self::Sealed))
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sealed)
    }
}

/// Encrypted activation data produced by the encryption engine.
///
/// Opaque to this crate: every field is stored and emitted verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedEnvelope {
    /// Base64 ephemeral public key of the key agreement.
    pub ephemeral_public_key: String,
    /// Base64 ciphertext.
    pub encrypted_data: String,
    /// Base64 authentication tag.
    pub mac: String,
    /// Base64 nonce, when the scheme transmits one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Encryption timestamp (unix milliseconds), when the scheme sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Plaintext activation data handed to the encryption engine.
///
/// Decoding goes through `ActivationData::new`, so a blank device key is
/// rejected on both paths.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase", try_from = "ActivationDataWire")]
pub struct ActivationData {
    device_public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extras: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activation_otp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_info: Option<String>,
}

impl ActivationData {
    /// Field name of the device public key.
    pub const DEVICE_PUBLIC_KEY_FIELD: &'static str = "devicePublicKey";

    /// Create activation data for a base64 device public key.
    pub fn new(device_public_key: impl Into<String>) -> Result<Self, ValidationError> {
        let device_public_key = device_public_key.into();
        if device_public_key.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::DEVICE_PUBLIC_KEY_FIELD.to_string(),
            });
        }
        Ok(Self {
            device_public_key,
            activation_name: None,
            extras: None,
            activation_otp: None,
            platform: None,
            device_info: None,
        })
    }

    /// Set the user visible activation name.
    pub fn with_activation_name(mut self, name: impl Into<String>) -> Self {
        self.activation_name = Some(name.into());
        self
    }

    /// Set application specific extras.
    pub fn with_extras(mut self, extras: impl Into<String>) -> Self {
        self.extras = Some(extras.into());
        self
    }

    /// Set the additional activation OTP.
    pub fn with_activation_otp(mut self, otp: impl Into<String>) -> Self {
        self.activation_otp = Some(otp.into());
        self
    }

    /// Set the platform identifier.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Set the device description.
    pub fn with_device_info(mut self, info: impl Into<String>) -> Self {
        self.device_info = Some(info.into());
        self
    }

    /// Base64 device public key.
    pub fn device_public_key(&self) -> &str {
        &self.device_public_key
    }

    /// Activation name, if set.
    pub fn activation_name(&self) -> Option<&str> {
        self.activation_name.as_deref()
    }

    /// JSON plaintext for the encryption engine, wiped when dropped.
    pub fn to_plaintext(&self) -> Result<Zeroizing<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(self).map(Zeroizing::new)
    }
}

impl fmt::Debug for ActivationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // OTP, extras and the user's device name stay out of logs
        f.debug_struct("ActivationData")
            .field("device_public_key", &self.device_public_key)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

/// Decoded form of `ActivationData` before the device key check.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
struct ActivationDataWire {
    device_public_key: String,
    #[serde(default)]
    activation_name: Option<String>,
    #[serde(default)]
    extras: Option<String>,
    #[serde(default)]
    activation_otp: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    device_info: Option<String>,
}

impl TryFrom<ActivationDataWire> for ActivationData {
    type Error = ValidationError;

    fn try_from(mut wire: ActivationDataWire) -> Result<Self, Self::Error> {
        let mut data = ActivationData::new(std::mem::take(&mut wire.device_public_key))?;
        data.activation_name = wire.activation_name.take();
        data.extras = wire.extras.take();
        data.activation_otp = wire.activation_otp.take();
        data.platform = wire.platform.take();
        data.device_info = wire.device_info.take();
        Ok(data)
    }
}

/// Server endpoint descriptor for the transport layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Request path relative to the server base URL.
    pub path: &'static str,
    /// Whether the transport must run this endpoint on its serial queue.
    pub synchronized: bool,
}
