//! # Inbound Ports
//!
//! API trait defining what the activation request builder can do.

use crate::domain::{ActivationData, ActivationError, ActivationKind, ActivationRequest};

/// Activation request API - inbound port.
///
/// Implementations must be thread-safe (`Send + Sync`). None of the
/// operations retry; errors are final for the current attempt.
pub trait ActivationRequestApi: Send + Sync {
    /// Build a standard activation request.
    fn create_standard(&self, code: &str) -> Result<ActivationRequest, ActivationError>;

    /// Build a custom activation request from attribute pairs.
    fn create_custom(
        &self,
        attributes: &[(&str, &str)],
    ) -> Result<ActivationRequest, ActivationError>;

    /// Build a recovery activation request.
    fn create_recovery(
        &self,
        recovery_code: &str,
        puk: &str,
    ) -> Result<ActivationRequest, ActivationError>;

    /// Encrypt `data` and attach the envelope to `request`.
    ///
    /// # Errors
    /// * `StateError::AlreadySealed` - checked before the engine runs
    /// * `ActivationError::Encryption` - the engine failed
    fn seal(
        &self,
        request: &mut ActivationRequest,
        data: &ActivationData,
    ) -> Result<(), ActivationError>;

    /// Serialize a sealed request and encode it into wire bytes.
    fn encode(&self, request: &ActivationRequest) -> Result<Vec<u8>, ActivationError>;

    /// Build, seal and encode in one step.
    fn prepare(
        &self,
        kind: &ActivationKind,
        data: &ActivationData,
    ) -> Result<Vec<u8>, ActivationError>;
}
