//! # Domain Module
//!
//! Core domain types for activation request construction.
//! Pure logic, no I/O and no cryptography.

pub mod attributes;
pub mod config;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod validation;
pub mod value_objects;

pub use attributes::{IdentityAttributes, CODE_KEY, PUK_KEY, RECOVERY_CODE_KEY};
pub use config::ActivationConfig;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use validation::IdentityValidator;
pub use value_objects::*;
