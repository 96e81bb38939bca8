//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits that need no key material.

mod json_encoder;

pub use json_encoder::JsonRequestEncoder;
