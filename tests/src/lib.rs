//! # Activation Request Test Suite
//!
//! Unified test crate exercising the workspace crates together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # build -> seal -> encode -> decode -> decrypt
//!     ├── concurrency.rs  # seal races over a shared request
//!     ├── logging.rs      # structured log fields, no secrets in output
//!     └── properties.rs   # proptest properties over generated inputs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p activation-tests
//! cargo test -p activation-tests integration::properties::
//! ```

#![allow(dead_code)]

pub mod integration;
