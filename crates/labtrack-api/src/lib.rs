//! # labtrack-api - Backend HTTP Contract
//!
//! Typed access to the lab test service. The service owns persistence,
//! validation and authentication; this crate only serializes requests and
//! classifies responses.
//!
//! Depends on [`labtrack_core`] for domain types.
//!
//! ## Public API
//!
//! - [`LabApi`] - Send-able async trait over the five backend operations
//!   (`LocalLabApi` is the non-Send variant generated by `trait_variant`)
//! - [`HttpLabApi`] - reqwest implementation addressed by an injected base URL
//! - [`ApiError`] - Transport / rejected / decode failure classification
//! - [`LoginOutcome`] - Accepted or rejected credentials
//!
//! With the `test-helpers` feature, [`test_utils::FakeLabApi`] provides an
//! in-memory backend with a call log for higher-level tests.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod wire;

pub use client::{HttpLabApi, LabApi, LocalLabApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use wire::LoginOutcome;
