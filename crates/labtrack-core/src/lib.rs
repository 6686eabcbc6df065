//! # labtrack-core - Core Domain Types
//!
//! Foundation crate for the lab test tracker. Provides the test record model,
//! its fixed enumerations, summary statistics, error handling, and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TestRecord`] - A server-owned lab test record
//! - [`TestId`] - Opaque backend-assigned identifier
//! - [`TestType`] - Blood, Urine, X-Ray, MRI
//! - [`TestStatus`] - Pending, In Progress, Completed
//! - [`TestDraft`] - A record being composed for creation
//! - [`StatusUpdate`] - The editable subset of a record (status + result)
//! - [`Credentials`] - Username/password pair for login
//!
//! ### Statistics (`stats`)
//! - [`TestSummary`] - Per-status counts derived from a record list
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use labtrack_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod stats;
pub mod types;

/// Prelude for common imports used throughout all labtrack crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use stats::TestSummary;
pub use types::{
    format_created_at, Credentials, StatusUpdate, TestDraft, TestId, TestRecord, TestStatus,
    TestType,
};
