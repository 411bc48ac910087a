//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! GCCV premium calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Dates and ready-made quote requests for known scenarios
//! - `builders`: Builder for quote requests with sensible defaults
//! - `assertions`: Assertion helpers for money and breakdowns
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
