//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! Star Protect test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known logins, dates and identifiers
//! - `builders`: Builder patterns for valid entry forms
//! - `generators`: Property-based strategies and `fake`-backed random data

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
