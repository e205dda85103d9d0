//! Core Kernel - Foundational types and utilities for Star Protect
//!
//! This crate provides the building blocks shared by the auth, underwriter and
//! policy domains:
//! - Sequential, prefixed identifiers (`UW001`, `POL00001`)
//! - Money types with precise decimal arithmetic
//! - Calendar helpers for cover periods and age checks
//! - Simulated latency and busy tracking for the in-memory services
//! - Field rules shared by the entry forms

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod latency;
pub mod rules;
pub mod error;

pub use money::{Money, Currency};
pub use temporal::{CoverPeriod, TemporalError, add_years, age_on};
pub use identifiers::{IdSequence, IdentifierError, PolicyId, UnderwriterId};
pub use latency::{
    settle, BusyGuard, BusyIndicator, FixedLatency, LatencyStrategy, NoLatency,
    OperationKind, SharedLatency,
};
pub use error::CoreError;
