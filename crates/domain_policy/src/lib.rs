//! Vehicle Policy Domain
//!
//! This crate implements policy issuance and servicing for two- and
//! four-wheeler insurance.
//!
//! # Architecture
//!
//! - **Policy**: the issued record, with `POL`-prefixed sequential ids
//! - **Premium**: the fixed tariff per insurance type and the annual cover
//!   period derived from the start date
//! - **PolicyForm**: caller-side validation of the issuance form
//! - **PolicyPort / PolicyLedger**: storage with ownership checks against the
//!   signed-in identity
//!
//! # Access Rules
//!
//! ```text
//! underwriter -> own policies only (others: Unauthorized)
//! admin       -> every policy
//! ```
//!
//! Lookups resolve the id first, so a missing policy is always `NotFound`,
//! even for a caller who could not have read it anyway.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{InsuranceType, PolicyForm, PolicyLedger, PolicyPort, VehicleType};
//!
//! let mut form = PolicyForm::new(VehicleType::FourWheeler, InsuranceType::FullInsurance, start)?;
//! form.vehicle_number = "MH12AB1234".to_string();
//! // ...remaining fields
//! let policy = ledger.create(form.into_new_policy(owner)?).await?;
//! ```

pub mod policy;
pub mod premium;
pub mod validation;
pub mod ports;
pub mod ledger;
pub mod error;

pub use policy::{InsuranceType, NewPolicy, Policy, PolicyPatch, VehicleType};
pub use premium::{derive_terms, premium_for, PolicyTerms};
pub use validation::PolicyForm;
pub use ports::PolicyPort;
pub use ledger::PolicyLedger;
pub use error::PolicyError;
