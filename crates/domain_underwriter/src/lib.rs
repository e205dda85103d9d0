//! Underwriter Domain
//!
//! Underwriters are the staff who issue vehicle policies. Admins register
//! them and reset their passwords; nothing else changes an underwriter record.
//!
//! # Components
//!
//! - **Underwriter**: the record, with `UW`-prefixed sequential ids
//! - **UnderwriterForm / PasswordChangeForm**: caller-side validation
//! - **UnderwriterPort**: the directory contract
//! - **UnderwriterDirectory**: in-memory implementation with simulated latency
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_underwriter::{UnderwriterDirectory, UnderwriterPort};
//!
//! let directory = UnderwriterDirectory::with_demo_seed(latency);
//! let created = directory.create(form.into_new_underwriter()?).await?;
//! assert_eq!(created.id.to_string(), "UW002");
//! ```

pub mod underwriter;
pub mod validation;
pub mod ports;
pub mod directory;
pub mod error;

pub use underwriter::{NewUnderwriter, Underwriter, UnderwriterPatch};
pub use validation::{PasswordChangeForm, UnderwriterForm, MINIMUM_JOINING_AGE};
pub use ports::UnderwriterPort;
pub use directory::{UnderwriterDirectory, SEED_DATE_OF_BIRTH, SEED_JOINING_DATE};
pub use error::UnderwriterError;
