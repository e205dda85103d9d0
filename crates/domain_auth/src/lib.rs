//! Session and Credential Domain
//!
//! This crate owns "who is signed in". It provides:
//! - **Identity**: the admin or underwriter currently using the application
//! - **SessionStore**: mock authentication, role checks and sign-out
//! - **CredentialRegistry**: the demo login table for underwriters
//! - **Ports**: durable session storage and navigation, with in-memory and
//!   file adapters
//!
//! # Session Lifecycle
//!
//! ```text
//! (restored from storage) -> SignedIn --end_session--> SignedOut
//!        SignedOut --authenticate--> SignedIn
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_auth::{SessionStore, MemoryStorage, NoopNavigator};
//!
//! let session = SessionStore::new(
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(NoopNavigator),
//!     Arc::new(NoLatency),
//! );
//! let identity = session.authenticate("admin", "admin").await?;
//! assert!(session.is_admin());
//! ```

pub mod identity;
pub mod credentials;
pub mod navigation;
pub mod ports;
pub mod adapters;
pub mod session;
pub mod error;

pub use identity::{Identity, Role};
pub use credentials::{CredentialEntry, CredentialRegistry};
pub use navigation::{Navigator, NoopNavigator, RecordingNavigator, Route, TracingNavigator};
pub use ports::{IdentityProvider, SessionStorage, StorageError};
pub use adapters::{FileStorage, MemoryStorage};
pub use session::{AdminCredentials, SessionStore, STORAGE_KEY};
pub use error::AuthError;
