//! Application Shell
//!
//! This crate composes the core services once per process and exposes the
//! workflows the presentation layer calls.
//!
//! # Architecture
//!
//! - **Config**: environment-driven settings (latency, storage, seeding)
//! - **AppContext**: the session store, underwriter directory and policy ledger
//!   wired together, shared by `Arc`
//! - **Guards**: role checks that redirect to the login surface
//! - **Handlers**: sign-in, underwriter administration, policy issuance and
//!   dashboard queries
//!
//! # Example
//!
//! ```rust,ignore
//! use app_shell::{AppContext, config::AppConfig, handlers::auth};
//!
//! let ctx = AppContext::new(AppConfig::from_env()?, Arc::new(TracingNavigator));
//! let home = auth::sign_in(&ctx, "admin", "admin").await?;
//! ```

pub mod config;
pub mod error;
pub mod guards;
pub mod handlers;

use std::fmt;
use std::sync::Arc;

use tracing::info;

use domain_auth::{AdminCredentials, CredentialRegistry, IdentityProvider, Navigator, SessionStore};
use domain_policy::{PolicyLedger, PolicyPort};
use domain_underwriter::{UnderwriterDirectory, UnderwriterPort};

use crate::config::AppConfig;

pub use crate::error::AppError;

/// Services shared across handlers
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub session: Arc<SessionStore>,
    pub underwriters: Arc<dyn UnderwriterPort>,
    pub policies: Arc<dyn PolicyPort>,
    pub navigator: Arc<dyn Navigator>,
}

impl AppContext {
    /// Builds every service from configuration
    ///
    /// The session is restored from storage, so a stored sign-in is picked
    /// back up. The policy ledger reads ownership from the session store.
    pub fn new(config: AppConfig, navigator: Arc<dyn Navigator>) -> Self {
        let latency = config.latency_strategy();

        let credentials = if config.seed_demo_data {
            CredentialRegistry::demo()
        } else {
            CredentialRegistry::new()
        };
        let session = Arc::new(SessionStore::with_credentials(
            config.storage(),
            navigator.clone(),
            latency.clone(),
            AdminCredentials::default(),
            credentials,
        ));

        let underwriters: Arc<dyn UnderwriterPort> = if config.seed_demo_data {
            Arc::new(UnderwriterDirectory::with_demo_seed(latency.clone()))
        } else {
            Arc::new(UnderwriterDirectory::new(latency.clone()))
        };

        let identity: Arc<dyn IdentityProvider> = session.clone();
        let policies: Arc<dyn PolicyPort> = Arc::new(PolicyLedger::new(identity, latency));

        info!(
            seeded = config.seed_demo_data,
            persistent = config.storage_dir.is_some(),
            "Application context ready"
        );

        Self {
            config,
            session,
            underwriters,
            policies,
            navigator,
        }
    }

    /// True while any service has an operation in flight
    pub fn is_busy(&self) -> bool {
        self.session.is_busy() || self.underwriters.is_busy() || self.policies.is_busy()
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
