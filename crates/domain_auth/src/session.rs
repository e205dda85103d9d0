//! The session store
//!
//! Holds the current identity, authenticates against the admin pair and the
//! credential registry, and mirrors the identity into durable storage so a
//! restart picks the session back up.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use core_kernel::{settle, BusyIndicator, OperationKind, SharedLatency, UnderwriterId};

use crate::credentials::CredentialRegistry;
use crate::error::AuthError;
use crate::identity::{Identity, Role};
use crate::navigation::{Navigator, Route};
use crate::ports::{IdentityProvider, SessionStorage};

/// Storage key of the serialized current identity
pub const STORAGE_KEY: &str = "star_protect_user";

/// The administrator's login pair
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub login_name: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(login_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_name: login_name.into(),
            password: password.into(),
        }
    }

    fn matches(&self, login_name: &str, password: &str) -> bool {
        self.login_name == login_name && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("login_name", &self.login_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Current-identity state plus mock authentication
///
/// Construct one per process and share it by `Arc`. Subscribers observe
/// identity changes through [`SessionStore::subscribe`].
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
    latency: SharedLatency,
    admin: AdminCredentials,
    credentials: RwLock<CredentialRegistry>,
    current: watch::Sender<Option<Identity>>,
    busy: BusyIndicator,
}

impl SessionStore {
    /// Creates a store with the demo credentials, restoring any stored session
    pub fn new(
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
        latency: SharedLatency,
    ) -> Self {
        Self::with_credentials(
            storage,
            navigator,
            latency,
            AdminCredentials::default(),
            CredentialRegistry::demo(),
        )
    }

    /// Creates a store with explicit credentials, restoring any stored session
    pub fn with_credentials(
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
        latency: SharedLatency,
        admin: AdminCredentials,
        credentials: CredentialRegistry,
    ) -> Self {
        let restored = Self::restore(storage.as_ref());
        let (current, _) = watch::channel(restored);

        Self {
            storage,
            navigator,
            latency,
            admin,
            credentials: RwLock::new(credentials),
            current,
            busy: BusyIndicator::new(),
        }
    }

    /// Reads the stored identity, discarding anything that does not parse
    fn restore(storage: &dyn SessionStorage) -> Option<Identity> {
        let raw = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Could not read stored session");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                debug!(id = %identity.id, role = %identity.role, "Restored session");
                Some(identity)
            }
            Err(e) => {
                warn!(error = %e, "Discarding corrupt stored session");
                if let Err(e) = storage.remove(STORAGE_KEY) {
                    warn!(error = %e, "Could not remove corrupt session");
                }
                None
            }
        }
    }

    /// Signs in with a login name and password
    ///
    /// The admin pair is checked first, then the underwriter credentials in id
    /// order. On success the identity is persisted and published.
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidCredentials` when nothing matches
    /// - `AuthError::Storage` when the session cannot be persisted
    #[instrument(skip(self, login_name, password), fields(login = %login_name))]
    pub async fn authenticate(&self, login_name: &str, password: &str) -> Result<Identity, AuthError> {
        let _busy = self.busy.begin();
        settle(&self.latency, OperationKind::Authenticate).await;

        let identity = self.resolve(login_name, password).ok_or_else(|| {
            warn!("Rejected sign-in attempt");
            AuthError::InvalidCredentials
        })?;

        self.set_current(identity.clone())?;
        info!(id = %identity.id, role = %identity.role, "Signed in");
        Ok(identity)
    }

    fn resolve(&self, login_name: &str, password: &str) -> Option<Identity> {
        if self.admin.matches(login_name, password) {
            return Some(Identity::admin());
        }

        self.credentials
            .read()
            .find_match(login_name, password)
            .map(|(id, entry)| Identity::underwriter(id, entry.login_name.clone()))
    }

    fn set_current(&self, identity: Identity) -> Result<(), AuthError> {
        let encoded = serde_json::to_string(&identity)?;
        self.storage.set(STORAGE_KEY, &encoded)?;
        self.current.send_replace(Some(identity));
        Ok(())
    }

    /// Signs out, clears storage and sends the user to the login surface
    #[instrument(skip(self))]
    pub fn end_session(&self) {
        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            warn!(error = %e, "Could not clear stored session");
        }
        let previous = self.current.send_replace(None);
        if let Some(identity) = previous {
            info!(id = %identity.id, "Signed out");
        }
        self.navigator.navigate(Route::Login);
    }

    /// The signed-in identity, if any
    pub fn current_identity(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    /// Observes identity changes
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.current
            .borrow()
            .as_ref()
            .map_or(false, |identity| identity.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_underwriter(&self) -> bool {
        self.has_role(Role::Underwriter)
    }

    /// `Bearer <identity id>` for outgoing requests while signed in
    pub fn authorization_header(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .map(|identity| format!("Bearer {}", identity.id))
    }

    /// True while an authentication is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Adds login credentials for an underwriter and returns the login name
    ///
    /// This does not touch the underwriter directory; callers keep the two in
    /// step.
    pub fn register_credential(&self, id: UnderwriterId, password: &str) -> String {
        let login_name = self.credentials.write().register(id, password);
        info!(underwriter = %id, login = %login_name, "Registered credentials");
        login_name
    }

    /// Changes an underwriter's password; false when the id has no credentials
    pub fn change_credential_password(&self, id: UnderwriterId, new_password: &str) -> bool {
        let changed = self.credentials.write().change_password(id, new_password);
        if changed {
            info!(underwriter = %id, "Changed credential password");
        } else {
            warn!(underwriter = %id, "No credentials to change");
        }
        changed
    }

    /// Login name registered for an underwriter
    pub fn login_name_for(&self, id: UnderwriterId) -> Option<String> {
        self.credentials
            .read()
            .get(id)
            .map(|entry| entry.login_name.clone())
    }
}

impl IdentityProvider for SessionStore {
    fn current_identity(&self) -> Option<Identity> {
        SessionStore::current_identity(self)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &*self.current.borrow())
            .field("credentials", &self.credentials.read().len())
            .field("busy", &self.busy.in_flight())
            .finish()
    }
}
