//! Session Store Tests
//!
//! # Test Organization
//!
//! - `authentication` - admin and underwriter sign-in, rejected credentials
//! - `persistence` - restoring, corrupt data and sign-out clearing storage
//! - `credentials` - registering and changing underwriter passwords
//! - `roles` - role predicates, subscribers and the authorization header

use std::sync::Arc;
use std::time::Duration;

use core_kernel::{FixedLatency, NoLatency, UnderwriterId};
use domain_auth::{
    AdminCredentials, AuthError, CredentialRegistry, FileStorage, Identity, MemoryStorage,
    RecordingNavigator, Role, Route, SessionStorage, SessionStore, STORAGE_KEY,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn store_with(storage: Arc<MemoryStorage>) -> (SessionStore, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let store = SessionStore::new(storage, navigator.clone(), Arc::new(NoLatency));
    (store, navigator)
}

fn fresh_store() -> (SessionStore, Arc<MemoryStorage>, Arc<RecordingNavigator>) {
    let storage = Arc::new(MemoryStorage::new());
    let (store, navigator) = store_with(storage.clone());
    (store, storage, navigator)
}

fn uw(n: u64) -> UnderwriterId {
    UnderwriterId::from_sequence(n)
}

// ============================================================================
// AUTHENTICATION
// ============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_admin_sign_in() {
        let (store, _, _) = fresh_store();

        let identity = store.authenticate("admin", "admin").await.unwrap();

        assert_eq!(identity, Identity::admin());
        assert_eq!(identity.role, Role::Admin);
        assert!(store.is_admin());
    }

    #[tokio::test]
    async fn test_seeded_underwriter_sign_in() {
        let (store, _, _) = fresh_store();

        let identity = store.authenticate("underwriter1", "Pass@123").await.unwrap();

        assert_eq!(identity.id, "UW001");
        assert_eq!(identity.name, "Underwriter UW001");
        assert_eq!(identity.email, "underwriter1");
        assert_eq!(identity.role, Role::Underwriter);
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let (store, _, _) = fresh_store();

        let err = store.authenticate("underwriter1", "wrong").await.unwrap_err();

        assert!(err.is_invalid_credentials());
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_admin_login_with_underwriter_password_rejected() {
        let (store, _, _) = fresh_store();
        let result = store.authenticate("admin", "Pass@123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_failed_attempt_keeps_previous_session() {
        let (store, _, _) = fresh_store();
        store.authenticate("admin", "admin").await.unwrap();

        let _ = store.authenticate("nobody", "nothing").await;

        assert!(store.is_admin());
    }

    #[tokio::test]
    async fn test_custom_admin_credentials() {
        let store = SessionStore::with_credentials(
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingNavigator::new()),
            Arc::new(NoLatency),
            AdminCredentials::new("root", "s3cret!"),
            CredentialRegistry::new(),
        );

        assert!(store.authenticate("admin", "admin").await.is_err());
        assert!(store.authenticate("underwriter1", "Pass@123").await.is_err());
        assert_eq!(store.authenticate("root", "s3cret!").await.unwrap().role, Role::Admin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_while_authenticating() {
        let store = Arc::new(SessionStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingNavigator::new()),
            Arc::new(FixedLatency::from_millis(0, 0, 100)),
        ));

        let pending = {
            let store = store.clone();
            tokio::spawn(async move { store.authenticate("admin", "admin").await })
        };
        // The clock only moves once the sign-in is parked on its delay
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(store.is_busy());

        tokio::time::advance(Duration::from_millis(70)).await;
        pending.await.unwrap().unwrap();
        assert!(!store.is_busy());
    }
}

// ============================================================================
// PERSISTENCE
// ============================================================================

mod persistence {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_persists_identity() {
        let (store, storage, _) = fresh_store();
        store.authenticate("underwriter1", "Pass@123").await.unwrap();

        let raw = storage.get(STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["id"], "UW001");
        assert_eq!(json["name"], "Underwriter UW001");
        assert_eq!(json["email"], "underwriter1");
        assert_eq!(json["role"], "underwriter");
    }

    #[test]
    fn test_restores_stored_identity() {
        let stored = serde_json::to_string(&Identity::admin()).unwrap();
        let storage = Arc::new(MemoryStorage::with_value(STORAGE_KEY, stored));

        let (store, _) = store_with(storage);

        assert_eq!(store.current_identity(), Some(Identity::admin()));
    }

    #[test]
    fn test_corrupt_session_discarded() {
        let storage = Arc::new(MemoryStorage::with_value(STORAGE_KEY, "{not json"));

        let (store, _) = store_with(storage.clone());

        assert_eq!(store.current_identity(), None);
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_end_session_clears_and_redirects() {
        let (store, storage, navigator) = fresh_store();
        store.authenticate("admin", "admin").await.unwrap();

        store.end_session();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
        assert_eq!(navigator.last(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_session_survives_restart_with_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let navigator = Arc::new(RecordingNavigator::new());

        let first = SessionStore::new(
            Arc::new(FileStorage::new(dir.path())),
            navigator.clone(),
            Arc::new(NoLatency),
        );
        first.authenticate("underwriter1", "Pass@123").await.unwrap();
        drop(first);

        let second = SessionStore::new(
            Arc::new(FileStorage::new(dir.path())),
            navigator,
            Arc::new(NoLatency),
        );
        assert!(second.is_underwriter());
        assert_eq!(second.current_identity().unwrap().id, "UW001");
    }
}

// ============================================================================
// CREDENTIALS
// ============================================================================

mod credentials {
    use super::*;

    #[tokio::test]
    async fn test_registered_underwriter_can_sign_in() {
        let (store, _, _) = fresh_store();

        let login = store.register_credential(uw(2), "Welcome#2");
        assert_eq!(login, "underwriterUW002");

        let identity = store.authenticate("underwriterUW002", "Welcome#2").await.unwrap();
        assert_eq!(identity.id, "UW002");
        assert_eq!(identity.underwriter_id(), Some(uw(2)));
    }

    #[tokio::test]
    async fn test_changed_password_replaces_old() {
        let (store, _, _) = fresh_store();

        assert!(store.change_credential_password(uw(1), "Changed!1"));

        assert!(store.authenticate("underwriter1", "Pass@123").await.is_err());
        assert!(store.authenticate("underwriter1", "Changed!1").await.is_ok());
    }

    #[test]
    fn test_change_password_unknown_underwriter() {
        let (store, _, _) = fresh_store();
        assert!(!store.change_credential_password(uw(99), "Whatever!"));
    }

    #[test]
    fn test_login_name_lookup() {
        let (store, _, _) = fresh_store();
        assert_eq!(store.login_name_for(uw(1)), Some("underwriter1".to_string()));
        assert_eq!(store.login_name_for(uw(5)), None);
    }
}

// ============================================================================
// ROLES
// ============================================================================

mod roles {
    use super::*;

    #[test]
    fn test_no_roles_when_signed_out() {
        let (store, _, _) = fresh_store();
        assert!(!store.is_admin());
        assert!(!store.is_underwriter());
        assert_eq!(store.authorization_header(), None);
    }

    #[tokio::test]
    async fn test_underwriter_is_not_admin() {
        let (store, _, _) = fresh_store();
        store.authenticate("underwriter1", "Pass@123").await.unwrap();

        assert!(store.is_underwriter());
        assert!(!store.has_role(Role::Admin));
        assert_eq!(store.authorization_header(), Some("Bearer UW001".to_string()));
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let (store, _, _) = fresh_store();
        let mut receiver = store.subscribe();
        assert!(receiver.borrow().is_none());

        store.authenticate("admin", "admin").await.unwrap();
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow().as_ref().map(|i| i.role), Some(Role::Admin));

        store.end_session();
        receiver.changed().await.unwrap();
        assert!(receiver.borrow().is_none());
    }
}
