//! The session store: at most one signed-in user, mirrored to local storage.
//!
//! Sign-in operations simulate a network round trip by sleeping before they
//! answer. The answer itself is fabricated locally; nothing is verified.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::domain::{OAuthProvider, TimestampIds, User};
use crate::error::AuthError;
use crate::ports::{LocalStorage, StorageError};

/// Storage key holding the serialized current user.
pub const SESSION_KEY: &str = "blog-user";

/// Minimum password length accepted at the session level.
pub const SESSION_PASSWORD_MIN: usize = 6;

/// Simulated round-trip times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Email login and registration.
    pub credentials: Duration,
    /// Third-party sign-in.
    pub oauth: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            credentials: Duration::from_millis(1000),
            oauth: Duration::from_millis(1500),
        }
    }
}

impl Latency {
    pub fn none() -> Self {
        Self {
            credentials: Duration::ZERO,
            oauth: Duration::ZERO,
        }
    }
}

pub struct SessionStore {
    storage: Arc<dyn LocalStorage>,
    current: RwLock<Option<User>>,
    latency: Latency,
    ids: TimestampIds,
    hydrated: AtomicBool,
    in_flight: AtomicUsize,
}

/// Marks an operation as in flight until dropped.
struct Pending<'a>(&'a AtomicUsize);

impl<'a> Pending<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl SessionStore {
    /// An empty store. Call [`hydrate`](Self::hydrate) to restore a saved session.
    pub fn new(storage: Arc<dyn LocalStorage>, latency: Latency) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
            latency,
            ids: TimestampIds::new(),
            hydrated: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Restore the user saved by a previous session, if any.
    ///
    /// A saved record that cannot be read back is discarded.
    pub async fn hydrate(&self) -> Result<Option<User>, AuthError> {
        let restored = match self.storage.get_item(SESSION_KEY).await? {
            None => None,
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable saved session");
                    self.storage.remove_item(SESSION_KEY).await?;
                    None
                }
            },
        };

        if let Some(user) = &restored {
            tracing::info!(user_id = %user.id, provider = %user.provider, "Session restored");
        }

        *self.current.write().await = restored.clone();
        self.hydrated.store(true, Ordering::Release);
        Ok(restored)
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// True until the saved session has been read, and while a sign-in is running.
    pub fn is_loading(&self) -> bool {
        !self.hydrated.load(Ordering::Acquire) || self.in_flight.load(Ordering::Acquire) > 0
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let _pending = Pending::start(&self.in_flight);
        tokio::time::sleep(self.latency.credentials).await;

        if email.is_empty() || password.chars().count() < SESSION_PASSWORD_MIN {
            tracing::debug!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let name = email.split_once('@').map_or(email, |(local, _)| local);
        self.establish(User::with_email(self.ids.next(), name, email))
            .await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let _pending = Pending::start(&self.in_flight);
        tokio::time::sleep(self.latency.credentials).await;

        if name.is_empty() || email.is_empty() || password.chars().count() < SESSION_PASSWORD_MIN {
            tracing::debug!("Registration rejected");
            return Err(AuthError::InvalidCredentials);
        }

        self.establish(User::with_email(self.ids.next(), name, email))
            .await
    }

    /// Simulated third-party sign-in. Always succeeds unless storage fails.
    pub async fn login_with(&self, provider: OAuthProvider) -> Result<User, AuthError> {
        let _pending = Pending::start(&self.in_flight);
        tokio::time::sleep(self.latency.oauth).await;

        self.establish(User::from_oauth(provider, self.ids.next()))
            .await
    }

    pub async fn login_with_google(&self) -> Result<User, AuthError> {
        self.login_with(OAuthProvider::Google).await
    }

    pub async fn login_with_github(&self) -> Result<User, AuthError> {
        self.login_with(OAuthProvider::Github).await
    }

    pub async fn login_with_twitter(&self) -> Result<User, AuthError> {
        self.login_with(OAuthProvider::Twitter).await
    }

    /// Forget the current user. Safe to call when nobody is signed in.
    ///
    /// The saved record goes first; if that fails the user stays signed in.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let mut current = self.current.write().await;
        self.storage.remove_item(SESSION_KEY).await?;

        if let Some(user) = current.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        Ok(())
    }

    /// Persist first so a storage failure leaves the session untouched.
    async fn establish(&self, user: User) -> Result<User, AuthError> {
        let record =
            serde_json::to_string(&user).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set_item(SESSION_KEY, &record).await?;

        *self.current.write().await = Some(user.clone());
        tracing::info!(user_id = %user.id, provider = %user.provider, "Signed in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthProvider;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStorage {
        items: Mutex<HashMap<String, String>>,
        read_only: bool,
        sticky: bool,
    }

    impl MapStorage {
        fn raw(&self, key: &str) -> Option<String> {
            self.items.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl LocalStorage for MapStorage {
        async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.raw(key))
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Io("read-only".into()));
            }
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            if self.sticky {
                return Err(StorageError::Io("disk full".into()));
            }
            self.items.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn store() -> (SessionStore, Arc<MapStorage>) {
        let storage = Arc::new(MapStorage::default());
        (SessionStore::new(storage.clone(), Latency::none()), storage)
    }

    #[tokio::test]
    async fn test_login_derives_name_and_persists() {
        let (session, storage) = store();

        let user = session.login("ada@example.com", "secret1").await.unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(user.provider, AuthProvider::Email);
        assert_eq!(session.current_user().await, Some(user.clone()));

        let saved: User = serde_json::from_str(&storage.raw(SESSION_KEY).unwrap()).unwrap();
        assert_eq!(saved, user);
    }

    #[tokio::test]
    async fn test_login_rejects_short_password_without_side_effects() {
        let (session, storage) = store();

        let err = session.login("ada@example.com", "12345").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(session.current_user().await, None);
        assert_eq!(storage.raw(SESSION_KEY), None);

        assert!(session.login("", "long-enough").await.is_err());
    }

    #[tokio::test]
    async fn test_register_requires_name() {
        let (session, _) = store();

        assert!(session.register("", "a@b.co", "password").await.is_err());
        let user = session.register("Jane Roe", "jane@b.co", "password").await.unwrap();
        assert_eq!(user.name, "Jane Roe");
        assert_eq!(user.email, "jane@b.co");
    }

    #[tokio::test]
    async fn test_oauth_paths_write_the_same_record_shape() {
        let (session, storage) = store();

        for (user, provider) in [
            (session.login_with_google().await.unwrap(), AuthProvider::Google),
            (session.login_with_github().await.unwrap(), AuthProvider::Github),
            (session.login_with_twitter().await.unwrap(), AuthProvider::Twitter),
        ] {
            assert_eq!(user.provider, provider);
            assert!(user.id.starts_with(&format!("{provider}_")));
        }

        let saved: serde_json::Value =
            serde_json::from_str(&storage.raw(SESSION_KEY).unwrap()).unwrap();
        let mut keys: Vec<_> = saved.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["avatar", "email", "id", "name", "provider"]);
        assert_eq!(saved["provider"], "twitter");
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (session, storage) = store();
        session.login("ada@example.com", "secret1").await.unwrap();

        session.logout().await.unwrap();
        assert_eq!(session.current_user().await, None);
        assert_eq!(storage.raw(SESSION_KEY), None);

        session.logout().await.unwrap();
        assert_eq!(session.current_user().await, None);
        assert_eq!(storage.raw(SESSION_KEY), None);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_user_signed_in() {
        let storage = Arc::new(MapStorage {
            sticky: true,
            ..MapStorage::default()
        });
        let session = SessionStore::new(storage.clone(), Latency::none());
        let user = session.login("ada@example.com", "secret1").await.unwrap();

        let err = session.logout().await.unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
        assert_eq!(session.current_user().await, Some(user.clone()));
        assert!(storage.raw(SESSION_KEY).is_some());

        let next = SessionStore::new(storage, Latency::none());
        assert_eq!(next.hydrate().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_hydrate_restores_previous_session() {
        let (first, storage) = store();
        let user = first.login_with_github().await.unwrap();

        let second = SessionStore::new(storage.clone(), Latency::none());
        assert!(second.is_loading());
        assert_eq!(second.hydrate().await.unwrap(), Some(user.clone()));
        assert!(!second.is_loading());
        assert_eq!(second.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn test_hydrate_discards_garbage() {
        let (session, storage) = store();
        storage.set_item(SESSION_KEY, "{not json").await.unwrap();

        assert_eq!(session.hydrate().await.unwrap(), None);
        assert_eq!(storage.raw(SESSION_KEY), None);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_storage_failure_leaves_session_untouched() {
        let storage = Arc::new(MapStorage {
            read_only: true,
            ..MapStorage::default()
        });
        let session = SessionStore::new(storage, Latency::none());

        let err = session.login("ada@example.com", "secret1").await.unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
        assert_eq!(session.current_user().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_waits_for_simulated_latency() {
        let storage = Arc::new(MapStorage::default());
        let session = Arc::new(SessionStore::new(storage, Latency::default()));
        session.hydrate().await.unwrap();

        let started = tokio::time::Instant::now();
        let pending = tokio::spawn({
            let session = session.clone();
            async move { session.login_with_google().await }
        });

        tokio::task::yield_now().await;
        assert!(session.is_loading());

        pending.await.unwrap().unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(!session.is_loading());
    }
}
