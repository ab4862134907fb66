//! Local key-value persistence for the handful of values that outlive a single
//! interaction: the session token, the anonymous user identifier, the set of
//! liked items and the cookie-consent choice. Values are plain strings with no
//! schema versioning. `LocalState` wraps any `KeyValueStore` with typed
//! accessors so call sites never touch raw keys.

mod file;
mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

use secrecy::{ExposeSecret, SecretString};
use std::{collections::BTreeSet, fmt, io, path::PathBuf, str::FromStr, sync::Arc};
use thiserror::Error;
use tracing::{debug, warn};
use ulid::Ulid;

pub const KEY_SESSION_TOKEN: &str = "auth_token";
pub const KEY_USER_ID: &str = "user_id";
pub const KEY_LIKED_ITEMS: &str = "liked_items";
pub const KEY_COOKIE_CONSENT: &str = "cookie_consent";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read state file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write state file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("state file {} is not valid JSON: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Minimal string store shared by the API client and the engagement tracker.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieConsent {
    Accepted,
    Declined,
}

impl CookieConsent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for CookieConsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CookieConsent {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "accepted" | "accept" | "true" => Ok(Self::Accepted),
            "declined" | "decline" | "false" => Ok(Self::Declined),
            other => Err(format!("unknown cookie consent value: {other}")),
        }
    }
}

/// Typed accessors over the persisted client-side keys.
#[derive(Clone)]
pub struct LocalState {
    store: Arc<dyn KeyValueStore>,
}

impl LocalState {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Volatile state, used by tests and one-shot invocations.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Returns the stored bearer token; blank values count as absent.
    #[must_use]
    pub fn session_token(&self) -> Option<SecretString> {
        self.store
            .get(KEY_SESSION_TOKEN)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    /// # Errors
    /// Returns an error if the token cannot be persisted.
    pub fn set_session_token(&self, token: &SecretString) -> Result<(), StoreError> {
        self.store.set(KEY_SESSION_TOKEN, token.expose_secret())
    }

    /// # Errors
    /// Returns an error if the token cannot be removed from storage.
    pub fn clear_session_token(&self) -> Result<(), StoreError> {
        self.store.remove(KEY_SESSION_TOKEN)
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session_token().is_some()
    }

    /// Returns the anonymous engagement identifier, creating it on first use.
    ///
    /// # Errors
    /// Returns an error if a newly generated identifier cannot be persisted.
    pub fn user_id(&self) -> Result<String, StoreError> {
        if let Some(existing) = self
            .store
            .get(KEY_USER_ID)
            .filter(|value| !value.trim().is_empty())
        {
            return Ok(existing);
        }

        let generated = format!("user_{}", Ulid::new().to_string().to_lowercase());
        self.store.set(KEY_USER_ID, &generated)?;
        debug!("generated anonymous user identifier");

        Ok(generated)
    }

    /// Liked item keys; an unreadable value is treated as an empty set.
    #[must_use]
    pub fn liked_items(&self) -> BTreeSet<String> {
        let Some(raw) = self.store.get(KEY_LIKED_ITEMS) else {
            return BTreeSet::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("discarding unreadable liked items: {}", err);
            BTreeSet::new()
        })
    }

    #[must_use]
    pub fn is_liked(&self, key: &str) -> bool {
        self.liked_items().contains(key)
    }

    /// Records the server-reported liked state for `key`.
    ///
    /// # Errors
    /// Returns an error if the liked set cannot be encoded or persisted.
    pub fn set_liked(&self, key: &str, liked: bool) -> Result<(), StoreError> {
        let mut items = self.liked_items();
        let changed = if liked {
            items.insert(key.to_string())
        } else {
            items.remove(key)
        };

        if !changed {
            return Ok(());
        }

        let encoded = serde_json::to_string(&items).map_err(StoreError::Encode)?;
        self.store.set(KEY_LIKED_ITEMS, &encoded)
    }

    #[must_use]
    pub fn cookie_consent(&self) -> Option<CookieConsent> {
        self.store
            .get(KEY_COOKIE_CONSENT)
            .and_then(|value| value.parse().ok())
    }

    /// # Errors
    /// Returns an error if the choice cannot be persisted.
    pub fn set_cookie_consent(&self, consent: CookieConsent) -> Result<(), StoreError> {
        self.store.set(KEY_COOKIE_CONSENT, consent.as_str())
    }
}

impl fmt::Debug for LocalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalState")
            .field("session_token", &self.has_session().then_some("***"))
            .field("liked_items", &self.liked_items().len())
            .finish_non_exhaustive()
    }
}
