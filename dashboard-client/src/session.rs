use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use common_identity::Identity;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Process-wide authentication state: bearer credentials plus the decoded
/// identity. `is_authenticated` is true iff both the access token and the
/// identity are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub identity: Option<Identity>,
    pub is_authenticated: bool,
}

impl Session {
    // Authenticated records need a token and an identity; unauthenticated
    // records must be fully empty, since `clear` nulls every field.
    fn upholds_invariant(&self) -> bool {
        if self.is_authenticated {
            self.access_token.is_some() && self.identity.is_some()
        } else {
            self.access_token.is_none() && self.refresh_token.is_none() && self.identity.is_none()
        }
    }
}

/// Durable holder of the [`Session`]. Cloning shares the underlying state,
/// so one store can be handed to the API client, the authenticator, and any
/// number of readers. Only the authenticator and the API client's 401
/// handler mutate it; everything else reads snapshots.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store without a backing file. State dies with the process.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Session::default())),
            path: None,
        }
    }

    /// Hydrates from `path`. A missing, unreadable, malformed, or
    /// invariant-violating file yields the empty unauthenticated session —
    /// stored state never fails open.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Session>(&bytes) {
                Ok(stored) if stored.upholds_invariant() => stored,
                Ok(_) => {
                    warn!(path = %path.display(), "stored session inconsistent, starting unauthenticated");
                    Session::default()
                }
                Err(err) => {
                    warn!(%err, path = %path.display(), "stored session malformed, starting unauthenticated");
                    Session::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(err) => {
                warn!(%err, path = %path.display(), "failed to read stored session, starting unauthenticated");
                Session::default()
            }
        };

        Self {
            inner: Arc::new(RwLock::new(session)),
            path: Some(path),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.read().expect("rwlock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("rwlock poisoned").is_authenticated
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.read().expect("rwlock poisoned").access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.read().expect("rwlock poisoned").refresh_token.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.read().expect("rwlock poisoned").identity.clone()
    }

    /// Replaces the whole session in one write. The caller guarantees a
    /// non-empty token and a decoded identity; no validation happens here.
    pub fn set_auth(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        identity: Identity,
    ) {
        {
            let mut guard = self.inner.write().expect("rwlock poisoned");
            *guard = Session {
                access_token: Some(access_token.into()),
                refresh_token: Some(refresh_token.into()),
                identity: Some(identity),
                is_authenticated: true,
            };
        }
        self.persist();
    }

    /// Replaces the identity without touching tokens. Silently ignored while
    /// unauthenticated (the caller may have been signed out by a concurrent
    /// 401); returns whether the update was applied.
    pub fn update_identity(&self, identity: Identity) -> bool {
        let applied = {
            let mut guard = self.inner.write().expect("rwlock poisoned");
            if guard.is_authenticated {
                guard.identity = Some(identity);
                true
            } else {
                false
            }
        };
        if applied {
            self.persist();
        } else {
            debug!("ignoring identity update on unauthenticated session");
        }
        applied
    }

    /// Resets every field. Idempotent.
    pub fn clear(&self) {
        {
            let mut guard = self.inner.write().expect("rwlock poisoned");
            *guard = Session::default();
        }
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let snapshot = self.snapshot();
        let bytes = match serde_json::to_vec_pretty(&snapshot) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(%err, "failed to serialize session, skipping persist");
                return;
            }
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(%err, path = %parent.display(), "failed to create session directory");
                return;
            }
        }

        if let Err(err) = fs::write(path, bytes) {
            warn!(%err, path = %path.display(), "failed to persist session");
        }
    }
}
