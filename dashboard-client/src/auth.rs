use common_identity::{decode_identity, DecodeError, Identity};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::cache::QueryCache;
use crate::models::RegisterRequest;

pub type AuthResult<T> = Result<T, AuthError>;

/// Login/register failure surfaced to the UI layer as a form error. The
/// session store is left untouched whenever one of these is returned.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("malformed access token: {0}")]
    MalformedToken(#[from] DecodeError),
    #[error("backend request failed: {0}")]
    Backend(ApiError),
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Serialize)]
struct LogoutRequest<'a> {
    access_token: &'a str,
    refresh_token: &'a str,
}

/// The only sanctioned entry points that populate or clear the session
/// identity: `login`, `register`, `logout`.
///
/// Concurrent logins are not deduplicated — the last `set_auth` wins; the UI
/// is expected to disable the submit action while a login is in flight.
#[derive(Clone)]
pub struct Authenticator {
    api: ApiClient,
    cache: QueryCache,
    register_path: String,
}

impl Authenticator {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self {
            api,
            cache,
            register_path: "/register".to_string(),
        }
    }

    /// Override the registration endpoint for backends that still expose the
    /// older `/create` path.
    pub fn with_register_path(mut self, path: impl Into<String>) -> Self {
        self.register_path = path.into();
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Exchanges credentials for tokens, decodes the identity, and populates
    /// the session, then enriches the identity from the stored profile —
    /// tokens may omit contact fields. Enrichment is best-effort: any
    /// failure other than a 401 degrades to the token-decoded identity.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<Identity> {
        let tokens: LoginResponse = self
            .api
            .post_json("/login", &LoginRequest { username, password })
            .await
            .map_err(auth_error)?;

        let identity = decode_identity(&tokens.access_token)?;
        self.api
            .session()
            .set_auth(tokens.access_token, tokens.refresh_token, identity.clone());
        info!(user = %identity.username, role = %identity.role, "signed in");

        match self.fetch_profile(&identity.id).await {
            Ok(profile) => {
                self.api.session().update_identity(profile.clone());
                Ok(profile)
            }
            // The 401 handler has already cleared the session.
            Err(ApiError::AuthorizationDenied) => Err(AuthError::InvalidCredentials),
            Err(err) => {
                warn!(%err, "profile fetch failed, keeping token-decoded identity");
                Ok(identity)
            }
        }
    }

    /// Creates an account. Never mutates the session — registration does not
    /// imply login.
    pub async fn register(&self, request: &RegisterRequest) -> AuthResult<()> {
        self.api
            .post_unit(&self.register_path, request)
            .await
            .map_err(auth_error)
    }

    /// Ends the session. The backend call is best-effort — a network failure
    /// must never leave the user locked in — and local session state plus
    /// cached query results are always cleared.
    pub async fn logout(&self) {
        let session = self.api.session().snapshot();
        if let Some(access_token) = session.access_token.as_deref() {
            let request = LogoutRequest {
                access_token,
                refresh_token: session.refresh_token.as_deref().unwrap_or_default(),
            };
            match self.api.post_unit("/logout", &request).await {
                Ok(()) => info!("signed out"),
                // AuthorizationDenied already cleared the session; fall
                // through to make the clear unconditional either way.
                Err(err) => warn!(%err, "backend logout failed, clearing local session anyway"),
            }
        }

        self.api.session().clear();
        self.cache.clear();
    }

    async fn fetch_profile(&self, user_id: &str) -> ApiResult<Identity> {
        self.api
            .get_json(&format!("/user/currentuser/{user_id}"))
            .await
    }
}

fn auth_error(err: ApiError) -> AuthError {
    match err {
        // Backend rejects bad credentials with a 401; the uniform handler has
        // already cleared the (empty) session by the time we get here.
        ApiError::AuthorizationDenied => AuthError::InvalidCredentials,
        other => AuthError::Backend(other),
    }
}
