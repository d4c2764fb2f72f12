use std::sync::Arc;

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::session::SessionStore;

/// Common prefix for every backend endpoint.
pub const API_PREFIX: &str = "/v1/api";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 from any endpoint. The session has already been cleared and the
    /// navigator pointed at the login entry point by the time the caller
    /// sees this.
    #[error("authorization denied, session cleared")]
    AuthorizationDenied,
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// Navigation requested from outside the normal routing flow.
pub trait Navigator: Send + Sync {
    /// Sends the user to the login entry point.
    fn redirect_to_login(&self);
}

/// Navigator for headless callers (CLI, tests) with no routing shell.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect_to_login(&self) {
        debug!("redirect to login requested");
    }
}

/// Single point of outbound HTTP communication. Attaches the current bearer
/// token to every request and translates failures uniformly; a 401 response
/// clears the session and forces navigation to login no matter which caller
/// triggered it.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_http_client(Client::new(), base_url, session, navigator)
    }

    pub fn with_http_client(
        http: Client,
        base_url: impl Into<String>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, self.url(path));

        // Read the token at send time, never at construction: credentials
        // rotate across the session's lifetime.
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!(path, "authorization denied, clearing session");
            self.session.clear();
            self.navigator.redirect_to_login();
            return Err(ApiError::AuthorizationDenied);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed { status, body });
        }

        Ok(response)
    }

    async fn into_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request::<()>(Method::GET, path, None).await?;
        Self::into_json(response).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path, Some(body)).await?;
        Self::into_json(response).await
    }

    pub async fn post_unit<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    pub async fn put_unit<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    pub async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.request::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }
}
