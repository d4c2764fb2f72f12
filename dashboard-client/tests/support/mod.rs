use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use common_identity::{Identity, Role};
use dashboard_client::api::{ApiClient, Navigator};
use dashboard_client::cache::QueryCache;
use dashboard_client::session::SessionStore;
use dashboard_client::AppContext;

/// Fabricates an unsigned access token carrying the given subject and realm
/// role. The client never verifies signatures, so a placeholder third
/// segment is enough.
#[allow(dead_code)]
pub fn access_token(sub: &str, role: &str) -> String {
    let payload = serde_json::json!({
        "sub": sub,
        "preferred_username": "alice",
        "email": "alice@example.com",
        "given_name": "Alice",
        "family_name": "Brown",
        "realm_access": { "roles": [role] }
    });
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"RS256\",\"typ\":\"JWT\"}");
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

#[allow(dead_code)]
pub fn identity(role: Role) -> Identity {
    Identity {
        id: "42".to_string(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Brown".to_string(),
        role,
        phone: None,
        family_phone: None,
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    #[allow(dead_code)]
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wires an app context against a mock backend with an in-memory session.
#[allow(dead_code)]
pub fn app_against(base_url: &str, session: SessionStore, navigator: Arc<dyn Navigator>) -> AppContext {
    let api = ApiClient::new(base_url, session.clone(), navigator);
    AppContext::wire(session, api, QueryCache::default(), "/register")
}
