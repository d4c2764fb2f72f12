use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REGISTER_PATH: &str = "/register";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin; `/v1/api` is appended per request.
    pub base_url: String,
    /// File the session is persisted to across restarts.
    pub session_file: PathBuf,
    pub http_timeout: Duration,
    /// Registration endpoint; older backends expose `/create`.
    pub register_path: String,
}

pub fn load_client_config() -> Result<ClientConfig> {
    let base_url = env::var("DASHBOARD_API_BASE_URL")
        .ok()
        .and_then(|value| normalize_optional(&value))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let session_file = match env::var("DASHBOARD_SESSION_FILE")
        .ok()
        .and_then(|value| normalize_optional(&value))
    {
        Some(path) => PathBuf::from(path),
        None => default_session_file()?,
    };

    let http_timeout = env::var("DASHBOARD_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|value| normalize_optional(&value))
        .map(|value| {
            value
                .parse::<u64>()
                .context("Failed to parse DASHBOARD_HTTP_TIMEOUT_SECS")
        })
        .transpose()?
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    let register_path = env::var("DASHBOARD_REGISTER_PATH")
        .ok()
        .and_then(|value| normalize_optional(&value))
        .unwrap_or_else(|| DEFAULT_REGISTER_PATH.to_string());

    Ok(ClientConfig {
        base_url,
        session_file,
        http_timeout,
        register_path,
    })
}

fn default_session_file() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine a data directory for the session file")?;
    Ok(base.join("education-dashboard").join("session.json"))
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_values() {
        assert_eq!(normalize_optional("   "), None);
        assert_eq!(normalize_optional(""), None);
        assert_eq!(
            normalize_optional(" http://api.local "),
            Some("http://api.local".to_string())
        );
    }
}
