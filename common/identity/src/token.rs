use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};
use crate::identity::Identity;
use crate::role::Role;

/// Raw claims as they appear in the backend's access tokens.
#[derive(Debug, Deserialize)]
struct ClaimsRepr {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    preferred_username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    given_name: Option<String>,
    #[serde(default)]
    family_name: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    family_phone: Option<String>,
    #[serde(default)]
    realm_access: Option<RealmAccess>,
}

#[derive(Debug, Deserialize)]
struct RealmAccess {
    #[serde(default)]
    roles: Vec<String>,
}

/// Extracts an [`Identity`] from a bearer token without contacting the
/// network and without verifying the signature — signature checks are the
/// backend's responsibility, the client trusts transport security only.
///
/// The role is taken from the first realm-role entry when it names a known
/// role; otherwise the identity degrades to [`Role::FALLBACK`].
pub fn decode_identity(token: &str) -> DecodeResult<Identity> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    // Tokens are unpadded base64url, but tolerate encoders that pad.
    let payload = URL_SAFE_NO_PAD
        .decode(segments[1].trim_end_matches('='))
        .map_err(|err| DecodeError::Payload(err.to_string()))?;

    let claims: ClaimsRepr =
        serde_json::from_slice(&payload).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;

    let id = match claims.sub {
        Some(sub) if !sub.trim().is_empty() => sub,
        _ => return Err(DecodeError::MissingSubject),
    };

    let role = claims
        .realm_access
        .and_then(|access| access.roles.into_iter().next())
        .map(|raw| match raw.parse::<Role>() {
            Ok(role) => role,
            Err(unknown) => {
                debug!(%unknown, "realm role not recognised, using fallback");
                Role::FALLBACK
            }
        })
        .unwrap_or(Role::FALLBACK);

    Ok(Identity {
        id,
        username: claims.preferred_username.unwrap_or_default(),
        email: claims.email.unwrap_or_default(),
        first_name: claims.given_name.unwrap_or_default(),
        last_name: claims.family_name.unwrap_or_default(),
        role,
        phone: claims.phone_number,
        family_phone: claims.family_phone,
    })
}
