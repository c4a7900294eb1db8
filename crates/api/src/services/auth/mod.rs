//! Session credential issuing and verification.
//!
//! The session credential is a signed JWT carrying the caller-supplied
//! identity (minimally an email), delivered as an http-only cookie. Issuing
//! and revoking touch no store; verification happens per-request in the
//! [`crate::middleware::auth::RequireAuth`] extractor.

pub mod error;

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use plantnet_core::Email;

use crate::config::Environment;

pub use error::AuthError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Session lifetime: 365 days.
const SESSION_TTL_DAYS: i64 = 365;

/// Claim names the issuer owns. Client-supplied values under these keys
/// are discarded at issue time; flattening them alongside the computed
/// stamps would produce duplicate-key claims the decoder rejects.
const RESERVED_CLAIMS: &[&str] = &["exp", "iat"];

/// The authenticated identity attached to a request by the access guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Email the credential was issued for.
    pub email: Email,
    /// Any extra fields the client put in the identity payload at issue
    /// time. Carried opaquely; nothing in the backend interprets them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JWT claims: the identity plus standard expiry/issued-at stamps.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    email: Email,
    exp: i64,
    iat: i64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Signing and verification keys for session tokens.
///
/// Both keys are derived from the configured secret once at startup and
/// shared via [`crate::state::AppState`].
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    /// Derive the key pair from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Mint a signed session token for `identity` with the standard TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenCreation`] if signing fails.
    pub fn issue(&self, identity: Identity) -> Result<String, AuthError> {
        let now = Utc::now();
        let mut extra = identity.extra;
        for claim in RESERVED_CLAIMS {
            extra.remove(*claim);
        }
        let claims = Claims {
            email: identity.email,
            exp: (now + Duration::days(SESSION_TTL_DAYS)).timestamp(),
            iat: now.timestamp(),
            extra,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(AuthError::TokenCreation)
    }

    /// Verify a token's signature and expiry and recover the identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] on any verification failure;
    /// callers never learn whether the signature or the expiry was at fault.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(Identity {
            email: data.claims.email,
            extra: data.claims.extra,
        })
    }
}

/// Build the session cookie carrying a freshly issued token.
///
/// Cross-site deployments need `SameSite=None; Secure` for the browser to
/// send the cookie from the frontend origin; local development uses
/// `Strict` over plain http.
#[must_use]
pub fn session_cookie(token: String, environment: Environment) -> Cookie<'static> {
    base_cookie(token, environment, time::Duration::days(SESSION_TTL_DAYS))
}

/// Build the cookie that revokes the session (expires immediately).
///
/// Idempotent by construction: setting an already-absent cookie to an empty
/// expired value is harmless.
#[must_use]
pub fn removal_cookie(environment: Environment) -> Cookie<'static> {
    base_cookie(String::new(), environment, time::Duration::ZERO)
}

fn base_cookie(value: String, environment: Environment, max_age: time::Duration) -> Cookie<'static> {
    let same_site = if environment.is_production() {
        SameSite::None
    } else {
        SameSite::Strict
    };
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(environment.is_production())
        .same_site(same_site)
        .max_age(max_age)
        .build()
}
