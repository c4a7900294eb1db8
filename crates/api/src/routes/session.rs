//! Session (credential issuer) handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::error::Result;
use crate::services::auth::{self, Identity};
use crate::state::AppState;

/// Response body for both session operations.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    success: bool,
}

/// Issue a session cookie from a posted identity payload.
///
/// The payload must contain at least an email; any extra fields ride along
/// inside the token untouched. Nothing is written to the store.
///
/// # Errors
///
/// Returns an error if the payload has no valid email or signing fails.
pub async fn issue(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Identity>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    let token = state.session_keys().issue(identity)?;
    let cookie = auth::session_cookie(token, state.config().environment);
    Ok((jar.add(cookie), Json(SessionResponse { success: true })))
}

/// Revoke the session by expiring the cookie immediately.
///
/// Idempotent: succeeds whether or not a session existed.
pub async fn revoke(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let cookie = auth::removal_cookie(state.config().environment);
    (jar.add(cookie), Json(SessionResponse { success: true }))
}
