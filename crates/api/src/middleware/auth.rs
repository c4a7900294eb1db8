//! Access guard: authentication extractors.
//!
//! Guarded handlers take [`RequireAuth`] as their first extractor. It runs
//! from request parts, before any body extraction and before the handler
//! touches the store, so an unauthenticated request is rejected with 401
//! without any database access. Verification is per-request; nothing is
//! globally serialized.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use plantnet_core::Role;

use crate::error::AppError;
use crate::services::auth::{AuthError, Identity, SESSION_COOKIE};
use crate::state::AppState;

/// Extractor that requires a valid session credential.
///
/// # Example
///
/// ```rust,ignore
/// async fn guarded_handler(
///     RequireAuth(identity): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("hello, {}", identity.email)
/// }
/// ```
pub struct RequireAuth(pub Identity);

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(SESSION_COOKIE).ok_or(AuthError::MissingToken)?;
        let identity = app.session_keys().verify(cookie.value())?;
        Ok(Self(identity))
    }
}

/// Assert that the authenticated caller holds the given role.
///
/// Authentication (a valid credential) and authorization (the role permits
/// the action) are separate checks; admin-only operations call this after
/// the guard has run.
///
/// # Errors
///
/// Returns `AppError::Forbidden` if the caller's role does not match, or
/// if the caller has no directory record at all.
pub async fn require_role(
    state: &AppState,
    identity: &Identity,
    role: Role,
) -> Result<(), AppError> {
    let actual = crate::db::UserRepository::new(state.pool())
        .role_of(&identity.email)
        .await?;
    if actual == Some(role) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "this action requires the {role} role"
        )))
    }
}
