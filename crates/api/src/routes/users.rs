//! User directory handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use plantnet_core::{Email, Role};

use crate::db::UserRepository;
use crate::db::users::{EnsureOutcome, NewProfile};
use crate::error::{AppError, Result};
use crate::middleware::auth::{RequireAuth, require_role};
use crate::models::User;
use crate::state::AppState;

/// Optional profile fields accepted at first contact.
#[derive(Debug, Default, Deserialize)]
pub struct EnsureUserRequest {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Response for the ensure-user operation, distinguishing a fresh insert
/// from an already-known email.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnsureUserResponse {
    Created { user: User },
    AlreadyExists,
}

/// Response for the role lookup.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Option<Role>,
}

/// `POST /users/{email}` - idempotent account bootstrap (open).
///
/// # Errors
///
/// Returns 400 for a malformed email, 500 on store failure.
pub async fn ensure_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<EnsureUserRequest>,
) -> Result<(StatusCode, Json<EnsureUserResponse>)> {
    let email = parse_email(&email)?;
    let outcome = UserRepository::new(state.pool())
        .ensure(
            &email,
            NewProfile {
                name: body.name,
                image: body.image,
            },
        )
        .await?;

    Ok(match outcome {
        EnsureOutcome::Created(user) => (
            StatusCode::CREATED,
            Json(EnsureUserResponse::Created { user }),
        ),
        EnsureOutcome::AlreadyExists => (StatusCode::OK, Json(EnsureUserResponse::AlreadyExists)),
    })
}

/// `PATCH /users/{email}` - request the seller upgrade (guarded).
///
/// # Errors
///
/// Returns 400 if the user is unknown or has already requested the
/// upgrade; the precondition is checked atomically in the store.
pub async fn request_seller_upgrade(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<StatusCode> {
    let email = parse_email(&email)?;
    let updated = UserRepository::new(state.pool())
        .request_seller_upgrade(&email)
        .await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::BadRequest(
            "upgrade already requested, please wait for admin approval".to_owned(),
        ))
    }
}

/// `GET /users/role/{email}` - fetch a user's role (guarded).
///
/// An unknown email is an empty result (`role: null`), not an error.
///
/// # Errors
///
/// Returns 400 for a malformed email, 500 on store failure.
pub async fn get_role(
    RequireAuth(_identity): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<RoleResponse>> {
    let email = parse_email(&email)?;
    let role = UserRepository::new(state.pool()).role_of(&email).await?;
    Ok(Json(RoleResponse { role }))
}

/// `GET /all-users/{email}` - list all users except `{email}` (guarded,
/// admin only).
///
/// The guard authenticates; the explicit role check authorizes. The path
/// email only shapes the listing, the admin check runs against the
/// caller's own identity.
///
/// # Errors
///
/// Returns 403 if the caller is not an admin.
pub async fn list_others(
    RequireAuth(identity): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<User>>> {
    require_role(&state, &identity, Role::Admin).await?;
    let email = parse_email(&email)?;
    let users = UserRepository::new(state.pool()).list_others(&email).await?;
    Ok(Json(users))
}

fn parse_email(raw: &str) -> Result<Email> {
    Email::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))
}
