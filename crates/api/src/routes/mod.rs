//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                        - Liveness string
//! GET    /health/ready            - Readiness (checks database)
//!
//! # Session
//! POST   /jwt                     - Issue session cookie from posted identity
//! GET    /logout                  - Clear session cookie
//!
//! # Users
//! POST   /users/{email}           - Ensure user (idempotent create, open)
//! PATCH  /users/{email}           - Request seller upgrade (guarded)
//! GET    /users/role/{email}      - Fetch role (guarded)
//! GET    /all-users/{email}       - List users excluding {email} (guarded, admin)
//!
//! # Plants
//! GET    /plants                  - List plants (open)
//! GET    /plants/{id}             - Get one plant (open)
//! POST   /plants                  - Create plant (guarded)
//! PATCH  /plants/quantity/{id}    - Adjust stock (guarded)
//!
//! # Orders
//! POST   /orders                  - Place order (guarded, transactional with stock)
//! GET    /customer-orders/{email} - Enriched order list (guarded)
//! DELETE /orders/{id}             - Cancel order, blocked once delivered (guarded)
//! ```

pub mod orders;
pub mod plants;
pub mod session;
pub mod users;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/jwt", post(session::issue))
        .route("/logout", get(session::revoke))
        .route(
            "/users/{email}",
            post(users::ensure_user).patch(users::request_seller_upgrade),
        )
        .route("/users/role/{email}", get(users::get_role))
        .route("/all-users/{email}", get(users::list_others))
        .route("/plants", get(plants::list).post(plants::create))
        .route("/plants/{id}", get(plants::get_by_id))
        .route("/plants/quantity/{id}", patch(plants::adjust_quantity))
        .route("/orders", post(orders::place))
        .route("/orders/{id}", delete(orders::cancel))
        .route("/customer-orders/{email}", get(orders::list_for_customer))
}

/// Liveness endpoint. Returns a fixed string; checks nothing.
async fn liveness() -> &'static str {
    "plantNet server is running"
}

/// Readiness endpoint. Verifies database connectivity.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
