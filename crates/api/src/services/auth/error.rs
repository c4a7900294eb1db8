//! Authentication error types.

use thiserror::Error;

/// Errors from issuing or verifying session credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session cookie was presented.
    #[error("no session credential")]
    MissingToken,

    /// The presented token failed signature or expiry verification.
    #[error("invalid session credential")]
    InvalidToken,

    /// Signing a new token failed. This indicates a key problem, not bad
    /// client input.
    #[error("failed to sign session credential: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),
}
