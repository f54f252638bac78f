//! Domain-specific error types and error handling.
//!
//! The taxonomy distinguishes "token is false" cases (expired, malformed,
//! bad signature, revoked) from infrastructure failures. The token service
//! folds the former into `Ok(false)` results; only infrastructure failures
//! surface as errors, so callers can tell "token rejected" apart from
//! "could not check token".

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token revoked")]
    Revoked,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// The revocation store could not be reached or failed mid-operation.
    /// Distinct from token falsity: the token was not judged.
    #[error("Revocation store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
