//! Error types for the authorization pipeline. Every variant ends in a denied connection.

use thiserror::Error;

/// Faults raised while talking to the auth service or the user directory.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Auth service error: {0}")]
    AuthService(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
