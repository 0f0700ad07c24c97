use thiserror::Error;

/// Errors surfaced by the player service to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input: missing field, out-of-range value, bad id
    #[error("{0}")]
    BadRequest(String),

    /// The referenced player does not exist
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
