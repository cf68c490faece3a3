use thiserror::Error;

/// Failure of a remote collection call, already in displayable form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No credential in the session; raised before any request is built
    #[error("Token akses tidak ditemukan")]
    Auth,

    /// Non-2xx answer. `message` is the body's message or a per-operation fallback.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
