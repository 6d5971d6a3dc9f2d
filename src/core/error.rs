use thiserror::Error;

/// Error taxonomy shared by every persistence backend.
///
/// Handlers and client stores only ever see these variants; backend-specific
/// failures are folded into `Backend` at the gateway boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("Backend failure: {0}")]
    Backend(String),
}

impl GatewayError {
    /// Not-found error carrying the entity name, e.g. `"Deck not found"`.
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(entity.to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl<T> From<std::sync::PoisonError<T>> for GatewayError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
