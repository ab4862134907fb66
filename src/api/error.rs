use crate::store::StoreError;
use thiserror::Error;
use tracing::warn;

/// Message used when a failed response carries no usable `error` field.
pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

/// User-facing error for every API call. Messages never carry the endpoint,
/// base URL or HTTP status; those details go to the log instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The server answered with a failure; the message is best effort.
    #[error("{0}")]
    Request(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Unable to reach the server. Please try again.")]
    Transport,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unable to save local state")]
    Storage,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        warn!("local state error: {}", err);
        Self::Storage
    }
}
