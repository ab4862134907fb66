use super::ApiError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Uniform `{ success, data, error, message }` wrapper shared by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

const fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Returns the payload of an endpoint that declares one.
    ///
    /// # Errors
    /// Returns `ApiError::Transport` when `data` is missing.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or_else(|| {
            warn!("successful response did not include a payload");
            ApiError::Transport
        })
    }

    /// Server-provided confirmation text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}
