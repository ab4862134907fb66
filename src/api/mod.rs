//! REST client for the firm's content API: base URL resolution, the shared
//! response envelope, bearer credentials and error normalization.

mod config;
mod envelope;
mod error;
mod transport;

pub use self::config::{
    ApiConfig, ApiEnvironment, ConfigOverrides, DEFAULT_LOCAL_API_URL, DEFAULT_REMOTE_API_URL,
};
pub use self::envelope::ApiResponse;
pub use self::error::{ApiError, GENERIC_FAILURE};
pub use self::transport::ApiClient;

/// Validates an identifier before it is placed in a URL path.
///
/// # Errors
/// Returns `ApiError::Validation` for empty ids or ids containing URL
/// delimiters or whitespace.
pub fn path_segment(id: &str) -> Result<&str, ApiError> {
    let id = id.trim();
    if id.is_empty()
        || id
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '/' | '?' | '#' | '%' | '\\'))
    {
        return Err(ApiError::validation("Invalid identifier"));
    }
    Ok(id)
}
