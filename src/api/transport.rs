//! Single chokepoint for every outbound API call.
//!
//! Flow Overview:
//! - Resolve the endpoint against the configured base URL.
//! - Attach JSON headers and, when a session token is stored, a bearer credential.
//! - Send, read the body, and normalize the outcome: non-success statuses and
//!   `success: false` envelopes become `ApiError::Request` carrying the body's
//!   `error` field; network and decoding failures become `ApiError::Transport`.
//! - A 401 on an authenticated call clears the stored token and surfaces as
//!   `ApiError::Unauthorized`. Sign-in endpoints are exempt: their 401 means
//!   bad credentials and keeps the server's message.
//!
//! Endpoints, statuses and raw causes are logged through `tracing` and never
//! copied into the error returned to callers.

use super::{ApiConfig, ApiError, ApiResponse, error::GENERIC_FAILURE};
use crate::{APP_USER_AGENT, store::LocalState};
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap},
};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::fmt;
use tracing::{Instrument, debug, info_span, warn};
use url::Url;

/// Maximum number of error characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

/// Endpoints under this prefix answer 401 for a wrong code or password.
const AUTH_PREFIX: &str = "/auth/";

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    state: LocalState,
}

impl ApiClient {
    /// Build a client for the resolved base URL.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig, state: LocalState) -> Result<Self, ApiError> {
        let base_url = config.base_url()?;
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| {
                warn!("failed to build HTTP client: {}", err);
                ApiError::Config("Failed to initialize HTTP client".to_string())
            })?;

        Ok(Self {
            http,
            base_url,
            state,
        })
    }

    #[must_use]
    pub fn state(&self) -> &LocalState {
        &self.state
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.has_session()
    }

    /// Fails fast for admin operations when no session token is stored.
    ///
    /// # Errors
    /// Returns `ApiError::Unauthorized` when no token is present.
    pub fn require_session(&self) -> Result<(), ApiError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim().trim_start_matches('/'))
    }

    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(Method::GET, path, None::<&Value>, None).await
    }

    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body), None).await
    }

    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body), None).await
    }

    /// # Errors
    /// See [`ApiClient::send`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send(Method::DELETE, path, None::<&Value>, None).await
    }

    /// Sends a request and decodes the whole response body as `T`.
    ///
    /// # Errors
    /// Returns `ApiError::Request` for failed responses, `ApiError::Unauthorized`
    /// when a stored token is rejected, and `ApiError::Transport` for network,
    /// encoding or decoding failures.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| {
                warn!("failed to encode request body: {}", err);
                ApiError::Transport
            })?;

        let value = self.execute(method, path, body, headers).await?;

        serde_json::from_value(value).map_err(|err| {
            warn!("unexpected response shape for {}: {}", path, err);
            ApiError::Transport
        })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint_url(path);
        let span = info_span!("api.request", http.method = %method, path = %path);

        async {
            let token = self.state.session_token();

            let mut request = self
                .http
                .request(method, &url)
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json");
            if let Some(token) = &token {
                request = request.bearer_auth(token.expose_secret());
            }
            if let Some(headers) = headers {
                request = request.headers(headers);
            }
            if let Some(body) = &body {
                request = request.json(body);
            }

            let response = request.send().await.map_err(|err| {
                warn!("request to {} failed: {}", url, err);
                ApiError::Transport
            })?;

            let status = response.status();
            let text = response.text().await.map_err(|err| {
                warn!("failed to read response from {}: {}", url, err);
                ApiError::Transport
            })?;
            debug!("{} responded with {}", url, status);

            let parsed = if text.trim().is_empty() {
                None
            } else {
                serde_json::from_str::<Value>(&text).ok()
            };

            if status == StatusCode::UNAUTHORIZED && token.is_some() && !is_sign_in(path) {
                warn!("session token rejected by {}", url);
                if let Err(err) = self.state.clear_session_token() {
                    warn!("failed to clear rejected session token: {}", err);
                }
                return Err(ApiError::Unauthorized);
            }

            if !status.is_success() {
                warn!("{} returned {}", url, status);
                return Err(ApiError::Request(
                    self.failure_message(parsed.as_ref(), path),
                ));
            }

            let body = match parsed {
                Some(body) => body,
                None if text.trim().is_empty() => json!({ "success": true }),
                None => {
                    warn!("response from {} was not valid JSON", url);
                    return Err(ApiError::Transport);
                }
            };

            if body.get("success").and_then(Value::as_bool) == Some(false) {
                warn!("{} reported failure", url);
                return Err(ApiError::Request(self.failure_message(Some(&body), path)));
            }

            Ok(body)
        }
        .instrument(span)
        .await
    }

    /// Picks the body's `error` field unless it would reveal where the
    /// request went; falls back to a generic message.
    fn failure_message(&self, body: Option<&Value>, path: &str) -> String {
        body.and_then(|body| body.get("error"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .filter(|message| !self.reveals_location(message, path))
            .map(|message| message.chars().take(MAX_ERROR_CHARS).collect())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }

    fn reveals_location(&self, message: &str, path: &str) -> bool {
        let lowered = message.to_lowercase();
        let base = self.base_url.as_str().trim_end_matches('/').to_lowercase();
        let request_path = format!(
            "/{}",
            path.split('?')
                .next()
                .unwrap_or_default()
                .trim()
                .trim_start_matches('/')
                .to_lowercase()
        );

        lowered.contains(&base)
            || self
                .base_url
                .host_str()
                .is_some_and(|host| lowered.contains(&host.to_lowercase()))
            || (request_path.len() > 1 && lowered.contains(&request_path))
    }
}

fn is_sign_in(path: &str) -> bool {
    format!("/{}", path.trim().trim_start_matches('/')).starts_with(AUTH_PREFIX)
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
