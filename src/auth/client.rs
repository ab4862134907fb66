//! Client wrappers for the auth endpoints. These are the only calls that
//! mutate the stored session token: a successful OTP verification or legacy
//! login persists it, logout clears it.

use super::{
    otp::OtpCode,
    types::{AdminUser, AuthResponse, LoginRequest, OtpRequest, OtpVerifyRequest},
};
use crate::{
    api::{ApiClient, ApiError, ApiResponse},
    validation::{require, require_email},
};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{info, instrument, warn};

pub const OTP_SENT_MESSAGE: &str = "A verification code has been sent to your email";

/// Asks the server to email a one-time code. Returns the confirmation text.
///
/// # Errors
/// Returns `ApiError::Validation` for a malformed email, or any transport error.
#[instrument(skip_all)]
pub async fn request_otp(api: &ApiClient, email: &str) -> Result<String, ApiError> {
    require_email(email)?;

    let response: ApiResponse<Value> = api
        .post("/auth/request-otp", &OtpRequest {
            email: email.trim(),
        })
        .await?;

    Ok(response
        .message()
        .map_or_else(|| OTP_SENT_MESSAGE.to_string(), str::to_string))
}

/// Exchanges the emailed code for a session token and persists it.
///
/// # Errors
/// Returns a transport error, or `ApiError::Transport` if the response carries
/// no token.
#[instrument(skip_all)]
pub async fn verify_otp(
    api: &ApiClient,
    email: &str,
    code: &OtpCode,
) -> Result<Option<AdminUser>, ApiError> {
    require_email(email)?;

    let response: AuthResponse = api
        .send(
            Method::POST,
            "/auth/verify-otp",
            Some(&OtpVerifyRequest {
                email: email.trim(),
                otp: code.as_str(),
            }),
            None,
        )
        .await?;

    store_session(api, response)
}

/// Password login kept for older admin accounts.
///
/// # Errors
/// Returns a validation error for blank fields, a transport error, or
/// `ApiError::Transport` if the response carries no token.
#[instrument(skip_all)]
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<Option<AdminUser>, ApiError> {
    require_email(email)?;
    require(password.expose_secret(), "Password")?;

    let response: AuthResponse = api
        .send(
            Method::POST,
            "/auth/login",
            Some(&LoginRequest {
                email: email.trim(),
                password: password.expose_secret(),
            }),
            None,
        )
        .await?;

    store_session(api, response)
}

/// Forgets the stored session token.
///
/// # Errors
/// Returns `ApiError::Storage` if the token cannot be removed.
pub fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.state().clear_session_token()?;
    info!("session cleared");
    Ok(())
}

fn store_session(api: &ApiClient, response: AuthResponse) -> Result<Option<AdminUser>, ApiError> {
    let (token, user) = response.into_parts();
    let token = token.ok_or_else(|| {
        warn!("auth response did not include a token");
        ApiError::Transport
    })?;

    api.state().set_session_token(&SecretString::from(token))?;
    info!("session established");

    Ok(user)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{can_bind_localhost, client_for};
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn request_otp_rejects_bad_email_without_network() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = request_otp(&client, "not-an-email").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn verify_otp_persists_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/verify-otp"))
            .and(body_json(json!({ "email": "a@b.com", "otp": "123456" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "token": "session-token",
                    "user": { "_id": "u1", "email": "a@b.com", "name": "Ada" }
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let code: OtpCode = "123456".parse()?;
        let user = verify_otp(&client, "a@b.com", &code).await?;

        assert_eq!(user.map(|user| user.name), Some("Ada".to_string()));
        assert_eq!(
            client.state().session_token().unwrap().expose_secret(),
            "session-token"
        );
        Ok(())
    }

    #[tokio::test]
    async fn wrong_code_keeps_session_empty() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/verify-otp"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "error": "Invalid or expired code"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let code: OtpCode = "000000".parse()?;
        let err = verify_otp(&client, "a@b.com", &code).await.unwrap_err();

        assert_eq!(err, ApiError::Request("Invalid or expired code".to_string()));
        assert!(!client.is_authenticated());
        Ok(())
    }

    #[tokio::test]
    async fn legacy_login_reads_top_level_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "token": "legacy-token"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        login(
            &client,
            "admin@fincounsel.app",
            &SecretString::from("hunter2".to_string()),
        )
        .await?;
        assert!(client.is_authenticated());

        logout(&client)?;
        assert!(!client.is_authenticated());
        Ok(())
    }

    #[tokio::test]
    async fn missing_token_is_not_a_session() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = login(
            &client,
            "admin@fincounsel.app",
            &SecretString::from("hunter2".to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::Transport);
        assert!(!client.is_authenticated());
        Ok(())
    }
}
