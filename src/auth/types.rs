//! Request and response payloads for the auth endpoints. Codes, passwords and
//! tokens travel through these types, so they must never be logged.

use crate::content::record::record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct OtpRequest<'a> {
    pub email: &'a str,
}

#[derive(Clone, Serialize)]
pub struct OtpVerifyRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

record! {
    #[derive(Eq)]
    pub struct AdminUser {
        pub email: String,
        pub name: String,
        pub role: String,
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AuthPayload {
    pub token: Option<String>,
    pub user: Option<AdminUser>,
}

/// Verify and login responses carry the token either inside `data` or at the
/// top level of the envelope.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AuthResponse {
    pub data: Option<AuthPayload>,
    pub token: Option<String>,
    pub user: Option<AdminUser>,
}

impl AuthResponse {
    pub(crate) fn into_parts(self) -> (Option<String>, Option<AdminUser>) {
        let (nested_token, nested_user) = self
            .data
            .map(|data| (data.token, data.user))
            .unwrap_or_default();

        let token = nested_token
            .or(self.token)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        (token, nested_user.or(self.user))
    }
}
