//! Two-step passwordless login: `AwaitingEmail -> AwaitingOtp -> Authenticated`.
//! Failures keep the current step and record a user-facing error; `back`
//! returns to email entry and clears the code. There is no resend cooldown,
//! so the email step may be submitted repeatedly.

use super::{client, otp::OtpInput, types::AdminUser};
use crate::api::{ApiClient, ApiError};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStep {
    AwaitingEmail,
    AwaitingOtp { email: String },
    Authenticated,
}

#[derive(Debug)]
pub struct OtpFlow {
    step: AuthStep,
    email: String,
    code: OtpInput,
    error: Option<String>,
    notice: Option<String>,
    user: Option<AdminUser>,
}

impl Default for OtpFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: AuthStep::AwaitingEmail,
            email: String::new(),
            code: OtpInput::default(),
            error: None,
            notice: None,
            user: None,
        }
    }

    /// Starts authenticated when a session token is already stored.
    #[must_use]
    pub fn resume(api: &ApiClient) -> Self {
        let mut flow = Self::new();
        if api.is_authenticated() {
            flow.step = AuthStep::Authenticated;
        }
        flow
    }

    #[must_use]
    pub fn step(&self) -> &AuthStep {
        &self.step
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.step, AuthStep::Authenticated)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.trim().to_string();
    }

    #[must_use]
    pub fn code(&self) -> &OtpInput {
        &self.code
    }

    pub fn set_code(&mut self, raw: &str) {
        self.code.set(raw);
    }

    #[must_use]
    pub fn can_submit_code(&self) -> bool {
        matches!(self.step, AuthStep::AwaitingOtp { .. }) && self.code.can_submit()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    /// Requests a code for the entered email and moves to code entry.
    /// To send a fresh code from the code step, call [`OtpFlow::back`] first.
    ///
    /// # Errors
    /// Returns the request error; the flow stays on the email step. Called
    /// from any other step it fails locally without a request.
    pub async fn submit_email(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        if !matches!(self.step, AuthStep::AwaitingEmail) {
            return Err(self.fail(ApiError::validation("A code has already been requested")));
        }

        self.error = None;
        match client::request_otp(api, &self.email).await {
            Ok(message) => {
                debug!("otp requested, awaiting code");
                self.notice = Some(message);
                self.code.clear();
                self.step = AuthStep::AwaitingOtp {
                    email: self.email.clone(),
                };
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Verifies the entered code; success stores the session token.
    ///
    /// # Errors
    /// Returns a validation error when the code is incomplete, or the request
    /// error; the flow stays on the code step.
    pub async fn submit_code(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let AuthStep::AwaitingOtp { email } = &self.step else {
            return Err(self.fail(ApiError::validation("Request a code first")));
        };
        let email = email.clone();

        let Some(code) = self.code.code() else {
            return Err(self.fail(ApiError::validation(
                "Enter the 6-digit code sent to your email",
            )));
        };

        self.error = None;
        match client::verify_otp(api, &email, &code).await {
            Ok(user) => {
                debug!("otp verified, session established");
                self.user = user;
                self.notice = None;
                self.code.clear();
                self.step = AuthStep::Authenticated;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Returns to email entry and clears the entered code.
    pub fn back(&mut self) {
        if matches!(self.step, AuthStep::AwaitingOtp { .. }) {
            self.step = AuthStep::AwaitingEmail;
        }
        self.code.clear();
        self.error = None;
        self.notice = None;
    }

    fn fail(&mut self, err: ApiError) -> ApiError {
        self.error = Some(err.to_string());
        err
    }
}
