use super::console::Console;
use crate::{
    api::{ApiClient, ApiError},
    auth::{self, AdminUser, OtpCode},
    notify::{Notice, Notifier},
};
use secrecy::SecretString;

#[derive(Debug)]
pub enum Args {
    RequestCode { email: String },
    Verify { email: String, code: String },
    Login { email: String, password: SecretString },
    Logout,
    Status,
}

/// Execute the auth action.
/// # Errors
/// Returns the validation or request error.
pub async fn execute(args: Args, api: &ApiClient, console: &Console) -> Result<(), ApiError> {
    match args {
        Args::RequestCode { email } => {
            let message = auth::request_otp(api, &email).await?;
            console.notify(Notice::success(message));
            console.notify(Notice::info(format!(
                "Run `fincounsel auth verify --email {} --code <code>` to finish signing in",
                email.trim()
            )));
        }
        Args::Verify { email, code } => {
            let code: OtpCode = code.parse()?;
            let user = auth::verify_otp(api, &email, &code).await?;
            console.notify(Notice::success(signed_in(user.as_ref(), &email)));
        }
        Args::Login { email, password } => {
            let user = auth::login(api, &email, &password).await?;
            console.notify(Notice::success(signed_in(user.as_ref(), &email)));
        }
        Args::Logout => {
            auth::logout(api)?;
            console.notify(Notice::success("Signed out"));
        }
        Args::Status => {
            let session = if api.is_authenticated() {
                "Signed in"
            } else {
                "Not signed in"
            };
            console.notify(Notice::info(format!("{session} ({})", api.base_url())));
        }
    }
    Ok(())
}

fn signed_in(user: Option<&AdminUser>, email: &str) -> String {
    let who = user
        .map(|user| user.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| email.trim());
    format!("Signed in as {who}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_prefers_name() {
        let user = AdminUser {
            name: "Ada".to_string(),
            ..AdminUser::default()
        };
        assert_eq!(signed_in(Some(&user), "a@b.com"), "Signed in as Ada");
        assert_eq!(signed_in(None, " a@b.com "), "Signed in as a@b.com");
        assert_eq!(
            signed_in(Some(&AdminUser::default()), "a@b.com"),
            "Signed in as a@b.com"
        );
    }
}
