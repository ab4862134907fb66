//! # Fincounsel
//!
//! Client library and admin console for the Fincounsel advisory website API.
//!
//! ## Transport
//!
//! Every call goes through [`api::ApiClient`], which resolves the base URL
//! (local or remote, with an explicit override), attaches the stored bearer
//! token and unwraps the `{ success, data, error, message }` envelope. Failed
//! responses surface a best-effort message that never names the endpoint, the
//! base URL or the HTTP status.
//!
//! ## Sessions
//!
//! Administrators sign in with an emailed one-time code ([`auth::OtpFlow`]).
//! The token is kept in [`store::LocalState`] and cleared on logout or when the
//! server rejects it.
//!
//! ## Visitor content
//!
//! Reviews, testimonials and comments are submitted pending and appear only
//! once approved ([`moderation`]). Likes are keyed by an anonymous identifier
//! kept in local state ([`engagement`]).

pub mod api;
pub mod auth;
pub mod cli;
pub mod content;
pub mod engagement;
pub mod moderation;
pub mod notify;
pub mod store;
pub mod validation;

#[cfg(test)]
mod test_support;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with("fincounsel/"));
        assert!(APP_USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
