pub mod auth;
pub mod consent;
pub mod console;
pub mod content;
pub mod engagement;
pub mod moderation;
pub mod outreach;
pub mod version;

// The match over every action lives in `run` so this module stays a plain list.
mod run;

use crate::cli::globals::GlobalArgs;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Content(content::Args),
    Moderate(moderation::ModerateArgs),
    Submit(moderation::SubmitArgs),
    Like(engagement::Args),
    Outreach(outreach::Args),
    Consent(consent::Args),
    Version,
}

impl Action {
    /// Execute the action. API failures are printed as notices and reported
    /// through the exit code.
    /// # Errors
    /// Returns an error if the state file cannot be opened or the API
    /// configuration is invalid.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<ExitCode> {
        run::execute(self, globals).await
    }
}
