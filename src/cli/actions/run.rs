use crate::cli::{
    actions::{
        Action, auth, consent, console::Console, content, engagement, moderation, outreach,
        version,
    },
    globals::GlobalArgs,
};
use crate::notify::{Notice, Notifier};
use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

/// Execute the provided action.
// Single dispatch point for all CLI actions. Local setup problems (state file,
// base URL) are errors; API outcomes become notices.
/// # Errors
/// Returns an error if the state file or API configuration is unusable.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<ExitCode> {
    let console = Console;

    let outcome = match action {
        Action::Version => {
            version::execute();
            return Ok(ExitCode::SUCCESS);
        }
        Action::Consent(args) => consent::execute(args, &globals.state()?, &console),
        action => {
            let api = globals.client()?;
            debug!("using API at {}", api.base_url());
            match action {
                Action::Auth(args) => auth::execute(args, &api, &console).await,
                Action::Content(args) => content::execute(args, &api, &console).await,
                Action::Moderate(args) => moderation::moderate(args, &api, &console).await,
                Action::Submit(args) => moderation::submit(args, &api, &console).await,
                Action::Like(args) => engagement::execute(args, &api, &console).await,
                Action::Outreach(args) => outreach::execute(args, &api, &console).await,
                Action::Version | Action::Consent(_) => Ok(()),
            }
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            console.notify(Notice::error(err.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}
