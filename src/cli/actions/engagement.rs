use super::console::Console;
use crate::{
    api::{ApiClient, ApiError},
    engagement::{LikeTarget, toggle_like},
    notify::{Notice, Notifier},
};

#[derive(Debug)]
pub struct Args {
    pub target: LikeTarget,
}

/// Execute the like toggle and print the server-reported state.
/// # Errors
/// Returns the request error; the cached liked state is left as it was.
pub async fn execute(args: Args, api: &ApiClient, console: &Console) -> Result<(), ApiError> {
    let status = toggle_like(api, &args.target).await?;
    console.notify(Notice::info(format!("{} {}", status.icon(), status.likes)));
    Ok(())
}
