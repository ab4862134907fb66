use super::console::Console;
use crate::{
    api::{ApiClient, ApiError},
    content::{self, ContactMessage, NewsletterIssue},
    notify::{Notice, Notifier},
};

#[derive(Debug)]
pub enum Args {
    Contact(ContactMessage),
    Subscribe { email: String },
    Subscribers,
    Send(NewsletterIssue),
}

/// Execute the contact or newsletter action.
/// # Errors
/// Returns the validation or request error.
pub async fn execute(args: Args, api: &ApiClient, console: &Console) -> Result<(), ApiError> {
    match args {
        Args::Contact(message) => {
            let confirmation = content::submit_contact(api, &message).await?;
            console.notify(Notice::success(confirmation));
        }
        Args::Subscribe { email } => {
            let confirmation = content::subscribe(api, &email).await?;
            console.notify(Notice::success(confirmation));
        }
        Args::Subscribers => {
            let subscribers = content::subscribers(api).await?;
            console.json(&subscribers)?;
        }
        Args::Send(issue) => {
            let confirmation = content::send_newsletter(api, &issue).await?;
            console.notify(Notice::success(confirmation));
        }
    }
    Ok(())
}
