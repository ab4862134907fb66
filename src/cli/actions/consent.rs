use super::console::Console;
use crate::{
    api::ApiError,
    notify::{Notice, Notifier},
    store::{CookieConsent, LocalState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Args {
    Set(CookieConsent),
    Show,
}

/// Execute the consent action; only local state is touched.
/// # Errors
/// Returns `ApiError::Storage` if the choice cannot be saved.
pub fn execute(args: Args, state: &LocalState, console: &Console) -> Result<(), ApiError> {
    match args {
        Args::Set(consent) => {
            state.set_cookie_consent(consent)?;
            console.notify(Notice::success(format!("Cookie consent {consent}")));
        }
        Args::Show => {
            let current = state
                .cookie_consent()
                .map_or("not set", CookieConsent::as_str);
            console.notify(Notice::info(format!("Cookie consent: {current}")));
        }
    }
    Ok(())
}
