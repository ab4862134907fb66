use crate::{
    api::ApiError,
    notify::{Notice, NoticeLevel, Notifier},
};
use serde::Serialize;
use tracing::warn;

/// Prints notices: success and info to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct Console;

impl Notifier for Console {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => eprintln!("error: {notice}"),
            NoticeLevel::Success | NoticeLevel::Info => println!("{notice}"),
        }
    }
}

impl Console {
    /// Pretty-prints a record or listing to stdout.
    ///
    /// # Errors
    /// Returns `ApiError::Transport` if the value cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), ApiError> {
        let rendered = serde_json::to_string_pretty(value).map_err(|err| {
            warn!("failed to render output: {}", err);
            ApiError::Transport
        })?;
        println!("{rendered}");
        Ok(())
    }
}
