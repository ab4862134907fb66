//! Transient user notifications. Every call site that talks to the API turns
//! its outcome into a `Notice` instead of propagating raw errors, so a failed
//! request never takes the surrounding interaction down with it.

use crate::api::ApiError;
use std::{
    collections::VecDeque,
    fmt,
    sync::{Mutex, PoisonError},
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NoticeLevel::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// In-memory toast stack, drained by whatever renders notifications.
#[derive(Debug, Default)]
pub struct ToastQueue {
    notices: Mutex<VecDeque<Notice>>,
}

impl ToastQueue {
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .back()
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        debug!("notice ({:?}): {}", notice.level, notice.message);
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(notice);
    }
}

/// Converts an API outcome into a notice, returning the value on success.
pub fn report<T>(
    notifier: &dyn Notifier,
    result: Result<T, ApiError>,
    success: impl Into<String>,
) -> Option<T> {
    match result {
        Ok(value) => {
            notifier.notify(Notice::success(success));
            Some(value)
        }
        Err(err) => {
            notifier.notify(Notice::error(err.to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_success_pushes_success_notice() {
        let toasts = ToastQueue::default();
        let value = report(&toasts, Ok::<_, ApiError>(7), "Saved");
        assert_eq!(value, Some(7));
        assert_eq!(toasts.last(), Some(Notice::success("Saved")));
    }

    #[test]
    fn report_error_pushes_error_notice() {
        let toasts = ToastQueue::default();
        let value: Option<()> = report(&toasts, Err(ApiError::Unauthorized), "Saved");
        assert_eq!(value, None);

        let notices = toasts.drain();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
        assert_eq!(notices[0].message, "Authentication required");
        assert!(toasts.is_empty());
    }
}
