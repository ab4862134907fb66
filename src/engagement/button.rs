use super::{LikeStatus, LikeTarget, toggle_like};
use crate::{
    api::ApiClient,
    notify::{Notice, Notifier},
    store::LocalState,
};

/// Heart toggle shown next to a review or article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeButton {
    target: LikeTarget,
    status: LikeStatus,
}

impl LikeButton {
    /// Seeds the count from the listed record and the liked flag from the
    /// local cache.
    #[must_use]
    pub fn new(target: LikeTarget, likes: u64, state: &LocalState) -> Self {
        let liked = state.is_liked(&target.cache_key());
        Self {
            target,
            status: LikeStatus { likes, liked },
        }
    }

    #[must_use]
    pub fn target(&self) -> &LikeTarget {
        &self.target
    }

    #[must_use]
    pub const fn likes(&self) -> u64 {
        self.status.likes
    }

    #[must_use]
    pub const fn liked(&self) -> bool {
        self.status.liked
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.status.icon()
    }

    /// Returns `true` when the server accepted the toggle. A failure leaves
    /// the count and icon untouched and raises an error notice.
    pub async fn toggle(&mut self, api: &ApiClient, notifier: &dyn Notifier) -> bool {
        match toggle_like(api, &self.target).await {
            Ok(status) => {
                self.status = status;
                true
            }
            Err(err) => {
                notifier.notify(Notice::error(err.to_string()));
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engagement::{FILLED_HEART, OUTLINE_HEART};
    use crate::notify::ToastQueue;
    use crate::test_support::{can_bind_localhost, client_for};
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn seeded_from_local_cache() {
        let state = LocalState::in_memory();
        state.set_liked("review:r1", true).unwrap();

        let liked = LikeButton::new(LikeTarget::review("r1").unwrap(), 3, &state);
        assert!(liked.liked());
        assert_eq!(liked.icon(), FILLED_HEART);

        let other = LikeButton::new(LikeTarget::article("r1").unwrap(), 0, &state);
        assert!(!other.liked());
        assert_eq!(other.icon(), OUTLINE_HEART);
    }

    #[tokio::test]
    async fn failure_leaves_state_unchanged() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/reviews/r1/like"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "error": "Could not update like"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let toasts = ToastQueue::default();
        let mut button = LikeButton::new(LikeTarget::review("r1")?, 7, client.state());

        assert!(!button.toggle(&client, &toasts).await);
        assert_eq!(button.likes(), 7);
        assert!(!button.liked());
        assert_eq!(
            toasts.last().map(|notice| notice.message),
            Some("Could not update like".to_string())
        );
        Ok(())
    }
}
