//! Like counters for reviews and articles.
//!
//! A like is keyed by the entity and the anonymous identifier kept in local
//! state. The server owns the count: every toggle applies the returned
//! `likes`/`liked` pair verbatim and then corrects the local liked-set.

mod button;

pub use self::button::LikeButton;

use crate::api::{ApiClient, ApiError, path_segment};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument, warn};

pub const FILLED_HEART: &str = "♥";
pub const OUTLINE_HEART: &str = "♡";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LikeKind {
    Review,
    Article,
}

impl LikeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::Article => "article",
        }
    }

    const fn collection(self) -> &'static str {
        match self {
            Self::Review => "/reviews",
            Self::Article => "/articles",
        }
    }
}

impl fmt::Display for LikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A likeable entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LikeTarget {
    kind: LikeKind,
    id: String,
}

impl LikeTarget {
    /// # Errors
    /// Returns `ApiError::Validation` for an id that is not a single path segment.
    pub fn new(kind: LikeKind, id: &str) -> Result<Self, ApiError> {
        let id = path_segment(id)?;
        Ok(Self {
            kind,
            id: id.to_string(),
        })
    }

    /// # Errors
    /// See [`LikeTarget::new`].
    pub fn review(id: &str) -> Result<Self, ApiError> {
        Self::new(LikeKind::Review, id)
    }

    /// # Errors
    /// See [`LikeTarget::new`].
    pub fn article(id: &str) -> Result<Self, ApiError> {
        Self::new(LikeKind::Article, id)
    }

    #[must_use]
    pub const fn kind(&self) -> LikeKind {
        self.kind
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}/like", self.kind.collection(), self.id)
    }

    /// Key in the persisted liked-set, e.g. `review:abc`.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }
}

/// Server-reported state after a toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeStatus {
    pub likes: u64,
    pub liked: bool,
}

impl LikeStatus {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        if self.liked { FILLED_HEART } else { OUTLINE_HEART }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeRequest<'a> {
    user_id: &'a str,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct LikeCounts {
    likes: Option<u64>,
    liked: Option<bool>,
}

// the counts arrive either at the top level or inside `data`
#[derive(Deserialize)]
struct LikeToggleResponse {
    #[serde(flatten)]
    top: LikeCounts,
    #[serde(default)]
    data: Option<LikeCounts>,
}

impl LikeToggleResponse {
    fn status(self) -> Option<LikeStatus> {
        let nested = self.data.unwrap_or_default();
        let likes = self.top.likes.or(nested.likes)?;
        let liked = self.top.liked.or(nested.liked)?;
        Some(LikeStatus { likes, liked })
    }
}

/// Toggles the like for `target` on behalf of the local anonymous identifier.
///
/// # Errors
/// Returns `ApiError::Storage` if the identifier cannot be created, the
/// request error, or `ApiError::Transport` if the response lacks the counts.
#[instrument(skip_all, fields(kind = %target.kind(), id = %target.id()))]
pub async fn toggle_like(api: &ApiClient, target: &LikeTarget) -> Result<LikeStatus, ApiError> {
    let user_id = api.state().user_id()?;

    let response: LikeToggleResponse = api
        .send(
            Method::POST,
            &target.path(),
            Some(&LikeRequest { user_id: &user_id }),
            None,
        )
        .await?;

    let status = response.status().ok_or_else(|| {
        warn!("like response did not include likes and liked");
        ApiError::Transport
    })?;

    // the server already applied the toggle; a cache write failure only
    // affects the icon shown after a restart
    if let Err(err) = api.state().set_liked(&target.cache_key(), status.liked) {
        warn!("failed to persist liked state: {}", err);
    }
    debug!(likes = status.likes, liked = status.liked, "like toggled");

    Ok(status)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{can_bind_localhost, client_for};
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn target_paths_and_keys() {
        let review = LikeTarget::review("r1").unwrap();
        assert_eq!(review.path(), "/reviews/r1/like");
        assert_eq!(review.cache_key(), "review:r1");

        let article = LikeTarget::article(" a1 ").unwrap();
        assert_eq!(article.path(), "/articles/a1/like");
        assert_eq!(article.cache_key(), "article:a1");

        assert!(LikeTarget::article("").is_err());
        assert!(LikeTarget::review("r1/../x").is_err());
    }

    #[test]
    fn counts_are_read_from_either_level() {
        let top: LikeToggleResponse =
            serde_json::from_value(json!({ "success": true, "likes": 5, "liked": true })).unwrap();
        assert_eq!(top.status(), Some(LikeStatus { likes: 5, liked: true }));

        let nested: LikeToggleResponse = serde_json::from_value(json!({
            "success": true,
            "data": { "likes": 2, "liked": false }
        }))
        .unwrap();
        assert_eq!(nested.status(), Some(LikeStatus { likes: 2, liked: false }));

        let missing: LikeToggleResponse =
            serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(missing.status(), None);
    }

    #[tokio::test]
    async fn toggle_sends_user_id_and_caches_result() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let client = client_for(&server);
        let user_id = client.state().user_id()?;

        Mock::given(method("POST"))
            .and(path("/api/articles/a1/like"))
            .and(body_json(json!({ "userId": user_id })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "likes": 12,
                "liked": true
            })))
            .mount(&server)
            .await;

        let target = LikeTarget::article("a1")?;
        let status = toggle_like(&client, &target).await?;
        assert_eq!(status, LikeStatus { likes: 12, liked: true });
        assert!(client.state().is_liked("article:a1"));
        Ok(())
    }

    #[tokio::test]
    async fn incomplete_response_is_a_transport_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/reviews/r1/like"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = toggle_like(&client, &LikeTarget::review("r1")?)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Transport);
        assert!(!client.state().is_liked("review:r1"));
        Ok(())
    }
}
