use super::{Listing, Moderated, list, submit};
use crate::{
    api::{ApiClient, ApiError},
    notify::{Notice, Notifier},
};
use std::{fmt, sync::Arc};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server approved the item on creation.
    Published,
    /// Created and waiting for an admin.
    PendingApproval,
}

impl SubmissionOutcome {
    /// A submission the server acknowledged without echoing the record is
    /// pending.
    #[must_use]
    pub fn of<R: Moderated>(created: Option<&R>) -> Self {
        if created.is_some_and(R::is_approved) {
            Self::Published
        } else {
            Self::PendingApproval
        }
    }

    /// Confirmation shown after a successful submission.
    #[must_use]
    pub fn message(self, name: &str) -> String {
        match self {
            Self::Published => format!("Thank you! Your {name} has been published."),
            Self::PendingApproval => {
                format!("Thank you! Your {name} has been submitted and will appear once approved.")
            }
        }
    }
}

/// A listing plus its submission form, as rendered under an article or on
/// the testimonials page. The list is only ever replaced by a successful
/// fetch, never optimistically.
pub struct ModeratedBoard<R: Moderated> {
    listing: Listing,
    items: Vec<R>,
    draft: R::Draft,
    notifier: Arc<dyn Notifier>,
}

impl<R: Moderated> ModeratedBoard<R> {
    #[must_use]
    pub fn new(listing: Listing, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            listing,
            items: Vec::new(),
            draft: R::Draft::default(),
            notifier,
        }
    }

    #[must_use]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[must_use]
    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    /// Reloads the list. On failure the current items stay and an error
    /// notice is raised.
    ///
    /// # Errors
    /// Returns the request error.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        match list::<R>(api, &self.listing).await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(err) => {
                warn!("failed to refresh {} list: {}", R::NAME, err);
                self.notifier.notify(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Sends the current draft. Success clears the form and reloads the list
    /// from the server; a failed reload does not undo the submission.
    ///
    /// # Errors
    /// Returns the validation or request error; the draft is kept.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<SubmissionOutcome, ApiError> {
        let created = match submit::<R>(api, self.draft.clone()).await {
            Ok(created) => created,
            Err(err) => {
                self.notifier.notify(Notice::error(err.to_string()));
                return Err(err);
            }
        };
        self.draft = R::Draft::default();

        let outcome = SubmissionOutcome::of(created.as_ref());
        self.notifier.notify(Notice::success(outcome.message(R::NAME)));

        // the notice for a failed reload is raised by refresh itself
        let _ = self.refresh(api).await;

        Ok(outcome)
    }
}

impl<R: Moderated + fmt::Debug> fmt::Debug for ModeratedBoard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeratedBoard")
            .field("listing", &self.listing)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::content::{Comment, CommentDraft, Rating, Testimonial};
    use crate::moderation::Visibility;
    use crate::notify::NoticeLevel;
    use crate::test_support::{can_bind_localhost, client_for, toasts};
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn failed_refresh_keeps_existing_items() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/testimonials/approved"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{ "_id": "t1", "approved": true, "rating": 5 }]
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/testimonials/approved"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let queue = toasts();
        let mut board = ModeratedBoard::<Testimonial>::new(Listing::Approved, queue.clone());

        board.refresh(&client).await?;
        assert_eq!(board.items().len(), 1);

        assert!(board.refresh(&client).await.is_err());
        assert_eq!(board.items().len(), 1);
        assert_eq!(queue.last().map(|notice| notice.level), Some(NoticeLevel::Error));
        Ok(())
    }

    #[tokio::test]
    async fn submission_clears_form_and_reloads() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/comments"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "data": { "_id": "c9", "articleId": "a1", "approved": false }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/comments/article/a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [
                    { "_id": "c1", "approved": true },
                    { "_id": "c9", "approved": false }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let queue = toasts();
        let mut board = ModeratedBoard::<Comment>::new(
            Listing::for_article("a1", Visibility::Public),
            queue.clone(),
        );
        *board.draft_mut() = CommentDraft {
            article_id: "a1".to_string(),
            name: "Ada".to_string(),
            content: "Thanks".to_string(),
            ..CommentDraft::default()
        };

        let outcome = board.submit(&client).await?;
        assert_eq!(outcome, SubmissionOutcome::PendingApproval);
        assert_eq!(board.draft(), &CommentDraft::default());
        // the pending comment is not shown publicly
        assert_eq!(board.items().len(), 1);
        assert_eq!(board.items()[0].id, "c1");
        assert_eq!(
            queue.last().map(|notice| notice.level),
            Some(NoticeLevel::Success)
        );
        Ok(())
    }

    #[tokio::test]
    async fn acknowledged_submission_is_pending_not_failed() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/testimonials"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "message": "Testimonial submitted for approval"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/testimonials/approved"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let queue = toasts();
        let mut board = ModeratedBoard::<Testimonial>::new(Listing::Approved, queue.clone());
        board.draft_mut().name = "Ada".to_string();
        board.draft_mut().content = "Patient and clear".to_string();
        board.draft_mut().rating = Some(Rating::new(5).unwrap());

        let outcome = board.submit(&client).await?;
        assert_eq!(outcome, SubmissionOutcome::PendingApproval);
        assert_eq!(board.draft().name, "");
        assert_eq!(
            queue.last().map(|notice| notice.message),
            Some(SubmissionOutcome::PendingApproval.message("testimonial"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn invalid_draft_is_kept_and_reported() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let client = client_for(&server);
        let queue = toasts();
        let mut board = ModeratedBoard::<Testimonial>::new(Listing::Approved, queue.clone());
        board.draft_mut().name = "Ada".to_string();
        board.draft_mut().rating = Some(Rating::new(4).unwrap());

        let err = board.submit(&client).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(board.draft().name, "Ada");
        assert_eq!(queue.last().map(|notice| notice.is_error()), Some(true));
        assert!(server.received_requests().await.unwrap().is_empty());
        Ok(())
    }
}
