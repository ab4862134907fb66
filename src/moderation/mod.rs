//! Visitor-submitted reviews, testimonials and comments.
//!
//! Submissions always go out with `approved = false`; only an admin flips the
//! flag. Public listings show approved items only, and the client filters
//! again in case the server returns pending rows.

mod board;

pub use self::board::{ModeratedBoard, SubmissionOutcome};

use crate::{
    api::{ApiClient, ApiError, ApiResponse, path_segment},
    content::{
        self, Comment, CommentDraft, Resource, Review, ReviewDraft, Testimonial,
        TestimonialDraft,
    },
    validation::{require, require_email},
};
use tracing::{info, instrument};

/// Which slice of a moderated collection to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// Approved items only.
    Approved,
    /// Every item, pending included. Admin only.
    All,
    /// Items attached to one article.
    Article {
        article_id: String,
        visibility: Visibility,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    All,
}

impl Listing {
    #[must_use]
    pub fn for_article(article_id: impl Into<String>, visibility: Visibility) -> Self {
        Self::Article {
            article_id: article_id.into(),
            visibility,
        }
    }

    /// True when pending items must be filtered out before display.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(
            self,
            Self::Approved
                | Self::Article {
                    visibility: Visibility::Public,
                    ..
                }
        )
    }
}

pub trait Moderated: Resource {
    const APPROVED_PATH: &'static str;

    fn is_approved(&self) -> bool;

    fn set_draft_approval(draft: &mut Self::Draft, approved: bool);

    /// Required-field checks run before a visitor submission is sent.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming the first missing field.
    fn validate(draft: &Self::Draft) -> Result<(), ApiError>;

    /// Path of the per-article listing, for kinds attached to articles.
    fn article_path(_article_id: &str, _visibility: Visibility) -> Option<String> {
        None
    }

    /// # Errors
    /// Returns a validation error for a malformed article id or a kind that
    /// is not grouped by article.
    fn listing_path(listing: &Listing) -> Result<String, ApiError> {
        match listing {
            Listing::Approved => Ok(Self::APPROVED_PATH.to_string()),
            Listing::All => Ok(Self::COLLECTION.to_string()),
            Listing::Article {
                article_id,
                visibility,
            } => {
                let article_id = path_segment(article_id)?;
                Self::article_path(article_id, *visibility).ok_or_else(|| {
                    ApiError::validation(format!("A {} is not attached to an article", Self::NAME))
                })
            }
        }
    }
}

impl Moderated for Testimonial {
    const APPROVED_PATH: &'static str = "/testimonials/approved";

    fn is_approved(&self) -> bool {
        self.approved
    }

    fn set_draft_approval(draft: &mut TestimonialDraft, approved: bool) {
        draft.approved = approved;
    }

    fn validate(draft: &TestimonialDraft) -> Result<(), ApiError> {
        require(&draft.name, "Name")?;
        require(&draft.content, "Testimonial")?;
        require_rating(draft.rating.is_some())
    }
}

impl Moderated for Review {
    // reviews have no global approved listing; `?all` is absent so the
    // server applies its public filter
    const APPROVED_PATH: &'static str = "/reviews";

    fn is_approved(&self) -> bool {
        self.approved
    }

    fn set_draft_approval(draft: &mut ReviewDraft, approved: bool) {
        draft.approved = approved;
    }

    fn validate(draft: &ReviewDraft) -> Result<(), ApiError> {
        require(&draft.article_id, "Article")?;
        require(&draft.name, "Name")?;
        optional_email(&draft.email)?;
        require(&draft.comment, "Review")?;
        require_rating(draft.rating.is_some())
    }

    fn article_path(article_id: &str, visibility: Visibility) -> Option<String> {
        Some(match visibility {
            Visibility::Public => format!("/reviews/article/{article_id}"),
            Visibility::All => format!("/reviews/article/{article_id}?all=true"),
        })
    }
}

impl Moderated for Comment {
    const APPROVED_PATH: &'static str = "/comments/approved";

    fn is_approved(&self) -> bool {
        self.approved
    }

    fn set_draft_approval(draft: &mut CommentDraft, approved: bool) {
        draft.approved = approved;
    }

    fn validate(draft: &CommentDraft) -> Result<(), ApiError> {
        require(&draft.article_id, "Article")?;
        require(&draft.name, "Name")?;
        optional_email(&draft.email)?;
        require(&draft.content, "Comment")
    }

    fn article_path(article_id: &str, _visibility: Visibility) -> Option<String> {
        Some(format!("/comments/article/{article_id}"))
    }
}

fn require_rating(present: bool) -> Result<(), ApiError> {
    if present {
        Ok(())
    } else {
        Err(ApiError::validation("Please select a rating"))
    }
}

fn optional_email(email: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        Ok(())
    } else {
        require_email(email)
    }
}

/// Fetches a listing; public listings drop anything not approved.
///
/// # Errors
/// Returns a validation error for an unsupported listing, or the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn list<R: Moderated>(api: &ApiClient, listing: &Listing) -> Result<Vec<R>, ApiError> {
    let path = R::listing_path(listing)?;
    let items: Vec<R> = content::list_at(api, &path).await?;
    if listing.is_public() {
        Ok(items.into_iter().filter(R::is_approved).collect())
    } else {
        Ok(items)
    }
}

/// Submits a visitor draft as pending. Pending is a successful outcome.
///
/// Returns the stored record when the server echoes it; `None` when it only
/// acknowledges the submission, which still means the item was stored.
///
/// # Errors
/// Returns a validation error before any request, or the request error.
#[instrument(skip_all, fields(collection = R::COLLECTION))]
pub async fn submit<R: Moderated>(
    api: &ApiClient,
    mut draft: R::Draft,
) -> Result<Option<R>, ApiError> {
    R::validate(&draft)?;
    R::set_draft_approval(&mut draft, false);

    let response: ApiResponse<R> = api.post(R::COLLECTION, &draft).await?;
    info!(
        echoed = response.data.is_some(),
        "{} submitted for moderation",
        R::NAME
    );
    Ok(response.data)
}

/// Admin approve/unapprove.
///
/// # Errors
/// Returns `ApiError::Unauthorized` without a session, or the request error.
pub async fn set_approval<R: Moderated>(
    api: &ApiClient,
    id: &str,
    approved: bool,
) -> Result<R, ApiError> {
    let item: R = content::set_flag(api, id, "approved", approved).await?;
    info!(approved, "{} moderation updated", R::NAME);
    Ok(item)
}

/// # Errors
/// Returns the request error.
pub async fn approved_testimonials(api: &ApiClient) -> Result<Vec<Testimonial>, ApiError> {
    list(api, &Listing::Approved).await
}

/// # Errors
/// Returns the request error.
pub async fn approved_comments(api: &ApiClient) -> Result<Vec<Comment>, ApiError> {
    list(api, &Listing::Approved).await
}

/// # Errors
/// Returns a validation error for a malformed id, or the request error.
pub async fn article_reviews(
    api: &ApiClient,
    article_id: &str,
    visibility: Visibility,
) -> Result<Vec<Review>, ApiError> {
    list(api, &Listing::for_article(article_id, visibility)).await
}

/// # Errors
/// Returns a validation error for a malformed id, or the request error.
pub async fn article_comments(
    api: &ApiClient,
    article_id: &str,
    visibility: Visibility,
) -> Result<Vec<Comment>, ApiError> {
    list(api, &Listing::for_article(article_id, visibility)).await
}
