use super::console::Console;
use crate::{
    api::{ApiClient, ApiError},
    cli::resource::ResourceKind,
    content::{
        self, Article, Career, Comment, CommentDraft, ImpactStory, Publishable, Review, ReviewDraft,
        Service, StaffMember, Testimonial, TestimonialDraft,
    },
    moderation::{self, Moderated, SubmissionOutcome},
    notify::{Notice, Notifier},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Approve,
    Reject,
    Publish,
    Unpublish,
}

impl Change {
    #[must_use]
    pub const fn applies_to(self, kind: ResourceKind) -> bool {
        match self {
            Self::Approve | Self::Reject => kind.is_moderated(),
            Self::Publish | Self::Unpublish => kind.is_publishable(),
        }
    }

    const fn flag(self) -> bool {
        matches!(self, Self::Approve | Self::Publish)
    }

    const fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "Approved",
            Self::Reject => "Rejected",
            Self::Publish => "Published",
            Self::Unpublish => "Unpublished",
        }
    }
}

#[derive(Debug)]
pub struct ModerateArgs {
    pub kind: ResourceKind,
    pub id: String,
    pub change: Change,
}

#[derive(Debug)]
pub enum SubmitArgs {
    Review(ReviewDraft),
    Testimonial(TestimonialDraft),
    Comment(CommentDraft),
}

/// Execute an admin moderation change.
/// # Errors
/// Returns a validation error for a change that does not apply to the kind,
/// or the request error.
pub async fn moderate(
    args: ModerateArgs,
    api: &ApiClient,
    console: &Console,
) -> Result<(), ApiError> {
    let ModerateArgs { kind, id, change } = args;
    let value = change.flag();

    let name = match (change, kind) {
        (Change::Approve | Change::Reject, ResourceKind::Testimonials) => {
            approval::<Testimonial>(api, &id, value).await?
        }
        (Change::Approve | Change::Reject, ResourceKind::Reviews) => {
            approval::<Review>(api, &id, value).await?
        }
        (Change::Approve | Change::Reject, ResourceKind::Comments) => {
            approval::<Comment>(api, &id, value).await?
        }
        (Change::Publish | Change::Unpublish, ResourceKind::Articles) => {
            publication::<Article>(api, &id, value).await?
        }
        (Change::Publish | Change::Unpublish, ResourceKind::Services) => {
            publication::<Service>(api, &id, value).await?
        }
        (Change::Publish | Change::Unpublish, ResourceKind::Staff) => {
            publication::<StaffMember>(api, &id, value).await?
        }
        (Change::Publish | Change::Unpublish, ResourceKind::Careers) => {
            publication::<Career>(api, &id, value).await?
        }
        (Change::Publish | Change::Unpublish, ResourceKind::ImpactStories) => {
            publication::<ImpactStory>(api, &id, value).await?
        }
        _ => {
            return Err(ApiError::validation(format!(
                "{} cannot be {}",
                kind,
                change.past_tense().to_lowercase()
            )));
        }
    };

    console.notify(Notice::success(format!(
        "{} {} {}",
        change.past_tense(),
        name,
        id.trim()
    )));
    Ok(())
}

async fn approval<R: Moderated>(
    api: &ApiClient,
    id: &str,
    approved: bool,
) -> Result<&'static str, ApiError> {
    let _: R = moderation::set_approval(api, id, approved).await?;
    Ok(R::NAME)
}

async fn publication<R: Publishable>(
    api: &ApiClient,
    id: &str,
    published: bool,
) -> Result<&'static str, ApiError> {
    let _: R = content::set_published(api, id, published).await?;
    Ok(R::NAME)
}

/// Execute a visitor submission. The item is created pending.
/// # Errors
/// Returns the validation or request error.
pub async fn submit(args: SubmitArgs, api: &ApiClient, console: &Console) -> Result<(), ApiError> {
    let message = match args {
        SubmitArgs::Review(draft) => submit_one::<Review>(api, draft).await?,
        SubmitArgs::Testimonial(draft) => submit_one::<Testimonial>(api, draft).await?,
        SubmitArgs::Comment(draft) => submit_one::<Comment>(api, draft).await?,
    };
    console.notify(Notice::success(message));
    Ok(())
}

async fn submit_one<R: Moderated>(api: &ApiClient, draft: R::Draft) -> Result<String, ApiError> {
    let created: Option<R> = moderation::submit(api, draft).await?;
    Ok(SubmissionOutcome::of(created.as_ref()).message(R::NAME))
}
