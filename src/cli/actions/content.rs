use super::console::Console;
use crate::{
    api::{ApiClient, ApiError},
    cli::resource::{ResourceKind, with_resource},
    content::{
        self, Article, Career, Comment, ImpactStory, Publishable, Resource, Review, Service,
        StaffMember, Testimonial,
    },
    moderation::{self, Listing, Moderated, Visibility},
    notify::{Notice, Notifier},
};
use serde_json::{Map, Value};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListArgs {
    pub all: bool,
    pub article: Option<String>,
    pub completed: bool,
}

#[derive(Debug)]
pub enum Args {
    List { kind: ResourceKind, scope: ListArgs },
    Get { kind: ResourceKind, id: String },
    Create { kind: ResourceKind, data: Map<String, Value> },
    Update { kind: ResourceKind, id: String, data: Map<String, Value> },
    Delete { kind: ResourceKind, id: String },
}

/// Execute the content action.
/// # Errors
/// Returns the validation or request error.
pub async fn execute(args: Args, api: &ApiClient, console: &Console) -> Result<(), ApiError> {
    match args {
        Args::List { kind, scope } => list(kind, &scope, api, console).await,
        Args::Get { kind, id } => with_resource!(kind, R => {
            let record: R = content::get(api, &id).await?;
            console.json(&record)
        }),
        Args::Create { kind, data } => with_resource!(kind, R => {
            let draft = draft_from::<R>(kind, data)?;
            let record: R = content::create(api, &draft).await?;
            console.notify(Notice::success(format!("Created {} {}", R::NAME, record.id())));
            console.json(&record)
        }),
        Args::Update { kind, id, data } => with_resource!(kind, R => {
            let record: R = content::update(api, &id, &data).await?;
            console.notify(Notice::success(format!("Updated {} {}", R::NAME, record.id())));
            console.json(&record)
        }),
        Args::Delete { kind, id } => with_resource!(kind, R => {
            content::delete::<R>(api, &id).await?;
            console.notify(Notice::success(format!("Deleted {} {}", R::NAME, id.trim())));
            Ok(())
        }),
    }
}

async fn list(
    kind: ResourceKind,
    scope: &ListArgs,
    api: &ApiClient,
    console: &Console,
) -> Result<(), ApiError> {
    match kind {
        ResourceKind::Articles => published::<Article>(scope, api, console).await,
        ResourceKind::Services => published::<Service>(scope, api, console).await,
        ResourceKind::Staff => published::<StaffMember>(scope, api, console).await,
        ResourceKind::Careers => published::<Career>(scope, api, console).await,
        ResourceKind::ImpactStories => published::<ImpactStory>(scope, api, console).await,
        ResourceKind::Testimonials => moderated::<Testimonial>(scope, api, console).await,
        ResourceKind::Reviews => moderated::<Review>(scope, api, console).await,
        ResourceKind::Comments => moderated::<Comment>(scope, api, console).await,
        ResourceKind::Projects => {
            let projects = if scope.all {
                content::list(api).await?
            } else if scope.completed {
                content::completed_projects(api).await?
            } else {
                content::active_projects(api).await?
            };
            console.json(&projects)
        }
    }
}

async fn published<R>(scope: &ListArgs, api: &ApiClient, console: &Console) -> Result<(), ApiError>
where
    R: Publishable + serde::Serialize,
{
    let records: Vec<R> = if scope.all {
        content::list(api).await?
    } else {
        content::list_published(api).await?
    };
    console.json(&records)
}

async fn moderated<R>(scope: &ListArgs, api: &ApiClient, console: &Console) -> Result<(), ApiError>
where
    R: Moderated + serde::Serialize,
{
    let records: Vec<R> = moderation::list(api, &listing(scope)).await?;
    console.json(&records)
}

fn listing(scope: &ListArgs) -> Listing {
    let visibility = if scope.all {
        Visibility::All
    } else {
        Visibility::Public
    };
    match (&scope.article, visibility) {
        (Some(article_id), visibility) => Listing::for_article(article_id.clone(), visibility),
        (None, Visibility::All) => Listing::All,
        (None, Visibility::Public) => Listing::Approved,
    }
}

/// Decodes admin-supplied JSON into a draft. Content created from the console
/// is approved unless the data says otherwise.
fn draft_from<R: Resource>(
    kind: ResourceKind,
    mut data: Map<String, Value>,
) -> Result<R::Draft, ApiError> {
    if kind.is_moderated() {
        data.entry("approved").or_insert(Value::Bool(true));
    }
    serde_json::from_value(Value::Object(data))
        .map_err(|err| ApiError::validation(format!("Invalid {} data: {err}", R::NAME)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::content::TestimonialDraft;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn admin_drafts_default_to_approved() {
        let draft = draft_from::<Testimonial>(
            ResourceKind::Testimonials,
            object(json!({ "name": "Ada", "content": "Great", "rating": 5 })),
        )
        .unwrap();
        assert!(draft.approved);

        let draft: TestimonialDraft = draft_from::<Testimonial>(
            ResourceKind::Testimonials,
            object(json!({ "name": "Ada", "approved": false })),
        )
        .unwrap();
        assert!(!draft.approved);
    }

    #[test]
    fn invalid_draft_data_is_a_validation_error() {
        let err = draft_from::<Review>(
            ResourceKind::Reviews,
            object(json!({ "rating": 9 })),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn listing_follows_flags() {
        assert_eq!(listing(&ListArgs::default()), Listing::Approved);
        assert_eq!(
            listing(&ListArgs {
                all: true,
                ..ListArgs::default()
            }),
            Listing::All
        );
        assert_eq!(
            listing(&ListArgs {
                article: Some("a1".to_string()),
                ..ListArgs::default()
            }),
            Listing::for_article("a1", Visibility::Public)
        );
    }
}
