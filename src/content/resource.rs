use super::types::{
    Article, ArticleDraft, Career, CareerDraft, Comment, CommentDraft, ImpactStory,
    ImpactStoryDraft, Project, ProjectDraft, Review, ReviewDraft, Service, ServiceDraft,
    StaffDraft, StaffMember, Testimonial, TestimonialDraft,
};
use serde::{Serialize, de::DeserializeOwned};

/// A record type served from its own REST collection.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Collection path, e.g. `/articles`.
    const COLLECTION: &'static str;
    /// Singular name used in user-facing messages.
    const NAME: &'static str;

    type Draft: Clone + Serialize + DeserializeOwned + Default + Send + Sync;

    fn id(&self) -> &str;

    #[must_use]
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, id)
    }
}

/// Records gated by a `published` flag with a public listing endpoint.
pub trait Publishable: Resource {
    const PUBLISHED_PATH: &'static str;

    fn is_published(&self) -> bool;
}

macro_rules! resource {
    ($record:ty, $draft:ty, $collection:literal, $name:literal) => {
        impl Resource for $record {
            const COLLECTION: &'static str = $collection;
            const NAME: &'static str = $name;

            type Draft = $draft;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

macro_rules! publishable {
    ($record:ty, $published:literal) => {
        impl Publishable for $record {
            const PUBLISHED_PATH: &'static str = $published;

            fn is_published(&self) -> bool {
                self.published
            }
        }
    };
}

resource!(Article, ArticleDraft, "/articles", "article");
resource!(Service, ServiceDraft, "/services", "service");
resource!(Project, ProjectDraft, "/projects", "project");
resource!(StaffMember, StaffDraft, "/staff", "staff member");
resource!(Career, CareerDraft, "/careers", "career");
resource!(ImpactStory, ImpactStoryDraft, "/impact-stories", "impact story");
resource!(Testimonial, TestimonialDraft, "/testimonials", "testimonial");
resource!(Review, ReviewDraft, "/reviews", "review");
resource!(Comment, CommentDraft, "/comments", "comment");

publishable!(Article, "/articles/published");
publishable!(Service, "/services/published");
publishable!(StaffMember, "/staff/published");
publishable!(Career, "/careers/published");
publishable!(ImpactStory, "/impact-stories/published");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_id() {
        assert_eq!(Article::item_path("a1"), "/articles/a1");
        assert_eq!(ImpactStory::item_path("s9"), "/impact-stories/s9");
    }

    #[test]
    fn published_paths_live_under_collection() {
        assert!(Career::PUBLISHED_PATH.starts_with(Career::COLLECTION));
        assert!(StaffMember::PUBLISHED_PATH.starts_with(StaffMember::COLLECTION));
    }
}
