//! Site content: typed records for every collection, generic CRUD, and the
//! contact/newsletter endpoints.

pub mod client;
pub mod outreach;
pub mod rating;
pub(crate) mod record;
pub mod resource;
pub mod types;

pub use self::client::{
    active_projects, completed_projects, create, delete, get, list, list_at, list_published,
    set_flag, set_published, update,
};
pub use self::outreach::{send_newsletter, submit_contact, subscribe, subscribers};
pub use self::rating::{Rating, RatingValue};
pub use self::resource::{Publishable, Resource};
pub use self::types::{
    Article, ArticleDraft, Career, CareerDraft, Comment, CommentDraft, ContactMessage,
    ImpactStory, ImpactStoryDraft, NewsletterIssue, Project, ProjectDraft, ProjectStatus, Review,
    ReviewDraft, Service, ServiceDraft, StaffDraft, StaffMember, Subscriber, Testimonial,
    TestimonialDraft,
};
