//! Records as the API returns them, plus the drafts sent on create/update.
//!
//! Records are read leniently (see [`super::record`]); drafts are plain serde
//! structs.

use super::{
    rating::{Rating, RatingValue},
    record::record,
};
use serde::{Deserialize, Serialize};
use std::fmt;

record! {
    pub struct Article {
        pub title: String,
        pub slug: String,
        pub excerpt: String,
        pub content: String,
        pub author: String,
        pub category: String,
        pub tags: Vec<String>,
        pub image: String,
        pub published: bool,
        pub likes: u64,
        pub created_at: Option<String>,
        pub updated_at: Option<String>,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub published: bool,
}

record! {
    pub struct Service {
        pub title: String,
        pub description: String,
        pub icon: String,
        pub features: Vec<String>,
        pub published: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub published: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        };
        f.write_str(status)
    }
}

record! {
    pub struct Project {
        pub title: String,
        pub description: String,
        pub client: String,
        pub category: String,
        pub status: ProjectStatus,
        pub image: String,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub client: String,
    pub category: String,
    pub status: ProjectStatus,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

record! {
    pub struct StaffMember {
        pub name: String,
        pub position: String,
        pub bio: String,
        pub image: String,
        pub email: String,
        pub linkedin: String,
        pub order: i64,
        pub published: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaffDraft {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
    pub email: String,
    pub linkedin: String,
    pub order: i64,
    pub published: bool,
}

record! {
    pub struct Career {
        pub title: String,
        pub department: String,
        pub location: String,
        pub employment_type: String,
        pub description: String,
        pub requirements: Vec<String>,
        pub published: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub published: bool,
}

record! {
    pub struct ImpactStory {
        pub title: String,
        pub summary: String,
        pub content: String,
        pub client: String,
        pub image: String,
        pub published: bool,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImpactStoryDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub client: String,
    pub image: String,
    pub published: bool,
}

record! {
    pub struct Testimonial {
        pub name: String,
        pub role: String,
        pub company: String,
        pub content: String,
        pub rating: RatingValue,
        pub approved: bool,
        pub image: String,
        pub created_at: Option<String>,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub approved: bool,
    pub image: String,
}

record! {
    pub struct Review {
        pub article_id: String,
        pub name: String,
        pub email: String,
        pub comment: String,
        pub rating: RatingValue,
        pub approved: bool,
        pub likes: u64,
        pub created_at: Option<String>,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewDraft {
    pub article_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub approved: bool,
}

record! {
    pub struct Comment {
        pub article_id: String,
        pub name: String,
        pub email: String,
        pub content: String,
        pub approved: bool,
        pub created_at: Option<String>,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentDraft {
    pub article_id: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub approved: bool,
}

record! {
    pub struct Subscriber {
        pub email: String,
        pub active: bool,
        pub subscribed_at: Option<String>,
    }
}

/// Payload of `POST /newsletter/send`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsletterIssue {
    pub subject: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    pub message: String,
}
