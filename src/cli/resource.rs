use clap::{ValueEnum, builder::PossibleValue};
use std::fmt;

/// Collections reachable from the admin console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Articles,
    Services,
    Projects,
    Staff,
    Careers,
    ImpactStories,
    Testimonials,
    Reviews,
    Comments,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Staff => "staff",
            Self::Careers => "careers",
            Self::ImpactStories => "impact-stories",
            Self::Testimonials => "testimonials",
            Self::Reviews => "reviews",
            Self::Comments => "comments",
        }
    }

    /// Visitor-submitted kinds gated by `approved`.
    #[must_use]
    pub const fn is_moderated(self) -> bool {
        matches!(self, Self::Testimonials | Self::Reviews | Self::Comments)
    }

    /// Kinds gated by `published`.
    #[must_use]
    pub const fn is_publishable(self) -> bool {
        matches!(
            self,
            Self::Articles | Self::Services | Self::Staff | Self::Careers | Self::ImpactStories
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueEnum for ResourceKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Articles,
            Self::Services,
            Self::Projects,
            Self::Staff,
            Self::Careers,
            Self::ImpactStories,
            Self::Testimonials,
            Self::Reviews,
            Self::Comments,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.as_str());
        Some(match self {
            Self::Articles => value.alias("article"),
            Self::Services => value.alias("service"),
            Self::Projects => value.alias("project"),
            Self::Staff => value.alias("team"),
            Self::Careers => value.alias("career"),
            Self::ImpactStories => value.aliases(["impact-story", "impact_stories"]),
            Self::Testimonials => value.alias("testimonial"),
            Self::Reviews => value.alias("review"),
            Self::Comments => value.alias("comment"),
        })
    }
}

/// Runs `$body` with `$record` bound to the record type for `$kind`.
macro_rules! with_resource {
    ($kind:expr, $record:ident => $body:expr) => {
        match $kind {
            $crate::cli::resource::ResourceKind::Articles => {
                type $record = $crate::content::Article;
                $body
            }
            $crate::cli::resource::ResourceKind::Services => {
                type $record = $crate::content::Service;
                $body
            }
            $crate::cli::resource::ResourceKind::Projects => {
                type $record = $crate::content::Project;
                $body
            }
            $crate::cli::resource::ResourceKind::Staff => {
                type $record = $crate::content::StaffMember;
                $body
            }
            $crate::cli::resource::ResourceKind::Careers => {
                type $record = $crate::content::Career;
                $body
            }
            $crate::cli::resource::ResourceKind::ImpactStories => {
                type $record = $crate::content::ImpactStory;
                $body
            }
            $crate::cli::resource::ResourceKind::Testimonials => {
                type $record = $crate::content::Testimonial;
                $body
            }
            $crate::cli::resource::ResourceKind::Reviews => {
                type $record = $crate::content::Review;
                $body
            }
            $crate::cli::resource::ResourceKind::Comments => {
                type $record = $crate::content::Comment;
                $body
            }
        }
    };
}

pub(crate) use with_resource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_collections() {
        assert_eq!(
            ResourceKind::from_str("impact-story", true),
            Ok(ResourceKind::ImpactStories)
        );
        assert_eq!(ResourceKind::from_str("Review", true), Ok(ResourceKind::Reviews));
        assert!(ResourceKind::from_str("users", true).is_err());
    }

    #[test]
    fn gating_flags_do_not_overlap() {
        for kind in ResourceKind::value_variants() {
            assert!(!(kind.is_moderated() && kind.is_publishable()), "{kind}");
        }
        assert!(!ResourceKind::Projects.is_moderated());
        assert!(!ResourceKind::Projects.is_publishable());
    }

    #[test]
    fn macro_binds_record_type() {
        use crate::content::Resource;
        let collection = with_resource!(ResourceKind::Staff, R => R::COLLECTION);
        assert_eq!(collection, "/staff");
    }
}
