//! Maps validated CLI matches to an [`Action`].

use crate::cli::{
    actions::{
        Action, auth, consent,
        content::{self, ListArgs},
        engagement,
        moderation::{Change, ModerateArgs, SubmitArgs},
        outreach,
    },
    commands::{auth as auth_args, content as content_args, visitor},
    resource::ResourceKind,
};
use crate::content::{
    CommentDraft, ContactMessage, NewsletterIssue, Rating, ReviewDraft, TestimonialDraft,
};
use crate::engagement::{LikeKind, LikeTarget};
use crate::store::CookieConsent;
use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use secrecy::SecretString;
use serde_json::{Map, Value};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("version", _)) => Ok(Action::Version),
        Some(("auth", sub)) => auth_action(sub),
        Some(("list", sub)) => list_action(sub),
        Some(("get", sub)) => Ok(Action::Content(content::Args::Get {
            kind: resource(sub)?,
            id: string(sub, content_args::ARG_ID)?,
        })),
        Some(("create", sub)) => Ok(Action::Content(content::Args::Create {
            kind: resource(sub)?,
            data: json_object(sub)?,
        })),
        Some(("update", sub)) => Ok(Action::Content(content::Args::Update {
            kind: resource(sub)?,
            id: string(sub, content_args::ARG_ID)?,
            data: json_object(sub)?,
        })),
        Some(("delete", sub)) => Ok(Action::Content(content::Args::Delete {
            kind: resource(sub)?,
            id: string(sub, content_args::ARG_ID)?,
        })),
        Some(("moderate", sub)) => moderate_action(sub),
        Some(("submit", sub)) => submit_action(sub),
        Some(("like", sub)) => like_action(sub),
        Some(("contact", sub)) => Ok(Action::Outreach(outreach::Args::Contact(ContactMessage {
            name: string(sub, visitor::ARG_NAME)?,
            email: string(sub, visitor::ARG_EMAIL)?,
            phone: optional(sub, visitor::ARG_PHONE),
            subject: optional(sub, visitor::ARG_SUBJECT),
            message: string(sub, visitor::ARG_MESSAGE)?,
        }))),
        Some(("newsletter", sub)) => newsletter_action(sub),
        Some(("consent", sub)) => consent_action(sub),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("missing command"),
    }
}

fn auth_action(matches: &ArgMatches) -> Result<Action> {
    let args = match matches.subcommand() {
        Some(("request-code", sub)) => auth::Args::RequestCode {
            email: string(sub, auth_args::ARG_EMAIL)?,
        },
        Some(("verify", sub)) => auth::Args::Verify {
            email: string(sub, auth_args::ARG_EMAIL)?,
            code: string(sub, auth_args::ARG_CODE)?,
        },
        Some(("login", sub)) => auth::Args::Login {
            email: string(sub, auth_args::ARG_EMAIL)?,
            password: SecretString::from(string(sub, auth_args::ARG_PASSWORD)?),
        },
        Some(("logout", _)) => auth::Args::Logout,
        Some(("status", _)) => auth::Args::Status,
        _ => bail!("missing auth command"),
    };
    Ok(Action::Auth(args))
}

fn list_action(matches: &ArgMatches) -> Result<Action> {
    let kind = resource(matches)?;
    let scope = ListArgs {
        all: matches.get_flag(content_args::ARG_ALL),
        article: matches
            .get_one::<String>(content_args::ARG_ARTICLE)
            .map(|id| id.trim().to_string()),
        completed: matches.get_flag(content_args::ARG_COMPLETED),
    };

    if scope.article.is_some() && !matches!(kind, ResourceKind::Reviews | ResourceKind::Comments) {
        bail!("--article only applies to reviews and comments");
    }
    if scope.completed && kind != ResourceKind::Projects {
        bail!("--completed only applies to projects");
    }

    Ok(Action::Content(content::Args::List { kind, scope }))
}

fn moderate_action(matches: &ArgMatches) -> Result<Action> {
    let (change, sub) = match matches.subcommand() {
        Some(("approve", sub)) => (Change::Approve, sub),
        Some(("reject", sub)) => (Change::Reject, sub),
        Some(("publish", sub)) => (Change::Publish, sub),
        Some(("unpublish", sub)) => (Change::Unpublish, sub),
        _ => bail!("missing moderate command"),
    };

    let kind = resource(sub)?;
    if !change.applies_to(kind) {
        bail!("{kind} cannot be moderated with this command");
    }

    Ok(Action::Moderate(ModerateArgs {
        kind,
        id: string(sub, content_args::ARG_ID)?,
        change,
    }))
}

fn submit_action(matches: &ArgMatches) -> Result<Action> {
    let args = match matches.subcommand() {
        Some(("review", sub)) => SubmitArgs::Review(ReviewDraft {
            article_id: string(sub, visitor::ARG_ARTICLE)?,
            name: string(sub, visitor::ARG_NAME)?,
            email: optional(sub, visitor::ARG_EMAIL),
            comment: string(sub, visitor::ARG_COMMENT)?,
            rating: Some(rating(sub)?),
            approved: false,
        }),
        Some(("testimonial", sub)) => SubmitArgs::Testimonial(TestimonialDraft {
            name: string(sub, visitor::ARG_NAME)?,
            role: optional(sub, visitor::ARG_ROLE),
            company: optional(sub, visitor::ARG_COMPANY),
            content: string(sub, visitor::ARG_CONTENT)?,
            rating: Some(rating(sub)?),
            ..TestimonialDraft::default()
        }),
        Some(("comment", sub)) => SubmitArgs::Comment(CommentDraft {
            article_id: string(sub, visitor::ARG_ARTICLE)?,
            name: string(sub, visitor::ARG_NAME)?,
            email: optional(sub, visitor::ARG_EMAIL),
            content: string(sub, visitor::ARG_CONTENT)?,
            approved: false,
        }),
        _ => bail!("missing submit command"),
    };
    Ok(Action::Submit(args))
}

fn like_action(matches: &ArgMatches) -> Result<Action> {
    let kind = match string(matches, visitor::ARG_KIND)?.as_str() {
        "review" => LikeKind::Review,
        "article" => LikeKind::Article,
        other => bail!("cannot like a {other}"),
    };
    let target = LikeTarget::new(kind, &string(matches, visitor::ARG_ID)?)?;
    Ok(Action::Like(engagement::Args { target }))
}

fn newsletter_action(matches: &ArgMatches) -> Result<Action> {
    let args = match matches.subcommand() {
        Some(("subscribe", sub)) => outreach::Args::Subscribe {
            email: string(sub, visitor::ARG_EMAIL)?,
        },
        Some(("subscribers", _)) => outreach::Args::Subscribers,
        Some(("send", sub)) => outreach::Args::Send(NewsletterIssue {
            subject: string(sub, visitor::ARG_SUBJECT)?,
            content: string(sub, visitor::ARG_CONTENT)?,
        }),
        _ => bail!("missing newsletter command"),
    };
    Ok(Action::Outreach(args))
}

fn consent_action(matches: &ArgMatches) -> Result<Action> {
    let args = match matches.subcommand_name() {
        Some("accept") => consent::Args::Set(CookieConsent::Accepted),
        Some("decline") => consent::Args::Set(CookieConsent::Declined),
        Some("show") => consent::Args::Show,
        _ => bail!("missing consent command"),
    };
    Ok(Action::Consent(args))
}

fn resource(matches: &ArgMatches) -> Result<ResourceKind> {
    matches
        .get_one::<ResourceKind>(content_args::ARG_RESOURCE)
        .copied()
        .context("missing required argument: <resource>")
}

fn string(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn optional(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn rating(matches: &ArgMatches) -> Result<Rating> {
    let value = matches
        .get_one::<u8>(visitor::ARG_RATING)
        .copied()
        .context("missing required argument: --rating")?;
    Ok(Rating::new(value)?)
}

fn json_object(matches: &ArgMatches) -> Result<Map<String, Value>> {
    let raw = string(matches, content_args::ARG_DATA)?;
    match serde_json::from_str::<Value>(&raw).context("--data must be valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("--data must be a JSON object")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands;

    fn action(args: &[&str]) -> Result<Action> {
        let matches = commands::new().try_get_matches_from(args.iter().copied())?;
        handler(&matches)
    }

    #[test]
    fn test_submit_testimonial_without_company() {
        let Action::Submit(SubmitArgs::Testimonial(draft)) = action(&[
            "fincounsel",
            "submit",
            "testimonial",
            "--name",
            "Ada",
            "--content",
            "Clear and patient advice",
            "--rating",
            "4",
        ])
        .unwrap() else {
            panic!("expected a testimonial submission");
        };
        assert_eq!(draft.company, "");
        assert_eq!(draft.rating.map(Rating::get), Some(4));
        assert!(!draft.approved);
    }

    #[test]
    fn test_article_filter_only_for_reviews_and_comments() {
        assert!(action(&["fincounsel", "list", "reviews", "--article", "a1"]).is_ok());
        assert!(action(&["fincounsel", "list", "services", "--article", "a1"]).is_err());
        assert!(action(&["fincounsel", "list", "articles", "--completed"]).is_err());
    }

    #[test]
    fn test_moderate_rejects_mismatched_kind() {
        assert!(action(&["fincounsel", "moderate", "approve", "reviews", "r1"]).is_ok());
        assert!(action(&["fincounsel", "moderate", "approve", "articles", "a1"]).is_err());
        assert!(action(&["fincounsel", "moderate", "publish", "testimonials", "t1"]).is_err());
    }

    #[test]
    fn test_create_requires_json_object() {
        assert!(action(&["fincounsel", "create", "services", "--data", "[1,2]"]).is_err());
        assert!(action(&["fincounsel", "create", "services", "--data", "{nope"]).is_err());
        let Action::Content(content::Args::Create { kind, data }) = action(&[
            "fincounsel",
            "create",
            "services",
            "--data",
            r#"{"title":"Estate planning"}"#,
        ])
        .unwrap() else {
            panic!("expected a create action");
        };
        assert_eq!(kind, ResourceKind::Services);
        assert_eq!(data.get("title"), Some(&Value::from("Estate planning")));
    }

    #[test]
    fn test_like_validates_identifier() {
        assert!(action(&["fincounsel", "like", "review", "r1"]).is_ok());
        assert!(action(&["fincounsel", "like", "article", "a/1"]).is_err());
        assert!(action(&["fincounsel", "like", "staff", "s1"]).is_err());
    }

    #[test]
    fn test_consent_and_version() {
        assert!(matches!(
            action(&["fincounsel", "consent", "decline"]).unwrap(),
            Action::Consent(consent::Args::Set(CookieConsent::Declined))
        ));
        assert!(matches!(
            action(&["fincounsel", "version"]).unwrap(),
            Action::Version
        ));
    }
}
