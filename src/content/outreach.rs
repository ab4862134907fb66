//! Contact form and newsletter endpoints.

use super::types::{ContactMessage, NewsletterIssue, Subscriber};
use crate::{
    api::{ApiClient, ApiError, ApiResponse},
    validation::{require, require_email},
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

pub const CONTACT_SENT_MESSAGE: &str = "Thank you! We will get back to you shortly.";
pub const SUBSCRIBED_MESSAGE: &str = "You have been subscribed to our newsletter";
pub const NEWSLETTER_SENT_MESSAGE: &str = "Newsletter sent";

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// # Errors
/// Returns a validation error for missing name, email or message, or the
/// request error.
#[instrument(skip_all)]
pub async fn submit_contact(api: &ApiClient, message: &ContactMessage) -> Result<String, ApiError> {
    require(&message.name, "Name")?;
    require_email(&message.email)?;
    require(&message.message, "Message")?;

    let trimmed = ContactMessage {
        name: message.name.trim().to_string(),
        email: message.email.trim().to_string(),
        phone: message.phone.trim().to_string(),
        subject: message.subject.trim().to_string(),
        message: message.message.trim().to_string(),
    };
    let response: ApiResponse<Value> = api.post("/contact", &trimmed).await?;
    Ok(confirmation(&response, CONTACT_SENT_MESSAGE))
}

/// # Errors
/// Returns a validation error for a malformed email, or the request error.
#[instrument(skip_all)]
pub async fn subscribe(api: &ApiClient, email: &str) -> Result<String, ApiError> {
    require_email(email)?;
    let response: ApiResponse<Value> = api
        .post("/newsletter/subscribe", &SubscribeRequest {
            email: email.trim(),
        })
        .await?;
    Ok(confirmation(&response, SUBSCRIBED_MESSAGE))
}

/// # Errors
/// Returns `ApiError::Unauthorized` without a session, or the request error.
#[instrument(skip_all)]
pub async fn subscribers(api: &ApiClient) -> Result<Vec<Subscriber>, ApiError> {
    api.require_session()?;
    api.get("/newsletter/subscribers").await?.into_data()
}

/// # Errors
/// Returns `ApiError::Unauthorized` without a session, a validation error for
/// a blank subject or body, or the request error.
#[instrument(skip_all)]
pub async fn send_newsletter(api: &ApiClient, issue: &NewsletterIssue) -> Result<String, ApiError> {
    api.require_session()?;
    require(&issue.subject, "Subject")?;
    require(&issue.content, "Content")?;

    let response: ApiResponse<Value> = api.post("/newsletter/send", issue).await?;
    Ok(confirmation(&response, NEWSLETTER_SENT_MESSAGE))
}

fn confirmation(response: &ApiResponse<Value>, fallback: &str) -> String {
    response
        .message()
        .map_or_else(|| fallback.to_string(), str::to_string)
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

    #[tokio::test]
    async fn contact_requires_message() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let client = client_for(&server);
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            message: "   ".to_string(),
            ..ContactMessage::default()
        };

        let err = submit_contact(&client, &message).await.unwrap_err();
        assert_eq!(err, ApiError::Validation("Message is required".to_string()));
        assert!(server.received_requests().await.unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn contact_sends_trimmed_fields() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .and(body_json(json!({
                "name": "Ada",
                "email": "a@b.com",
                "message": "Retirement planning"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "message": "Message received"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let message = ContactMessage {
            name: " Ada ".to_string(),
            email: "a@b.com ".to_string(),
            message: "Retirement planning\n".to_string(),
            ..ContactMessage::default()
        };
        assert_eq!(submit_contact(&client, &message).await?, "Message received");
        Ok(())
    }

    #[tokio::test]
    async fn subscribe_falls_back_to_default_confirmation() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/newsletter/subscribe"))
            .and(body_json(json!({ "email": "a@b.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(subscribe(&client, "a@b.com").await?, SUBSCRIBED_MESSAGE);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_subscription_surfaces_server_error() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/newsletter/subscribe"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "success": false,
                "error": "Email already subscribed"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = subscribe(&client, "a@b.com").await.unwrap_err();
        assert_eq!(err.to_string(), "Email already subscribed");
        Ok(())
    }

    #[tokio::test]
    async fn newsletter_admin_calls_need_session() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let client = client_for(&server);

        assert!(subscribers(&client).await.unwrap_err().is_unauthorized());
        let issue = NewsletterIssue {
            subject: "Q3 outlook".to_string(),
            content: "Markets".to_string(),
        };
        assert!(send_newsletter(&client, &issue).await.unwrap_err().is_unauthorized());
        Ok(())
    }
}
