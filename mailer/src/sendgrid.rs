//! SendGrid v3 mail delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::{MailError, Mailer};

const SENDGRID_API_BASE: &str = "https://api.sendgrid.com";

/// Sends mail through the SendGrid v3 `/mail/send` endpoint.
#[derive(Debug, Clone)]
pub struct SendgridMailer {
    client: Client,
    api_key: String,
    from_email: String,
    base_url: String,
}

impl SendgridMailer {
    pub fn new(api_key: String, from_email: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            api_key,
            from_email,
            base_url: SENDGRID_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL (for tests and compatible endpoints).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[derive(Debug, Serialize)]
struct MailRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    r#type: &'a str,
    value: &'a str,
}

#[async_trait]
impl Mailer for SendgridMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let request = MailRequest {
            personalizations: [Personalization {
                to: [Address { email: to }],
            }],
            from: Address {
                email: &self.from_email,
            },
            subject,
            content: [Content {
                r#type: "text/plain",
                value: body,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(to, subject, "Email delivered via SendGrid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepted delivery: provider returns 202, send() is Ok and the request
    /// carries recipient, from address, subject and plaintext body.
    #[tokio::test]
    async fn send_posts_mail_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/mail/send")
            .match_header("authorization", "Bearer sg-test-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "personalizations": [{"to": [{"email": "ion@example.com"}]}],
                "from": {"email": "office@standeal.md"},
                "subject": "Confirmare",
                "content": [{"type": "text/plain", "value": "Bună ziua"}],
            })))
            .with_status(202)
            .create_async()
            .await;

        let mailer = SendgridMailer::new("sg-test-key".to_string(), "office@standeal.md".to_string())
            .with_base_url(server.url());

        mailer
            .send("ion@example.com", "Confirmare", "Bună ziua")
            .await
            .expect("send should succeed");

        mock.assert_async().await;
    }

    /// Provider rejection: non-2xx maps to MailError::Rejected with the
    /// status and body preserved.
    #[tokio::test]
    async fn send_maps_rejection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v3/mail/send")
            .with_status(401)
            .with_body("unauthorized")
            .create_async()
            .await;

        let mailer = SendgridMailer::new("bad-key".to_string(), "office@standeal.md".to_string())
            .with_base_url(server.url());

        let err = mailer
            .send("ion@example.com", "Confirmare", "Bună ziua")
            .await
            .expect_err("send should fail");

        match err {
            MailError::Rejected { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
