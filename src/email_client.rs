use crate::domain::SenderEmail;
use secrecy::{ExposeSecret, Secret};

/// Thin client for the transactional email provider (SendGrid v3 API).
///
/// Success means the provider accepted the message for delivery, nothing
/// more: no provider error codes are inspected, no retry is attempted and
/// delivery is never confirmed.
pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    sender: SenderEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SenderEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &str,
        reply_to: Option<&str>,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/v3/mail/send", self.base_url);
        let request_body = SendEmailRequest {
            personalizations: [Personalization {
                to: [Address { email: recipient }],
            }],
            from: Address {
                email: self.sender.as_ref(),
            },
            reply_to: reply_to.map(|email| Address { email }),
            subject,
            // SendGrid requires text/plain before text/html
            content: [
                Content {
                    content_type: "text/plain",
                    value: text_content,
                },
                Content {
                    content_type: "text/html",
                    value: html_content,
                },
            ],
        };
        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: [Content<'a>; 2],
}

#[derive(serde::Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(serde::Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}
