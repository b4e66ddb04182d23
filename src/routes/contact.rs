use crate::configuration::ContactSettings;
use crate::domain::ContactSubmission;
use crate::email_client::EmailClient;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use htmlescape::{encode_attribute, encode_minimal};
use std::fmt::Formatter;

#[derive(serde::Deserialize)]
pub struct ContactData {
    // Absent fields default to empty so the handler, not the JSON
    // extractor, owns the "Missing required fields" error shape.
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

impl TryFrom<ContactData> for ContactSubmission {
    type Error = String;

    fn try_from(data: ContactData) -> Result<Self, Self::Error> {
        ContactSubmission::parse(data.name, data.email, data.message)
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Callers get a short generic reason; which dispatch failed is
        // only visible in the server-side logs.
        let error = match self {
            ContactError::ValidationError(_) => "Missing required fields",
            ContactError::UnexpectedError(_) => "Failed to send email",
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": error }))
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(payload, email_client, contact),
    fields(submitter_name = %payload.name, submitter_email = %payload.email)
)]
pub async fn submit_contact(
    payload: web::Json<ContactData>,
    email_client: web::Data<EmailClient>,
    contact: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission =
        payload.0.try_into().map_err(ContactError::ValidationError)?;

    // Notification first; the acknowledgment is only attempted once the
    // provider has accepted the notification.
    let (text_body, html_body) = notification_bodies(&submission);
    email_client
        .send_email(
            &contact.notify_email,
            Some(&submission.email),
            &format!(
                "New Contact Form Submission from {name}",
                name = submission.name
            ),
            &html_body,
            &text_body,
        )
        .await
        .with_context(|| {
            format!(
                "Failed to dispatch the notification email to {}",
                contact.notify_email
            )
        })?;

    let (text_body, html_body) = acknowledgment_bodies(&submission);
    email_client
        .send_email(
            &submission.email,
            None,
            "Thank you for contacting Csouth Technologies",
            &html_body,
            &text_body,
        )
        .await
        .context("Failed to dispatch the acknowledgment email to the submitter")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Email sent successfully"
    })))
}

/// Plain-text and HTML renderings of the internal notification.
fn notification_bodies(submission: &ContactSubmission) -> (String, String) {
    let text = format!(
        "New contact form submission from the Csouth Technologies website:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         ---\n\
         This email was sent from the contact form at csouthint.com\n",
        name = submission.name,
        email = submission.email,
        message = submission.message,
    );
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="margin: 0; padding: 0; background-color: #0a1b29; font-family: Arial, sans-serif;">
  <table role="presentation" style="max-width: 600px; width: 100%; background-color: #0d2538; border-radius: 12px;">
    <tr>
      <td style="padding: 30px 40px; background-color: #1a6a8a;">
        <h1 style="margin: 0; color: #ffffff; font-size: 24px;">New Contact Form Submission</h1>
      </td>
    </tr>
    <tr>
      <td style="padding: 40px;">
        <p style="margin: 0 0 8px 0; color: #5eb8d4; font-size: 12px; text-transform: uppercase;">From</p>
        <p style="margin: 0 0 20px 0; color: #ffffff; font-size: 16px;">{name}</p>
        <p style="margin: 0 0 8px 0; color: #5eb8d4; font-size: 12px; text-transform: uppercase;">Email</p>
        <p style="margin: 0 0 20px 0;"><a href="mailto:{email_attr}" style="color: #3ba3c3;">{email}</a></p>
        <p style="margin: 0 0 12px 0; color: #5eb8d4; font-size: 12px; text-transform: uppercase;">Message</p>
        <p style="margin: 0; color: #e2e8f0; font-size: 15px; white-space: pre-wrap;">{message}</p>
      </td>
    </tr>
    <tr>
      <td style="padding: 20px 40px;">
        <p style="margin: 0; color: #64748b; font-size: 12px; text-align: center;">
          This email was sent from the contact form at csouthint.com
        </p>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        name = encode_minimal(&submission.name),
        // Attribute position needs quotes escaped too
        email_attr = encode_attribute(&submission.email),
        email = encode_minimal(&submission.email),
        message = encode_minimal(&submission.message),
    );
    (text, html)
}

/// Plain-text and HTML renderings of the acknowledgment sent back to the
/// submitter, echoing their own message.
fn acknowledgment_bodies(submission: &ContactSubmission) -> (String, String) {
    let text = format!(
        "Dear {name},\n\
         \n\
         Thank you for reaching out to Csouth Technologies. We have received \
         your message and will respond within 24-48 hours.\n\
         \n\
         Your message:\n\
         \"{message}\"\n\
         \n\
         Best regards,\n\
         Csouth Technologies Team\n\
         \n\
         ---\n\
         info@csouthint.com\n\
         https://csouthint.com\n",
        name = submission.name,
        message = submission.message,
    );
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="margin: 0; padding: 0; background-color: #0a1b29; font-family: Arial, sans-serif;">
  <table role="presentation" style="max-width: 600px; width: 100%; background-color: #0d2538; border-radius: 12px;">
    <tr>
      <td style="padding: 30px 40px; background-color: #1a6a8a; text-align: center;">
        <h1 style="margin: 0; color: #ffffff; font-size: 24px;">Csouth Technologies</h1>
      </td>
    </tr>
    <tr>
      <td style="padding: 40px;">
        <p style="margin: 0 0 20px 0; color: #ffffff; font-size: 18px;">Dear {name},</p>
        <p style="margin: 0 0 20px 0; color: #e2e8f0; font-size: 15px;">
          Thank you for reaching out to Csouth Technologies. We have received
          your message and will respond within 24-48 hours.
        </p>
        <p style="margin: 0 0 8px 0; color: #5eb8d4; font-size: 12px; text-transform: uppercase;">Your Message</p>
        <p style="margin: 0 0 30px 0; color: #cbd5e1; font-size: 14px; font-style: italic; white-space: pre-wrap;">"{message}"</p>
        <p style="margin: 0; color: #e2e8f0; font-size: 15px;">
          Best regards,<br>
          <strong style="color: #ffffff;">Csouth Technologies Team</strong>
        </p>
      </td>
    </tr>
    <tr>
      <td style="padding: 20px 40px; text-align: center;">
        <p style="margin: 0 0 8px 0;"><a href="mailto:info@csouthint.com" style="color: #5eb8d4;">info@csouthint.com</a></p>
        <p style="margin: 0; color: #64748b; font-size: 12px;">&copy; 2025 Csouth Technologies. All rights reserved.</p>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        name = encode_minimal(&submission.name),
        message = encode_minimal(&submission.message),
    );
    (text, html)
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
