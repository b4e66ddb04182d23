/// A contact-form submission that passed the handler's boundary check.
///
/// Only presence is enforced here: each field must be a non-empty
/// string. The submitter's address is relayed as-is — it is used as the
/// acknowledgment recipient and the reply-to header, never for routing
/// decisions, so no format check is applied server-side. No length bound
/// either; the fields are untrusted free text and stay that way until
/// they are rendered into an email body.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn parse(name: String, email: String, message: String) -> Result<ContactSubmission, String> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            Err("One or more required fields are missing or empty".to_string())
        } else {
            Ok(Self {
                name,
                email,
                message,
            })
        }
    }
}
