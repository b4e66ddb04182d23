pub mod contact_submission;
pub mod sender_email;

pub use contact_submission::ContactSubmission;
pub use sender_email::SenderEmail;
