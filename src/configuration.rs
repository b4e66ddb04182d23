use crate::domain::SenderEmail;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<SenderEmail, String> {
        SenderEmail::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Mailbox that receives the internal notification for each submission.
#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    pub notify_email: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();

    // Read config file; its values are the fallback defaults
    settings.merge(config::File::with_name("config"))?;

    // Operator overrides, e.g. APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // Parse merged sources into the Settings struct
    settings.try_into()
}
