use std::time::Duration;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_vec_from_string_or_vec,
};

use crate::domain::Mailbox;
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// Origins allowed to call the API from a browser. Accepts a list or a
    /// comma-separated string.
    #[serde(deserialize_with = "deserialize_vec_from_string_or_vec")]
    pub allowed_origins: Vec<String>,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub api_key: SecretString,
    pub sender_email: String,
    pub sender_name: Option<String>,
    pub admin_email: String,
    pub admin_name: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        if self.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("The email provider API key is not configured.");
        }
        EmailClient::new(&self.base_url, self.api_key.clone(), self.timeout())
    }

    pub fn sender(&self) -> Result<Mailbox, String> {
        Mailbox::parse(self.sender_email.clone(), self.sender_name.clone())
    }

    pub fn admin(&self) -> Result<Mailbox, String> {
        Mailbox::parse(self.admin_email.clone(), self.admin_name.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, the file for `APP_ENV` and `APP_`
/// prefixed variables (`APP_EMAIL_CLIENT__API_KEY=...`).
pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let base_path = std::env::current_dir().context("Failed to determine current directory")?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("Failed to parse APP_ENV")?;

    let env_file = format!("{}.yaml", env.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base.yaml")).required(true))
        .add_source(config::File::from(conf_dir.join(env_file)).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
