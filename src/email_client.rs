use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    delivery::{DeliveryError, EmailProvider},
    dispatch::SendRequest,
    domain::Mailbox,
};

/// Client for the Brevo transactional email API.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    api_key: SecretString,
}

#[derive(Serialize)]
struct Contact<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> From<&'a Mailbox> for Contact<'a> {
    fn from(mailbox: &'a Mailbox) -> Self {
        Self {
            email: &mailbox.email,
            name: mailbox.name.as_deref(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    sender: Contact<'a>,
    to: Vec<Contact<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Contact<'a>>,
    subject: &'a str,
    html_content: &'a str,
    text_content: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the email HTTP client.")?;
        let base_url = Url::parse(base_url)
            .with_context(|| format!("{base_url} is not a valid email API url."))?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map(|mut segments| {
                segments.pop_if_empty().extend(["v3", "smtp", "email"]);
            })
            .ok();
        url
    }
}

#[async_trait]
impl EmailProvider for EmailClient {
    async fn send(&self, request: &SendRequest) -> Result<Option<String>, DeliveryError> {
        let body = SendEmailRequest {
            sender: Contact::from(&request.sender),
            to: request.to.iter().map(Contact::from).collect(),
            reply_to: request.reply_to.as_ref().map(Contact::from),
            subject: &request.subject,
            html_content: &request.html_content,
            text_content: &request.text_content,
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header("api-key", self.api_key.expose_secret())
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&raw)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(raw);
            return Err(DeliveryError::Rejected { status, message });
        }

        let receipt = response.json::<SendEmailResponse>().await.ok();
        Ok(receipt.and_then(|r| r.message_id))
    }
}
