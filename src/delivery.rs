use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{dispatch::SendRequest, domain::SendResult, routes::error_chain_fmt};

/// Message id reported when the provider accepts an email without naming it.
pub const UNKNOWN_MESSAGE_ID: &str = "sent";

const GENERIC_DELIVERY_ERROR: &str = "Failed to send email";

/// The external transactional email service.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Submits one email and returns the provider's message id, if any.
    async fn send(&self, request: &SendRequest) -> Result<Option<String>, DeliveryError>;
}

#[derive(thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to reach the email provider.")]
    Transport(#[from] reqwest::Error),
    #[error("The email provider rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl std::fmt::Debug for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Sends each request through the provider exactly once and folds every
/// outcome into a [`SendResult`]. Provider failures are logged here and never
/// returned as errors.
#[derive(Clone)]
pub struct DeliveryClient {
    provider: Arc<dyn EmailProvider>,
}

impl DeliveryClient {
    pub fn new(provider: impl EmailProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    #[tracing::instrument(
        name = "Delivering email",
        skip_all,
        fields(recipients = request.to.len(), subject = %request.subject)
    )]
    pub async fn send(&self, request: &SendRequest) -> SendResult {
        match self.provider.send(request).await {
            Ok(message_id) => {
                let message_id = message_id
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| UNKNOWN_MESSAGE_ID.to_string());
                tracing::info!(%message_id, "Email accepted by the provider");
                SendResult::sent(message_id)
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver email"
                );
                let message = e.to_string();
                if message.is_empty() {
                    SendResult::failed(GENERIC_DELIVERY_ERROR)
                } else {
                    SendResult::failed(message)
                }
            }
        }
    }
}
