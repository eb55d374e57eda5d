use actix_web::{
    HttpRequest, HttpResponse, ResponseError, error::InternalError, error::JsonPayloadError,
    http::StatusCode,
};

use super::super::helpers::error_chain_fmt;
use crate::{domain::SendResult, mailer::MailerError};

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(thiserror::Error)]
pub enum NotificationError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<MailerError> for NotificationError {
    fn from(e: MailerError) -> Self {
        match e {
            MailerError::MissingFields(_) | MailerError::InvalidPayload(_) => {
                NotificationError::ValidationError(e.to_string())
            }
            MailerError::UnexpectedError(e) => NotificationError::UnexpectedError(e),
        }
    }
}

impl ResponseError for NotificationError {
    fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::ValidationError(_) => StatusCode::BAD_REQUEST,
            NotificationError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            NotificationError::ValidationError(message) => SendResult::failed(message),
            NotificationError::UnexpectedError(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to process a send request"
                );
                SendResult::failed(INTERNAL_SERVER_ERROR)
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Malformed JSON bodies get the same 400 shape as missing fields.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = NotificationError::ValidationError(err.to_string()).error_response();
    InternalError::from_response(err, response).into()
}
