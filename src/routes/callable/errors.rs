use actix_web::{
    HttpRequest, HttpResponse, ResponseError, error::InternalError, error::JsonPayloadError,
    http::StatusCode,
};

use super::{
    super::helpers::error_chain_fmt,
    types::{CallableErrorBody, ErrorDetails},
};
use crate::mailer::MailerError;

#[derive(thiserror::Error)]
pub enum CallableError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Function {0} is not defined.")]
    NotFound(String),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl CallableError {
    /// Canonical status name carried in the error body.
    pub fn status(&self) -> &'static str {
        match self {
            CallableError::InvalidArgument(_) => "INVALID_ARGUMENT",
            CallableError::NotFound(_) => "NOT_FOUND",
            CallableError::Internal(_) => "INTERNAL",
        }
    }
}

impl std::fmt::Debug for CallableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<MailerError> for CallableError {
    fn from(e: MailerError) -> Self {
        match e {
            MailerError::MissingFields(_) | MailerError::InvalidPayload(_) => {
                CallableError::InvalidArgument(e.to_string())
            }
            MailerError::UnexpectedError(e) => CallableError::Internal(e),
        }
    }
}

impl ResponseError for CallableError {
    fn status_code(&self) -> StatusCode {
        match self {
            CallableError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CallableError::NotFound(_) => StatusCode::NOT_FOUND,
            CallableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let CallableError::Internal(e) = self {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Callable function failed"
            );
        }
        HttpResponse::build(self.status_code()).json(CallableErrorBody {
            error: ErrorDetails {
                status: self.status().to_string(),
                message: self.to_string(),
            },
        })
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = CallableError::InvalidArgument(err.to_string()).error_response();
    InternalError::from_response(err, response).into()
}
