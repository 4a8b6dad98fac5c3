use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use todo_shared::Message;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Everything a handler can fail with, mapped onto a status code and a
/// `{"message", "error"}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    MalformedBody(String),

    #[error("{0}")]
    MissingTitle(&'static str),

    #[error("The id is invalid")]
    InvalidId,

    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { context, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) | Self::MissingTitle(_) | Self::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::MalformedBody(detail) => Message::with_error(self.to_string(), detail.as_str()),
            Self::Store { source, .. } => {
                log::error!("{}: {}", self, source);
                Message::with_error(self.to_string(), source.to_string())
            }
            Self::MissingTitle(_) | Self::InvalidId => Message::new(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Failures that abort the process before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("could not open todo store: {0}")]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
