//! Request-level errors and their HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::render;

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum SiteError {
    /// No such page or record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storage or conversion failure from the library crates.
    #[error(transparent)]
    Core(#[from] quizbank_core::Error),
}

/// Result alias for handlers.
pub type SiteResult<T> = std::result::Result<T, SiteError>;

impl SiteError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = match status {
            StatusCode::NOT_FOUND => render::not_found_page(),
            StatusCode::BAD_REQUEST => render::error_page("Bad request", &self.to_string()),
            _ => render::error_page("Something went wrong", "Please try again later."),
        };
        (status, Html(body)).into_response()
    }
}
