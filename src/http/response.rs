//! Error responses.
//!
//! # Responsibilities
//! - Map store and decode failures to HTTP status codes
//! - Render every error as a JSON `{"message": ...}` body
//!
//! # Status Mapping
//! - BlankTitle, TitleExists, malformed body or path → 400 Bad Request
//! - NotFound → 404 Not Found
//! - Known path, unrouted method → 405 Method Not Allowed
//! - Body over the size limit → 413 Payload Too Large
//! - Unexpected store failure → 500 Internal Server Error

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// An error surfaced to the HTTP caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m)
            | ApiError::NotFound(m)
            | ApiError::MethodNotAllowed(m)
            | ApiError::PayloadTooLarge(m)
            | ApiError::Internal(m) => m,
        }
    }

    fn into_message(self) -> String {
        match self {
            ApiError::BadRequest(m)
            | ApiError::NotFound(m)
            | ApiError::MethodNotAllowed(m)
            | ApiError::PayloadTooLarge(m)
            | ApiError::Internal(m) => m,
        }
    }

    pub(crate) fn blank_title() -> Self {
        StoreError::BlankTitle.into()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::BlankTitle | StoreError::TitleExists(_) => ApiError::BadRequest(message),
            StoreError::NotFound(_) => ApiError::NotFound(message),
            StoreError::Unexpected(_) => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // A body cut off by the size limit keeps its 413; every other decode failure is a 400.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, message = %self.message(), "Request failed");
        } else {
            tracing::debug!(status = %status, message = %self.message(), "Request rejected");
        }

        let body = ErrorBody {
            message: self.into_message(),
        };
        (status, Json(body)).into_response()
    }
}
