//! HTTP boundary errors and their status mapping.
//!
//! # Invariants
//! - Empty and duplicate names both map to 400 with no finer code.
//! - Error responses carry an empty body; details go to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use listd_core::db::DbError;
use listd_core::{ListId, ListServiceError, RepoError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// Request could not be decoded (bad JSON body or path id).
    BadRequest(String),
    /// Name is blank.
    Validation,
    /// Name collides with another list.
    Conflict,
    /// Target list does not exist.
    NotFound(ListId),
    /// Storage or runtime failure.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Validation => "invalid_name",
            Self::Conflict => "duplicate_name",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::Validation => write!(f, "list name must not be empty"),
            Self::Conflict => write!(f, "list name is already in use"),
            Self::NotFound(id) => write!(f, "list not found: {id}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for ApiError {}

impl From<ListServiceError> for ApiError {
    fn from(value: ListServiceError) -> Self {
        match value {
            ListServiceError::InvalidName => Self::Validation,
            ListServiceError::DuplicateName => Self::Conflict,
            ListServiceError::ListNotFound(id) => Self::NotFound(id),
            ListServiceError::Repo(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        ListServiceError::from(value).into()
    }
}

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        Self::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(
                "event=request_failed module=api status=error error_code={} error={}",
                self.code(),
                self
            );
        } else {
            debug!(
                "event=request_rejected module=api status=error error_code={} http_status={}",
                self.code(),
                status.as_u16()
            );
        }
        status.into_response()
    }
}
