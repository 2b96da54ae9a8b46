//! Errors raised by backend calls

use crate::upload::UploadRejection;
use thiserror::Error;

/// Backend client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the backend's `detail` when it sent one
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Local validation refused the request before it was sent
    #[error("{0}")]
    Rejected(#[from] UploadRejection),
}

impl ApiError {
    /// Backend-supplied detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message for the user: the backend detail or local rejection when
    /// available, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(rejection) => rejection.to_string(),
            _ => self.detail().unwrap_or(fallback).to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
