/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type shared by every module of the crate

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
///
/// The variants map onto the failure kinds a caller of the gateway can observe:
/// - [`AppError::Network`]: the transport failed and no response was received
/// - [`AppError::Unauthorized`]: the server answered 401 and no refresh was possible
/// - [`AppError::RefreshFailed`]: the token refresh call failed; credentials were wiped
/// - [`AppError::Unexpected`]: any other non-success status
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure, no response was received
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server rejected the request with 401
    #[error("unauthorized")]
    Unauthorized,
    /// The token refresh call failed and the session was cleared
    #[error("session expired: {0}")]
    RefreshFailed(String),
    /// The server answered with an unexpected non-success status
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),
    /// A body could not be serialized or deserialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem failure while reading or writing credentials
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A header value could not be built from the given token
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    /// The credential store rejected an operation
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Returns the HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::Unexpected(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Checks whether this error means the session is gone and the user must log in again
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::RefreshFailed(_))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}
