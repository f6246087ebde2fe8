/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::BEARER_SCHEME;
use crate::error::AppError;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Outgoing request as seen by the gateway
///
/// A descriptor describes exactly one logical call. The gateway marks it as retried the
/// first time it refreshes the access token on its behalf, which is what stops a second 401
/// from triggering another refresh. The flag can only be set by the gateway.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Endpoint path relative to the service prefix, or an absolute URL
    pub path: String,
    /// Request headers; names are unique
    pub headers: HeaderMap,
    /// Optional JSON body
    pub body: Option<Value>,
    retried: bool,
}

impl RequestDescriptor {
    /// Creates a descriptor with no headers and no body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            retried: false,
        }
    }

    /// Creates a GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PATCH descriptor
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a DELETE descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets the JSON body
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets a header, replacing any previous value under the same name
    pub fn with_header(mut self, name: HeaderName, value: &str) -> Result<Self, AppError> {
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(self)
    }

    /// Sets `Authorization: Bearer <token>`
    pub fn set_bearer_token(&mut self, token: &str) -> Result<(), AppError> {
        let mut value = HeaderValue::from_str(&format!("{BEARER_SCHEME} {token}"))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Removes the `Authorization` header, if any
    pub fn clear_authorization(&mut self) {
        self.headers.remove(AUTHORIZATION);
    }

    /// Current `Authorization` header value
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
    }

    /// Whether the gateway already refreshed the token for this call
    #[must_use]
    pub fn is_retried(&self) -> bool {
        self.retried
    }

    pub(crate) fn mark_retried(&mut self) {
        self.retried = true;
    }
}

/// Sends a single HTTP request and classifies the outcome
///
/// No authentication and no retry happen here; the caller decides what to do with each
/// failure kind.
///
/// # Returns
///
/// * `Ok(Response)` - any 2xx response
/// * `Err(AppError::Unauthorized)` - the server answered 401
/// * `Err(AppError::Unexpected(status))` - any other non-success status
/// * `Err(AppError::Network(_))` - the transport failed
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: &HeaderMap,
    body: &Option<Value>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url).headers(headers.clone());
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => {
            warn!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        _ => {
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Unexpected(status))
        }
    }
}
