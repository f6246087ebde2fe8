//! # Glemoa Client
//!
//! Client data layer for the Glemoa member API.
//!
//! ## Features
//!
//! - Authenticated request gateway: bearer token on every request, one transparent token
//!   refresh and replay per call on 401, shared refresh for concurrent callers
//! - Durable session credentials (access and refresh token) on disk or in memory
//! - Bookmark operations: list bookmarked post ids, toggle a bookmark
//! - Notification operations: count, list, mark as read, delete
//! - Static route table with a "requires authentication" flag
//!
//! ## Quick start
//!
//! ```ignore
//! use glemoa_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Arc::new(HttpClient::from_env().await?);
//!     client
//!         .store_credentials(&SessionCredentials::new("access", "refresh"))
//!         .await?;
//!
//!     let notifications = NotificationServiceImpl::new(client.clone());
//!     info!("unread: {}", notifications.count_unread().await?);
//!
//!     let bookmarks = BookmarkServiceImpl::new(client);
//!     bookmarks.toggle_bookmark(42).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `GLEMOA_API_BASE_URL` | `http://localhost:8080` |
//! | `GLEMOA_SERVICE_PREFIX` | `/glemoa-member` |
//! | `GLEMOA_REST_TIMEOUT` | `30` |
//! | `GLEMOA_CREDENTIALS_PATH` | `.glemoa/credentials.json` |
//! | `GLEMOA_BASE_PATH` | `/` |
//! | `LOGLEVEL` | `INFO` |

/// Application layer: configuration, credentials, gateway and services
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Navigation route table
pub mod presentation;
/// Utility functions
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
