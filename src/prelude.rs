/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Glemoa Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use glemoa_client::prelude::*;
//!
//! let router = Router::default();
//! assert!(router.resolve("/").is_some());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the member API client
pub use crate::application::config::{Config, RestApiConfig, RouterConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION CREDENTIALS
// ============================================================================

/// Token pair and storage
pub use crate::application::auth::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionCredentials,
};

// ============================================================================
// GATEWAY
// ============================================================================

/// Authenticated HTTP client
pub use crate::application::client::HttpClient;

/// Request descriptor
pub use crate::model::http::RequestDescriptor;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{BookmarkService, NotificationService};

/// Service implementations
pub use crate::application::services::{BookmarkServiceImpl, NotificationServiceImpl};

// ============================================================================
// MODELS
// ============================================================================

/// Wire models
pub use crate::model::requests::{RefreshTokenRequest, ToggleBookmarkRequest};
pub use crate::model::responses::{PostReference, RefreshTokenResponse};

// ============================================================================
// NAVIGATION
// ============================================================================

/// Route table
pub use crate::presentation::{Page, Route, RouteMatch, Router};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for custom requests
pub use reqwest::{Method, StatusCode};
