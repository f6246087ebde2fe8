/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CREDENTIALS_PATH, DEFAULT_REST_TIMEOUT_SECS,
    DEFAULT_ROUTER_BASE, DEFAULT_SERVICE_PREFIX,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the member API, without the service prefix
    pub base_url: String,
    /// Path prefix prepended to every endpoint (e.g. `/glemoa-member`)
    pub service_prefix: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl RestApiConfig {
    /// Builds the absolute URL for an endpoint path
    ///
    /// Absolute URLs are returned untouched. Leading and trailing slashes are normalised so
    /// `base_url`, `service_prefix` and `path` are joined by exactly one slash each.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.service_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{prefix}/{path}")
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the persisted session credentials
pub struct StorageConfig {
    /// File holding the access and refresh tokens
    pub credentials_path: PathBuf,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the navigation route table
pub struct RouterConfig {
    /// History base path under which the application is served
    pub base_path: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the member API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Credential storage configuration
    pub storage: StorageConfig,
    /// Route table configuration
    pub router: RouterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "GLEMOA_API_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
                service_prefix: get_env_or_default(
                    "GLEMOA_SERVICE_PREFIX",
                    String::from(DEFAULT_SERVICE_PREFIX),
                ),
                timeout: get_env_or_default("GLEMOA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                credentials_path: PathBuf::from(get_env_or_default(
                    "GLEMOA_CREDENTIALS_PATH",
                    String::from(DEFAULT_CREDENTIALS_PATH),
                )),
            },
            router: RouterConfig {
                base_path: get_env_or_default(
                    "GLEMOA_BASE_PATH",
                    String::from(DEFAULT_ROUTER_BASE),
                ),
            },
        }
    }

    /// Creates a configuration pointing at `base_url` with every other setting at its default
    ///
    /// Environment variables are not consulted. Mostly useful against a local or mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                service_prefix: String::from(DEFAULT_SERVICE_PREFIX),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            storage: StorageConfig {
                credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            },
            router: RouterConfig {
                base_path: String::from(DEFAULT_ROUTER_BASE),
            },
        }
    }
}
