/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authenticated request gateway for the member API
//!
//! Every request sent through [`HttpClient::send`] carries the stored access token as a
//! bearer token. When the server answers 401 the gateway refreshes the access token once
//! for that call and replays it. A failed refresh wipes the stored credentials and is
//! reported as [`AppError::RefreshFailed`] instead of the original 401.
//!
//! # Example
//! ```ignore
//! use glemoa_client::prelude::*;
//!
//! let client = HttpClient::from_env().await?;
//! let unread: u64 = client.get("notification/count-unread").await?;
//! ```

use crate::application::auth::{CredentialStore, FileCredentialStore, SessionCredentials};
use crate::application::config::Config;
use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{RequestDescriptor, make_http_request};
use crate::model::requests::RefreshTokenRequest;
use crate::model::responses::RefreshTokenResponse;
use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::header::HeaderMap;
use reqwest::{Client as HttpInternalClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Refresh shared by every call that hits a 401 while it is running
///
/// Resolves to the new access token, or to the reason the refresh failed.
type RefreshInFlight = Shared<BoxFuture<'static, Result<String, String>>>;

/// Client for the member API with transparent token refresh
///
/// Cloning is cheap; clones share the credential store and the in-flight refresh.
#[derive(Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    store: Arc<dyn CredentialStore>,
    refresh_in_flight: Arc<Mutex<Option<RefreshInFlight>>>,
}

impl HttpClient {
    /// Creates a client over an existing credential store
    ///
    /// # Arguments
    /// * `config` - API settings
    /// * `store` - Storage holding the access and refresh tokens
    pub fn new(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            store,
            refresh_in_flight: Arc::new(Mutex::new(None)),
        })
    }

    /// Creates a client from the environment, with credentials persisted on disk
    pub async fn from_env() -> Result<Self, AppError> {
        let config = Config::new();
        let store = FileCredentialStore::open(&config.storage.credentials_path).await?;
        Self::new(config, Arc::new(store))
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Credential store in use
    pub fn store(&self) -> Arc<dyn CredentialStore> {
        self.store.clone()
    }

    /// Reads the stored access and refresh tokens
    pub async fn credentials(&self) -> Result<SessionCredentials, AppError> {
        self.store.credentials().await
    }

    /// Checks whether a non-empty access token is stored
    pub async fn has_access_token(&self) -> Result<bool, AppError> {
        Ok(self.store.access_token().await?.is_some())
    }

    /// Stores the tokens issued by login or registration
    pub async fn store_credentials(&self, credentials: &SessionCredentials) -> Result<(), AppError> {
        self.store.store_credentials(credentials).await?;
        info!("✓ Session credentials stored");
        Ok(())
    }

    /// Clears both tokens
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.store.clear().await?;
        info!("✓ Logged out successfully");
        Ok(())
    }

    /// Makes an authenticated GET request and parses the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(RequestDescriptor::get(path)).await
    }

    /// Makes an authenticated POST request and parses the JSON response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(RequestDescriptor::post(path).with_json(body)?)
            .await
    }

    /// Sends an authenticated request and parses the JSON response
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, AppError> {
        let response = self.send(request).await?;
        self.parse_response(response).await
    }

    /// Sends an authenticated request whose response body is not needed
    pub async fn execute(&self, request: RequestDescriptor) -> Result<(), AppError> {
        self.send(request).await?;
        Ok(())
    }

    /// Sends a request without any `Authorization` header and without refresh handling
    pub async fn public_request<T: DeserializeOwned>(
        &self,
        mut request: RequestDescriptor,
    ) -> Result<T, AppError> {
        request.clear_authorization();
        let response = self.dispatch(&request).await?;
        self.parse_response(response).await
    }

    /// Sends an authenticated request, refreshing the access token once on 401
    ///
    /// # Returns
    /// * `Ok(Response)` - Response of the request, or of its replay after a refresh
    /// * `Err(AppError::RefreshFailed)` - The request got 401 and the refresh failed;
    ///   stored credentials have been cleared
    /// * `Err(AppError::Unauthorized)` - The replay got 401 again
    /// * `Err(_)` - Any other failure, unchanged
    pub async fn send(&self, mut request: RequestDescriptor) -> Result<Response, AppError> {
        match self.store.access_token().await?.as_deref() {
            Some(token) => request.set_bearer_token(token)?,
            None => request.clear_authorization(),
        }

        let first_attempt = self.dispatch(&request).await;
        match first_attempt {
            Err(AppError::Unauthorized) if !request.is_retried() => {
                request.mark_retried();
                warn!(
                    "{} {} answered 401, refreshing access token",
                    request.method, request.path
                );
                let access_token = self.refresh_access_token().await?;
                request.set_bearer_token(&access_token)?;
                debug!("Replaying {} {}", request.method, request.path);
                self.dispatch(&request).await
            }
            result => result,
        }
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// Concurrent callers share a single refresh call. On success the new access token is
    /// stored; on failure both tokens are cleared.
    pub async fn refresh_access_token(&self) -> Result<String, AppError> {
        let refresh = {
            let mut in_flight = self.refresh_in_flight.lock().await;
            // a finished refresh left behind by a dropped caller is not joined
            match in_flight.as_ref().filter(|refresh| refresh.peek().is_none()) {
                Some(refresh) => {
                    debug!("Joining token refresh already in progress");
                    refresh.clone()
                }
                None => {
                    let refresh = refresh_session(
                        self.http_client.clone(),
                        self.config.rest_api.url_for(REFRESH_TOKEN_PATH),
                        self.store.clone(),
                    )
                    .boxed()
                    .shared();
                    *in_flight = Some(refresh.clone());
                    refresh
                }
            }
        };

        let outcome = refresh.clone().await;

        {
            let mut in_flight = self.refresh_in_flight.lock().await;
            if in_flight
                .as_ref()
                .is_some_and(|current| current.ptr_eq(&refresh))
            {
                *in_flight = None;
            }
        }

        outcome.map_err(AppError::RefreshFailed)
    }

    async fn dispatch(&self, request: &RequestDescriptor) -> Result<Response, AppError> {
        let url = self.config.rest_api.url_for(&request.path);
        make_http_request(
            &self.http_client,
            request.method.clone(),
            &url,
            &request.headers,
            &request.body,
        )
        .await
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Runs one refresh: exchange the token, then store it or wipe the session
async fn refresh_session(
    client: HttpInternalClient,
    url: String,
    store: Arc<dyn CredentialStore>,
) -> Result<String, String> {
    info!("Refreshing access token");
    match exchange_refresh_token(&client, &url, store.as_ref()).await {
        Ok(access_token) => {
            info!("✓ Access token refreshed");
            Ok(access_token)
        }
        Err(reason) => {
            warn!("Token refresh failed ({}), clearing session", reason);
            if let Err(e) = store.clear().await {
                error!("Failed to clear session credentials: {}", e);
            }
            Err(reason)
        }
    }
}

async fn exchange_refresh_token(
    client: &HttpInternalClient,
    url: &str,
    store: &dyn CredentialStore,
) -> Result<String, String> {
    let refresh_token = store
        .refresh_token()
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| String::from("no refresh token stored"))?;

    let body = serde_json::to_value(RefreshTokenRequest { refresh_token })
        .map_err(|e| e.to_string())?;

    // refresh goes out without the stale bearer token
    let response = make_http_request(client, Method::POST, url, &HeaderMap::new(), &Some(body))
        .await
        .map_err(|e| e.to_string())?;

    let body = response.bytes().await.map_err(|e| e.to_string())?;
    let payload: RefreshTokenResponse =
        serde_json::from_slice(&body).map_err(|e| format!("invalid refresh response: {e}"))?;

    store
        .set(ACCESS_TOKEN_KEY, &payload.access_token)
        .await
        .map_err(|e| e.to_string())?;

    Ok(payload.access_token)
}
