/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Session credentials and their persistence
//!
//! The access and refresh tokens live in a process-wide key-value store that survives
//! restarts. Login and registration write the initial pair, the gateway overwrites the
//! access token after a refresh and wipes both when a refresh fails.

use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Access and refresh token pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredentials {
    /// Token sent as `Authorization: Bearer <token>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Token exchanged for a new access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl SessionCredentials {
    /// Creates a credential pair as returned by login or registration
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Checks whether an access token is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Durable key-value storage for string values
///
/// Only two keys are used by this crate, [`ACCESS_TOKEN_KEY`] and [`REFRESH_TOKEN_KEY`], but
/// stores keep any key so they can be shared with other client state.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Reads the access token; an empty value counts as absent
    async fn access_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.get(ACCESS_TOKEN_KEY).await?.filter(|t| !t.is_empty()))
    }

    /// Reads the refresh token; an empty value counts as absent
    async fn refresh_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.get(REFRESH_TOKEN_KEY).await?.filter(|t| !t.is_empty()))
    }

    /// Reads both tokens
    async fn credentials(&self) -> Result<SessionCredentials, AppError> {
        Ok(SessionCredentials {
            access_token: self.access_token().await?,
            refresh_token: self.refresh_token().await?,
        })
    }

    /// Writes both tokens; an absent token removes the stored one
    async fn store_credentials(&self, credentials: &SessionCredentials) -> Result<(), AppError> {
        match &credentials.access_token {
            Some(token) => self.set(ACCESS_TOKEN_KEY, token).await?,
            None => self.remove(ACCESS_TOKEN_KEY).await?,
        }
        match &credentials.refresh_token {
            Some(token) => self.set(REFRESH_TOKEN_KEY, token).await?,
            None => self.remove(REFRESH_TOKEN_KEY).await?,
        }
        Ok(())
    }

    /// Removes both tokens
    async fn clear(&self) -> Result<(), AppError> {
        self.remove(ACCESS_TOKEN_KEY).await?;
        self.remove(REFRESH_TOKEN_KEY).await
    }
}

/// In-memory store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `credentials`
    pub fn with_credentials(credentials: &SessionCredentials) -> Self {
        let mut entries = BTreeMap::new();
        if let Some(token) = &credentials.access_token {
            entries.insert(ACCESS_TOKEN_KEY.to_string(), token.clone());
        }
        if let Some(token) = &credentials.refresh_token {
            entries.insert(REFRESH_TOKEN_KEY.to_string(), token.clone());
        }
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// On-disk layout of [`FileCredentialStore`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntries {
    #[serde(default)]
    entries: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// JSON file backed store that survives process restarts
///
/// Entries are cached in memory and the whole file is rewritten on every change. Writes go
/// to a sibling temporary file first and are renamed into place.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    cache: RwLock<StoredEntries>,
}

impl FileCredentialStore {
    /// Opens the store at `path`, loading any entries already saved there
    ///
    /// A missing file yields an empty store; the file and its parent directories are created
    /// on the first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let cache = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => StoredEntries::default(),
            Ok(bytes) => {
                let stored: StoredEntries = serde_json::from_slice(&bytes).map_err(|e| {
                    AppError::Storage(format!(
                        "corrupt credentials file {}: {e}",
                        path.display()
                    ))
                })?;
                debug!(
                    "Loaded {} credential entries from {}",
                    stored.entries.len(),
                    path.display()
                );
                stored
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No credentials file at {}, starting empty", path.display());
                StoredEntries::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, stored: &StoredEntries) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(stored)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            warn!(
                "Failed to move credentials into {}: {}",
                self.path.display(),
                e
            );
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.cache.read().await.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut cache = self.cache.write().await;
        if cache.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        cache.entries.insert(key.to_string(), value.to_string());
        cache.updated_at = Some(Utc::now());
        self.persist(&cache).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut cache = self.cache.write().await;
        if cache.entries.remove(key).is_none() {
            return Ok(());
        }
        cache.updated_at = Some(Utc::now());
        self.persist(&cache).await
    }
}
