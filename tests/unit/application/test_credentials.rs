use glemoa_client::application::auth::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionCredentials,
};
use glemoa_client::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use glemoa_client::error::AppError;

#[test]
fn test_session_credentials_serialization_uses_storage_keys() {
    let credentials = SessionCredentials::new("a", "r");
    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json[ACCESS_TOKEN_KEY], "a");
    assert_eq!(json[REFRESH_TOKEN_KEY], "r");

    let empty = serde_json::to_string(&SessionCredentials::default()).unwrap();
    assert_eq!(empty, "{}");
}

#[tokio::test]
async fn test_memory_store_set_get_remove() {
    let store = MemoryCredentialStore::new();
    assert!(store.access_token().await.unwrap().is_none());

    store.set(ACCESS_TOKEN_KEY, "a").await.unwrap();
    assert_eq!(store.access_token().await.unwrap().as_deref(), Some("a"));

    store.remove(ACCESS_TOKEN_KEY).await.unwrap();
    store.remove(ACCESS_TOKEN_KEY).await.unwrap();
    assert!(store.access_token().await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_tokens_read_as_absent() {
    let store = MemoryCredentialStore::with_credentials(&SessionCredentials::new("", ""));
    assert_eq!(store.get(ACCESS_TOKEN_KEY).await.unwrap().as_deref(), Some(""));
    assert!(store.access_token().await.unwrap().is_none());
    assert!(store.refresh_token().await.unwrap().is_none());
    assert!(!store.credentials().await.unwrap().is_authenticated());
}

#[tokio::test]
async fn test_store_credentials_removes_absent_tokens() {
    let store = MemoryCredentialStore::with_credentials(&SessionCredentials::new("a", "r"));

    store
        .store_credentials(&SessionCredentials {
            access_token: Some("b".to_string()),
            refresh_token: None,
        })
        .await
        .unwrap();

    let credentials = store.credentials().await.unwrap();
    assert_eq!(credentials.access_token.as_deref(), Some("b"));
    assert!(credentials.refresh_token.is_none());
    assert!(credentials.is_authenticated());
}

#[tokio::test]
async fn test_clear_removes_both_tokens() {
    let store = MemoryCredentialStore::with_credentials(&SessionCredentials::new("a", "r"));
    store.clear().await.unwrap();
    assert_eq!(
        store.credentials().await.unwrap(),
        SessionCredentials::default()
    );
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("credentials.json");

    let store = FileCredentialStore::open(&path).await.unwrap();
    assert!(store.credentials().await.unwrap().access_token.is_none());
    store
        .store_credentials(&SessionCredentials::new("a", "r"))
        .await
        .unwrap();
    drop(store);

    let reopened = FileCredentialStore::open(&path).await.unwrap();
    assert_eq!(
        reopened.credentials().await.unwrap(),
        SessionCredentials::new("a", "r")
    );
    assert_eq!(reopened.path(), path.as_path());

    reopened.clear().await.unwrap();
    drop(reopened);

    let cleared = FileCredentialStore::open(&path).await.unwrap();
    assert_eq!(
        cleared.credentials().await.unwrap(),
        SessionCredentials::default()
    );
}

#[tokio::test]
async fn test_file_store_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    let store = FileCredentialStore::open(&path).await.unwrap();
    store.set("theme", "dark").await.unwrap();
    store
        .store_credentials(&SessionCredentials::new("a", "r"))
        .await
        .unwrap();
    store.clear().await.unwrap();
    drop(store);

    let reopened = FileCredentialStore::open(&path).await.unwrap();
    assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("dark"));
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileCredentialStore::open(&path).await.unwrap_err();
    assert!(matches!(err, AppError::Storage(_)), "got {err:?}");
}

#[tokio::test]
async fn test_file_store_empty_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "").unwrap();

    let store = FileCredentialStore::open(&path).await.unwrap();
    assert!(store.refresh_token().await.unwrap().is_none());
}
