use crate::common::{client_for, endpoint, logged_in_client, logged_out_client};
use glemoa_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_logged_out_operations_make_no_request() {
    let mut server = Server::new_async().await;
    let (client, _) = logged_out_client(&server);

    let mut any_request = Vec::new();
    for method in ["GET", "POST", "PATCH", "DELETE"] {
        any_request.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }

    let service = NotificationServiceImpl::new(client);
    assert_eq!(service.count_unread().await.unwrap(), 0);
    assert!(service.get_unread().await.unwrap().is_empty());
    assert!(service.get_read().await.unwrap().is_empty());
    service.mark_as_read(1).await.unwrap();
    service.mark_all_as_read().await.unwrap();
    service.delete_notification(1).await.unwrap();
    service.delete_all_notifications().await.unwrap();

    for mock in &any_request {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_count_unread() {
    let mut server = Server::new_async().await;
    let (client, _) = logged_in_client(&server);

    let mock = server
        .mock("GET", endpoint("notification/count-unread").as_str())
        .match_header("authorization", "Bearer old-access")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("12")
        .expect(1)
        .create_async()
        .await;

    let service = NotificationServiceImpl::new(client);
    assert_eq!(service.count_unread().await.unwrap(), 12);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_read_keeps_unknown_fields() {
    let mut server = Server::new_async().await;
    let (client, _) = logged_in_client(&server);

    let mock = server
        .mock("GET", endpoint("notification/search-read").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":5,"title":"first","siteName":"clien"},{"id":9}]"#)
        .expect(1)
        .create_async()
        .await;

    let service = NotificationServiceImpl::new(client);
    let posts = service.get_read().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title.as_deref(), Some("first"));
    assert_eq!(posts[0].extra.get("siteName"), Some(&serde_json::json!("clien")));
    assert_eq!(posts[1].id, 9);
    assert!(posts[1].title.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_mark_and_delete_paths() {
    let mut server = Server::new_async().await;
    let (client, _) = logged_in_client(&server);

    let mark = server
        .mock("PATCH", endpoint("notification/read/17").as_str())
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let mark_all = server
        .mock("PATCH", endpoint("notification/read-all").as_str())
        .with_status(204)
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", endpoint("notification/delete/17").as_str())
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let delete_all = server
        .mock("DELETE", endpoint("notification/delete-all").as_str())
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let service = NotificationServiceImpl::new(client);
    service.mark_as_read(17).await.unwrap();
    service.mark_all_as_read().await.unwrap();
    service.delete_notification(17).await.unwrap();
    service.delete_all_notifications().await.unwrap();

    mark.assert_async().await;
    mark_all.assert_async().await;
    delete.assert_async().await;
    delete_all.assert_async().await;
}

#[tokio::test]
async fn test_get_unread_rethrows_failure() {
    let mut server = Server::new_async().await;
    let (client, _) = logged_in_client(&server);

    let mock = server
        .mock("GET", endpoint("notification/search-unread").as_str())
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let service = NotificationServiceImpl::new(client);
    let err = service.get_unread().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_expired_session_through_service() {
    let mut server = Server::new_async().await;
    let (client, store) = logged_in_client(&server);

    let rejected = server
        .mock("GET", endpoint("notification/count-unread").as_str())
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", endpoint("member/refreshToken").as_str())
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let service = NotificationServiceImpl::new(client);
    let err = service.count_unread().await.unwrap_err();
    assert!(err.is_session_expired(), "got {err:?}");
    rejected.assert_async().await;
    refresh.assert_async().await;

    // session is gone, so the next call short-circuits
    assert_eq!(service.count_unread().await.unwrap(), 0);
    assert!(store.refresh_token().await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_access_token_short_circuits() {
    let mut server = Server::new_async().await;
    let (client, _) = client_for(&server, SessionCredentials::new("", "r"));

    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = NotificationServiceImpl::new(client);
    assert_eq!(service.count_unread().await.unwrap(), 0);
    assert!(service.get_unread().await.unwrap().is_empty());
    mock.assert_async().await;
}

/// Store whose reads always fail
struct UnreadableStore;

#[async_trait]
impl CredentialStore for UnreadableStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Storage("credentials file is locked".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_store_read_failure_is_rethrown() {
    let mut server = Server::new_async().await;
    let mut any_request = Vec::new();
    for method in ["GET", "PATCH", "DELETE"] {
        any_request.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }

    let client = HttpClient::new(
        Config::with_base_url(&server.url()),
        Arc::new(UnreadableStore),
    )
    .unwrap();
    let service = NotificationServiceImpl::new(Arc::new(client));

    let err = service.count_unread().await.unwrap_err();
    assert!(matches!(err, AppError::Storage(_)), "got {err:?}");
    assert!(matches!(
        service.mark_all_as_read().await,
        Err(AppError::Storage(_))
    ));
    assert!(matches!(
        service.delete_notification(7).await,
        Err(AppError::Storage(_))
    ));
    for mock in &any_request {
        mock.assert_async().await;
    }
}
