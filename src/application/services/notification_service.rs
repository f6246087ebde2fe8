use crate::application::client::HttpClient;
use crate::application::interfaces::notification::NotificationService;
use crate::constants::{
    COUNT_UNREAD_PATH, DELETE_ALL_NOTIFICATIONS_PATH, DELETE_NOTIFICATION_PATH,
    MARK_ALL_READ_PATH, MARK_READ_PATH, SEARCH_READ_PATH, SEARCH_UNREAD_PATH,
};
use crate::error::AppError;
use crate::model::http::RequestDescriptor;
use crate::model::responses::PostReference;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Implementation of the notification service
pub struct NotificationServiceImpl {
    client: Arc<HttpClient>,
}

impl NotificationServiceImpl {
    /// Creates a new instance of the notification service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Gets the underlying client
    pub fn client(&self) -> Arc<HttpClient> {
        self.client.clone()
    }

    async fn logged_out(&self) -> Result<bool, AppError> {
        let has_token = self
            .client
            .has_access_token()
            .await
            .inspect_err(|e| error!("Error reading stored access token: {}", e))?;
        if !has_token {
            debug!("No access token stored, skipping notification request");
        }
        Ok(!has_token)
    }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn count_unread(&self) -> Result<u64, AppError> {
        if self.logged_out().await? {
            return Ok(0);
        }

        let count: u64 = self
            .client
            .get(COUNT_UNREAD_PATH)
            .await
            .inspect_err(|e| error!("Error fetching unread notification count: {}", e))?;

        debug!("Unread notifications: {}", count);
        Ok(count)
    }

    async fn get_unread(&self) -> Result<Vec<PostReference>, AppError> {
        if self.logged_out().await? {
            return Ok(Vec::new());
        }

        let posts: Vec<PostReference> = self
            .client
            .get(SEARCH_UNREAD_PATH)
            .await
            .inspect_err(|e| error!("Error fetching unread notifications: {}", e))?;

        debug!("Unread notifications obtained: {} posts", posts.len());
        Ok(posts)
    }

    async fn get_read(&self) -> Result<Vec<PostReference>, AppError> {
        if self.logged_out().await? {
            return Ok(Vec::new());
        }

        let posts: Vec<PostReference> = self
            .client
            .get(SEARCH_READ_PATH)
            .await
            .inspect_err(|e| error!("Error fetching read notifications: {}", e))?;

        debug!("Read notifications obtained: {} posts", posts.len());
        Ok(posts)
    }

    async fn mark_as_read(&self, post_id: u64) -> Result<(), AppError> {
        if self.logged_out().await? {
            return Ok(());
        }

        info!("Marking notification for post {} as read", post_id);
        let path = format!("{MARK_READ_PATH}/{post_id}");
        self.client
            .execute(RequestDescriptor::patch(path))
            .await
            .inspect_err(|e| {
                error!(
                    "Error marking notification for post {} as read: {}",
                    post_id, e
                )
            })
    }

    async fn mark_all_as_read(&self) -> Result<(), AppError> {
        if self.logged_out().await? {
            return Ok(());
        }

        info!("Marking all notifications as read");
        self.client
            .execute(RequestDescriptor::patch(MARK_ALL_READ_PATH))
            .await
            .inspect_err(|e| error!("Error marking all notifications as read: {}", e))
    }

    async fn delete_notification(&self, post_id: u64) -> Result<(), AppError> {
        if self.logged_out().await? {
            return Ok(());
        }

        info!("Deleting notification for post {}", post_id);
        let path = format!("{DELETE_NOTIFICATION_PATH}/{post_id}");
        self.client
            .execute(RequestDescriptor::delete(path))
            .await
            .inspect_err(|e| error!("Error deleting notification for post {}: {}", post_id, e))
    }

    async fn delete_all_notifications(&self) -> Result<(), AppError> {
        if self.logged_out().await? {
            return Ok(());
        }

        info!("Deleting all read notifications");
        self.client
            .execute(RequestDescriptor::delete(DELETE_ALL_NOTIFICATIONS_PATH))
            .await
            .inspect_err(|e| error!("Error deleting all notifications: {}", e))
    }
}
