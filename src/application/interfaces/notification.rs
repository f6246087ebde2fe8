use crate::error::AppError;
use crate::model::responses::PostReference;
use async_trait::async_trait;

/// Interface for the notification service
///
/// Every operation requires a logged-in member. Without a stored access token the
/// operations return an empty result and make no request.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Gets the number of unread notifications, `0` when logged out
    async fn count_unread(&self) -> Result<u64, AppError>;

    /// Gets the posts referenced by unread notifications
    async fn get_unread(&self) -> Result<Vec<PostReference>, AppError>;

    /// Gets the posts referenced by read notifications
    async fn get_read(&self) -> Result<Vec<PostReference>, AppError>;

    /// Marks the notification for a post as read
    ///
    /// # Arguments
    /// * `post_id` - Post the notification refers to
    async fn mark_as_read(&self, post_id: u64) -> Result<(), AppError>;

    /// Marks every notification as read
    async fn mark_all_as_read(&self) -> Result<(), AppError>;

    /// Deletes the read notification for a post
    ///
    /// # Arguments
    /// * `post_id` - Post the notification refers to
    async fn delete_notification(&self, post_id: u64) -> Result<(), AppError>;

    /// Deletes every read notification
    async fn delete_all_notifications(&self) -> Result<(), AppError>;
}
