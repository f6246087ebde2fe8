use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Interface for the bookmark service
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// Gets the ids of every post the member has bookmarked
    ///
    /// Duplicate ids sent by the server collapse into one entry.
    async fn fetch_bookmarked_post_ids(&self) -> Result<BTreeSet<u64>, AppError>;

    /// Flips the bookmark flag of a post
    ///
    /// # Arguments
    /// * `post_id` - The post to bookmark or un-bookmark
    async fn toggle_bookmark(&self, post_id: u64) -> Result<(), AppError>;
}
