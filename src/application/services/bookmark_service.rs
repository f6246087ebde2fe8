use crate::application::client::HttpClient;
use crate::application::interfaces::bookmark::BookmarkService;
use crate::constants::{BOOKMARKED_POST_IDS_PATH, TOGGLE_BOOKMARK_PATH};
use crate::error::AppError;
use crate::model::http::RequestDescriptor;
use crate::model::requests::ToggleBookmarkRequest;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Implementation of the bookmark service
///
/// Bookmark calls always go through the gateway, even when no access token is stored; the
/// server decides what an anonymous caller gets.
pub struct BookmarkServiceImpl {
    client: Arc<HttpClient>,
}

impl BookmarkServiceImpl {
    /// Creates a new instance of the bookmark service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Gets the underlying client
    pub fn client(&self) -> Arc<HttpClient> {
        self.client.clone()
    }
}

#[async_trait]
impl BookmarkService for BookmarkServiceImpl {
    async fn fetch_bookmarked_post_ids(&self) -> Result<BTreeSet<u64>, AppError> {
        debug!("Getting bookmarked post ids");

        let ids: Vec<u64> = self
            .client
            .get(BOOKMARKED_POST_IDS_PATH)
            .await
            .inspect_err(|e| error!("Error fetching bookmarked post IDs: {}", e))?;

        let ids: BTreeSet<u64> = ids.into_iter().collect();
        debug!("Bookmarked post ids obtained: {} posts", ids.len());
        Ok(ids)
    }

    async fn toggle_bookmark(&self, post_id: u64) -> Result<(), AppError> {
        info!("Toggling bookmark for post {}", post_id);

        let request =
            RequestDescriptor::post(TOGGLE_BOOKMARK_PATH).with_json(&ToggleBookmarkRequest { post_id })?;
        self.client
            .execute(request)
            .await
            .inspect_err(|e| error!("Error toggling bookmark: {}", e))
    }
}
