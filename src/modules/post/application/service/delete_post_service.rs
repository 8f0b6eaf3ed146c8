use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{DeletePostUseCase, PostError};
use crate::post::application::ports::outgoing::PostRepository;
use crate::shared::document::DocumentStore;

#[derive(Clone)]
pub struct DeletePostService {
    posts: Arc<dyn PostRepository + Send + Sync>,
}

impl DeletePostService {
    pub fn new(posts: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl DeletePostUseCase for DeletePostService {
    async fn execute(&self, caller: UserId, post_id: Uuid) -> Result<(), PostError> {
        let post = self
            .posts
            .load(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if !post.is_owned_by(caller.value()) {
            tracing::warn!(%post_id, caller = %caller, "Refusing to delete another user's post");
            return Err(PostError::NotOwner);
        }

        if !self.posts.delete(post_id).await? {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(%post_id, "Post deleted");
        Ok(())
    }
}
