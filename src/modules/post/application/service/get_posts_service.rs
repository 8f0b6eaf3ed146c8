use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{GetPostsUseCase, PostError};
use crate::post::application::ports::outgoing::PostRepository;

#[derive(Clone)]
pub struct GetPostsService {
    posts: Arc<dyn PostRepository + Send + Sync>,
}

impl GetPostsService {
    pub fn new(posts: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl GetPostsUseCase for GetPostsService {
    async fn list(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.posts.list().await?)
    }

    async fn by_id(&self, post_id: Uuid) -> Result<Post, PostError> {
        self.posts
            .load(post_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }
}
