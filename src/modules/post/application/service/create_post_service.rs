use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{CreatePostUseCase, PostError};
use crate::post::application::ports::outgoing::PostRepository;
use crate::post::application::validation::{validate_post_input, PostInput};

#[derive(Clone)]
pub struct CreatePostService {
    posts: Arc<dyn PostRepository + Send + Sync>,
}

impl CreatePostService {
    pub fn new(posts: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl CreatePostUseCase for CreatePostService {
    async fn execute(&self, author: Identity, input: PostInput) -> Result<Post, PostError> {
        validate_post_input(&input)
            .into_result()
            .map_err(PostError::Validation)?;

        let post = Post {
            id: Uuid::new_v4(),
            user_id: author.user_id.value(),
            text: input.text.trim().to_string(),
            name: author.name,
            avatar_url: author.avatar_url,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
            version: 0,
        };

        let saved = self.posts.insert(&post).await?;
        tracing::info!(post_id = %saved.id, user_id = %saved.user_id, "Post created");
        Ok(saved)
    }
}
