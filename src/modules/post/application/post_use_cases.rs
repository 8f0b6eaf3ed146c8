use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostsUseCase, PostCommentsUseCase, PostLikesUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get: Arc<dyn GetPostsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub likes: Arc<dyn PostLikesUseCase + Send + Sync>,
    pub comments: Arc<dyn PostCommentsUseCase + Send + Sync>,
}
