use async_trait::async_trait;
use uuid::Uuid;

use super::PostError;
use crate::post::application::domain::entities::Post;

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Post>, PostError>;

    async fn by_id(&self, post_id: Uuid) -> Result<Post, PostError>;
}
