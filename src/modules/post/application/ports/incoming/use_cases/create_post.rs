use async_trait::async_trait;

use super::PostError;
use crate::auth::application::domain::entities::Identity;
use crate::post::application::domain::entities::Post;
use crate::post::application::validation::PostInput;

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    /// Name and avatar are taken from `author`, never from the body.
    async fn execute(&self, author: Identity, input: PostInput) -> Result<Post, PostError>;
}
