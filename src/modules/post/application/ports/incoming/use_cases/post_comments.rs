use async_trait::async_trait;
use uuid::Uuid;

use super::PostError;
use crate::auth::application::domain::entities::{Identity, UserId};
use crate::post::application::domain::entities::Comment;
use crate::post::application::validation::PostInput;

#[async_trait]
pub trait PostCommentsUseCase: Send + Sync {
    /// Returns the comments after the change, newest first.
    async fn add(
        &self,
        author: Identity,
        post_id: Uuid,
        input: PostInput,
    ) -> Result<Vec<Comment>, PostError>;

    /// Allowed for the comment's author and the post's author.
    async fn remove(
        &self,
        caller: UserId,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, PostError>;
}
