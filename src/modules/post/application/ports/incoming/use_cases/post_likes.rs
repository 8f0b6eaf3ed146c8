use async_trait::async_trait;
use uuid::Uuid;

use super::PostError;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Like;

#[async_trait]
pub trait PostLikesUseCase: Send + Sync {
    /// Returns the likes after the change.
    async fn like(&self, caller: UserId, post_id: Uuid) -> Result<Vec<Like>, PostError>;

    async fn unlike(&self, caller: UserId, post_id: Uuid) -> Result<Vec<Like>, PostError>;
}
