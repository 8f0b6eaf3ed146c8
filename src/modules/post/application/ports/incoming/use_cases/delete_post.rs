use async_trait::async_trait;
use uuid::Uuid;

use super::PostError;
use crate::auth::application::domain::entities::UserId;

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    /// Only the author may delete; anyone else gets [`PostError::NotOwner`].
    async fn execute(&self, caller: UserId, post_id: Uuid) -> Result<(), PostError>;
}
