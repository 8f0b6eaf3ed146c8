use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    /// The caller's own profile.
    async fn current(&self, owner: UserId) -> Result<ProfileView, ProfileError>;

    async fn by_handle(&self, handle: &str) -> Result<ProfileView, ProfileError>;

    async fn by_user(&self, user_id: Uuid) -> Result<ProfileView, ProfileError>;

    /// Every profile; an empty result is [`ProfileError::NoProfiles`].
    async fn all(&self) -> Result<Vec<ProfileView>, ProfileError>;
}
