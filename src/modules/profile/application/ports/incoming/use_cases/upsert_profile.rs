use async_trait::async_trait;

use super::ProfileError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;
use crate::profile::application::validation::ProfileInput;

#[derive(Debug, Clone)]
pub struct UpsertProfileOutcome {
    pub profile: ProfileView,
    /// `false` when an existing profile was updated.
    pub created: bool,
}

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: ProfileInput,
    ) -> Result<UpsertProfileOutcome, ProfileError>;
}
