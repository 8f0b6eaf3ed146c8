use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileError;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;
use crate::profile::application::validation::{EducationInput, ExperienceInput};

/// Experience and education entries on the caller's own profile.
#[async_trait]
pub trait ProfileEntriesUseCase: Send + Sync {
    async fn add_experience(
        &self,
        owner: UserId,
        input: ExperienceInput,
    ) -> Result<ProfileView, ProfileError>;

    async fn remove_experience(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<ProfileView, ProfileError>;

    async fn add_education(
        &self,
        owner: UserId,
        input: EducationInput,
    ) -> Result<ProfileView, ProfileError>;

    async fn remove_education(
        &self,
        owner: UserId,
        education_id: Uuid,
    ) -> Result<ProfileView, ProfileError>;
}
