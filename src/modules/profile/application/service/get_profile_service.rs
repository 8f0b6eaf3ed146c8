use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::profile_views::ProfileViews;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;
use crate::profile::application::ports::incoming::use_cases::{GetProfileUseCase, ProfileError};
use crate::profile::application::ports::outgoing::ProfileRepository;

#[derive(Clone)]
pub struct GetProfileService {
    profiles: Arc<dyn ProfileRepository + Send + Sync>,
    views: ProfileViews,
}

impl GetProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository + Send + Sync>, views: ProfileViews) -> Self {
        Self { profiles, views }
    }
}

#[async_trait]
impl GetProfileUseCase for GetProfileService {
    async fn current(&self, owner: UserId) -> Result<ProfileView, ProfileError> {
        self.by_user(owner.value()).await
    }

    async fn by_handle(&self, handle: &str) -> Result<ProfileView, ProfileError> {
        let profile = self
            .profiles
            .find_by_handle(handle.trim())
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        self.views.one(profile).await
    }

    async fn by_user(&self, user_id: Uuid) -> Result<ProfileView, ProfileError> {
        let profile = self
            .profiles
            .load(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        self.views.one(profile).await
    }

    async fn all(&self) -> Result<Vec<ProfileView>, ProfileError> {
        let profiles = self.profiles.list_all().await?;
        let views = self.views.many(profiles).await?;

        if views.is_empty() {
            return Err(ProfileError::NoProfiles);
        }
        Ok(views)
    }
}
