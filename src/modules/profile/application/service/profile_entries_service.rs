use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::profile_views::ProfileViews;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{
    EducationEntry, ExperienceEntry, Profile, ProfileView,
};
use crate::profile::application::ports::incoming::use_cases::{
    ProfileEntriesUseCase, ProfileError,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::application::validation::{
    parse_education, parse_experience, EducationInput, ExperienceInput,
};
use crate::shared::document::NestedCollection;

/// The caller can only reach their own profile, so no separate ownership
/// check is needed.
fn no_guard(_: &Profile) -> Result<(), ProfileError> {
    Ok(())
}

fn no_experience_guard(_: &Profile, _: &ExperienceEntry) -> Result<(), ProfileError> {
    Ok(())
}

fn no_education_guard(_: &Profile, _: &EducationEntry) -> Result<(), ProfileError> {
    Ok(())
}

#[derive(Clone)]
pub struct ProfileEntriesService {
    profiles: Arc<dyn ProfileRepository + Send + Sync>,
    views: ProfileViews,
    max_write_attempts: u32,
}

impl ProfileEntriesService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository + Send + Sync>,
        views: ProfileViews,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            profiles,
            views,
            max_write_attempts,
        }
    }

    fn collection(&self) -> NestedCollection<'_, dyn ProfileRepository + Send + Sync> {
        NestedCollection::new(&*self.profiles, self.max_write_attempts)
    }
}

#[async_trait]
impl ProfileEntriesUseCase for ProfileEntriesService {
    async fn add_experience(
        &self,
        owner: UserId,
        input: ExperienceInput,
    ) -> Result<ProfileView, ProfileError> {
        let entry = parse_experience(&input).map_err(ProfileError::Validation)?;

        let saved = self
            .collection()
            .push(owner.value(), Profile::experience_mut, no_guard, entry)
            .await
            .map_err(|e| ProfileError::from_mutation(e, ProfileError::ExperienceNotFound))?;

        self.views.one(saved).await
    }

    async fn remove_experience(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<ProfileView, ProfileError> {
        let (saved, _removed) = self
            .collection()
            .pull(
                owner.value(),
                Profile::experience_mut,
                experience_id,
                no_experience_guard,
            )
            .await
            .map_err(|e| ProfileError::from_mutation(e, ProfileError::ExperienceNotFound))?;

        self.views.one(saved).await
    }

    async fn add_education(
        &self,
        owner: UserId,
        input: EducationInput,
    ) -> Result<ProfileView, ProfileError> {
        let entry = parse_education(&input).map_err(ProfileError::Validation)?;

        let saved = self
            .collection()
            .push(owner.value(), Profile::education_mut, no_guard, entry)
            .await
            .map_err(|e| ProfileError::from_mutation(e, ProfileError::EducationNotFound))?;

        self.views.one(saved).await
    }

    async fn remove_education(
        &self,
        owner: UserId,
        education_id: Uuid,
    ) -> Result<ProfileView, ProfileError> {
        let (saved, _removed) = self
            .collection()
            .pull(
                owner.value(),
                Profile::education_mut,
                education_id,
                no_education_guard,
            )
            .await
            .map_err(|e| ProfileError::from_mutation(e, ProfileError::EducationNotFound))?;

        self.views.one(saved).await
    }
}
