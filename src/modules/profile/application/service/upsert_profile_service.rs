use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::profile_views::ProfileViews;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileError, UpsertProfileOutcome, UpsertProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::application::validation::{parse_profile, ProfileFields, ProfileInput};
use crate::shared::document::{DocumentStore, MutationError, NestedCollection};

#[derive(Clone)]
pub struct UpsertProfileService {
    profiles: Arc<dyn ProfileRepository + Send + Sync>,
    views: ProfileViews,
    max_write_attempts: u32,
}

impl UpsertProfileService {
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
}

fn apply_fields(profile: &mut Profile, fields: &ProfileFields) {
    profile.handle = fields.handle.clone();
    profile.company = fields.company.clone();
    profile.website = fields.website.clone();
    profile.location = fields.location.clone();
    profile.bio = fields.bio.clone();
    profile.status = fields.status.clone();
    profile.github_username = fields.github_username.clone();
    profile.skills = fields.skills.clone();
    profile.social = fields.social.clone();
}

#[async_trait]
impl UpsertProfileUseCase for UpsertProfileService {
    async fn execute(
        &self,
        owner: UserId,
        input: ProfileInput,
    ) -> Result<UpsertProfileOutcome, ProfileError> {
        let fields = parse_profile(&input).map_err(ProfileError::Validation)?;

        if let Some(holder) = self.profiles.find_by_handle(&fields.handle).await? {
            if holder.user_id != owner.value() {
                return Err(ProfileError::HandleTaken);
            }
        }

        let existing = self.profiles.load(owner.value()).await?;

        let (saved, created) = match existing {
            Some(_) => {
                let (saved, ()) = NestedCollection::new(&*self.profiles, self.max_write_attempts)
                    .mutate(
                        owner.value(),
                        |profile: &mut Profile| -> Result<(), MutationError<ProfileError>> {
                            apply_fields(profile, &fields);
                            Ok(())
                        },
                    )
                    .await
                    .map_err(|e| ProfileError::from_mutation(e, ProfileError::ProfileNotFound))?;
                (saved, false)
            }
            None => {
                let mut profile = Profile {
                    id: Uuid::new_v4(),
                    user_id: owner.value(),
                    handle: String::new(),
                    company: None,
                    website: None,
                    location: None,
                    bio: None,
                    status: String::new(),
                    github_username: None,
                    skills: Vec::new(),
                    social: Default::default(),
                    experience: Vec::new(),
                    education: Vec::new(),
                    created_at: Utc::now(),
                    version: 0,
                };
                apply_fields(&mut profile, &fields);

                (self.profiles.insert(&profile).await?, true)
            }
        };

        tracing::info!(user_id = %owner, created, "Profile saved");

        Ok(UpsertProfileOutcome {
            profile: self.views.one(saved).await?,
            created,
        })
    }
}
