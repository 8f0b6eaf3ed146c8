use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserSummary;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::profile::application::domain::entities::{Profile, ProfileView};
use crate::profile::application::ports::incoming::use_cases::ProfileError;

/// Attaches the owner's name and avatar to profiles.
#[derive(Clone)]
pub struct ProfileViews {
    users: Arc<dyn UserQuery + Send + Sync>,
}

impl ProfileViews {
    pub fn new(users: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { users }
    }

    /// A profile whose owner no longer exists is reported as not found.
    pub async fn one(&self, profile: Profile) -> Result<ProfileView, ProfileError> {
        let owner = self
            .users
            .find_by_id(profile.user_id)
            .await
            .map_err(|e| ProfileError::RepositoryError(e.to_string()))?
            .ok_or(ProfileError::ProfileNotFound)?;

        Ok(ProfileView {
            user: UserSummary::from(&owner),
            profile,
        })
    }

    /// Keeps the input order and skips profiles without an owner.
    pub async fn many(&self, profiles: Vec<Profile>) -> Result<Vec<ProfileView>, ProfileError> {
        let ids: Vec<_> = profiles.iter().map(|p| p.user_id).collect();
        let owners: HashMap<_, _> = self
            .users
            .find_by_ids(&ids)
            .await
            .map_err(|e| ProfileError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|user| (user.id, UserSummary::from(&user)))
            .collect();

        Ok(profiles
            .into_iter()
            .filter_map(|profile| {
                owners.get(&profile.user_id).map(|user| ProfileView {
                    user: user.clone(),
                    profile,
                })
            })
            .collect())
    }
}
