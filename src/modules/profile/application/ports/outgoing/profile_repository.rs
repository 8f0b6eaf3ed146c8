use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::Profile;
use crate::shared::document::{DocumentStore, DocumentStoreError};

/// Profiles addressed by their owner's user id.
///
/// `load`/`replace` come from [`DocumentStore`]; the locator passed to `load`
/// is the owner's user id.
#[async_trait]
pub trait ProfileRepository: DocumentStore<Profile> {
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>, DocumentStoreError>;

    /// Every profile, newest first.
    async fn list_all(&self) -> Result<Vec<Profile>, DocumentStoreError>;

    /// Stores a new profile. A taken handle or an existing profile for the
    /// same owner yields [`DocumentStoreError::Duplicate`].
    async fn insert(&self, profile: &Profile) -> Result<Profile, DocumentStoreError>;

    /// Returns whether a profile existed.
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, DocumentStoreError>;
}
