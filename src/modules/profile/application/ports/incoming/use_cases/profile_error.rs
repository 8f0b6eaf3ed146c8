use crate::shared::document::{DocumentStoreError, MutationError};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("Invalid profile input: {0}")]
    Validation(ValidationErrors),

    #[error("There is no profile for this user")]
    ProfileNotFound,

    #[error("There are no profiles")]
    NoProfiles,

    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Education not found")]
    EducationNotFound,

    #[error("That handle already exists")]
    HandleTaken,

    #[error("Profile was modified concurrently, please retry")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Unique-key name reported by the store for a taken handle.
pub const HANDLE_KEY: &str = "handle";

impl From<DocumentStoreError> for ProfileError {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::Stale => ProfileError::Conflict,
            DocumentStoreError::Duplicate(key) if key == HANDLE_KEY => ProfileError::HandleTaken,
            // A second profile for the same owner raced ours in.
            DocumentStoreError::Duplicate(_) => ProfileError::Conflict,
            DocumentStoreError::DatabaseError(msg) => ProfileError::RepositoryError(msg),
        }
    }
}

impl ProfileError {
    /// Maps a nested-collection failure; `missing_entry` names the entry kind.
    pub fn from_mutation(err: MutationError<ProfileError>, missing_entry: ProfileError) -> Self {
        match err {
            MutationError::ParentNotFound => ProfileError::ProfileNotFound,
            MutationError::EntryNotFound => missing_entry,
            MutationError::DuplicateEntry | MutationError::Conflict => ProfileError::Conflict,
            MutationError::Rejected(inner) => inner,
            MutationError::Duplicate(key) => DocumentStoreError::Duplicate(key).into(),
            MutationError::DatabaseError(msg) => ProfileError::RepositoryError(msg),
        }
    }
}
