use crate::shared::document::{DocumentStoreError, MutationError};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostError {
    #[error("Invalid post input: {0}")]
    Validation(ValidationErrors),

    #[error("Post not found")]
    PostNotFound,

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("User not authorized")]
    NotOwner,

    #[error("User already liked this post")]
    AlreadyLiked,

    #[error("You have not yet liked this post")]
    NotLiked,

    #[error("Post was modified concurrently, please retry")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<DocumentStoreError> for PostError {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::Stale | DocumentStoreError::Duplicate(_) => PostError::Conflict,
            DocumentStoreError::DatabaseError(msg) => PostError::RepositoryError(msg),
        }
    }
}

impl PostError {
    /// Maps a nested-collection failure; `missing_entry` names the entry kind.
    ///
    /// Only likes can collide on id, so a duplicate entry is always a repeat like.
    pub fn from_mutation(err: MutationError<PostError>, missing_entry: PostError) -> Self {
        match err {
            MutationError::ParentNotFound => PostError::PostNotFound,
            MutationError::EntryNotFound => missing_entry,
            MutationError::DuplicateEntry => PostError::AlreadyLiked,
            MutationError::Rejected(inner) => inner,
            MutationError::Conflict | MutationError::Duplicate(_) => PostError::Conflict,
            MutationError::DatabaseError(msg) => PostError::RepositoryError(msg),
        }
    }
}
