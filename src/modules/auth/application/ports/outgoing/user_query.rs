// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
    /// `email` is expected already normalized (trimmed, lower-case).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    /// Missing ids are skipped; order of the result is unspecified.
    async fn find_by_ids(&self, user_ids: &[Uuid]) -> Result<Vec<User>, UserQueryError>;
}
