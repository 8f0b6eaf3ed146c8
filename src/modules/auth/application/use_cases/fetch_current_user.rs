use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CurrentUser {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCurrentUserError {
    /// The token is valid but its subject no longer exists.
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<CurrentUser, FetchCurrentUserError>;
}

#[derive(Clone)]
pub struct FetchCurrentUserService {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl FetchCurrentUserService {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FetchCurrentUserUseCase for FetchCurrentUserService {
    async fn execute(&self, user_id: UserId) -> Result<CurrentUser, FetchCurrentUserError> {
        let user = self
            .query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| FetchCurrentUserError::QueryError(e.to_string()))?
            .ok_or(FetchCurrentUserError::UserNotFound)?;

        Ok(CurrentUser {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}
