use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::avatar::gravatar_url;
use crate::auth::application::validation::{
    normalize_email, validate_register_input, RegisterInput,
};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid registration input: {0}")]
    Validation(ValidationErrors),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterInput) -> Result<PublicUser, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserService {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl RegisterUserService {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserService {
    async fn execute(&self, input: RegisterInput) -> Result<PublicUser, RegisterUserError> {
        validate_register_input(&input)
            .into_result()
            .map_err(RegisterUserError::Validation)?;

        let email = normalize_email(&input.email);

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            avatar_url: gravatar_url(&email),
            email,
            password_hash,
            created_at: Utc::now(),
        };

        // The unique index still guards against a concurrent registration.
        let user = self
            .repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(PublicUser::from(user))
    }
}
