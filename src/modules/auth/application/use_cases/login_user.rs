use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{Identity, UserId};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::validation::{normalize_email, validate_login_input, LoginInput};
use crate::shared::validation::ValidationErrors;

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid login input: {0}")]
    Validation(ValidationErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Password incorrect")]
    InvalidPassword,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUserResponse {
    /// Ready to use as the `Authorization` header value
    #[schema(example = "Bearer eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
    /// Seconds until the token expires
    #[schema(example = 3600)]
    pub expires_in: i64,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserService {
    query: Arc<dyn UserQuery + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginUserService {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginUserUseCase for LoginUserService {
    async fn execute(&self, input: LoginInput) -> Result<LoginUserResponse, LoginError> {
        validate_login_input(&input)
            .into_result()
            .map_err(LoginError::Validation)?;

        let email = normalize_email(&input.email);

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::UserNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidPassword);
        }

        let identity = Identity {
            user_id: UserId::from(user.id),
            name: user.name,
            avatar_url: user.avatar_url,
        };

        let issued = self
            .token_provider
            .generate_access_token(&identity)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            token: format!("Bearer {}", issued.token),
            expires_in: issued.expires_in,
        })
    }
}
