use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Identity, UserId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,      // User ID
    pub name: String,   // Display name at login time
    pub avatar: String, // Avatar URL at login time
    pub iss: String,
    pub exp: i64, // Expiration timestamp
    pub iat: i64, // Issued at timestamp
    pub nbf: i64, // Not before timestamp
}

impl TokenClaims {
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: UserId::from(self.sub),
            name: self.name.clone(),
            avatar_url: self.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Raw JWT, without the `Bearer ` scheme prefix.
    pub token: String,
    pub expires_in: i64,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, identity: &Identity) -> Result<IssuedToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
