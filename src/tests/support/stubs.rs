use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Deterministic hasher so tests never pay for bcrypt.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}
