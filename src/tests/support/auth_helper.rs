use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Identity, User, UserId};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_ISSUER: &str = "dev-connector-test";

fn config(expiry: i64) -> JwtConfig {
    JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        access_token_expiry: expiry,
    }
}

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(config(3600))
}

/// Shape the bearer extractor looks up in app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}

/// Raw token (no scheme) for an identity with an empty avatar.
pub fn token_for(user_id: Uuid, name: &str) -> String {
    let identity = Identity {
        user_id: UserId::from(user_id),
        name: name.to_string(),
        avatar_url: String::new(),
    };
    jwt_service()
        .generate_access_token(&identity)
        .unwrap()
        .token
}

/// Raw token whose `exp` passed a few seconds ago.
pub fn expired_token(user_id: Uuid) -> String {
    let identity = Identity {
        user_id: UserId::from(user_id),
        name: "Expired".to_string(),
        avatar_url: String::new(),
    };
    JwtTokenService::new(config(-5))
        .generate_access_token(&identity)
        .unwrap()
        .token
}

/// `Authorization` header value for `user`, carrying their name and avatar.
pub fn bearer_for(user: &User) -> String {
    let identity = Identity {
        user_id: UserId::from(user.id),
        name: user.name.clone(),
        avatar_url: user.avatar_url.clone(),
    };
    let issued = jwt_service().generate_access_token(&identity).unwrap();
    format!("Bearer {}", issued.token)
}
