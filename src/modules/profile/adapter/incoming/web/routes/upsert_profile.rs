use actix_web::{post, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    profile::application::validation::ProfileInput, shared::api::ApiResponse, AppState,
};

use super::profile_error_response;

/// Creates the caller's profile on first call, updates it afterwards.
#[post("/api/profile")]
pub async fn upsert_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<ProfileInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .upsert
        .execute(user.user_id(), body.into_inner())
        .await
    {
        Ok(outcome) if outcome.created => ApiResponse::created(outcome.profile),
        Ok(outcome) => ApiResponse::success(outcome.profile),
        Err(err) => {
            tracing::warn!(user_id = %user.user_id(), error = %err, "Profile upsert rejected");
            profile_error_response(err)
        }
    }
}
