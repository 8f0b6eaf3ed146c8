use actix_web::{post, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    profile::application::validation::ExperienceInput, shared::api::ApiResponse, AppState,
};

use super::profile_error_response;

#[post("/api/profile/experience")]
pub async fn add_experience_handler(
    user: AuthenticatedUser,
    body: web::Json<ExperienceInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .entries
        .add_experience(user.user_id(), body.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(err) => profile_error_response(err),
    }
}
