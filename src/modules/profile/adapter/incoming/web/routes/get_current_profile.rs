use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

use super::profile_error_response;

#[get("/api/profile")]
pub async fn get_current_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get.current(user.user_id()).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => profile_error_response(err),
    }
}
