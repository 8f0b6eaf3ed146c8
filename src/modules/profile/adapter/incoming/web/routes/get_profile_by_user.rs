use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

use super::profile_error_response;

#[get("/api/profile/users/{user_id}")]
pub async fn get_profile_by_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get.by_user(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => profile_error_response(err),
    }
}
