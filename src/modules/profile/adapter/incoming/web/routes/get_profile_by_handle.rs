use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

use super::profile_error_response;

#[get("/api/profile/handle/{handle}")]
pub async fn get_profile_by_handle_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get.by_handle(&path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => profile_error_response(err),
    }
}
