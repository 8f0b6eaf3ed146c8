use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

use super::profile_error_response;

#[get("/api/profile/all")]
pub async fn get_all_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.all().await {
        Ok(views) => ApiResponse::success(views),
        Err(err) => profile_error_response(err),
    }
}
