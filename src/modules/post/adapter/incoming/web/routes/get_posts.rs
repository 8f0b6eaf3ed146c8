use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

use super::post_error_response;

#[get("/api/posts")]
pub async fn get_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.post.get.list().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(err) => post_error_response(err),
    }
}
