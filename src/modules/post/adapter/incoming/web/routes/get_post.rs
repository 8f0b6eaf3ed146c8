use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

use super::post_error_response;

#[get("/api/posts/{post_id}")]
pub async fn get_post_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match data.post.get.by_id(path.into_inner()).await {
        Ok(post) => ApiResponse::success(post),
        Err(err) => post_error_response(err),
    }
}
