use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

use super::post_error_response;

#[post("/api/posts/like/{post_id}")]
pub async fn like_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .likes
        .like(user.user_id(), path.into_inner())
        .await
    {
        Ok(likes) => ApiResponse::success(likes),
        Err(err) => post_error_response(err),
    }
}
