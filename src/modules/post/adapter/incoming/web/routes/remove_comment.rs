use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

use super::post_error_response;

#[delete("/api/posts/comment/{post_id}/{comment_id}")]
pub async fn remove_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data
        .post
        .comments
        .remove(user.user_id(), post_id, comment_id)
        .await
    {
        Ok(comments) => ApiResponse::success(comments),
        Err(err) => post_error_response(err),
    }
}
