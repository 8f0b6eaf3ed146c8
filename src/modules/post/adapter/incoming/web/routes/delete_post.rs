use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

use super::post_error_response;

#[delete("/api/posts/{post_id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .delete
        .execute(user.user_id(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => post_error_response(err),
    }
}
