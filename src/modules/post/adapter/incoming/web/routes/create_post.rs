use actix_web::{post, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    post::application::validation::PostInput, shared::api::ApiResponse, AppState,
};

use super::post_error_response;

#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    body: web::Json<PostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.create.execute(user.identity, body.into_inner()).await {
        Ok(post) => ApiResponse::created(post),
        Err(err) => post_error_response(err),
    }
}
