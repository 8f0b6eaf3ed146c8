use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

use super::profile_error_response;

#[delete("/api/profile/education/{education_id}")]
pub async fn remove_education_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .entries
        .remove_education(user.user_id(), path.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(err) => profile_error_response(err),
    }
}
