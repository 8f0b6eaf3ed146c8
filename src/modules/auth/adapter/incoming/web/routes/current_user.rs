use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_current_user::{
    CurrentUser, FetchCurrentUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

/// Current user
///
/// Resolves the bearer token to the user it was issued for.
#[utoipa::path(
    get,
    path = "/api/users/current",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "Authenticated user",
            body = inline(SuccessResponse<CurrentUser>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Jane Doe",
                    "email": "jane@example.com"
                }
            })
        ),
        (
            status = 401,
            description = "Missing, expired or invalid token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_TOKEN", "message": "Invalid or expired token" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/users/current")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_user.execute(user.user_id()).await {
        Ok(current) => ApiResponse::success(current),
        Err(FetchCurrentUserError::UserNotFound) => {
            warn!(user_id = %user.user_id(), "Token subject no longer exists");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(FetchCurrentUserError::QueryError(msg)) => {
            error!(user_id = %user.user_id(), error = %msg, "Failed to fetch current user");
            ApiResponse::internal_error()
        }
    }
}
