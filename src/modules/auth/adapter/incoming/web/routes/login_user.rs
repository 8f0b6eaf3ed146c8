use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginUserResponse};
use crate::auth::application::validation::LoginInput;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::Validation(errors) => ApiResponse::validation_failed(&errors),
        LoginError::UserNotFound => {
            warn!("Login for unknown email");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        LoginError::InvalidPassword => {
            warn!("Login with wrong password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Password incorrect")
        }
        LoginError::PasswordVerificationFailed(msg)
        | LoginError::TokenGenerationFailed(msg)
        | LoginError::QueryError(msg) => {
            error!(error = %msg, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// User login
///
/// Verifies email and password and returns a signed bearer token.
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "auth",
    request_body = LoginInput,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expires_in": 3600
                }
            })
        ),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
        (
            status = 401,
            description = "Wrong password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Password incorrect" }
            })
        ),
        (
            status = 404,
            description = "No user with that email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "USER_NOT_FOUND", "message": "User not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/users/login")]
pub async fn login_user_handler(
    body: web::Json<LoginInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login.execute(body.into_inner()).await {
        Ok(response) => {
            info!("User logged in");
            ApiResponse::success(response)
        }
        Err(err) => map_login_error(err),
    }
}
