use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::use_cases::register_user::RegisterUserError;
use crate::auth::application::validation::RegisterInput;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

fn map_register_error(err: RegisterUserError, email: &str) -> HttpResponse {
    match err {
        RegisterUserError::Validation(errors) => {
            warn!(email = %email, fields = errors.len(), "Invalid registration input");
            ApiResponse::validation_failed(&errors)
        }
        RegisterUserError::EmailAlreadyExists => {
            warn!(email = %email, "Registration with existing email");
            ApiResponse::conflict("EMAIL_EXISTS", "Email already exists")
        }
        RegisterUserError::HashingFailed(msg) | RegisterUserError::RepositoryError(msg) => {
            error!(email = %email, error = %msg, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account and derives its avatar from the email address.
/// The password hash is never returned.
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "auth",
    request_body = RegisterInput,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<PublicUser>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "avatar_url": "https://www.gravatar.com/avatar/4f64c9f8...?s=200&r=pg&d=mm",
                    "date": "2024-01-01T00:00:00Z"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ValidationErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "One or more fields are invalid",
                    "fields": { "password_confirmation": "Passwords must match" }
                }
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_EXISTS", "message": "Email already exists" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/users/register")]
pub async fn register_user_handler(
    body: web::Json<RegisterInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = body.into_inner();
    let email = input.email.clone();

    match data.auth.register.execute(input).await {
        Ok(user) => ApiResponse::created(user),
        Err(err) => map_register_error(err, &email),
    }
}
