use crate::api::schemas::{
    ErrorDetail, ErrorResponse, SuccessResponse, ValidationErrorDetail, ValidationErrorResponse,
};
use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::application::domain::entities::PublicUser;
use crate::auth::application::use_cases::fetch_current_user::CurrentUser;
use crate::auth::application::use_cases::login_user::LoginUserResponse;
use crate::auth::application::validation::{LoginInput, RegisterInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dev Connector API",
        version = "0.1.0",
        description = "Developer profiles and a social post feed"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::current_user::current_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PublicUser>,
            SuccessResponse<LoginUserResponse>,
            SuccessResponse<CurrentUser>,
            ErrorResponse,
            ErrorDetail,
            ValidationErrorResponse,
            ValidationErrorDetail,

            // Auth DTOs
            RegisterInput,
            LoginInput,
            PublicUser,
            LoginUserResponse,
            CurrentUser
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token identity"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Value returned by /api/users/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
