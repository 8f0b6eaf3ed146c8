mod add_education;
mod add_experience;
mod delete_account;
mod get_all_profiles;
mod get_current_profile;
mod get_profile_by_handle;
mod get_profile_by_user;
mod remove_education;
mod remove_experience;
mod upsert_profile;

pub use add_education::add_education_handler;
pub use add_experience::add_experience_handler;
pub use delete_account::delete_account_handler;
pub use get_all_profiles::get_all_profiles_handler;
pub use get_current_profile::get_current_profile_handler;
pub use get_profile_by_handle::get_profile_by_handle_handler;
pub use get_profile_by_user::get_profile_by_user_handler;
pub use remove_education::remove_education_handler;
pub use remove_experience::remove_experience_handler;
pub use upsert_profile::upsert_profile_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::profile::application::ports::incoming::use_cases::ProfileError;
use crate::shared::api::ApiResponse;

pub(crate) fn profile_error_response(err: ProfileError) -> HttpResponse {
    match err {
        ProfileError::Validation(errors) => ApiResponse::validation_failed(&errors),
        ProfileError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "There is no profile for this user")
        }
        ProfileError::NoProfiles => ApiResponse::not_found("NO_PROFILES", "There are no profiles"),
        ProfileError::ExperienceNotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        ProfileError::EducationNotFound => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education not found")
        }
        ProfileError::HandleTaken => {
            ApiResponse::conflict("HANDLE_TAKEN", "That handle already exists")
        }
        ProfileError::Conflict => ApiResponse::conflict(
            "WRITE_CONFLICT",
            "Profile was modified concurrently, please retry",
        ),
        ProfileError::RepositoryError(msg) => {
            error!("Profile repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
