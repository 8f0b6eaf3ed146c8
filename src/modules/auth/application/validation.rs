use serde::Deserialize;
use utoipa::ToSchema;

use crate::shared::validation::{is_blank, is_email, length_between, ValidationErrors};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 30;

/// Request body for user registration
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterInput {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "s3cret-pass")]
    pub password: String,
    /// Must repeat `password`
    #[schema(example = "s3cret-pass")]
    pub password_confirmation: String,
}

/// Request body for login
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginInput {
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "s3cret-pass")]
    pub password: String,
}

pub fn validate_register_input(input: &RegisterInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(Some(&input.name)) {
        errors.add("name", "Name field is required");
    } else if !length_between(&input.name, NAME_MIN, NAME_MAX) {
        errors.add("name", "Name must be between 2 and 30 characters");
    }

    if is_blank(Some(&input.email)) {
        errors.add("email", "Email field is required");
    } else if !is_email(&input.email) {
        errors.add("email", "Email is invalid");
    }

    // Passwords are compared verbatim; surrounding spaces count.
    if input.password.is_empty() {
        errors.add("password", "Password field is required");
    } else if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&input.password.chars().count()) {
        errors.add("password", "Password must be between 6 and 30 characters");
    }

    if input.password_confirmation.is_empty() {
        errors.add("password_confirmation", "Confirm password field is required");
    } else if input.password_confirmation != input.password {
        errors.add("password_confirmation", "Passwords must match");
    }

    errors
}

pub fn validate_login_input(input: &LoginInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(Some(&input.email)) {
        errors.add("email", "Email field is required");
    } else if !is_email(&input.email) {
        errors.add("email", "Email is invalid");
    }

    if input.password.is_empty() {
        errors.add("password", "Password field is required");
    }

    errors
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
