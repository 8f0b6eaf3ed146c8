// src/api/schemas.rs
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "EMAIL_EXISTS")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Email already exists")]
    pub message: String,
}

/// Error envelope for rejected input, one message per offending field
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ValidationErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorDetail {
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    #[schema(example = "One or more fields are invalid")]
    pub message: String,
    pub fields: BTreeMap<String, String>,
}
