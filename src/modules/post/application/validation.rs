use serde::Deserialize;

use crate::shared::validation::{is_blank, length_between, ValidationErrors};

pub const TEXT_MIN: usize = 10;
pub const TEXT_MAX: usize = 300;

/// Body for both new posts and new comments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostInput {
    pub text: String,
}

pub fn validate_post_input(input: &PostInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(Some(&input.text)) {
        errors.add("text", "Text field is required");
    } else if !length_between(&input.text, TEXT_MIN, TEXT_MAX) {
        errors.add("text", "Post must be between 10 and 300 characters");
    }

    errors
}
