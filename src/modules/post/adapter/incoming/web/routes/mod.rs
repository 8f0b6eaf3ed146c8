mod add_comment;
mod create_post;
mod delete_post;
mod get_post;
mod get_posts;
mod like_post;
mod remove_comment;
mod unlike_post;

pub use add_comment::add_comment_handler;
pub use create_post::create_post_handler;
pub use delete_post::delete_post_handler;
pub use get_post::get_post_handler;
pub use get_posts::get_posts_handler;
pub use like_post::like_post_handler;
pub use remove_comment::remove_comment_handler;
pub use unlike_post::unlike_post_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::post::application::ports::incoming::use_cases::PostError;
use crate::shared::api::ApiResponse;

pub(crate) fn post_error_response(err: PostError) -> HttpResponse {
    match err {
        PostError::Validation(errors) => ApiResponse::validation_failed(&errors),
        PostError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        PostError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment does not exist")
        }
        PostError::NotOwner => ApiResponse::forbidden("NOT_AUTHORIZED", "User not authorized"),
        PostError::AlreadyLiked => {
            ApiResponse::conflict("ALREADY_LIKED", "User already liked this post")
        }
        PostError::NotLiked => {
            ApiResponse::bad_request("NOT_LIKED", "You have not yet liked this post")
        }
        PostError::Conflict => ApiResponse::conflict(
            "WRITE_CONFLICT",
            "Post was modified concurrently, please retry",
        ),
        PostError::RepositoryError(msg) => {
            error!("Post repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
