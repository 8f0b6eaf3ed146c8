pub mod create_post;
pub mod delete_post;
pub mod get_posts;
pub mod post_comments;
pub mod post_error;
pub mod post_likes;

pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use get_posts::GetPostsUseCase;
pub use post_comments::PostCommentsUseCase;
pub use post_error::PostError;
pub use post_likes::PostLikesUseCase;
