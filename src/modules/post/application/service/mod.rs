pub mod create_post_service;
pub mod delete_post_service;
pub mod get_posts_service;
pub mod post_comments_service;
pub mod post_likes_service;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_posts_service::GetPostsService;
pub use post_comments_service::PostCommentsService;
pub use post_likes_service::PostLikesService;
