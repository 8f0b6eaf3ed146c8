use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;
use crate::shared::document::{DocumentStore, DocumentStoreError};

/// Posts addressed by their own id.
#[async_trait]
pub trait PostRepository: DocumentStore<Post> {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Post>, DocumentStoreError>;

    async fn insert(&self, post: &Post) -> Result<Post, DocumentStoreError>;

    /// Returns whether the post existed.
    async fn delete(&self, post_id: Uuid) -> Result<bool, DocumentStoreError>;

    /// Removes every post written by `user_id`, returning how many went.
    async fn delete_by_author(&self, user_id: Uuid) -> Result<u64, DocumentStoreError>;

    /// Ids of the posts carrying at least one comment by `user_id`.
    async fn commented_by(&self, user_id: Uuid) -> Result<Vec<Uuid>, DocumentStoreError>;

    /// Rewrites the author name and avatar on every post by `user_id`.
    async fn anonymize_author(
        &self,
        user_id: Uuid,
        name: &str,
        avatar_url: &str,
    ) -> Result<u64, DocumentStoreError>;
}
