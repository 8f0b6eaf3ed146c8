use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Identity, UserId};
use crate::post::application::domain::entities::{Comment, Post};
use crate::post::application::ports::incoming::use_cases::{PostCommentsUseCase, PostError};
use crate::post::application::ports::outgoing::PostRepository;
use crate::post::application::validation::{validate_post_input, PostInput};
use crate::shared::document::NestedCollection;

fn open_for_comments(_: &Post) -> Result<(), PostError> {
    Ok(())
}

#[derive(Clone)]
pub struct PostCommentsService {
    posts: Arc<dyn PostRepository + Send + Sync>,
    max_write_attempts: u32,
}

impl PostCommentsService {
    pub fn new(posts: Arc<dyn PostRepository + Send + Sync>, max_write_attempts: u32) -> Self {
        Self {
            posts,
            max_write_attempts,
        }
    }

    fn collection(&self) -> NestedCollection<'_, dyn PostRepository + Send + Sync> {
        NestedCollection::new(&*self.posts, self.max_write_attempts)
    }
}

#[async_trait]
impl PostCommentsUseCase for PostCommentsService {
    async fn add(
        &self,
        author: Identity,
        post_id: Uuid,
        input: PostInput,
    ) -> Result<Vec<Comment>, PostError> {
        validate_post_input(&input)
            .into_result()
            .map_err(PostError::Validation)?;

        let comment = Comment {
            id: Uuid::new_v4(),
            user_id: author.user_id.value(),
            text: input.text.trim().to_string(),
            name: author.name,
            avatar_url: author.avatar_url,
            date: Utc::now(),
        };

        let saved = self
            .collection()
            .push(post_id, Post::comments_mut, open_for_comments, comment)
            .await
            .map_err(|e| PostError::from_mutation(e, PostError::CommentNotFound))?;

        Ok(saved.comments)
    }

    async fn remove(
        &self,
        caller: UserId,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, PostError> {
        let caller_id = caller.value();
        let may_remove = move |post: &Post, comment: &Comment| {
            if comment.user_id == caller_id || post.is_owned_by(caller_id) {
                Ok(())
            } else {
                Err(PostError::NotOwner)
            }
        };

        let (saved, removed) = self
            .collection()
            .pull(post_id, Post::comments_mut, comment_id, may_remove)
            .await
            .map_err(|e| PostError::from_mutation(e, PostError::CommentNotFound))?;

        tracing::info!(%post_id, comment_id = %removed.id, "Comment removed");
        Ok(saved.comments)
    }
}
