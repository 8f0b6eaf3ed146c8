use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{Like, Post};
use crate::post::application::ports::incoming::use_cases::{PostError, PostLikesUseCase};
use crate::post::application::ports::outgoing::PostRepository;
use crate::shared::document::NestedCollection;

fn anyone(_: &Post) -> Result<(), PostError> {
    Ok(())
}

/// A like can only be pulled by the user it names, which the locator already ensures.
fn own_like(_: &Post, _: &Like) -> Result<(), PostError> {
    Ok(())
}

#[derive(Clone)]
pub struct PostLikesService {
    posts: Arc<dyn PostRepository + Send + Sync>,
    max_write_attempts: u32,
}

impl PostLikesService {
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
impl PostLikesUseCase for PostLikesService {
    async fn like(&self, caller: UserId, post_id: Uuid) -> Result<Vec<Like>, PostError> {
        let like = Like {
            user_id: caller.value(),
        };

        let saved = self
            .collection()
            .push(post_id, Post::likes_mut, anyone, like)
            .await
            .map_err(|e| PostError::from_mutation(e, PostError::NotLiked))?;

        Ok(saved.likes)
    }

    async fn unlike(&self, caller: UserId, post_id: Uuid) -> Result<Vec<Like>, PostError> {
        let (saved, _removed) = self
            .collection()
            .pull(post_id, Post::likes_mut, caller.value(), own_like)
            .await
            .map_err(|e| PostError::from_mutation(e, PostError::NotLiked))?;

        Ok(saved.likes)
    }
}
