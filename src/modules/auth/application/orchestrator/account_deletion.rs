use async_trait::async_trait;
use std::convert::Infallible;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::post::application::domain::entities::{Post, DELETED_AUTHOR_NAME};
use crate::post::application::ports::outgoing::PostRepository;
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::config::AuthoredPostsPolicy;
use crate::shared::document::{MutationError, NestedCollection};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteAccountError>;
}

/// Removes a user together with their profile, applying the configured policy
/// to the posts they wrote.
#[derive(Clone)]
pub struct AccountDeletionOrchestrator {
    users: Arc<dyn UserQuery + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    profiles: Arc<dyn ProfileRepository + Send + Sync>,
    posts: Arc<dyn PostRepository + Send + Sync>,
    policy: AuthoredPostsPolicy,
    max_write_attempts: u32,
}

impl AccountDeletionOrchestrator {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        profiles: Arc<dyn ProfileRepository + Send + Sync>,
        posts: Arc<dyn PostRepository + Send + Sync>,
        policy: AuthoredPostsPolicy,
        max_write_attempts: u32,
    ) -> Self {
        Self {
            users,
            user_repository,
            profiles,
            posts,
            policy,
            max_write_attempts,
        }
    }

    async fn settle_authored_posts(&self, user_id: UserId) -> Result<u64, DeleteAccountError> {
        match self.policy {
            AuthoredPostsPolicy::Retain => Ok(0),
            AuthoredPostsPolicy::Delete => self
                .posts
                .delete_by_author(user_id.value())
                .await
                .map_err(|e| DeleteAccountError::RepositoryError(e.to_string())),
            AuthoredPostsPolicy::Anonymize => {
                let posts = self
                    .posts
                    .anonymize_author(user_id.value(), DELETED_AUTHOR_NAME, "")
                    .await
                    .map_err(|e| DeleteAccountError::RepositoryError(e.to_string()))?;
                let comments = self.anonymize_comments(user_id.value()).await?;
                tracing::debug!(%user_id, posts, comments, "Author anonymized");
                Ok(posts)
            }
        }
    }

    /// Scrubs the user's comments on any post, each post written under its version check.
    async fn anonymize_comments(&self, user_id: Uuid) -> Result<u64, DeleteAccountError> {
        let post_ids = self
            .posts
            .commented_by(user_id)
            .await
            .map_err(|e| DeleteAccountError::RepositoryError(e.to_string()))?;

        let collection: NestedCollection<'_, dyn PostRepository + Send + Sync> =
            NestedCollection::new(&*self.posts, self.max_write_attempts);
        let mut renamed = 0;

        for post_id in post_ids {
            let outcome = collection
                .mutate(post_id, |post: &mut Post| {
                    Ok::<_, MutationError<Infallible>>(post.rename_commenter(
                        user_id,
                        DELETED_AUTHOR_NAME,
                        "",
                    ))
                })
                .await;

            match outcome {
                Ok((_, count)) => renamed += count,
                // Deleted since it was listed
                Err(MutationError::ParentNotFound) => {}
                Err(other) => return Err(DeleteAccountError::RepositoryError(other.to_string())),
            }
        }

        Ok(renamed)
    }
}

#[async_trait]
impl DeleteAccountUseCase for AccountDeletionOrchestrator {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteAccountError> {
        self.users
            .find_by_id(user_id.value())
            .await
            .map_err(|e| DeleteAccountError::RepositoryError(e.to_string()))?
            .ok_or(DeleteAccountError::UserNotFound)?;

        let posts_affected = self.settle_authored_posts(user_id).await?;

        let profile_removed = self
            .profiles
            .delete_by_user_id(user_id.value())
            .await
            .map_err(|e| DeleteAccountError::RepositoryError(e.to_string()))?;

        self.user_repository
            .delete_user(user_id.value())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteAccountError::UserNotFound,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            %user_id,
            profile_removed,
            posts_affected,
            policy = ?self.policy,
            "Account deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::post::application::domain::entities::Comment;
    use crate::tests::support::fixtures::{post_by, profile_for};
    use crate::tests::support::in_memory::{InMemoryPosts, InMemoryProfiles, InMemoryUsers};
    use chrono::Utc;

    struct Setup {
        users: Arc<InMemoryUsers>,
        profiles: Arc<InMemoryProfiles>,
        posts: Arc<InMemoryPosts>,
        jane: User,
        kept_post: Uuid,
    }

    fn setup() -> Setup {
        let users = Arc::new(InMemoryUsers::default());
        let profiles = Arc::new(InMemoryProfiles::default());
        let posts = Arc::new(InMemoryPosts::default());

        let jane = users.seed("Jane Doe", "jane@example.com", "secret1");
        profiles.seed(profile_for(jane.id, "jane"));
        posts.seed(post_by(jane.id, "Written by Jane before leaving"));
        let other = post_by(Uuid::new_v4(), "Written by somebody else");
        let kept_post = other.id;
        posts.seed(other);

        Setup {
            users,
            profiles,
            posts,
            jane,
            kept_post,
        }
    }

    fn orchestrator(s: &Setup, policy: AuthoredPostsPolicy) -> AccountDeletionOrchestrator {
        AccountDeletionOrchestrator::new(
            s.users.clone(),
            s.users.clone(),
            s.profiles.clone(),
            s.posts.clone(),
            policy,
            3,
        )
    }

    #[tokio::test]
    async fn removes_user_and_profile_but_retains_posts_by_default() {
        let s = setup();

        orchestrator(&s, AuthoredPostsPolicy::default())
            .execute(UserId::from(s.jane.id))
            .await
            .unwrap();

        assert!(s.users.get(s.jane.id).is_none());
        assert!(s.profiles.get(s.jane.id).is_none());
        assert_eq!(s.posts.count(), 2);
    }

    #[tokio::test]
    async fn delete_policy_removes_only_the_authors_posts() {
        let s = setup();

        orchestrator(&s, AuthoredPostsPolicy::Delete)
            .execute(UserId::from(s.jane.id))
            .await
            .unwrap();

        assert_eq!(s.posts.count(), 1);
        assert!(s.posts.get(s.kept_post).is_some());
    }

    #[tokio::test]
    async fn anonymize_policy_scrubs_author_fields() {
        let s = setup();

        orchestrator(&s, AuthoredPostsPolicy::Anonymize)
            .execute(UserId::from(s.jane.id))
            .await
            .unwrap();

        let authored = s.posts.by_author(s.jane.id);
        assert_eq!(authored.len(), 1);
        assert_eq!(authored[0].name, DELETED_AUTHOR_NAME);
        assert_eq!(authored[0].avatar_url, "");
        assert_ne!(s.posts.get(s.kept_post).unwrap().name, DELETED_AUTHOR_NAME);
    }

    #[tokio::test]
    async fn anonymize_policy_scrubs_comments_on_other_posts() {
        let s = setup();
        let mut others = s.posts.get(s.kept_post).unwrap();
        let by_jane = Comment {
            id: Uuid::new_v4(),
            user_id: s.jane.id,
            text: "Jane commenting elsewhere".to_string(),
            name: s.jane.name.clone(),
            avatar_url: s.jane.avatar_url.clone(),
            date: Utc::now(),
        };
        let by_john = Comment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            text: "John commenting too".to_string(),
            name: "John Roe".to_string(),
            avatar_url: "https://www.gravatar.com/avatar/john".to_string(),
            date: Utc::now(),
        };
        others.comments = vec![by_jane.clone(), by_john.clone()];
        s.posts.seed(others);
        s.posts.fail_next_replaces(1);

        orchestrator(&s, AuthoredPostsPolicy::Anonymize)
            .execute(UserId::from(s.jane.id))
            .await
            .unwrap();

        let comments = s.posts.get(s.kept_post).unwrap().comments;
        assert_eq!(comments[0].id, by_jane.id);
        assert_eq!(comments[0].name, DELETED_AUTHOR_NAME);
        assert_eq!(comments[0].avatar_url, "");
        assert_eq!(comments[0].text, by_jane.text);
        assert_eq!(comments[1], by_john);
    }

    #[tokio::test]
    async fn other_policies_leave_comments_alone() {
        let s = setup();
        let mut others = s.posts.get(s.kept_post).unwrap();
        others.comments = vec![Comment {
            id: Uuid::new_v4(),
            user_id: s.jane.id,
            text: "Jane commenting elsewhere".to_string(),
            name: s.jane.name.clone(),
            avatar_url: s.jane.avatar_url.clone(),
            date: Utc::now(),
        }];
        s.posts.seed(others);

        orchestrator(&s, AuthoredPostsPolicy::Delete)
            .execute(UserId::from(s.jane.id))
            .await
            .unwrap();

        assert_eq!(
            s.posts.get(s.kept_post).unwrap().comments[0].name,
            "Jane Doe"
        );
    }

    #[tokio::test]
    async fn user_without_profile_can_still_be_deleted() {
        let s = setup();
        let loner = s.users.seed("Lone Wolf", "lone@example.com", "secret1");

        orchestrator(&s, AuthoredPostsPolicy::Retain)
            .execute(UserId::from(loner.id))
            .await
            .unwrap();

        assert!(s.users.get(loner.id).is_none());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found_and_nothing_changes() {
        let s = setup();

        let result = orchestrator(&s, AuthoredPostsPolicy::Delete)
            .execute(UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(result.unwrap_err(), DeleteAccountError::UserNotFound);
        assert_eq!(s.posts.count(), 2);
        assert_eq!(s.users.count(), 1);
    }
}
