use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::account_deletion::AccountDeletionOrchestrator;
use crate::auth::application::use_cases::{
    fetch_current_user::FetchCurrentUserService, login_user::LoginUserService,
    register_user::RegisterUserService,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::service::{
    CreatePostService, DeletePostService, GetPostsService, PostCommentsService, PostLikesService,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    GetProfileService, ProfileEntriesService, ProfileViews, UpsertProfileService,
};
use crate::shared::config::AuthoredPostsPolicy;
use crate::tests::support::auth_helper::jwt_service;
use crate::tests::support::in_memory::{InMemoryPosts, InMemoryProfiles, InMemoryUsers};
use crate::tests::support::stubs::PlainTextHasher;
use crate::AppState;

const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Real services wired over in-memory stores. Seed through the store
/// accessors before calling `build`.
pub struct TestAppStateBuilder {
    users: Arc<InMemoryUsers>,
    profiles: Arc<InMemoryProfiles>,
    posts: Arc<InMemoryPosts>,
    posts_policy: AuthoredPostsPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            users: Arc::new(InMemoryUsers::default()),
            profiles: Arc::new(InMemoryProfiles::default()),
            posts: Arc::new(InMemoryPosts::default()),
            posts_policy: AuthoredPostsPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn users(&self) -> Arc<InMemoryUsers> {
        self.users.clone()
    }

    pub fn profiles(&self) -> Arc<InMemoryProfiles> {
        self.profiles.clone()
    }

    pub fn posts(&self) -> Arc<InMemoryPosts> {
        self.posts.clone()
    }

    pub fn posts_policy(mut self, policy: AuthoredPostsPolicy) -> Self {
        self.posts_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let hasher = Arc::new(PlainTextHasher);
        let views = ProfileViews::new(self.users.clone());

        let auth = AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                self.users.clone(),
                self.users.clone(),
                hasher.clone(),
            )),
            login: Arc::new(LoginUserService::new(
                self.users.clone(),
                hasher,
                Arc::new(jwt_service()),
            )),
            current_user: Arc::new(FetchCurrentUserService::new(self.users.clone())),
            delete_account: Arc::new(AccountDeletionOrchestrator::new(
                self.users.clone(),
                self.users.clone(),
                self.profiles.clone(),
                self.posts.clone(),
                self.posts_policy,
                MAX_WRITE_ATTEMPTS,
            )),
        };

        let profile = ProfileUseCases {
            get: Arc::new(GetProfileService::new(self.profiles.clone(), views.clone())),
            upsert: Arc::new(UpsertProfileService::new(
                self.profiles.clone(),
                views.clone(),
                MAX_WRITE_ATTEMPTS,
            )),
            entries: Arc::new(ProfileEntriesService::new(
                self.profiles.clone(),
                views,
                MAX_WRITE_ATTEMPTS,
            )),
        };

        let post = PostUseCases {
            create: Arc::new(CreatePostService::new(self.posts.clone())),
            get: Arc::new(GetPostsService::new(self.posts.clone())),
            delete: Arc::new(DeletePostService::new(self.posts.clone())),
            likes: Arc::new(PostLikesService::new(
                self.posts.clone(),
                MAX_WRITE_ATTEMPTS,
            )),
            comments: Arc::new(PostCommentsService::new(self.posts, MAX_WRITE_ATTEMPTS)),
        };

        web::Data::new(AppState {
            auth,
            profile,
            post,
        })
    }
}
