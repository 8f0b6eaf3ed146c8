//! In-memory port implementations backing service and handler tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::avatar::gravatar_url;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::PostRepository;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::HANDLE_KEY;
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::document::{DocumentStore, DocumentStoreError};

/// Makes the next `n` replaces lose against a simulated concurrent writer.
#[derive(Default)]
struct InjectedConflicts(Mutex<u32>);

impl InjectedConflicts {
    fn arm(&self, n: u32) {
        *self.0.lock().unwrap() = n;
    }

    fn take(&self) -> bool {
        let mut pending = self.0.lock().unwrap();
        if *pending == 0 {
            return false;
        }
        *pending -= 1;
        true
    }
}

// ============================== Users ==============================

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUsers {
    /// Stores a user whose hash matches `PlainTextHasher`.
    pub fn seed(&self, name: &str, email: &str, password: &str) -> User {
        let email = email.trim().to_lowercase();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            avatar_url: gravatar_url(&email),
            email,
            password_hash: format!("hashed:{password}"),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        user
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_ids(&self, user_ids: &[Uuid]) -> Result<Vec<User>, UserQueryError> {
        let users = self.users.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| users.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let user = User {
            id: data.id,
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            avatar_url: data.avatar_url,
            created_at: data.created_at,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.users
            .lock()
            .unwrap()
            .remove(&user_id)
            .map(|_| ())
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

// ============================== Profiles ==============================

/// Profiles keyed by owner id, with version-checked replaces.
#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: Mutex<HashMap<Uuid, Profile>>,
    conflicts: InjectedConflicts,
}

impl InMemoryProfiles {
    pub fn seed(&self, profile: Profile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile);
    }

    pub fn get(&self, user_id: Uuid) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&user_id).cloned()
    }

    pub fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// Edits a stored profile in place without touching its version.
    pub fn update(&self, user_id: Uuid, edit: impl FnOnce(&mut Profile)) {
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&user_id) {
            edit(profile);
        }
    }

    pub fn fail_next_replaces(&self, n: u32) {
        self.conflicts.arm(n);
    }
}

fn handle_held_by_other(profiles: &HashMap<Uuid, Profile>, profile: &Profile) -> bool {
    profiles
        .values()
        .any(|p| p.handle == profile.handle && p.user_id != profile.user_id)
}

#[async_trait]
impl DocumentStore<Profile> for InMemoryProfiles {
    async fn load(&self, user_id: Uuid) -> Result<Option<Profile>, DocumentStoreError> {
        Ok(self.get(user_id))
    }

    async fn replace(&self, profile: &Profile) -> Result<Profile, DocumentStoreError> {
        let mut profiles = self.profiles.lock().unwrap();
        if handle_held_by_other(&profiles, profile) {
            return Err(DocumentStoreError::Duplicate(HANDLE_KEY.to_string()));
        }

        let stored = profiles
            .get_mut(&profile.user_id)
            .ok_or(DocumentStoreError::Stale)?;
        if self.conflicts.take() {
            stored.version += 1;
        }
        if stored.version != profile.version {
            return Err(DocumentStoreError::Stale);
        }

        let mut saved = profile.clone();
        saved.version += 1;
        *stored = saved.clone();
        Ok(saved)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>, DocumentStoreError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| p.handle == handle)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DocumentStoreError> {
        let mut all: Vec<Profile> = self.profiles.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn insert(&self, profile: &Profile) -> Result<Profile, DocumentStoreError> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.contains_key(&profile.user_id) {
            return Err(DocumentStoreError::Duplicate("user_id".to_string()));
        }
        if handle_held_by_other(&profiles, profile) {
            return Err(DocumentStoreError::Duplicate(HANDLE_KEY.to_string()));
        }

        let mut saved = profile.clone();
        saved.version = 0;
        profiles.insert(saved.user_id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, DocumentStoreError> {
        Ok(self.profiles.lock().unwrap().remove(&user_id).is_some())
    }
}

// ============================== Posts ==============================

/// Posts keyed by their own id, with version-checked replaces.
#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<HashMap<Uuid, Post>>,
    conflicts: InjectedConflicts,
}

impl InMemoryPosts {
    pub fn seed(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id, post);
    }

    pub fn get(&self, post_id: Uuid) -> Option<Post> {
        self.posts.lock().unwrap().get(&post_id).cloned()
    }

    pub fn count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn by_author(&self, user_id: Uuid) -> Vec<Post> {
        self.posts
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn fail_next_replaces(&self, n: u32) {
        self.conflicts.arm(n);
    }
}

#[async_trait]
impl DocumentStore<Post> for InMemoryPosts {
    async fn load(&self, post_id: Uuid) -> Result<Option<Post>, DocumentStoreError> {
        Ok(self.get(post_id))
    }

    async fn replace(&self, post: &Post) -> Result<Post, DocumentStoreError> {
        let mut posts = self.posts.lock().unwrap();
        let stored = posts.get_mut(&post.id).ok_or(DocumentStoreError::Stale)?;
        if self.conflicts.take() {
            stored.version += 1;
        }
        if stored.version != post.version {
            return Err(DocumentStoreError::Stale);
        }

        let mut saved = post.clone();
        saved.version += 1;
        *stored = saved.clone();
        Ok(saved)
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn list(&self) -> Result<Vec<Post>, DocumentStoreError> {
        let mut all: Vec<Post> = self.posts.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn insert(&self, post: &Post) -> Result<Post, DocumentStoreError> {
        let mut saved = post.clone();
        saved.version = 0;
        self.posts.lock().unwrap().insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, post_id: Uuid) -> Result<bool, DocumentStoreError> {
        Ok(self.posts.lock().unwrap().remove(&post_id).is_some())
    }

    async fn delete_by_author(&self, user_id: Uuid) -> Result<u64, DocumentStoreError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|_, p| p.user_id != user_id);
        Ok((before - posts.len()) as u64)
    }

    async fn commented_by(&self, user_id: Uuid) -> Result<Vec<Uuid>, DocumentStoreError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.comments.iter().any(|c| c.user_id == user_id))
            .map(|p| p.id)
            .collect())
    }

    async fn anonymize_author(
        &self,
        user_id: Uuid,
        name: &str,
        avatar_url: &str,
    ) -> Result<u64, DocumentStoreError> {
        let mut touched = 0;
        for post in self
            .posts
            .lock()
            .unwrap()
            .values_mut()
            .filter(|p| p.user_id == user_id)
        {
            post.name = name.to_string();
            post.avatar_url = avatar_url.to_string();
            post.version += 1;
            touched += 1;
        }
        Ok(touched)
    }
}
