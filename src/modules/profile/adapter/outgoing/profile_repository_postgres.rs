use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
    Model as ProfileModel,
};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::HANDLE_KEY;
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::document::{DocumentStore, DocumentStoreError};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, DocumentStoreError> {
    serde_json::to_value(value).map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, DocumentStoreError> {
    serde_json::from_value(value).map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))
}

fn to_domain(model: ProfileModel) -> Result<Profile, DocumentStoreError> {
    Ok(Profile {
        id: model.id,
        user_id: model.user_id,
        handle: model.handle,
        company: model.company,
        website: model.website,
        location: model.location,
        bio: model.bio,
        status: model.status,
        github_username: model.github_username,
        skills: from_json(model.skills)?,
        social: from_json(model.social)?,
        experience: from_json(model.experience)?,
        education: from_json(model.education)?,
        created_at: model.created_at.with_timezone(&Utc),
        version: model.version,
    })
}

/// Every column a profile write touches, identity and timestamps excluded.
fn content_columns(profile: &Profile) -> Result<ProfileActiveModel, DocumentStoreError> {
    Ok(ProfileActiveModel {
        id: NotSet,
        user_id: NotSet,
        handle: Set(profile.handle.clone()),
        company: Set(profile.company.clone()),
        website: Set(profile.website.clone()),
        location: Set(profile.location.clone()),
        bio: Set(profile.bio.clone()),
        status: Set(profile.status.clone()),
        github_username: Set(profile.github_username.clone()),
        skills: Set(to_json(&profile.skills)?),
        social: Set(to_json(&profile.social)?),
        experience: Set(to_json(&profile.experience)?),
        education: Set(to_json(&profile.education)?),
        version: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    })
}

fn map_write_error(err: DbErr) -> DocumentStoreError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        if lowered.contains(HANDLE_KEY) {
            return DocumentStoreError::Duplicate(HANDLE_KEY.to_string());
        }
        return DocumentStoreError::Duplicate("user_id".to_string());
    }
    DocumentStoreError::DatabaseError(message)
}

#[async_trait]
impl DocumentStore<Profile> for ProfileRepositoryPostgres {
    async fn load(&self, user_id: Uuid) -> Result<Option<Profile>, DocumentStoreError> {
        let model = ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        model.map(to_domain).transpose()
    }

    async fn replace(&self, profile: &Profile) -> Result<Profile, DocumentStoreError> {
        let mut changes = content_columns(profile)?;
        changes.version = Set(profile.version + 1);

        let result = ProfileEntity::update_many()
            .set(changes)
            .filter(ProfileColumn::Id.eq(profile.id))
            .filter(ProfileColumn::Version.eq(profile.version))
            .exec(&*self.db)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected == 0 {
            return Err(DocumentStoreError::Stale);
        }

        let mut saved = profile.clone();
        saved.version += 1;
        Ok(saved)
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>, DocumentStoreError> {
        let model = ProfileEntity::find()
            .filter(ProfileColumn::Handle.eq(handle))
            .one(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        model.map(to_domain).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DocumentStoreError> {
        ProfileEntity::find()
            .order_by_desc(ProfileColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn insert(&self, profile: &Profile) -> Result<Profile, DocumentStoreError> {
        let created_at = profile.created_at.into();
        let mut active = content_columns(profile)?;
        active.id = Set(profile.id);
        active.user_id = Set(profile.user_id);
        active.version = Set(0);
        active.created_at = Set(created_at);
        active.updated_at = Set(created_at);

        let inserted = active.insert(&*self.db).await.map_err(map_write_error)?;
        to_domain(inserted)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, DocumentStoreError> {
        let result = ProfileEntity::delete_many()
            .filter(ProfileColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| DocumentStoreError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
