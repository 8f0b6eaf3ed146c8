use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgBinOper;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::posts::{
    ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity,
    Model as PostModel,
};
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::PostRepository;
use crate::shared::document::{DocumentStore, DocumentStoreError};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(err: impl ToString) -> DocumentStoreError {
    DocumentStoreError::DatabaseError(err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, DocumentStoreError> {
    serde_json::to_value(value).map_err(db_error)
}

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, DocumentStoreError> {
    serde_json::from_value(value).map_err(db_error)
}

fn to_domain(model: PostModel) -> Result<Post, DocumentStoreError> {
    Ok(Post {
        id: model.id,
        user_id: model.user_id,
        text: model.text,
        name: model.name,
        avatar_url: model.avatar_url,
        likes: from_json(model.likes)?,
        comments: from_json(model.comments)?,
        created_at: model.created_at.with_timezone(&Utc),
        version: model.version,
    })
}

#[async_trait]
impl DocumentStore<Post> for PostRepositoryPostgres {
    async fn load(&self, post_id: Uuid) -> Result<Option<Post>, DocumentStoreError> {
        let model = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        model.map(to_domain).transpose()
    }

    async fn replace(&self, post: &Post) -> Result<Post, DocumentStoreError> {
        // Author, text and creation time never change after insert.
        let changes = PostActiveModel {
            id: NotSet,
            user_id: NotSet,
            text: NotSet,
            name: NotSet,
            avatar_url: NotSet,
            likes: Set(to_json(&post.likes)?),
            comments: Set(to_json(&post.comments)?),
            version: Set(post.version + 1),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        let result = PostEntity::update_many()
            .set(changes)
            .filter(PostColumn::Id.eq(post.id))
            .filter(PostColumn::Version.eq(post.version))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(DocumentStoreError::Stale);
        }

        let mut saved = post.clone();
        saved.version += 1;
        Ok(saved)
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Post>, DocumentStoreError> {
        PostEntity::find()
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn insert(&self, post: &Post) -> Result<Post, DocumentStoreError> {
        let created_at = post.created_at.into();
        let active = PostActiveModel {
            id: Set(post.id),
            user_id: Set(post.user_id),
            text: Set(post.text.clone()),
            name: Set(post.name.clone()),
            avatar_url: Set(post.avatar_url.clone()),
            likes: Set(to_json(&post.likes)?),
            comments: Set(to_json(&post.comments)?),
            version: Set(0),
            created_at: Set(created_at),
            updated_at: Set(created_at),
        };

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;
        to_domain(inserted)
    }

    async fn delete(&self, post_id: Uuid) -> Result<bool, DocumentStoreError> {
        let result = PostEntity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_author(&self, user_id: Uuid) -> Result<u64, DocumentStoreError> {
        let result = PostEntity::delete_many()
            .filter(PostColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }

    async fn commented_by(&self, user_id: Uuid) -> Result<Vec<Uuid>, DocumentStoreError> {
        // JSONB containment: some element of `comments` has this user_id
        let needle = serde_json::json!([{ "user_id": user_id }]);

        let rows = PostEntity::find()
            .filter(Expr::col(PostColumn::Comments).binary(PgBinOper::Contains, Expr::val(needle)))
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(|row| row.id).collect())
    }

    async fn anonymize_author(
        &self,
        user_id: Uuid,
        name: &str,
        avatar_url: &str,
    ) -> Result<u64, DocumentStoreError> {
        let result = PostEntity::update_many()
            .col_expr(PostColumn::Name, Expr::value(name))
            .col_expr(PostColumn::AvatarUrl, Expr::value(avatar_url))
            .col_expr(PostColumn::Version, Expr::col(PostColumn::Version).add(1))
            .filter(PostColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }
}
