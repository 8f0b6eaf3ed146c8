use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError> {
        let created_at = user.created_at.into();
        let active_user = UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            avatar_url: Set(user.avatar_url),
            created_at: Set(created_at),
            updated_at: Set(created_at),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e.to_string()) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(User::from(inserted))
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
