use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_user(model: UserModel) -> User {
        User {
            id: model.id,
            username: model.username,
            anonymous_username: model.anonymous_username,
            email: model.email,
            password_hash: model.password_hash,
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }

    async fn find_one(&self, column: UserColumn, value: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::to_user))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.find_one(UserColumn::Email, email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        self.find_one(UserColumn::Username, username).await
    }

    async fn find_by_anonymous_username(
        &self,
        anonymous_username: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.find_one(UserColumn::AnonymousUsername, anonymous_username)
            .await
    }
}
