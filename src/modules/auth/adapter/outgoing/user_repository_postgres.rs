use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn to_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            username: model.username,
            anonymous_username: model.anonymous_username,
            email: model.email,
            is_verified: model.is_verified,
        }
    }

    // =====================================================
    // Cascade statements, all keyed by $1 = user id
    // =====================================================

    const DOOMED_POSTS: &'static str = "SELECT id FROM admission_posts WHERE user_id = $1";

    fn cascade_statements(user_id: Uuid) -> Vec<Statement> {
        let doomed_comments = format!(
            "SELECT id FROM comments WHERE user_id = $1 OR post_id IN ({})",
            Self::DOOMED_POSTS
        );

        [
            format!(
                "DELETE FROM post_likes WHERE user_id = $1 OR post_id IN ({})",
                Self::DOOMED_POSTS
            ),
            format!("DELETE FROM comments WHERE parent_id IN ({doomed_comments})"),
            format!(
                "DELETE FROM comments WHERE user_id = $1 OR post_id IN ({})",
                Self::DOOMED_POSTS
            ),
            "DELETE FROM admission_posts WHERE user_id = $1".to_string(),
        ]
        .into_iter()
        .map(|sql| {
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![user_id.into()])
        })
        .collect()
    }

    async fn run_cascade(txn: &DatabaseTransaction, user_id: Uuid) -> Result<(), UserRepositoryError> {
        for stmt in Self::cascade_statements(user_id) {
            txn.execute(stmt).await.map_err(Self::map_db_err)?;
        }

        let deleted = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM users WHERE id = $1",
                vec![user_id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?;

        if deleted.rows_affected() == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            anonymous_username: Set(data.anonymous_username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            verification_token_hash: Set(Some(data.verification_token_hash)),
            is_verified: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::UserAlreadyExists
            } else {
                Self::map_db_err(e)
            }
        })?;

        Ok(Self::to_result(inserted))
    }

    async fn activate_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<UserResult, UserRepositoryError> {
        let user = UserEntity::find()
            .filter(UserColumn::VerificationTokenHash.eq(token_hash))
            .filter(UserColumn::IsVerified.eq(false))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UserRepositoryError::VerificationTokenNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_verified = Set(true);
        active_user.verification_token_hash = Set(None);

        let activated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::to_result(activated))
    }

    async fn delete_user_cascade(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::run_cascade(&txn, user_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(Self::map_db_err)?;
        tracing::info!(user_id = %user_id, "User and owned content deleted");
        Ok(())
    }
}
