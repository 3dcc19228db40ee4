use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, Set, Statement, TransactionTrait,
};
use uuid::Uuid;

use super::sea_orm_entity::comments::ActiveModel;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::display_name;
use crate::comment::application::domain::entities::CommentRecord;
use crate::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CommentRepositoryError {
        CommentRepositoryError::DatabaseError(e.to_string())
    }

    async fn run_delete(txn: &DatabaseTransaction, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "DELETE FROM comments WHERE parent_id = $1",
            vec![comment_id.into()],
        ))
        .await
        .map_err(Self::map_db_err)?;

        let deleted = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM comments WHERE id = $1",
                vec![comment_id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?;

        if deleted.rows_affected() == 0 {
            return Err(CommentRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(&self, comment: NewComment) -> Result<CommentRecord, CommentRepositoryError> {
        let inserted = ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(comment.post_id),
            user_id: Set(comment.user_id),
            content: Set(comment.content.into_inner()),
            parent_id: Set(comment.parent_id),
            created_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        let alias = users::Entity::find_by_id(inserted.user_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .and_then(|user| user.anonymous_username);

        Ok(CommentRecord {
            id: inserted.id,
            post_id: inserted.post_id,
            user_id: inserted.user_id,
            parent_id: inserted.parent_id,
            content: inserted.content,
            author: display_name(alias.as_deref()),
            created_at: inserted.created_at.into(),
        })
    }

    async fn delete_cascade(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::run_delete(&txn, comment_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
