use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, Statement, TransactionTrait,
};
use uuid::Uuid;

use super::sea_orm_entity::post_likes;
use crate::like::application::domain::entities::LikeOutcome;
use crate::like::application::ports::outgoing::{LikeRepository, LikeRepositoryError};
use crate::post::adapter::outgoing::sea_orm_entity::admission_posts;

const REMOVE_LIKE: &str = "DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2";
const ADD_LIKE: &str = "INSERT INTO post_likes (user_id, post_id) VALUES ($1, $2) \
                        ON CONFLICT (user_id, post_id) DO NOTHING";

#[derive(Clone)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> LikeRepositoryError {
        LikeRepositoryError::DatabaseError(e.to_string())
    }

    fn statement(sql: &str, user_id: Uuid, post_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            vec![user_id.into(), post_id.into()],
        )
    }

    async fn run_toggle(
        txn: &DatabaseTransaction,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<LikeOutcome, LikeRepositoryError> {
        let post_exists = admission_posts::Entity::find_by_id(post_id)
            .count(txn)
            .await
            .map_err(Self::map_db_err)?
            > 0;
        if !post_exists {
            return Err(LikeRepositoryError::PostNotFound);
        }

        let removed = txn
            .execute(Self::statement(REMOVE_LIKE, user_id, post_id))
            .await
            .map_err(Self::map_db_err)?
            .rows_affected();

        let liked = if removed > 0 {
            false
        } else {
            txn.execute(Self::statement(ADD_LIKE, user_id, post_id))
                .await
                .map_err(Self::map_db_err)?;
            true
        };

        let likes_count = post_likes::Entity::find()
            .filter(post_likes::Column::PostId.eq(post_id))
            .count(txn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(LikeOutcome { likes_count, liked })
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn toggle(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome, LikeRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::run_toggle(&txn, post_id, user_id).await {
            Ok(outcome) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(outcome)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
