use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, Set, Statement, TransactionTrait,
};
use uuid::Uuid;

use super::post_query_postgres::model_to_view;
use super::sea_orm_entity::admission_posts::{ActiveModel, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::PostCommand;
use crate::post::application::ports::outgoing::{PostRepository, PostRepositoryError, PostView};

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PostRepositoryError {
        PostRepositoryError::DatabaseError(e.to_string())
    }

    fn apply(active: &mut ActiveModel, command: PostCommand) {
        active.degree_type = Set(command.degree_type.as_str().to_string());
        active.major = Set(command.major);
        active.university = Set(command.university);
        active.country = Set(command.country);
        active.year = Set(command.year);
        active.term = Set(command.term.as_str().to_string());
        active.application_round = Set(command.application_round);
        active.status = Set(command.status.as_str().to_string());
        active.notification_method = Set(command.notification_method);
        active.gpa = Set(command.gpa);
        active.gpa_scale = Set(command.gpa_scale);
        active.test_type = Set(command.test_type);
        active.test_score = Set(command.test_score);
        active.student_type = Set(command.student_type.as_str().to_string());
        active.continent = Set(command.continent.map(|c| c.as_str().to_string()));
        active.state = Set(command.state);
        active.financial_aid = Set(command.financial_aid);
        active.scholarship = Set(command.scholarship);
        active.post_grad_plans = Set(command.post_grad_plans);
        active.notes = Set(command.notes);
        active.email = Set(command.email);
        active.notify_comments = Set(command.notify_comments);
    }

    /// Children first; every statement is keyed by `$1` = post id.
    fn cascade_statements(post_id: Uuid) -> Vec<Statement> {
        [
            "DELETE FROM post_likes WHERE post_id = $1",
            "DELETE FROM comments WHERE parent_id IN (SELECT id FROM comments WHERE post_id = $1)",
            "DELETE FROM comments WHERE post_id = $1",
        ]
        .into_iter()
        .map(|sql| {
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![post_id.into()])
        })
        .collect()
    }

    async fn run_cascade(txn: &DatabaseTransaction, post_id: Uuid) -> Result<(), PostRepositoryError> {
        for stmt in Self::cascade_statements(post_id) {
            txn.execute(stmt).await.map_err(Self::map_db_err)?;
        }

        let deleted = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM admission_posts WHERE id = $1",
                vec![post_id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?;

        if deleted.rows_affected() == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create(
        &self,
        owner: Option<UserId>,
        command: PostCommand,
    ) -> Result<PostView, PostRepositoryError> {
        let mut active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.map(Uuid::from)),
            created_at: NotSet,
            updated_at: NotSet,
            ..Default::default()
        };
        Self::apply(&mut active, command);

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        model_to_view(inserted, 0).map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))
    }

    async fn update(&self, post_id: Uuid, command: PostCommand) -> Result<(), PostRepositoryError> {
        let existing = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(PostRepositoryError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        Self::apply(&mut active, command);

        active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(())
    }

    async fn delete_cascade(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::run_cascade(&txn, post_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
