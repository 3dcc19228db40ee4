use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use super::sea_orm_entity::comments::{Column, Entity, Relation};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::display_name;
use crate::comment::application::domain::entities::CommentRecord;
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError, PostTarget};
use crate::post::adapter::outgoing::sea_orm_entity::admission_posts;

#[derive(Debug, FromQueryResult)]
pub(crate) struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    parent_id: Option<Uuid>,
    content: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    anonymous_username: Option<String>,
}

impl From<CommentRow> for CommentRecord {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            user_id: row.user_id,
            parent_id: row.parent_id,
            content: row.content,
            author: display_name(row.anonymous_username.as_deref()),
            created_at: row.created_at.into(),
        }
    }
}

#[derive(Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Comment columns plus the author's alias.
    fn with_author() -> Select<Entity> {
        Entity::find()
            .select_only()
            .columns([
                Column::Id,
                Column::PostId,
                Column::UserId,
                Column::ParentId,
                Column::Content,
                Column::CreatedAt,
            ])
            .column(users::Column::AnonymousUsername)
            .join(JoinType::LeftJoin, Relation::Users.def())
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<CommentRecord>, CommentQueryError> {
        let row = Self::with_author()
            .filter(Column::Id.eq(comment_id))
            .into_model::<CommentRow>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(CommentRecord::from))
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentRecord>, CommentQueryError> {
        let rows = Self::with_author()
            .filter(Column::PostId.eq(post_id))
            .into_model::<CommentRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(CommentRecord::from).collect())
    }

    async fn find_post_target(&self, post_id: Uuid) -> Result<Option<PostTarget>, CommentQueryError> {
        let post = admission_posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(post.map(|post| PostTarget {
            post_id: post.id,
            owner_id: post.user_id,
            notify_email: post
                .email
                .filter(|email| post.notify_comments && !email.trim().is_empty()),
            university: post.university,
            major: post.major,
        }))
    }
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use maplit::btreemap;
    use sea_orm::Value;
    use uuid::Uuid;

    pub fn comment_row(
        id: Uuid,
        post_id: Uuid,
        parent_id: Option<Uuid>,
        alias: Option<&str>,
    ) -> BTreeMap<String, Value> {
        btreemap! {
            "id".to_string() => Value::from(id),
            "post_id".to_string() => Value::from(post_id),
            "user_id".to_string() => Value::from(Uuid::new_v4()),
            "parent_id".to_string() => Value::from(parent_id),
            "content".to_string() => Value::from("Congrats!"),
            "created_at".to_string() => Value::from(Utc::now().fixed_offset()),
            "anonymous_username".to_string() => Value::from(alias.map(str::to_string)),
        }
    }
}
