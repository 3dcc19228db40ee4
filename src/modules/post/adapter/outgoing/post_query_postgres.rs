use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use super::sea_orm_entity::admission_posts::{self, Column, Entity};
use crate::like::adapter::outgoing::sea_orm_entity::post_likes;
use crate::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostQuery, PostQueryError, PostView,
};
use crate::shared::query::contains_pattern;

#[derive(Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, FromQueryResult)]
struct LikeCount {
    post_id: Uuid,
    likes: i64,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Filtered listing, newest first. Pagination is applied by the caller.
    fn list_select(filter: &PostListFilter) -> Select<Entity> {
        let mut select = Entity::find();

        if let Some(university) = &filter.university {
            select = select.filter(Expr::col(Column::University).ilike(contains_pattern(university)));
        }
        if let Some(major) = &filter.major {
            select = select.filter(Expr::col(Column::Major).ilike(contains_pattern(major)));
        }
        if let Some(degree_type) = filter.degree_type {
            select = select.filter(Column::DegreeType.eq(degree_type.as_str()));
        }
        if let Some(year) = filter.year {
            select = select.filter(Column::Year.eq(year));
        }
        if let Some(term) = filter.term {
            select = select.filter(Column::Term.eq(term.as_str()));
        }
        if let Some(status) = filter.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
    }

    async fn like_counts(&self, post_ids: Vec<Uuid>) -> Result<HashMap<Uuid, u64>, PostQueryError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = post_likes::Entity::find()
            .select_only()
            .column(post_likes::Column::PostId)
            .column_as(Expr::col(post_likes::Column::UserId).count(), "likes")
            .filter(post_likes::Column::PostId.is_in(post_ids))
            .group_by(post_likes::Column::PostId)
            .into_model::<LikeCount>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.post_id, row.likes.max(0) as u64))
            .collect())
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostView>, PostQueryError> {
        let Some(model) = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let likes = post_likes::Entity::find()
            .filter(post_likes::Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_view(model, likes).map(Some)
    }

    async fn list(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError> {
        let select = Self::list_select(&filter);

        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = select
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let counts = self
            .like_counts(models.iter().map(|m| m.id).collect())
            .await?;

        let items = models
            .into_iter()
            .map(|model| {
                let likes = counts.get(&model.id).copied().unwrap_or(0);
                model_to_view(model, likes)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

fn parse_label<T>(column: &str, raw: &str) -> Result<T, PostQueryError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e: T::Err| PostQueryError::MalformedRow(format!("{column}: {e}")))
}

pub(crate) fn model_to_view(
    model: admission_posts::Model,
    likes_count: u64,
) -> Result<PostView, PostQueryError> {
    Ok(PostView {
        id: model.id,
        user_id: model.user_id,
        degree_type: parse_label("degree_type", &model.degree_type)?,
        major: model.major,
        university: model.university,
        country: model.country,
        year: model.year,
        term: parse_label("term", &model.term)?,
        application_round: model.application_round,
        status: parse_label("status", &model.status)?,
        notification_method: model.notification_method,
        gpa: model.gpa,
        gpa_scale: model.gpa_scale,
        test_type: model.test_type,
        test_score: model.test_score,
        student_type: parse_label("student_type", &model.student_type)?,
        continent: model
            .continent
            .as_deref()
            .map(|raw| parse_label("continent", raw))
            .transpose()?,
        state: model.state,
        financial_aid: model.financial_aid,
        scholarship: model.scholarship,
        post_grad_plans: model.post_grad_plans,
        notes: model.notes,
        notify_comments: model.notify_comments,
        likes_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}
