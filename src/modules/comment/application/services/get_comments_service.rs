use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::{build_threads, CommentThread};
use crate::comment::application::ports::incoming::use_cases::{
    GetCommentsError, GetCommentsUseCase,
};
use crate::comment::application::ports::outgoing::CommentQuery;

#[derive(Clone)]
pub struct GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentThread>, GetCommentsError> {
        let records = self
            .query
            .list_for_post(post_id)
            .await
            .map_err(|e| GetCommentsError::QueryFailed(e.to_string()))?;

        Ok(build_threads(records))
    }
}
