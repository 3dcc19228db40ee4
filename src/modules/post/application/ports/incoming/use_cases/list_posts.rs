use async_trait::async_trait;

use crate::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostQueryError, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PostQueryError> for ListPostsError {
    fn from(err: PostQueryError) -> Self {
        ListPostsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, ListPostsError>;
}
