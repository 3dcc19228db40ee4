use async_trait::async_trait;

use crate::post::application::ports::incoming::use_cases::{ListPostsError, ListPostsUseCase};
use crate::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostQuery, PostView,
};

#[derive(Clone)]
pub struct ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPostsUseCase for ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, ListPostsError> {
        Ok(self.query.list(filter, page).await?)
    }
}
