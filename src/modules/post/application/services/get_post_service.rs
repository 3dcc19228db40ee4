use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::ports::incoming::use_cases::{GetPostError, GetPostUseCase};
use crate::post::application::ports::outgoing::{PostQuery, PostView};

#[derive(Clone)]
pub struct GetPostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostUseCase for GetPostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<PostView, GetPostError> {
        self.query
            .find_by_id(post_id)
            .await?
            .ok_or(GetPostError::NotFound)
    }
}
