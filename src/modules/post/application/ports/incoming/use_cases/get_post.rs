use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::ports::outgoing::{PostQueryError, PostView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PostQueryError> for GetPostError {
    fn from(err: PostQueryError) -> Self {
        GetPostError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<PostView, GetPostError>;
}
