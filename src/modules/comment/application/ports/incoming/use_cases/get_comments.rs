use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentThread;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentThread>, GetCommentsError>;
}
