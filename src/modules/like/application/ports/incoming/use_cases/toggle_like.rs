use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::like::application::domain::entities::LikeOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleLikeError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid, user: UserId) -> Result<LikeOutcome, ToggleLikeError>;
}
