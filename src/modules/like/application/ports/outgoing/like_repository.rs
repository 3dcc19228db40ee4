use async_trait::async_trait;
use uuid::Uuid;

use crate::like::application::domain::entities::LikeOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeRepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Remove the like if present, add it otherwise, and recount the post's likes.
    /// Runs as one transaction.
    async fn toggle(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeOutcome, LikeRepositoryError>;
}
