use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author can delete a comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    /// Returns the id of the post the comment belonged to.
    async fn execute(&self, comment_id: Uuid, user: UserId) -> Result<Uuid, DeleteCommentError>;
}
