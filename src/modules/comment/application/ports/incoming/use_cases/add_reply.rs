use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::incoming::use_cases::CreatedComment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddReplyError {
    #[error("Comment content cannot be empty")]
    EmptyContent,

    #[error("Parent comment not found")]
    ParentNotFound,

    /// The parent is itself a reply.
    #[error("Replies can only be added to top-level comments")]
    DepthExceeded,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddReplyUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_id: Uuid,
        user: UserId,
        content: &str,
    ) -> Result<CreatedComment, AddReplyError>;
}
