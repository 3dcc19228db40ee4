use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::{CommentContent, CommentRecord};

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: CommentContent,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert the row and return it with the author's display name.
    async fn create(&self, comment: NewComment) -> Result<CommentRecord, CommentRepositoryError>;

    /// Delete the comment and its direct replies in one transaction.
    async fn delete_cascade(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
}
