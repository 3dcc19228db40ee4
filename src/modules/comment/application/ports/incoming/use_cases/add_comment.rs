use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{format_comment_date, CommentRecord};

/// A freshly stored comment or reply.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CreatedComment {
    pub comment_id: Uuid,
    pub comment_content: String,
    #[schema(example = "Mar 05, 2025 14:07")]
    pub comment_date: String,
    #[schema(example = "gradhopeful")]
    pub comment_user: String,
}

impl From<CommentRecord> for CreatedComment {
    fn from(record: CommentRecord) -> Self {
        Self {
            comment_id: record.id,
            comment_date: format_comment_date(record.created_at),
            comment_content: record.content,
            comment_user: record.author,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error("Comment content cannot be empty")]
    EmptyContent,

    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        user: UserId,
        content: &str,
    ) -> Result<CreatedComment, AddCommentError>;
}
