use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentRecord;

/// What a comment needs to know about the post it lands on.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTarget {
    pub post_id: Uuid,
    pub owner_id: Option<Uuid>,
    pub university: String,
    pub major: String,
    /// Set only when the post opted into comment notifications.
    pub notify_email: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<CommentRecord>, CommentQueryError>;

    /// Every comment and reply of the post, in no particular order.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentRecord>, CommentQueryError>;

    async fn find_post_target(&self, post_id: Uuid) -> Result<Option<PostTarget>, CommentQueryError>;
}
