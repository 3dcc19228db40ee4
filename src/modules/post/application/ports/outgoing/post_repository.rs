use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::PostCommand;
use crate::post::application::ports::outgoing::post_query::PostView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post; `owner` is None for anonymous posts.
    async fn create(
        &self,
        owner: Option<UserId>,
        command: PostCommand,
    ) -> Result<PostView, PostRepositoryError>;

    /// Replace every editable field of an existing post.
    async fn update(&self, post_id: Uuid, command: PostCommand) -> Result<(), PostRepositoryError>;

    /// Delete the post with its likes, replies and comments in one transaction.
    async fn delete_cascade(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
