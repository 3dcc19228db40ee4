use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::PostCommand;
use crate::post::application::ports::outgoing::PostView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    /// Caller does not own the post (anonymous posts have no owner).
    #[error("Not allowed to edit this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        user: UserId,
        command: PostCommand,
    ) -> Result<PostView, UpdatePostError>;
}
