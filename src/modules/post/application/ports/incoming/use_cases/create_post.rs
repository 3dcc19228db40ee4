use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::PostCommand;
use crate::post::application::ports::outgoing::PostView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: Option<UserId>,
        command: PostCommand,
    ) -> Result<PostView, CreatePostError>;
}
