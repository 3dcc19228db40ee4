use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase, PostCommand,
};
use crate::post::application::ports::outgoing::{PostRepository, PostView};

#[derive(Clone)]
pub struct CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: Option<UserId>,
        command: PostCommand,
    ) -> Result<PostView, CreatePostError> {
        let post = self
            .repository
            .create(owner, command)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        info!(
            post_id = %post.id,
            anonymous = owner.is_none(),
            "Admission post created"
        );
        Ok(post)
    }
}
